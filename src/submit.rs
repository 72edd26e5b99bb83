//! Submission seam — where a finalized intake request leaves the wizard.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SubmitError;
use crate::wizard::record::ProjectRecord;

/// A finalized intake request, as handed to the submission collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmittedRequest {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub record: ProjectRecord,
}

impl SubmittedRequest {
    pub fn new(record: ProjectRecord) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            record,
        }
    }
}

/// Destination for finalized intake requests.
///
/// Invoked exactly once per flow, at the recap → success transition. The
/// flow treats it as best-effort: a failing sink is logged, and the flow
/// still completes.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Sink name, used in logs and errors.
    fn name(&self) -> &str;

    /// Deliver the request.
    async fn submit(&self, request: SubmittedRequest) -> Result<(), SubmitError>;
}

/// Default sink — serializes the request and emits it via `tracing`.
///
/// Stands in for whatever external delivery (mail, CRM, webhook) a
/// deployment wires up.
pub struct LoggingSink;

#[async_trait]
impl SubmissionSink for LoggingSink {
    fn name(&self) -> &str {
        "logging"
    }

    async fn submit(&self, request: SubmittedRequest) -> Result<(), SubmitError> {
        let payload = serde_json::to_string(&request)?;
        tracing::info!(id = %request.id, "Project request received: {}", payload);
        Ok(())
    }
}
