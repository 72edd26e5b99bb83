//! The accumulated answer set and its field accessor table.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Syntactic email check: local part and domain separated by `@`, domain
/// containing a `.`, no whitespace in either part.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Whether `text` passes the syntactic email check used by the contact step.
pub fn is_valid_email(text: &str) -> bool {
    EMAIL_PATTERN.is_match(text)
}

/// The fields of a [`ProjectRecord`], used to route drafts and recap edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Industry,
    Goal,
    Scope,
    ExistingStatus,
    ContactEmail,
}

impl Field {
    /// All record fields, in recap display order.
    pub const ALL: [Field; 5] = [
        Field::Industry,
        Field::Goal,
        Field::Scope,
        Field::ExistingStatus,
        Field::ContactEmail,
    ];
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Industry => "industry",
            Self::Goal => "goal",
            Self::Scope => "scope",
            Self::ExistingStatus => "existing_status",
            Self::ContactEmail => "contact_email",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "industry" => Ok(Self::Industry),
            "goal" => Ok(Self::Goal),
            "scope" => Ok(Self::Scope),
            "existing_status" | "existing" => Ok(Self::ExistingStatus),
            "contact_email" | "email" => Ok(Self::ContactEmail),
            other => Err(format!("Unknown field: {other}")),
        }
    }
}

/// The answers collected across the intake flow.
///
/// All fields are plain text and empty until the corresponding step's
/// draft is committed. Mutated only through step commits and recap edits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub industry: String,
    pub goal: String,
    pub scope: String,
    pub existing_status: String,
    pub contact_email: String,
}

impl ProjectRecord {
    /// Read a field by accessor.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Industry => &self.industry,
            Field::Goal => &self.goal,
            Field::Scope => &self.scope,
            Field::ExistingStatus => &self.existing_status,
            Field::ContactEmail => &self.contact_email,
        }
    }

    /// Overwrite a field by accessor.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Industry => self.industry = value,
            Field::Goal => self.goal = value,
            Field::Scope => self.scope = value,
            Field::ExistingStatus => self.existing_status = value,
            Field::ContactEmail => self.contact_email = value,
        }
    }
}
