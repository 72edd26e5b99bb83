use std::sync::Arc;

use atelier_intake::cli;
use atelier_intake::config::WizardConfig;
use atelier_intake::submit::{LoggingSink, SubmissionSink};
use atelier_intake::wizard::IntakeFlow;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = WizardConfig::from_env()?;

    eprintln!("Atelier Intake v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Settle delay: {:?}", config.settle_delay);
    eprintln!("   Hint rotation: {:?}", config.placeholder_interval);
    eprintln!("   Answer each question and press Enter. /back to go back, /quit to exit.\n");

    let sink: Arc<dyn SubmissionSink> = Arc::new(LoggingSink);
    let flow = IntakeFlow::new(config, sink);
    flow.start().await;

    cli::run(&flow).await?;
    flow.shutdown().await;

    Ok(())
}
