//! CLI renderer — stdin/stdout rendering collaborator for local use.
//!
//! Holds no wizard rules of its own: it renders [`StepView`] snapshots
//! and forwards user actions (text entry, `/back`, recap edits) into the
//! flow.

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::wizard::prompts::{SUCCESS_MESSAGE, recap_label};
use crate::wizard::record::Field;
use crate::wizard::{IntakeFlow, Step, StepView};

/// Run the intake conversation until the flow completes or stdin closes.
pub async fn run(flow: &IntakeFlow) -> std::io::Result<()> {
    let stdin = tokio::io::stdin();
    let reader = BufReader::new(stdin);
    let mut lines = reader.lines();

    render(&flow.view().await);

    loop {
        let Some(line) = lines.next_line().await? else {
            break; // EOF
        };
        let input = line.trim().to_string();

        if input == "/quit" || input == "/exit" {
            break;
        }

        let view = flow.view().await;
        let outcome = match view.step {
            Step::Recap => match input.as_str() {
                "" | "/send" => flow.advance().await,
                "/back" => flow.retreat().await,
                other => {
                    if let Some(rest) = other.strip_prefix("/edit ") {
                        edit_recap_field(flow, rest).await;
                    } else {
                        eprintln!("· /edit <field> <value>, /back, or Enter to send");
                    }
                    render(&flow.view().await);
                    continue;
                }
            },
            _ => {
                if input == "/back" {
                    flow.retreat().await
                } else {
                    flow.set_draft_input(input).await;
                    flow.advance().await
                }
            }
        };

        match outcome {
            Ok(_) => {
                flow.wait_until_settled().await;
                let view = flow.view().await;
                render(&view);
                if view.step.is_terminal() {
                    break;
                }
            }
            Err(rejection) => {
                eprintln!("· {rejection}");
                eprint!("> ");
            }
        }
    }

    Ok(())
}

/// Apply a `/edit <field> <value>` recap command.
async fn edit_recap_field(flow: &IntakeFlow, rest: &str) {
    let mut parts = rest.splitn(2, ' ');
    let field = parts.next().unwrap_or_default();
    let value = parts.next().unwrap_or_default().trim();

    match field.parse::<Field>() {
        Ok(field) => flow.set_recap_field(field, value).await,
        Err(e) => eprintln!("· {e}"),
    }
}

fn render(view: &StepView) {
    if let Some(header) = view.header {
        eprintln!("\n── {} ──", header.to_uppercase());
    }

    match view.step {
        Step::Recap => {
            for field in Field::ALL {
                println!("  {:<16} {}", recap_label(field), view.record.get(field));
            }
            eprintln!("\n· Enter to send, /edit <field> <value>, /back");
            eprint!("> ");
        }
        Step::Success => {
            println!("\n{SUCCESS_MESSAGE}");
        }
        _ => {
            let question = view.question.unwrap_or_default();
            match view.placeholder {
                Some(hint) if view.draft.is_empty() => {
                    eprintln!("{question} … (e.g. {hint})");
                }
                _ => eprintln!("{question} {}", view.draft),
            }
            eprint!("> ");
        }
    }
}
