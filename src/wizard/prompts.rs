//! Step-facing content — question labels, placeholder hints, recap labels.
//!
//! Renderers look everything up here so wording lives in exactly one place.

use super::record::Field;
use super::step::Step;

/// Closing message shown on the terminal step.
pub const SUCCESS_MESSAGE: &str =
    "Thank you. We'll review your request carefully and get back to you shortly.";

/// The sentence-opening question label for a step, if it asks one.
pub fn question_label(step: Step) -> Option<&'static str> {
    match step {
        Step::Intro => Some("I'm working in"),
        Step::Goal => Some("The goal of the website is to"),
        Step::Scope => Some("It will likely include"),
        Step::Existing => Some("Right now, we have"),
        Step::Contact => Some("You can reach me at"),
        Step::Recap | Step::Success => None,
    }
}

/// The small section header rendered above a step's prompt.
pub fn section_header(step: Step) -> Option<&'static str> {
    match step {
        Step::Intro | Step::Goal | Step::Scope | Step::Existing => Some("How can we help"),
        Step::Contact => Some("Contact"),
        Step::Recap => Some("Confirm details"),
        Step::Success => None,
    }
}

/// Rotating placeholder hints for a step. Empty for recap/success.
pub fn placeholder_hints(step: Step) -> &'static [&'static str] {
    match step {
        Step::Intro => &[
            "technology",
            "creative industry",
            "hospitality",
            "real estate",
            "culture",
            "fashion",
        ],
        Step::Goal => &[
            "present my business clearly",
            "attract the right clients",
            "launch something new",
            "build credibility",
            "simplify our message",
        ],
        Step::Scope => &[
            "a few key pages",
            "a landing page",
            "contact or lead generation",
            "something simple and clear",
        ],
        Step::Existing => &[
            "no website yet",
            "an outdated website",
            "something temporary",
            "a clear idea but nothing built",
        ],
        Step::Contact => &["your@email.com"],
        Step::Recap | Step::Success => &[],
    }
}

/// The label shown next to a field on the recap view.
pub fn recap_label(field: Field) -> &'static str {
    match field {
        Field::Industry => "I'm working in",
        Field::Goal => "The goal is to",
        Field::Scope => "It will include",
        Field::ExistingStatus => "Current status",
        Field::ContactEmail => "Contact email",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_steps_have_labels_and_hints() {
        for step in [Step::Intro, Step::Goal, Step::Scope, Step::Existing, Step::Contact] {
            assert!(question_label(step).is_some(), "{step} should have a label");
            assert!(
                !placeholder_hints(step).is_empty(),
                "{step} should have hints"
            );
        }
    }

    #[test]
    fn recap_and_success_have_no_draft_content() {
        for step in [Step::Recap, Step::Success] {
            assert!(question_label(step).is_none());
            assert!(placeholder_hints(step).is_empty());
        }
    }

    #[test]
    fn hint_counts_match_original_lists() {
        assert_eq!(placeholder_hints(Step::Intro).len(), 6);
        assert_eq!(placeholder_hints(Step::Goal).len(), 5);
        assert_eq!(placeholder_hints(Step::Scope).len(), 4);
        assert_eq!(placeholder_hints(Step::Existing).len(), 4);
        assert_eq!(placeholder_hints(Step::Contact).len(), 1);
    }

    #[test]
    fn every_field_has_a_recap_label() {
        for field in Field::ALL {
            assert!(!recap_label(field).is_empty());
        }
    }
}
