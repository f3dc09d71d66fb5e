//! Typed prompt flows for the journaling companion.
//!
//! Each flow pairs a fixed prompt template with a typed output, so callers
//! never touch raw prompts. Templates use `<placeholder>` substitution;
//! flows with structured output request JSON mode and parse the reply,
//! failing when the shape does not match.

mod affirmation;
mod chat;
mod mood_prompt;
mod suggestions;
mod summary;
mod weekly;
mod writing_prompts;

pub use affirmation::generate_affirmation;
pub use chat::{chat, ChatEntry};
pub use mood_prompt::generate_mood_prompt;
pub use suggestions::{generate_suggestions, ActivitySuggestion};
pub use summary::summarize_entries;
pub use weekly::generate_weekly_summary;
pub use writing_prompts::generate_writing_prompts;

/// Render journal entries the way the prompts expect them: one block per
/// entry, separated by `---` rules.
pub(crate) fn entry_block(entries: &[String]) -> String {
    let mut block = String::new();
    for entry in entries {
        block.push_str("---\n");
        block.push_str(entry);
        block.push('\n');
    }
    block.push_str("---");
    block
}

#[cfg(test)]
mod tests {
    use super::entry_block;

    #[test]
    fn entry_block_separates_entries_with_rules() {
        let block = entry_block(&["first".to_string(), "second".to_string()]);
        assert_eq!(block, "---\nfirst\n---\nsecond\n---");
    }

    #[test]
    fn entry_block_for_no_entries_is_a_single_rule() {
        assert_eq!(entry_block(&[]), "---");
    }
}
