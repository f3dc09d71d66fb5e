use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::entry_block;
use crate::traits::{GenerateClient, GenerateOptions, GenerateRequest};

const SUGGESTIONS_TEMPLATE: &str = "\
You are a kind and insightful AI friend. Your goal is to help the user by suggesting a few simple, actionable activities based on their recent journal entries. Analyze the themes and moods in their writing and provide 2-3 suggestions that could be helpful or enjoyable for them.

For each suggestion, provide a clear title and a short, encouraging description. Frame your suggestions in a gentle and supportive way.

Journal Entries:
<entries>

Respond with a JSON object of the form {\"suggestions\": [{\"title\": \"...\", \"description\": \"...\"}]}.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySuggestion {
    /// A short, catchy title for the suggested activity.
    pub title: String,
    /// Why this activity is being suggested and what it involves.
    pub description: String,
}

#[derive(Debug, Deserialize)]
struct SuggestionsPayload {
    suggestions: Vec<ActivitySuggestion>,
}

/// Suggest 2-3 activities based on the user's recent entries.
pub async fn generate_suggestions(
    client: &dyn GenerateClient,
    model: &str,
    entries: &[String],
) -> Result<Vec<ActivitySuggestion>> {
    let prompt = SUGGESTIONS_TEMPLATE.replace("<entries>", &entry_block(entries));
    let request =
        GenerateRequest::new(model, prompt).with_options(GenerateOptions::new().json());
    let response = client.generate(request).await?;

    let payload: SuggestionsPayload = serde_json::from_str(&response.content)
        .context("Activity suggestions response did not match the expected shape")?;
    Ok(payload.suggestions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestions_payload_parses_model_json() {
        let raw = r#"{"suggestions":[{"title":"Take a walk","description":"Fresh air helps."}]}"#;
        let payload: SuggestionsPayload = serde_json::from_str(raw).unwrap();
        assert_eq!(payload.suggestions.len(), 1);
        assert_eq!(payload.suggestions[0].title, "Take a walk");
    }

    #[test]
    fn suggestions_payload_rejects_wrong_shape() {
        let raw = r#"{"ideas":["walk"]}"#;
        assert!(serde_json::from_str::<SuggestionsPayload>(raw).is_err());
    }
}
