use anyhow::Result;

use crate::traits::{GenerateClient, GenerateRequest};

const AFFIRMATION_TEMPLATE: &str = "\
You are a supportive AI friend, providing affirmations and advice based on journal entries.

Based on the following journal entry, provide a personalized affirmation or piece of advice to support the user in dealing with their specific struggles. Focus on best-practice mental health suggestions. Speak in a warm, empathetic and human-like way.

Journal Entry: <journal_entry>
";

/// Generate a personalized affirmation for a single journal entry.
pub async fn generate_affirmation(
    client: &dyn GenerateClient,
    model: &str,
    journal_entry: &str,
) -> Result<String> {
    let prompt = AFFIRMATION_TEMPLATE.replace("<journal_entry>", journal_entry);
    let response = client.generate(GenerateRequest::new(model, prompt)).await?;
    Ok(response.content.trim().to_string())
}
