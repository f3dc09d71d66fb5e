use anyhow::Result;

use super::entry_block;
use crate::traits::{GenerateClient, GenerateRequest};

const WEEKLY_SUMMARY_TEMPLATE: &str = "\
You are a personal journal assistant that analyzes a user's mood and written journal entries to provide a weekly summary of their emotions and thoughts.

Moods: <moods>
Entries:
<entries>

Analyze the provided moods and entries to identify recurring themes, sentiment trends, and significant events or feelings. Provide a concise summary that helps the user reflect on their week and understand their emotional state.
Ensure that the weekly summary is in a warm, supportive, and understanding tone.
Write a summary that is no more than 200 words.
";

/// Recap the past week from tracked moods plus the entries written in it.
pub async fn generate_weekly_summary(
    client: &dyn GenerateClient,
    model: &str,
    moods: &[String],
    entries: &[String],
) -> Result<String> {
    let prompt = WEEKLY_SUMMARY_TEMPLATE
        .replace("<moods>", &moods.join(", "))
        .replace("<entries>", &entry_block(entries));
    let response = client.generate(GenerateRequest::new(model, prompt)).await?;
    Ok(response.content.trim().to_string())
}
