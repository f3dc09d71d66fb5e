use anyhow::Result;

use super::entry_block;
use crate::traits::{GenerateClient, GenerateRequest};

const SUMMARY_TEMPLATE: &str = "\
You are a warm, supportive, and insightful AI friend. Your purpose is to act as a personal guide for the user on their mindfulness journey. You have been reading their journal entries and want to share some reflections with them in a gentle, caring, and encouraging way.

Speak directly to the user in the first person (e.g., \"I've been reading your entries and I noticed...\", \"It seems like you've been feeling...\", \"I'm here for you as you navigate this.\").

Your response should be more than just a summary. It should be a thoughtful reflection that helps the user feel seen and understood. Point out patterns, celebrate progress, and offer gentle encouragement for challenges. Act as their guide and friend.

Journal Entries:
<entries>

My thoughts for you:";

/// Summarize a user's journal history into a reflective, first-person note.
///
/// Entries arrive newest-first, matching how the store lists them.
pub async fn summarize_entries(
    client: &dyn GenerateClient,
    model: &str,
    entries: &[String],
) -> Result<String> {
    let prompt = SUMMARY_TEMPLATE.replace("<entries>", &entry_block(entries));
    let response = client.generate(GenerateRequest::new(model, prompt)).await?;
    Ok(response.content.trim().to_string())
}
