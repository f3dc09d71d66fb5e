use anyhow::Result;

use crate::traits::{GenerateClient, GenerateRequest};

const MOOD_PROMPT_TEMPLATE: &str = "\
You are a gentle and insightful journal prompt generator. Your goal is to provide a single, thought-provoking prompt that helps the user explore their feelings. The prompt should be creative, encouraging, and tailored to their stated mood.

Guidelines for Different Moods:
- If the mood is \"happy,\" \"excited,\" or \"inspired,\" ask a question that helps them savor and understand the source of their joy.
- If the mood is \"sad,\" \"anxious,\" or \"stressed,\" offer a gentle, compassionate question that allows them to explore their feelings without judgment. Frame it as an invitation, not a demand.
- If the mood is \"grateful\" or \"calm,\" provide a prompt that helps them deepen that feeling.
- If the mood is \"neutral\" or \"tired,\" ask a simple, low-pressure question to help them check in with themselves.

User's Mood: <mood>

Based on this mood, provide one creative and encouraging journal prompt:";

/// Generate a single journal prompt tailored to the user's current mood.
pub async fn generate_mood_prompt(
    client: &dyn GenerateClient,
    model: &str,
    mood: &str,
) -> Result<String> {
    let prompt = MOOD_PROMPT_TEMPLATE.replace("<mood>", mood);
    let response = client.generate(GenerateRequest::new(model, prompt)).await?;
    Ok(response.content.trim().to_string())
}
