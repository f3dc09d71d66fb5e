use anyhow::{Context, Result};
use serde::Deserialize;

use crate::traits::{GenerateClient, GenerateOptions, GenerateRequest};

/// Drafts shorter than this get no prompts and no gateway call.
const MIN_DRAFT_CHARS: usize = 15;

const WRITING_PROMPTS_TEMPLATE: &str = "\
You are a gentle and intuitive journal writing assistant. The user is writing a journal entry and might be stuck.
Your goal is to provide 2-3 short, thoughtful follow-up questions or prompts to help them dig deeper into their thoughts and feelings.

- The prompts should be directly related to the content of their entry so far.
- Keep the prompts concise and open-ended.
- If the user's entry is very short or generic, provide some gentle, general prompts.
- Frame the prompts as questions.

Here is the user's journal entry so far:
\"<entry_so_far>\"

Respond with a JSON object of the form {\"prompts\": [\"...\"]}.";

#[derive(Debug, Deserialize)]
struct PromptsPayload {
    prompts: Vec<String>,
}

/// Suggest follow-up questions for a half-written entry.
///
/// Very short drafts return an empty list without calling the gateway.
pub async fn generate_writing_prompts(
    client: &dyn GenerateClient,
    model: &str,
    entry_so_far: &str,
) -> Result<Vec<String>> {
    if entry_so_far.trim().len() < MIN_DRAFT_CHARS {
        return Ok(Vec::new());
    }

    let prompt = WRITING_PROMPTS_TEMPLATE.replace("<entry_so_far>", entry_so_far);
    let request =
        GenerateRequest::new(model, prompt).with_options(GenerateOptions::new().json());
    let response = client.generate(request).await?;

    let payload: PromptsPayload = serde_json::from_str(&response.content)
        .context("Writing prompts response did not match the expected shape")?;
    Ok(payload.prompts)
}
