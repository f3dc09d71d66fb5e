use anyhow::Result;

use crate::traits::{GenerateClient, GenerateRequest};

const CHAT_SYSTEM_PROMPT: &str = "\
You are Juno, a supportive and proactive AI friend. Your purpose is to provide a safe and encouraging space for users to journal and reflect. You are warm, empathetic, and insightful.

If the user asks who you are, introduce yourself as Juno, an AI companion designed to help them on their mindfulness journey. Explain that you are here to listen, offer encouragement, and help them explore their thoughts and feelings without judgment.

Here are some guidelines for our conversation:
- Acknowledge and validate the user's feelings in their current message.
- Offer gentle advice or alternative perspectives if appropriate.
- Proactively and gently ask questions about previous entries to show you remember and care. For example, if they mentioned a stressful event, you could ask if things have gotten better.
- Offer support and follow-up on important events or feelings they've mentioned before.
- Keep your responses concise and easy to understand.
- Use a tone that is warm, empathetic, and encouraging. Avoid being overly clinical or prescriptive.";

const CHAT_TEMPLATE: &str = "\
<context>Now, here is the user's current message:
\"<message>\"

Your thoughtful response:";

/// A past journal entry passed to the chat flow as context, most recent
/// first.
#[derive(Debug, Clone)]
pub struct ChatEntry {
    pub date: String,
    pub mood: String,
    pub text: String,
}

/// One turn of conversation with the Juno companion.
pub async fn chat(
    client: &dyn GenerateClient,
    model: &str,
    message: &str,
    previous_entries: &[ChatEntry],
) -> Result<String> {
    let context = if previous_entries.is_empty() {
        String::new()
    } else {
        let mut block = String::from(
            "Here are some of the user's recent journal entries for context (most recent first):\n",
        );
        for entry in previous_entries {
            block.push_str("---\n");
            block.push_str(&format!(
                "Date: {}\nMood: {}\nEntry: {}\n",
                entry.date, entry.mood, entry.text
            ));
        }
        block.push_str("---\n\n");
        block
    };

    let prompt = CHAT_TEMPLATE
        .replace("<context>", &context)
        .replace("<message>", message);
    let request = GenerateRequest::new(model, prompt).with_system(CHAT_SYSTEM_PROMPT);
    let response = client.generate(request).await?;
    Ok(response.content.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{GenerateResponse, TokenUsage};
    use anyhow::Result as AnyResult;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingClient {
        prompts: Mutex<Vec<GenerateRequest>>,
    }

    #[async_trait]
    impl GenerateClient for RecordingClient {
        async fn generate(&self, request: GenerateRequest) -> AnyResult<GenerateResponse> {
            self.prompts.lock().unwrap().push(request);
            Ok(GenerateResponse {
                content: "hello there".to_string(),
                usage: None::<TokenUsage>,
                finish_reason: None,
            })
        }
    }

    #[tokio::test]
    async fn chat_includes_previous_entries_in_prompt() {
        let client = RecordingClient {
            prompts: Mutex::new(Vec::new()),
        };
        let entries = vec![ChatEntry {
            date: "2026-08-20".to_string(),
            mood: "stressed".to_string(),
            text: "Big deadline coming up.".to_string(),
        }];

        let reply = chat(&client, "gpt-4o-mini", "How do I relax?", &entries)
            .await
            .unwrap();
        assert_eq!(reply, "hello there");

        let recorded = client.prompts.lock().unwrap();
        let request = &recorded[0];
        assert!(request.system.as_deref().unwrap().contains("You are Juno"));
        assert!(request.prompt.contains("Mood: stressed"));
        assert!(request.prompt.contains("\"How do I relax?\""));
    }

    #[tokio::test]
    async fn chat_without_history_omits_context_block() {
        let client = RecordingClient {
            prompts: Mutex::new(Vec::new()),
        };

        chat(&client, "gpt-4o-mini", "Hi", &[]).await.unwrap();

        let recorded = client.prompts.lock().unwrap();
        assert!(!recorded[0].prompt.contains("recent journal entries"));
    }
}
