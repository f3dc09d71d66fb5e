pub mod flows;
pub mod openai;
pub mod traits;

pub use flows::ActivitySuggestion;
pub use openai::OpenAIClient;
pub use traits::{GenerateClient, GenerateOptions, GenerateRequest, GenerateResponse, TokenUsage};
