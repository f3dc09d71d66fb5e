pub mod chat;
pub mod entries;
pub mod health;
pub mod insights;
pub mod prompts;
pub mod session;
