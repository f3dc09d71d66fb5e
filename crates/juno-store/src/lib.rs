pub mod builder;
pub mod error;
pub mod insights;
pub mod journal;
pub mod memory;
pub mod models;
pub mod repository;

#[cfg(feature = "mongodb")]
pub mod dbs;

pub use builder::JournalServiceBuilder;
pub use error::StoreError;
pub use insights::{Insight, InsightCache};
pub use journal::JournalService;
pub use memory::MemoryRepository;
pub use models::{JournalEntry, Mood};
pub use repository::EntryRepository;

#[cfg(feature = "mongodb")]
pub use dbs::mongo::MongoRepository;
