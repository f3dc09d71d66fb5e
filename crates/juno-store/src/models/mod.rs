mod entry;

pub use entry::{JournalEntry, Mood};
