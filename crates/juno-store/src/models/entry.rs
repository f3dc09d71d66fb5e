use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The closed set of affect labels an entry can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Excited,
    Neutral,
    Sad,
    Anxious,
    Grateful,
    Stressed,
    Tired,
    Calm,
    Inspired,
}

impl Mood {
    /// Parse a lowercase mood label; `None` for anything outside the set.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "happy" => Some(Self::Happy),
            "excited" => Some(Self::Excited),
            "neutral" => Some(Self::Neutral),
            "sad" => Some(Self::Sad),
            "anxious" => Some(Self::Anxious),
            "grateful" => Some(Self::Grateful),
            "stressed" => Some(Self::Stressed),
            "tired" => Some(Self::Tired),
            "calm" => Some(Self::Calm),
            "inspired" => Some(Self::Inspired),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Excited => "excited",
            Self::Neutral => "neutral",
            Self::Sad => "sad",
            Self::Anxious => "anxious",
            Self::Grateful => "grateful",
            Self::Stressed => "stressed",
            Self::Tired => "tired",
            Self::Calm => "calm",
            Self::Inspired => "inspired",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    /// Set on every content/mood edit, never at creation.
    pub updated_at: Option<DateTime<Utc>>,
    pub mood: Mood,
    pub content: String,
    /// Filled in asynchronously after create/edit; stays `None` when
    /// generation fails.
    pub ai_affirmation: Option<String>,
}

impl JournalEntry {
    pub fn new(user_id: impl Into<String>, mood: Mood, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            created_at: Utc::now(),
            updated_at: None,
            mood,
            content: content.into(),
            ai_affirmation: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_labels_round_trip() {
        for label in [
            "happy", "excited", "neutral", "sad", "anxious", "grateful", "stressed", "tired",
            "calm", "inspired",
        ] {
            let mood = Mood::parse(label).unwrap();
            assert_eq!(mood.as_str(), label);
        }
    }

    #[test]
    fn unknown_mood_label_is_rejected() {
        assert!(Mood::parse("melancholy").is_none());
        assert!(Mood::parse("Happy").is_none());
        assert!(Mood::parse("").is_none());
    }

    #[test]
    fn mood_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Mood::Grateful).unwrap(), "\"grateful\"");
    }

    #[test]
    fn new_entry_has_no_affirmation_or_edit_timestamp() {
        let entry = JournalEntry::new("user-1", Mood::Calm, "A quiet morning by the window.");
        assert!(entry.ai_affirmation.is_none());
        assert!(entry.updated_at.is_none());
        assert_eq!(entry.user_id, "user-1");
    }
}
