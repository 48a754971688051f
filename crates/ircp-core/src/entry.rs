use chrono::{DateTime, Utc};
use ircp_schema::{ExperienceType, StateSymbol, Suggestion, Topic};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::state_by_id;
use crate::selection::TermSelection;

/// Maximum number of state tags and of needs on one entry.
pub const MAX_SELECTED: usize = 3;

/// The journal entry being filled in. Mutated only through
/// [`crate::JournalSession`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub topic: Topic,
    pub state_tags: Vec<String>,
    pub situation: String,
    pub body_signals: TermSelection,
    pub emotions: TermSelection,
    pub needs: Vec<String>,
    pub next_move: String,
    pub lock_it_in: String,
    pub suggestions: Vec<Suggestion>,
    pub suggestions_hash: String,
    pub experience_type: Option<ExperienceType>,
    pub experience_other: String,
}

impl Entry {
    pub fn new(topic: Topic) -> Self {
        Self::with_created_at(topic, Utc::now())
    }

    pub fn with_created_at(topic: Topic, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at,
            topic,
            state_tags: Vec::new(),
            situation: String::new(),
            body_signals: TermSelection::default(),
            emotions: TermSelection::default(),
            needs: Vec::new(),
            next_move: String::new(),
            lock_it_in: String::new(),
            suggestions: Vec::new(),
            suggestions_hash: String::new(),
            experience_type: None,
            experience_other: String::new(),
        }
    }

    /// Symbols of the selected states, in selection order.
    pub fn state_symbols(&self) -> Vec<StateSymbol> {
        self.state_tags
            .iter()
            .filter_map(|id| state_by_id(id))
            .map(|state| state.symbol)
            .collect()
    }

    /// Free-text "other" experience, if it should be shown: always for
    /// "Other experience", and for no type when the text is non-empty.
    pub fn experience_other_visible(&self) -> Option<&str> {
        let text = self.experience_other.trim();
        match self.experience_type {
            Some(ExperienceType::Other) => Some(text),
            None if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}
