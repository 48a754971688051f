use async_trait::async_trait;
use ircp_schema::{ExportDocument, TopicGuidance};

use crate::catalog::{state_by_id, topic_config};
use crate::entry::Entry;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to render document: {0}")]
    Render(String),

    #[error("exporter unavailable: {0}")]
    Unavailable(String),

    #[error("no active entry to export")]
    NoEntry,
}

/// Where an exported document ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReceipt {
    pub location: String,
    pub bytes: usize,
}

/// Renders a flattened entry into an external document.
#[async_trait]
pub trait DocumentExporter: Send + Sync {
    async fn export(
        &self,
        doc: &ExportDocument,
        guidance: &TopicGuidance,
    ) -> Result<ExportReceipt, ExportError>;
}

/// Flatten `entry` into the exporter's input.
///
/// `emotions_selected` holds the catalog emotions only; free-text emotions go
/// to `emotions_other`. The snapshot lists keep everything selected.
pub fn build_export_document(entry: &Entry) -> ExportDocument {
    let config = topic_config(entry.topic);
    let states: Vec<_> = entry
        .state_tags
        .iter()
        .filter_map(|id| state_by_id(id))
        .collect();

    let custom_emotions = entry.emotions.custom();
    let emotions_selected = entry
        .emotions
        .selected()
        .iter()
        .filter(|e| !custom_emotions.contains(*e))
        .cloned()
        .collect();

    ExportDocument {
        created_at: entry.created_at,
        topic: entry.topic,
        topic_label: config.label.to_string(),

        context: entry.situation.clone(),
        body_signals: entry.body_signals.text().to_string(),
        ns_state: states
            .iter()
            .map(|state| state.display())
            .collect::<Vec<_>>()
            .join(" · "),

        emotions_selected,
        emotions_other: custom_emotions.join(", "),
        needs_selected: entry.needs.clone(),

        snapshot_topic: config.label.to_string(),
        snapshot_symbols: states
            .iter()
            .map(|state| state.symbol.glyph())
            .collect::<Vec<_>>()
            .join(" + "),
        snapshot_body_signals: entry.body_signals.selected().to_vec(),
        snapshot_emotions: entry.emotions.selected().to_vec(),

        try_one_suggestions: entry.suggestions.iter().map(|s| s.text.clone()).collect(),
        next_move_text: entry.next_move.clone(),
        win_or_reframe: entry.lock_it_in.clone(),

        experience_type: entry.experience_type.map(|t| t.label().to_string()),
        experience_other: entry.experience_other_visible().map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use ircp_schema::{ExperienceType, Topic};

    use super::*;

    fn conflict_entry() -> Entry {
        let catalog: Vec<_> = topic_config(Topic::Conflict).emotion_catalog().collect();
        let mut entry = Entry::new(Topic::Conflict);
        entry.state_tags = vec!["stress_is_running_this".into(), "shutting_down".into()];
        entry.situation = "Argument about chores".into();
        entry.emotions.toggle("Angry", &catalog);
        entry.emotions.add_custom("Blindsided", &catalog);
        entry.body_signals.toggle("Jaw tight", &["Jaw tight"]);
        entry.needs = vec!["Respect".into()];
        entry
    }

    #[test]
    fn flattens_states_and_symbols() {
        let doc = build_export_document(&conflict_entry());
        assert_eq!(doc.topic_label, "Conflict");
        assert_eq!(
            doc.ns_state,
            "◉ Stress is running this. · ● I’m shutting down."
        );
        assert_eq!(doc.snapshot_symbols, "◉ + ●");
        assert_eq!(doc.context, "Argument about chores");
        assert_eq!(doc.body_signals, "Jaw tight");
    }

    #[test]
    fn custom_emotions_are_split_out() {
        let doc = build_export_document(&conflict_entry());
        assert_eq!(doc.emotions_selected, vec!["Angry".to_string()]);
        assert_eq!(doc.emotions_other, "Blindsided");
        assert_eq!(doc.snapshot_emotions, vec!["Angry", "Blindsided"]);
    }

    #[test]
    fn experience_fields_follow_visibility() {
        let mut entry = Entry::new(Topic::RecordWin);
        entry.experience_type = Some(ExperienceType::BoundaryKept);
        entry.experience_other = "ignored".into();
        let doc = build_export_document(&entry);
        assert_eq!(doc.experience_type.as_deref(), Some("Boundary kept"));
        assert_eq!(doc.experience_other, None);

        entry.experience_type = Some(ExperienceType::Other);
        let doc = build_export_document(&entry);
        assert_eq!(doc.experience_other.as_deref(), Some("ignored"));
    }

    #[test]
    fn export_error_messages() {
        let err = ExportError::Render("font missing".into());
        assert_eq!(err.to_string(), "failed to render document: font missing");
        let err: ExportError = std::io::Error::other("disk full").into();
        assert!(err.to_string().contains("disk full"));
    }
}
