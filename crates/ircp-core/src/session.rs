use std::sync::Arc;

use chrono::{DateTime, Utc};
use ircp_memory::{HashSlot, HistoryLog};
use ircp_schema::{ExperienceType, HistoryRecord, Topic};

use crate::catalog::{body_signal_catalog, topic_config, NEEDS};
use crate::entry::{Entry, MAX_SELECTED};
use crate::exporter::{build_export_document, DocumentExporter, ExportError, ExportReceipt};
use crate::notice::Notice;
use crate::resolver::resolve_state;
use crate::suggestion::{primary_of, rotation_seed, try_one_suggestions, TryOneRequest};

pub const MAX_SELECTED_NOTICE: &str = "Max 3 selected.";

/// Outcome of a toggle on a bounded or catalog-checked selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
    /// Selection is full; a notice was raised.
    Rejected,
    /// No active entry, or the value is not recognized.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPhase {
    Uninitialized,
    Active,
    /// Exported and untouched since. Still editable.
    Exported,
}

/// Everything the suggestion trio depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SuggestionDeps {
    topic: Topic,
    created_at: DateTime<Utc>,
    state_tags: Vec<String>,
    body_signals: usize,
    emotions: usize,
}

impl SuggestionDeps {
    fn of(entry: &Entry) -> Self {
        Self {
            topic: entry.topic,
            created_at: entry.created_at,
            state_tags: entry.state_tags.clone(),
            body_signals: entry.body_signals.len(),
            emotions: entry.emotions.len(),
        }
    }
}

fn catalog_term(catalog: &[&'static str], value: &str) -> Option<&'static str> {
    catalog
        .iter()
        .copied()
        .find(|item| item.eq_ignore_ascii_case(value))
}

/// Owns the entry being written, its notices, and the export history.
pub struct JournalSession {
    entry: Option<Entry>,
    exported: bool,
    history: HistoryLog,
    exporter: Arc<dyn DocumentExporter>,
    hash_slot: Arc<dyn HashSlot>,
    state_notice: Notice,
    need_notice: Notice,
    applied_deps: Option<SuggestionDeps>,
}

impl JournalSession {
    pub fn new(exporter: Arc<dyn DocumentExporter>, hash_slot: Arc<dyn HashSlot>) -> Self {
        Self {
            entry: None,
            exported: false,
            history: HistoryLog::default(),
            exporter,
            hash_slot,
            state_notice: Notice::default(),
            need_notice: Notice::default(),
            applied_deps: None,
        }
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history = HistoryLog::new(limit);
        self
    }

    pub fn entry(&self) -> Option<&Entry> {
        self.entry.as_ref()
    }

    pub fn topic(&self) -> Option<Topic> {
        self.entry.as_ref().map(|entry| entry.topic)
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn phase(&self) -> EntryPhase {
        match (&self.entry, self.exported) {
            (None, _) => EntryPhase::Uninitialized,
            (Some(_), true) => EntryPhase::Exported,
            (Some(_), false) => EntryPhase::Active,
        }
    }

    pub fn state_notice(&self) -> Option<String> {
        self.state_notice.message()
    }

    pub fn need_notice(&self) -> Option<String> {
        self.need_notice.message()
    }

    /// Body signals offered for the currently selected states.
    pub fn body_signal_catalog(&self) -> Vec<&'static str> {
        let symbols = self
            .entry
            .as_ref()
            .map(Entry::state_symbols)
            .unwrap_or_default();
        body_signal_catalog(&symbols)
    }

    pub fn emotion_catalog(&self) -> Vec<&'static str> {
        self.topic()
            .map(|topic| topic_config(topic).emotion_catalog().collect())
            .unwrap_or_default()
    }

    pub fn select_topic(&mut self, topic: Topic) {
        self.start_entry(Entry::new(topic));
    }

    /// Start from a caller-supplied entry timestamp.
    pub fn select_topic_at(&mut self, topic: Topic, created_at: DateTime<Utc>) {
        self.start_entry(Entry::with_created_at(topic, created_at));
    }

    pub fn back_to_topics(&mut self) {
        self.clear_notices();
        self.entry = None;
        self.exported = false;
        self.applied_deps = None;
        tracing::debug!("returned to topic list");
    }

    /// Discard the entry and start a blank one for the same topic.
    pub fn reset_entry(&mut self) {
        if let Some(topic) = self.topic() {
            self.select_topic(topic);
        }
    }

    pub fn toggle_state_tag(&mut self, raw_id: &str) -> Toggle {
        let Some(id) = resolve_state(Some(raw_id), None).map(|state| state.id) else {
            tracing::debug!("ignoring unknown state tag {raw_id:?}");
            return Toggle::Ignored;
        };
        let Some(entry) = self.entry.as_mut() else {
            return Toggle::Ignored;
        };

        let outcome = toggle_bounded(&mut entry.state_tags, id, &mut self.state_notice);
        if matches!(outcome, Toggle::Added | Toggle::Removed) {
            let symbols = entry.state_symbols();
            entry.body_signals.recompute(&body_signal_catalog(&symbols));
            self.after_edit();
        }
        outcome
    }

    pub fn toggle_need(&mut self, value: &str) -> Toggle {
        let Some(need) = catalog_term(&NEEDS, value.trim()) else {
            return Toggle::Ignored;
        };
        let Some(entry) = self.entry.as_mut() else {
            return Toggle::Ignored;
        };

        let outcome = toggle_bounded(&mut entry.needs, need, &mut self.need_notice);
        if matches!(outcome, Toggle::Added | Toggle::Removed) {
            self.after_edit();
        }
        outcome
    }

    pub fn toggle_body_signal(&mut self, value: &str) -> Toggle {
        let catalog = self.body_signal_catalog();
        let Some(entry) = self.entry.as_mut() else {
            return Toggle::Ignored;
        };
        let value = catalog_term(&catalog, value).unwrap_or(value);
        if value.trim().is_empty() {
            return Toggle::Ignored;
        }

        let outcome = if entry.body_signals.toggle(value, &catalog) {
            Toggle::Added
        } else {
            Toggle::Removed
        };
        self.after_edit();
        outcome
    }

    pub fn toggle_emotion(&mut self, value: &str) -> Toggle {
        let catalog = self.emotion_catalog();
        let Some(entry) = self.entry.as_mut() else {
            return Toggle::Ignored;
        };
        let value = catalog_term(&catalog, value).unwrap_or(value);
        if value.trim().is_empty() {
            return Toggle::Ignored;
        }

        let outcome = if entry.emotions.toggle(value, &catalog) {
            Toggle::Added
        } else {
            Toggle::Removed
        };
        self.after_edit();
        outcome
    }

    pub fn add_custom_body_signal(&mut self, text: &str) -> bool {
        let catalog = self.body_signal_catalog();
        let added = match self.entry.as_mut() {
            Some(entry) => entry.body_signals.add_custom(text, &catalog),
            None => false,
        };
        if added {
            self.after_edit();
        }
        added
    }

    pub fn add_custom_emotion(&mut self, text: &str) -> bool {
        let catalog = self.emotion_catalog();
        let added = match self.entry.as_mut() {
            Some(entry) => entry.emotions.add_custom(text, &catalog),
            None => false,
        };
        if added {
            self.after_edit();
        }
        added
    }

    pub fn set_situation(&mut self, text: impl Into<String>) {
        self.edit(|entry| entry.situation = text.into());
    }

    pub fn set_next_move(&mut self, text: impl Into<String>) {
        self.edit(|entry| entry.next_move = text.into());
    }

    pub fn set_lock_it_in(&mut self, text: impl Into<String>) {
        self.edit(|entry| entry.lock_it_in = text.into());
    }

    pub fn set_experience_type(&mut self, kind: Option<ExperienceType>) {
        self.edit(|entry| entry.experience_type = kind);
    }

    pub fn set_experience_other(&mut self, text: impl Into<String>) {
        self.edit(|entry| entry.experience_other = text.into());
    }

    /// Hand the flattened entry to the exporter. History is only written
    /// once the exporter succeeds; on failure nothing changes.
    pub async fn export_current(&mut self) -> Result<ExportReceipt, ExportError> {
        let entry = self.entry.as_ref().ok_or(ExportError::NoEntry)?;
        let doc = build_export_document(entry);
        let guidance = topic_config(entry.topic).guidance();
        let (entry_id, created_at, topic) = (entry.id, entry.created_at, entry.topic);
        let state_tags = entry.state_tags.clone();
        let situation = entry.situation.clone();

        let receipt = match self.exporter.export(&doc, &guidance).await {
            Ok(receipt) => receipt,
            Err(err) => {
                tracing::warn!("export failed for entry {entry_id}: {err}");
                return Err(err);
            }
        };

        let evicted = self.history.push(HistoryRecord {
            entry_id,
            created_at,
            exported_at: Utc::now(),
            topic,
            state_tags,
            situation,
        });
        if let Some(old) = evicted {
            tracing::debug!("history full, evicted entry {}", old.entry_id);
        }
        self.exported = true;
        tracing::info!(
            "exported entry {entry_id} ({topic}) to {}",
            receipt.location
        );
        Ok(receipt)
    }

    fn start_entry(&mut self, entry: Entry) {
        self.clear_notices();
        tracing::debug!("new {} entry {}", entry.topic, entry.id);
        self.entry = Some(entry);
        self.exported = false;
        self.applied_deps = None;
        self.refresh_suggestions();
    }

    fn edit(&mut self, apply: impl FnOnce(&mut Entry)) {
        if let Some(entry) = self.entry.as_mut() {
            apply(entry);
            self.after_edit();
        }
    }

    fn after_edit(&mut self) {
        self.exported = false;
        self.refresh_suggestions();
    }

    fn clear_notices(&mut self) {
        self.state_notice.clear();
        self.need_notice.clear();
    }

    /// Recompute the trio when its inputs changed. The trio is replaced, and
    /// the hash slot written, only when the resulting hash differs from the
    /// one already on the entry.
    fn refresh_suggestions(&mut self) {
        let Some(entry) = self.entry.as_mut() else {
            return;
        };
        let deps = SuggestionDeps::of(entry);
        if self.applied_deps.as_ref() == Some(&deps) {
            return;
        }

        let previous = self.hash_slot.load();
        let result = try_one_suggestions(&TryOneRequest {
            topic: entry.topic,
            primary_symbol: primary_of(&entry.state_symbols()),
            rotation_seed: rotation_seed(
                entry.created_at,
                entry.emotions.len(),
                entry.body_signals.len(),
                entry.state_tags.len(),
            ),
            previous_hash: previous.as_deref(),
        });
        self.applied_deps = Some(deps);

        if result.hash != entry.suggestions_hash {
            tracing::debug!("try-one trio now {}", result.hash);
            self.hash_slot.store(&result.hash);
            entry.suggestions = result.suggestions.to_vec();
            entry.suggestions_hash = result.hash;
        }
    }
}

/// Remove `value` if present, otherwise add it while under the limit.
fn toggle_bounded(items: &mut Vec<String>, value: &str, notice: &mut Notice) -> Toggle {
    if let Some(pos) = items.iter().position(|item| item == value) {
        items.remove(pos);
        notice.clear();
        return Toggle::Removed;
    }
    if items.len() >= MAX_SELECTED {
        notice.raise(MAX_SELECTED_NOTICE);
        return Toggle::Rejected;
    }
    items.push(value.to_string());
    notice.clear();
    Toggle::Added
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;
    use ircp_memory::MemoryHashSlot;
    use ircp_schema::{ExportDocument, TopicGuidance};

    use super::*;

    #[derive(Default)]
    struct RecordingExporter {
        docs: Mutex<Vec<ExportDocument>>,
    }

    #[async_trait]
    impl DocumentExporter for RecordingExporter {
        async fn export(
            &self,
            doc: &ExportDocument,
            _guidance: &TopicGuidance,
        ) -> Result<ExportReceipt, ExportError> {
            self.docs.lock().unwrap().push(doc.clone());
            Ok(ExportReceipt {
                location: "memory".into(),
                bytes: 0,
            })
        }
    }

    fn session() -> (JournalSession, Arc<MemoryHashSlot>) {
        let slot = Arc::new(MemoryHashSlot::new());
        let session = JournalSession::new(Arc::new(RecordingExporter::default()), slot.clone());
        (session, slot)
    }

    #[test]
    fn starts_uninitialized_and_ignores_edits() {
        let (mut session, _) = session();
        assert_eq!(session.phase(), EntryPhase::Uninitialized);
        assert_eq!(session.toggle_state_tag("shutting_down"), Toggle::Ignored);
        assert_eq!(session.toggle_emotion("Angry"), Toggle::Ignored);
        assert!(!session.add_custom_emotion("Tired"));
        session.set_situation("nothing to hold this");
        session.reset_entry();
        assert!(session.entry().is_none());
    }

    #[test]
    fn select_topic_builds_a_trio_and_stores_hash() {
        let (mut session, slot) = session();
        session.select_topic(Topic::Conflict);
        let entry = session.entry().unwrap();
        assert_eq!(entry.suggestions.len(), 3);
        assert_eq!(slot.load().as_deref(), Some(entry.suggestions_hash.as_str()));
        assert_eq!(session.phase(), EntryPhase::Active);
    }

    #[test]
    fn legacy_state_ids_are_stored_canonically() {
        let (mut session, _) = session();
        session.select_topic(Topic::Conflict);
        assert_eq!(session.toggle_state_tag("fawn"), Toggle::Added);
        assert_eq!(
            session.entry().unwrap().state_tags,
            vec!["shrinking_to_keep_calm"]
        );
        assert_eq!(session.toggle_state_tag("shrinking_to_keep_calm"), Toggle::Removed);
        assert_eq!(session.toggle_state_tag("bogus"), Toggle::Ignored);
    }

    #[test]
    fn fourth_state_is_rejected_with_notice() {
        let (mut session, _) = session();
        session.select_topic(Topic::Conflict);
        for id in ["shutting_down", "energized_but_steady", "something_feels_off"] {
            assert_eq!(session.toggle_state_tag(id), Toggle::Added);
        }
        assert_eq!(session.toggle_state_tag("stress_is_running_this"), Toggle::Rejected);
        assert_eq!(session.entry().unwrap().state_tags.len(), 3);
        assert_eq!(session.state_notice().as_deref(), Some(MAX_SELECTED_NOTICE));
        assert_eq!(session.need_notice(), None);

        session.toggle_state_tag("shutting_down");
        assert_eq!(session.state_notice(), None);
    }

    #[test]
    fn needs_are_bounded_and_catalog_checked() {
        let (mut session, _) = session();
        session.select_topic(Topic::PeoplePleasing);
        assert_eq!(session.toggle_need("a pony"), Toggle::Ignored);
        assert_eq!(session.toggle_need("space"), Toggle::Added);
        assert_eq!(session.entry().unwrap().needs, vec!["Space"]);
        session.toggle_need("Rest");
        session.toggle_need("Time");
        assert_eq!(session.toggle_need("Clarity"), Toggle::Rejected);
        assert_eq!(session.need_notice().as_deref(), Some(MAX_SELECTED_NOTICE));
        assert_eq!(session.state_notice(), None);
    }

    #[test]
    fn need_toggle_is_its_own_inverse_and_ignores_states() {
        let (mut session, _) = session();
        session.select_topic(Topic::Conflict);
        for id in ["shutting_down", "energized_but_steady", "something_feels_off"] {
            assert_eq!(session.toggle_state_tag(id), Toggle::Added);
        }
        for need in ["Respect", "Space", "Rest"] {
            assert_eq!(session.toggle_need(need), Toggle::Added);
        }
        assert_eq!(session.toggle_need("Time"), Toggle::Rejected);

        let sorted = |session: &JournalSession| {
            let mut needs = session.entry().unwrap().needs.clone();
            needs.sort();
            needs
        };
        let states_before = session.entry().unwrap().state_tags.clone();
        let needs_before = sorted(&session);

        assert_eq!(session.toggle_need("Space"), Toggle::Removed);
        assert_eq!(session.toggle_need("Space"), Toggle::Added);
        assert_eq!(sorted(&session), needs_before);
        assert_eq!(session.entry().unwrap().state_tags, states_before);

        assert_eq!(session.toggle_need("Rest"), Toggle::Removed);
        assert_eq!(session.toggle_need("Time"), Toggle::Added);
        assert_eq!(sorted(&session), vec!["Respect", "Space", "Time"]);
        assert_eq!(session.entry().unwrap().state_tags, states_before);
    }

    #[test]
    fn body_catalog_follows_selected_states() {
        let (mut session, _) = session();
        session.select_topic(Topic::FreezeStuck);
        assert!(session.body_signal_catalog().contains(&"Heart racing"));

        session.toggle_state_tag("shutting_down");
        let catalog = session.body_signal_catalog();
        assert!(catalog.contains(&"Numb/floaty"));
        assert!(!catalog.contains(&"Heart racing"));
    }

    #[test]
    fn custom_projection_tracks_state_changes() {
        let (mut session, _) = session();
        session.select_topic(Topic::FreezeStuck);
        session.toggle_body_signal("Heart racing");
        assert!(session.entry().unwrap().body_signals.custom().is_empty());

        // Heart racing is not a shutdown signal, so it becomes custom.
        session.toggle_state_tag("shutting_down");
        assert_eq!(
            session.entry().unwrap().body_signals.custom(),
            ["Heart racing".to_string()]
        );
    }

    #[test]
    fn emotion_toggles_use_catalog_spelling() {
        let (mut session, _) = session();
        session.select_topic(Topic::Conflict);
        assert_eq!(session.toggle_emotion("angry"), Toggle::Added);
        assert_eq!(session.entry().unwrap().emotions.text(), "Angry");
        assert!(session.add_custom_emotion("  Blindsided "));
        assert!(!session.add_custom_emotion("blindsided"));
        assert!(!session.add_custom_emotion("   "));
        let emotions = &session.entry().unwrap().emotions;
        assert_eq!(emotions.text(), "Angry, Blindsided");
        assert_eq!(emotions.custom(), ["Blindsided".to_string()]);
        assert_eq!(session.toggle_emotion("Angry"), Toggle::Removed);
    }

    #[test]
    fn unrelated_edits_do_not_touch_the_trio() {
        let (mut session, _) = session();
        session.select_topic(Topic::Conflict);
        let before = session.entry().unwrap().suggestions_hash.clone();
        session.set_situation("Kitchen, 9pm");
        session.set_next_move("Wait until morning");
        session.toggle_need("Respect");
        assert_eq!(session.entry().unwrap().suggestions_hash, before);
    }

    #[test]
    fn trio_is_recomputed_when_dependencies_change() {
        let (mut session, _) = session();
        let created = Utc::now();
        session.select_topic_at(Topic::Conflict, created);
        let first = session.entry().unwrap().suggestions_hash.clone();

        // The body lane rotates with the emotion count.
        session.toggle_emotion("Angry");
        let second = session.entry().unwrap().suggestions_hash.clone();
        let seed = rotation_seed(created, 1, 0, 0);
        let expected = try_one_suggestions(&TryOneRequest {
            topic: Topic::Conflict,
            primary_symbol: primary_of(&[]),
            rotation_seed: seed,
            previous_hash: Some(&first),
        });
        assert_eq!(second, expected.hash);
    }

    #[test]
    fn reset_keeps_topic_and_clears_notices() {
        let (mut session, _) = session();
        session.select_topic(Topic::AngerBoundary);
        for id in ["shutting_down", "energized_but_steady", "something_feels_off", "ventral"] {
            session.toggle_state_tag(id);
        }
        assert!(session.state_notice().is_some());
        let old_id = session.entry().unwrap().id;

        session.reset_entry();
        let entry = session.entry().unwrap();
        assert_eq!(entry.topic, Topic::AngerBoundary);
        assert_ne!(entry.id, old_id);
        assert!(entry.state_tags.is_empty());
        assert_eq!(session.state_notice(), None);

        session.back_to_topics();
        assert_eq!(session.phase(), EntryPhase::Uninitialized);
    }

    #[tokio::test]
    async fn export_records_history_and_edits_reactivate() {
        let exporter = Arc::new(RecordingExporter::default());
        let mut session =
            JournalSession::new(exporter.clone(), Arc::new(MemoryHashSlot::new()));
        session.select_topic(Topic::RecordWin);
        session.set_situation("Finished the report");
        session.toggle_state_tag("connected_centered_flexible");

        let receipt = session.export_current().await.unwrap();
        assert_eq!(receipt.location, "memory");
        assert_eq!(session.phase(), EntryPhase::Exported);

        let record = session.history().latest().unwrap();
        assert_eq!(record.entry_id, session.entry().unwrap().id);
        assert_eq!(record.situation, "Finished the report");
        assert_eq!(record.state_tags, vec!["connected_centered_flexible"]);

        let docs = exporter.docs.lock().unwrap();
        assert_eq!(docs[0].snapshot_symbols, "⊕");
        drop(docs);

        session.set_lock_it_in("I can do hard things");
        assert_eq!(session.phase(), EntryPhase::Active);
    }

    #[tokio::test]
    async fn export_without_entry_fails() {
        let (mut session, _) = session();
        let err = session.export_current().await.unwrap_err();
        assert!(matches!(err, ExportError::NoEntry));
        assert!(session.history().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn rejection_notice_clears_itself() {
        let (mut session, _) = session();
        session.select_topic(Topic::Conflict);
        for need in ["Respect", "Clarity", "Space", "Repair"] {
            session.toggle_need(need);
        }
        assert!(session.need_notice().is_some());
        tokio::time::sleep(Duration::from_millis(2001)).await;
        assert_eq!(session.need_notice(), None);
    }
}
