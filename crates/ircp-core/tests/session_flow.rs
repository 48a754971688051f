use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use ircp_core::{
    DocumentExporter, EntryPhase, ExportError, ExportReceipt, JournalSession, Toggle,
    MAX_SELECTED_NOTICE,
};
use ircp_memory::{FileHashSlot, HashSlot, MemoryHashSlot};
use ircp_schema::{ExportDocument, Topic, TopicGuidance};

struct CountingExporter {
    calls: AtomicUsize,
}

#[async_trait]
impl DocumentExporter for CountingExporter {
    async fn export(
        &self,
        doc: &ExportDocument,
        _guidance: &TopicGuidance,
    ) -> Result<ExportReceipt, ExportError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(ExportReceipt {
            location: format!("mem://{n}/{}", doc.topic),
            bytes: doc.context.len(),
        })
    }
}

/// Fails the first `failures` calls, then succeeds.
struct FlakyExporter {
    failures: AtomicUsize,
}

#[async_trait]
impl DocumentExporter for FlakyExporter {
    async fn export(
        &self,
        _doc: &ExportDocument,
        _guidance: &TopicGuidance,
    ) -> Result<ExportReceipt, ExportError> {
        let remaining = self.failures.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failures.store(remaining - 1, Ordering::SeqCst);
            return Err(ExportError::Unavailable("printer offline".into()));
        }
        Ok(ExportReceipt {
            location: "mem://ok".into(),
            bytes: 0,
        })
    }
}

fn counting_session() -> JournalSession {
    JournalSession::new(
        Arc::new(CountingExporter {
            calls: AtomicUsize::new(0),
        }),
        Arc::new(MemoryHashSlot::new()),
    )
}

#[tokio::test(start_paused = true)]
async fn state_limit_rejects_then_accepts_after_removal() {
    let mut session = counting_session();
    session.select_topic(Topic::Conflict);

    let a = "stress_is_running_this";
    let b = "shrinking_to_keep_calm";
    let c = "shutting_down";
    let d = "something_feels_off";

    assert_eq!(session.toggle_state_tag(a), Toggle::Added);
    assert_eq!(session.toggle_state_tag(b), Toggle::Added);
    assert_eq!(session.toggle_state_tag(c), Toggle::Added);
    assert_eq!(session.toggle_state_tag(d), Toggle::Rejected);

    assert_eq!(session.entry().unwrap().state_tags, vec![a, b, c]);
    assert_eq!(session.state_notice().as_deref(), Some(MAX_SELECTED_NOTICE));

    assert_eq!(session.toggle_state_tag(a), Toggle::Removed);
    assert_eq!(session.state_notice(), None);
    assert_eq!(session.toggle_state_tag(d), Toggle::Added);
    assert_eq!(session.entry().unwrap().state_tags, vec![b, c, d]);

    // A later rejection gets the full display time again.
    assert_eq!(session.toggle_state_tag(a), Toggle::Rejected);
    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert_eq!(session.toggle_state_tag(a), Toggle::Rejected);
    tokio::time::sleep(Duration::from_millis(1000)).await;
    assert!(session.state_notice().is_some());
    tokio::time::sleep(Duration::from_millis(1001)).await;
    assert_eq!(session.state_notice(), None);
}

#[tokio::test]
async fn nine_exports_keep_eight_newest_first() {
    let mut session = counting_session();
    let mut ids = Vec::new();

    for n in 1..=9 {
        session.select_topic(Topic::OverthinkingLoop);
        session.set_situation(format!("entry {n}"));
        ids.push(session.entry().unwrap().id);
        session.export_current().await.unwrap();
    }

    let history = session.history().to_vec();
    assert_eq!(history.len(), 8);
    let situations: Vec<_> = history.iter().map(|r| r.situation.as_str()).collect();
    assert_eq!(
        situations,
        vec![
            "entry 9", "entry 8", "entry 7", "entry 6", "entry 5", "entry 4", "entry 3",
            "entry 2"
        ]
    );
    assert_eq!(history[0].entry_id, ids[8]);
    assert!(history.iter().all(|r| r.entry_id != ids[0]));
    assert!(history.windows(2).all(|w| w[0].exported_at >= w[1].exported_at));
}

#[tokio::test]
async fn failed_export_leaves_entry_and_history_untouched() {
    let mut session = JournalSession::new(
        Arc::new(FlakyExporter {
            failures: AtomicUsize::new(1),
        }),
        Arc::new(MemoryHashSlot::new()),
    );
    session.select_topic(Topic::ShameSpiral);
    session.set_situation("Meeting went sideways");
    session.toggle_emotion("Shame");
    let before = session.entry().unwrap().clone();

    let err = session.export_current().await.unwrap_err();
    assert!(err.to_string().contains("printer offline"));
    assert_eq!(session.entry().unwrap(), &before);
    assert!(session.history().is_empty());
    assert_eq!(session.phase(), EntryPhase::Active);

    let receipt = session.export_current().await.unwrap();
    assert_eq!(receipt.location, "mem://ok");
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.phase(), EntryPhase::Exported);
}

#[tokio::test]
async fn export_document_carries_entry_fields() {
    struct Capture(std::sync::Mutex<Option<(ExportDocument, TopicGuidance)>>);

    #[async_trait]
    impl DocumentExporter for Capture {
        async fn export(
            &self,
            doc: &ExportDocument,
            guidance: &TopicGuidance,
        ) -> Result<ExportReceipt, ExportError> {
            *self.0.lock().unwrap() = Some((doc.clone(), guidance.clone()));
            Ok(ExportReceipt {
                location: "capture".into(),
                bytes: 0,
            })
        }
    }

    let capture = Arc::new(Capture(std::sync::Mutex::new(None)));
    let mut session = JournalSession::new(capture.clone(), Arc::new(MemoryHashSlot::new()));
    session.select_topic(Topic::Conflict);
    session.toggle_state_tag("mobilized");
    session.toggle_body_signal("Jaw tight");
    session.toggle_emotion("Angry");
    session.add_custom_emotion("Blindsided");
    session.toggle_need("Respect");
    session.set_situation("Argument at dinner");
    session.set_next_move("Ask for 20 minutes");
    session.set_lock_it_in("Space first, clarity second.");
    session.export_current().await.unwrap();

    let (doc, guidance) = capture.0.lock().unwrap().clone().unwrap();
    assert_eq!(doc.ns_state, "◉ Stress is running this.");
    assert_eq!(doc.snapshot_symbols, "◉");
    assert_eq!(doc.body_signals, "Jaw tight");
    assert_eq!(doc.emotions_selected, vec!["Angry"]);
    assert_eq!(doc.emotions_other, "Blindsided");
    assert_eq!(doc.needs_selected, vec!["Respect"]);
    assert_eq!(doc.try_one_suggestions.len(), 3);
    assert_eq!(doc.next_move_text, "Ask for 20 minutes");
    assert_eq!(doc.win_or_reframe, "Space first, clarity second.");
    assert_eq!(guidance.label, "Conflict");
    assert!(!guidance.points.is_empty());
}

#[test]
fn persisted_hash_prevents_repeat_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("last-try-one-hash");
    let created = Utc.timestamp_millis_opt(1_739_354_400_000).unwrap();

    let exporter = Arc::new(CountingExporter {
        calls: AtomicUsize::new(0),
    });
    let mut first = JournalSession::new(exporter.clone(), Arc::new(FileHashSlot::new(&path)));
    first.select_topic_at(Topic::Conflict, created);
    let first_hash = first.entry().unwrap().suggestions_hash.clone();
    drop(first);

    let slot = FileHashSlot::new(&path);
    assert_eq!(slot.load().as_deref(), Some(first_hash.as_str()));

    let mut second = JournalSession::new(exporter, Arc::new(slot));
    second.select_topic_at(Topic::Conflict, created);
    let second_hash = &second.entry().unwrap().suggestions_hash;
    assert_ne!(second_hash, &first_hash);
}
