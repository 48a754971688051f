use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use ircp_core::catalog::{topic_config, NEEDS, STATES};
use ircp_core::{IrcpConfig, JournalSession, Toggle};
use ircp_export::PdfExporter;
use ircp_schema::{ExperienceType, Topic};

use crate::journal_ui::{
    print_done, print_logo, print_notice, print_step, render_entry, render_history,
    render_suggestions, ARROW,
};

#[derive(Clone, Copy)]
enum EntryAction {
    Export,
    Revise,
    Reset,
    BackToTopics,
    Quit,
}

fn build_entry_actions() -> Vec<(EntryAction, &'static str)> {
    vec![
        (EntryAction::Export, "Export PDF"),
        (EntryAction::Revise, "Revise this entry"),
        (EntryAction::Reset, "Start over (same topic)"),
        (EntryAction::BackToTopics, "Back to topics"),
        (EntryAction::Quit, "Quit"),
    ]
}

pub async fn run_journal(config_root: &Path, config: &IrcpConfig, topic: Option<Topic>) -> Result<()> {
    let term = Term::stdout();
    let theme = ColorfulTheme::default();

    let export_dir = config.export_dir(config_root);
    let exporter = Arc::new(PdfExporter::new(&export_dir, &config.export.file_prefix));
    let mut session = JournalSession::new(exporter, config.hash_slot(config_root))
        .with_history_limit(config.history.limit);

    print_logo(&term);
    let mut preset = topic;

    'topics: loop {
        let topic = match preset.take() {
            Some(topic) => topic,
            None => match pick_topic(&theme)? {
                Some(topic) => topic,
                None => break,
            },
        };
        session.select_topic(topic);
        run_steps(&term, &theme, &mut session)?;

        loop {
            if let Some(entry) = session.entry() {
                render_entry(&term, entry);
            }
            let actions = build_entry_actions();
            let labels: Vec<&str> = actions.iter().map(|(_, label)| *label).collect();
            let selected = Select::with_theme(&theme)
                .with_prompt("What next?")
                .items(&labels)
                .default(0)
                .interact()?;

            match actions[selected].0 {
                EntryAction::Export => match session.export_current().await {
                    Ok(receipt) => {
                        print_done(&term, &format!("Saved {}", receipt.location));
                        render_history(&term, session.history());
                    }
                    Err(err) => print_notice(&term, &format!("Export failed: {err}")),
                },
                EntryAction::Revise => run_steps(&term, &theme, &mut session)?,
                EntryAction::Reset => {
                    session.reset_entry();
                    run_steps(&term, &theme, &mut session)?;
                }
                EntryAction::BackToTopics => {
                    session.back_to_topics();
                    continue 'topics;
                }
                EntryAction::Quit => break 'topics,
            }
        }
    }

    term.write_line(&format!("{} {}", ARROW, style("Take care.").dim()))?;
    Ok(())
}

fn pick_topic(theme: &ColorfulTheme) -> Result<Option<Topic>> {
    let mut labels: Vec<String> = Topic::ALL
        .iter()
        .map(|topic| {
            let cfg = topic_config(*topic);
            format!("{} — {}", cfg.label, cfg.tagline)
        })
        .collect();
    labels.push("Quit".to_string());

    let selected = Select::with_theme(theme)
        .with_prompt("What are you working with?")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(Topic::ALL.get(selected).copied())
}

fn prompt_text(theme: &ColorfulTheme, prompt: &str, current: &str) -> Result<String> {
    let text: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    Ok(text.trim().to_string())
}

/// Comma-separated free text, each piece handed to `add`.
fn prompt_custom(
    theme: &ColorfulTheme,
    prompt: &str,
    session: &mut JournalSession,
    add: fn(&mut JournalSession, &str) -> bool,
) -> Result<()> {
    let raw = prompt_text(theme, prompt, "")?;
    for piece in raw.split(',') {
        add(session, piece);
    }
    Ok(())
}

/// Multi-select over `options`, then toggle the difference against
/// `current` through `toggle`: removals first, then additions in order.
fn reconcile(
    theme: &ColorfulTheme,
    prompt: &str,
    options: &[String],
    current: &[String],
    session: &mut JournalSession,
    toggle: fn(&mut JournalSession, &str) -> Toggle,
) -> Result<Vec<Toggle>> {
    let defaults: Vec<bool> = options.iter().map(|o| current.contains(o)).collect();
    let picked = MultiSelect::with_theme(theme)
        .with_prompt(prompt)
        .items(options)
        .defaults(&defaults)
        .interact()?;

    let mut outcomes = Vec::new();
    for (i, option) in options.iter().enumerate() {
        if defaults[i] && !picked.contains(&i) {
            outcomes.push(toggle(session, option));
        }
    }
    for &i in &picked {
        if !defaults[i] {
            outcomes.push(toggle(session, &options[i]));
        }
    }
    Ok(outcomes)
}

fn run_steps(term: &Term, theme: &ColorfulTheme, session: &mut JournalSession) -> Result<()> {
    let Some(topic) = session.topic() else {
        return Ok(());
    };
    let cfg = topic_config(topic);
    let mut step = 0;
    let mut next_step = |title: &str| {
        step += 1;
        print_step(term, step, title);
    };

    next_step("Situation");
    let current = session.entry().map(|e| e.situation.clone()).unwrap_or_default();
    let situation = prompt_text(theme, cfg.prompts.situation, &current)?;
    session.set_situation(situation);

    if topic == Topic::RecordWin {
        next_step("Experience type");
        let labels: Vec<&str> = ExperienceType::ALL.iter().map(|t| t.label()).collect();
        let selected = Select::with_theme(theme)
            .with_prompt("What kind of win?")
            .items(&labels)
            .default(0)
            .interact()?;
        let kind = ExperienceType::ALL[selected];
        session.set_experience_type(Some(kind));
        if kind == ExperienceType::Other {
            let text = prompt_text(theme, "Describe it", "")?;
            session.set_experience_other(text);
        }
    }

    next_step("Nervous system state (up to 3)");
    let state_options: Vec<String> = STATES.iter().map(|s| s.display()).collect();
    let state_ids: Vec<&str> = STATES.iter().map(|s| s.id).collect();
    let current: Vec<String> = session
        .entry()
        .map(|e| {
            e.state_tags
                .iter()
                .filter_map(|id| state_ids.iter().position(|s| *s == id.as_str()))
                .map(|i| state_options[i].clone())
                .collect()
        })
        .unwrap_or_default();
    let outcomes = reconcile(
        theme,
        "Which states fit right now?",
        &state_options,
        &current,
        session,
        |session, display| {
            STATES
                .iter()
                .find(|s| s.display() == display)
                .map(|s| session.toggle_state_tag(s.id))
                .unwrap_or(Toggle::Ignored)
        },
    )?;
    if outcomes.contains(&Toggle::Rejected) {
        if let Some(notice) = session.state_notice() {
            print_notice(term, &notice);
        }
    }

    next_step("Body signals");
    let options: Vec<String> = session
        .body_signal_catalog()
        .into_iter()
        .map(str::to_string)
        .collect();
    let current = selected_body(session);
    reconcile(
        theme,
        "What do you notice in your body?",
        &options,
        &current,
        session,
        JournalSession::toggle_body_signal,
    )?;
    prompt_custom(
        theme,
        "Anything else? (comma separated, optional)",
        session,
        JournalSession::add_custom_body_signal,
    )?;

    next_step("Emotions");
    let options: Vec<String> = session
        .emotion_catalog()
        .into_iter()
        .map(str::to_string)
        .collect();
    let current = selected_emotions(session);
    reconcile(
        theme,
        "What are you feeling?",
        &options,
        &current,
        session,
        JournalSession::toggle_emotion,
    )?;
    prompt_custom(
        theme,
        "Other emotions? (comma separated, optional)",
        session,
        JournalSession::add_custom_emotion,
    )?;

    next_step("Needs (up to 3)");
    let mut options: Vec<String> = cfg.quick_needs.iter().map(|n| n.to_string()).collect();
    options.extend(
        NEEDS
            .iter()
            .filter(|n| !cfg.quick_needs.contains(n))
            .map(|n| n.to_string()),
    );
    let current = session.entry().map(|e| e.needs.clone()).unwrap_or_default();
    let outcomes = reconcile(
        theme,
        cfg.prompts.meaning,
        &options,
        &current,
        session,
        JournalSession::toggle_need,
    )?;
    if outcomes.contains(&Toggle::Rejected) {
        if let Some(notice) = session.need_notice() {
            print_notice(term, &notice);
        }
    }

    if let Some(entry) = session.entry() {
        let _ = term.write_line("");
        render_suggestions(term, entry);
    }

    next_step("One next move");
    let current = session.entry().map(|e| e.next_move.clone()).unwrap_or_default();
    let next_move = prompt_text(theme, cfg.prompts.step, &current)?;
    session.set_next_move(next_move);

    next_step("Lock it in");
    let current = session.entry().map(|e| e.lock_it_in.clone()).unwrap_or_default();
    let lock = prompt_text(theme, cfg.prompts.lock, &current)?;
    session.set_lock_it_in(lock);

    Ok(())
}

fn selected_body(session: &JournalSession) -> Vec<String> {
    session
        .entry()
        .map(|e| e.body_signals.selected().to_vec())
        .unwrap_or_default()
}

fn selected_emotions(session: &JournalSession) -> Vec<String> {
    session
        .entry()
        .map(|e| e.emotions.selected().to_vec())
        .unwrap_or_default()
}
