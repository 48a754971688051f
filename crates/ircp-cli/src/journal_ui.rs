use console::{style, Emoji, Term};
use ircp_core::Entry;
use ircp_memory::HistoryLog;

pub static CHECKMARK: Emoji<'_, '_> = Emoji("✅ ", "√ ");
pub static ARROW: Emoji<'_, '_> = Emoji("➜  ", "-> ");
pub static PEN: Emoji<'_, '_> = Emoji("✍️  ", "");

pub fn print_logo(term: &Term) {
    let logo = r#"
  ┌─────────────────────────┐
  │   IRCP  guided journal  │
  └─────────────────────────┘
"#;
    let _ = term.write_line(&format!("{}", style(logo).cyan()));
}

pub fn print_done(term: &Term, msg: &str) {
    let _ = term.write_line(&format!("{} {}", CHECKMARK, style(msg).green()));
}

pub fn print_notice(term: &Term, msg: &str) {
    let _ = term.write_line(&format!("{} {}", ARROW, style(msg).yellow()));
}

pub fn print_step(term: &Term, n: usize, title: &str) {
    let _ = term.write_line("");
    let _ = term.write_line(&format!("{} {}", PEN, style(format!("{n}. {title}")).bold()));
}

pub fn render_suggestions(term: &Term, entry: &Entry) {
    let _ = term.write_line(&format!("{}", style("Try one").bold().cyan()));
    for suggestion in &entry.suggestions {
        let _ = term.write_line(&format!("   - {}", suggestion.text));
    }
}

fn field(value: &str) -> &str {
    if value.trim().is_empty() {
        "—"
    } else {
        value
    }
}

pub fn render_entry(term: &Term, entry: &Entry) {
    let _ = term.write_line("");
    let _ = term.write_line(&format!(
        "{} {}",
        style("Entry").bold().cyan(),
        style(entry.created_at.format("%Y-%m-%d %H:%M")).dim()
    ));
    let symbols: Vec<_> = entry
        .state_symbols()
        .iter()
        .map(|s| s.glyph().to_string())
        .collect();
    let rows = [
        ("Situation", entry.situation.clone()),
        ("States", symbols.join(" + ")),
        ("Body", entry.body_signals.text().to_string()),
        ("Emotions", entry.emotions.text().to_string()),
        ("Needs", entry.needs.join(", ")),
        ("Next move", entry.next_move.clone()),
        ("Lock it in", entry.lock_it_in.clone()),
    ];
    for (label, value) in rows {
        let _ = term.write_line(&format!(
            "   {} {}",
            style(format!("{label:<11}")).bold(),
            field(&value)
        ));
    }
    render_suggestions(term, entry);
}

pub fn render_history(term: &Term, history: &HistoryLog) {
    let _ = term.write_line(&format!(
        "{} {}",
        style("Recent exports").bold().cyan(),
        style(format!("({}/{})", history.len(), history.limit())).dim()
    ));
    if history.is_empty() {
        let _ = term.write_line("   none yet");
    }
    for record in history.iter() {
        let _ = term.write_line(&format!(
            "   - {} {:<18} {}",
            record.exported_at.format("%Y-%m-%d %H:%M"),
            record.topic,
            field(&record.situation)
        ));
    }
}
