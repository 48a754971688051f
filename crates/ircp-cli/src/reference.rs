//! Plain-text renderings of the compiled-in reference content.

use std::fmt::Write;

use console::style;
use ircp_core::catalog::compass::{
    CORE_PATH, FLOW_STEPS, SAFETY_NOTE, WHAT_IT_IS, WHEN_NOT_TO_USE, WHEN_TO_USE,
};
use ircp_core::catalog::{symbol_key, topic_config, StateRecord, STATES};
use ircp_core::TryOne;
use ircp_schema::Topic;

pub fn topics_listing() -> String {
    let mut out = String::new();
    for topic in Topic::ALL {
        let cfg = topic_config(topic);
        let _ = writeln!(out, "{:<18} {}", topic.key(), style(cfg.label).bold());
        let _ = writeln!(out, "{:<18} {}", "", cfg.tagline);
    }
    out
}

pub fn symbol_key_listing() -> String {
    let mut out = String::new();
    for entry in symbol_key() {
        let _ = writeln!(
            out,
            "{} {}  ({})",
            entry.symbol(),
            style(entry.label).bold(),
            entry.state_id
        );
        let _ = writeln!(out, "   {}", entry.definition);
        for behavior in entry.behaviors {
            let _ = writeln!(out, "   - {behavior}");
        }
    }
    out
}

pub fn compass_listing() -> String {
    let mut out = String::new();
    let mut block = |title: &str, lines: &[&str]| {
        let _ = writeln!(out, "{}", style(title).bold().cyan());
        for line in lines {
            let _ = writeln!(out, "  - {line}");
        }
        let _ = writeln!(out);
    };
    block("What it is", &WHAT_IT_IS);
    block("How to use it", &FLOW_STEPS);
    block("When to use it", &WHEN_TO_USE);
    block("When not to use it", &WHEN_NOT_TO_USE);

    let _ = writeln!(out, "{}", style("Core path").bold().cyan());
    for (i, step) in CORE_PATH.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}: {}", i + 1, step.title, step.description);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", style(SAFETY_NOTE).yellow());
    out
}

pub fn state_detail(state: &StateRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}  ({})", style(state.display()).bold(), state.id);
    let _ = writeln!(out, "   {}", state.micro_description);
    let _ = writeln!(out, "   \"{}\"", state.human_label);
    for line in state.expanded_lines {
        let _ = writeln!(out, "     {line}");
    }
    let _ = writeln!(out, "   {}", state.clinical_label);
    let _ = writeln!(out, "   Pattern: {}", state.common_pattern);
    for action in state.stabilizing_actions {
        let _ = writeln!(out, "   - {action}");
    }
    out
}

pub fn states_listing() -> String {
    STATES.iter().map(state_detail).collect::<Vec<_>>().join("\n")
}

pub fn try_one_listing(result: &TryOne) -> String {
    let mut out = String::new();
    for suggestion in &result.suggestions {
        let _ = writeln!(
            out,
            "{:<12} {}  [{}]",
            format!("{:?}", suggestion.lane).to_lowercase(),
            suggestion.text,
            suggestion.id
        );
    }
    let _ = writeln!(out, "hash: {}", result.hash);
    out
}
