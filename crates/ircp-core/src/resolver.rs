//! Maps raw state ids and labels (current or legacy) onto the canonical
//! state catalog. A miss is `None`, never an error.

use ircp_schema::StateSymbol;

use crate::catalog::states::{
    state_by_id, StateRecord, LEGACY_STATE_IDS, LEGACY_STATE_LABELS, LEGACY_SYMBOLS, STATES,
};

fn normalize(raw: Option<&str>) -> Option<String> {
    let value = raw?.trim().to_lowercase();
    (!value.is_empty()).then_some(value)
}

fn canonical_id(id: &str) -> &str {
    LEGACY_STATE_IDS
        .iter()
        .find(|(legacy, _)| *legacy == id)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(id)
}

fn by_label(label: &str) -> Option<&'static StateRecord> {
    if let Some(state) = STATES.iter().find(|s| s.label.to_lowercase() == label) {
        return Some(state);
    }
    LEGACY_STATE_LABELS
        .iter()
        .find(|(legacy, _)| *legacy == label)
        .and_then(|(_, id)| state_by_id(id))
}

/// Resolve by id first (legacy ids are aliased), then by label.
pub fn resolve_state(raw_id: Option<&str>, raw_label: Option<&str>) -> Option<&'static StateRecord> {
    if let Some(id) = normalize(raw_id) {
        if let Some(state) = state_by_id(canonical_id(&id)) {
            return Some(state);
        }
    }

    normalize(raw_label).and_then(|label| by_label(&label))
}

/// Resolve a glyph, including the two retired anchor glyphs.
pub fn resolve_symbol(glyph: &str) -> Option<&'static StateRecord> {
    if let Some(symbol) = StateSymbol::from_glyph(glyph) {
        return STATES.iter().find(|s| s.symbol == symbol);
    }
    let glyph = glyph.trim();
    LEGACY_SYMBOLS
        .iter()
        .find(|(legacy, _)| *legacy == glyph)
        .and_then(|(_, id)| state_by_id(id))
}
