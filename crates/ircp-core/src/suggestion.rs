//! "Try one" micro-action engine.
//!
//! Picks one suggestion per lane from a compiled-in library, filtered by
//! topic and by the entry's primary state symbol, rotated by a seed derived
//! from the entry. Pure: the same request always yields the same trio.

use chrono::{DateTime, Utc};
use ircp_schema::{Intensity, Lane, StateSymbol, Suggestion, Topic};

use ircp_schema::StateSymbol::{Activated, Connected, HoldingIn, Shutdown, Steady, TippingPoint};
use Intensity::{Low, Med};
use Lane::{Body, Cognitive, Environment};
use SymbolScope::{Any, Only};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolScope {
    Any,
    Only(&'static [StateSymbol]),
}

impl SymbolScope {
    pub fn matches(self, symbol: StateSymbol) -> bool {
        match self {
            SymbolScope::Any => true,
            SymbolScope::Only(symbols) => symbols.contains(&symbol),
        }
    }
}

/// A library entry. `any_topic` items are offered for every topic; `topics`
/// lists the topics an item is explicitly written for (both may be set).
#[derive(Debug)]
pub struct LibraryItem {
    pub id: &'static str,
    pub lane: Lane,
    pub any_topic: bool,
    pub topics: &'static [Topic],
    pub symbols: SymbolScope,
    pub text: &'static str,
    pub intensity: Intensity,
}

impl LibraryItem {
    fn offered_for(&self, topic: Topic) -> bool {
        self.any_topic || self.explicit_for(topic)
    }

    fn explicit_for(&self, topic: Topic) -> bool {
        self.topics.contains(&topic)
    }

    fn to_suggestion(&self) -> Suggestion {
        Suggestion {
            id: self.id.to_string(),
            lane: self.lane,
            text: self.text.to_string(),
            intensity: self.intensity,
        }
    }
}

const fn item(
    id: &'static str,
    lane: Lane,
    any_topic: bool,
    topics: &'static [Topic],
    symbols: SymbolScope,
    text: &'static str,
    intensity: Intensity,
) -> LibraryItem {
    LibraryItem {
        id,
        lane,
        any_topic,
        topics,
        symbols,
        text,
        intensity,
    }
}

pub static LIBRARY: [LibraryItem; 24] = [
    // body
    item("body-breath-4-6", Body, true, &[], Any, "Inhale 4 seconds, exhale 6 seconds (repeat 5 times).", Low),
    item("body-move-90", Body, true, &[], Only(&[Activated, TippingPoint, Steady, Connected]), "Move your body for 90 seconds (walk, stretch, shake out tension).", Med),
    item("body-release-jaw-shoulders", Body, true, &[], Any, "Unclench your jaw and drop your shoulders once. Repeat.", Low),
    item("freeze-prioritize-rest-food-safety", Body, false, &[Topic::FreezeStuck], Only(&[Shutdown, HoldingIn]), "Prioritize rest, food, and safe environments.", Med),
    // environment
    item("env-remove-noise", Environment, true, &[Topic::AngerBoundary], Any, "Remove one source of noise or stimulation.", Low),
    item("env-step-outside", Environment, true, &[], Any, "Step outside for 2 minutes.", Low),
    item("env-change-room-light", Environment, true, &[], Any, "Change rooms or change lighting (small reset).", Low),
    item("conflict-remove-escalators", Environment, false, &[Topic::Conflict], Any, "Remove yourself from escalating factors (screen, room, tone).", Med),
    item("freeze-nature-pet", Environment, false, &[Topic::FreezeStuck], Only(&[Shutdown, HoldingIn, TippingPoint]), "Connect with nature or a pet.", Low),
    item("win-create-meaningful", Environment, false, &[Topic::RecordWin], Any, "Create something meaningful today (small counts).", Low),
    // cognitive
    item("cog-buy-time", Cognitive, true, &[], Any, "Don’t answer immediately. Buy time before responding.", Low),
    item("cog-neutral-truth", Cognitive, true, &[], Any, "Name one neutral truth: “I’m having a hard moment.”", Low),
    item("cog-text-support", Cognitive, true, &[], Only(&[Shutdown, HoldingIn, Activated, TippingPoint]), "Text a trauma-informed person (one sentence is enough).", Med),
    item("cog-save-for-therapy", Cognitive, true, &[], Any, "Save this entry to discuss with a therapist or trusted person.", Low),
    item("conflict-delay-reply", Cognitive, false, &[Topic::Conflict], Only(&[Activated, HoldingIn, TippingPoint]), "Delay the reply. Space first, clarity second.", Med),
    item("shame-talk-younger-self", Cognitive, false, &[Topic::ShameSpiral], Only(&[Shutdown, HoldingIn, TippingPoint]), "Talk to yourself like you’re speaking to a younger version of you.", Med),
    item("shame-separate-identity", Cognitive, false, &[Topic::ShameSpiral], Any, "Separate behavior from identity (what happened ≠ who you are).", Low),
    item("overthink-five-min-timer", Cognitive, false, &[Topic::OverthinkingLoop], Any, "Set a 5-minute timer. Decide one small next step.", Low),
    item("overthink-two-min-task", Cognitive, false, &[Topic::OverthinkingLoop], Any, "Do one 2-minute task (trash, dishes, shower start).", Low),
    item("people-ask-for-time", Cognitive, false, &[Topic::PeoplePleasing], Only(&[HoldingIn, TippingPoint, Connected]), "Pause before saying yes. Ask for time.", Low),
    item("people-practice-no", Cognitive, false, &[Topic::PeoplePleasing], Only(&[HoldingIn, TippingPoint, Steady]), "Practice saying no in one sentence. Save it for later.", Low),
    item("anger-light-hearted-person", Cognitive, false, &[Topic::AngerBoundary], Only(&[Activated, Steady, TippingPoint]), "Think of someone who would make this moment light-hearted.", Low),
    item("win-celebrate", Cognitive, false, &[Topic::RecordWin], Any, "Celebrate yourself. Don’t minimize it.", Low),
    item("win-record-what-worked", Cognitive, false, &[Topic::RecordWin], Any, "Record what worked so you can reuse it next time you’re flooded.", Low),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryOneRequest<'a> {
    pub topic: Topic,
    pub primary_symbol: StateSymbol,
    pub rotation_seed: u64,
    /// Hash of the trio last shown, if any. Blank is treated as absent.
    pub previous_hash: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TryOne {
    /// Body, environment, cognitive.
    pub suggestions: [Suggestion; 3],
    pub hash: String,
}

/// Offered items for a lane, explicit-topic items first, catalog order kept
/// within each group.
fn lane_candidates(lane: Lane, topic: Topic) -> Vec<&'static LibraryItem> {
    let mut candidates: Vec<_> = LIBRARY
        .iter()
        .filter(|item| item.lane == lane && item.offered_for(topic))
        .collect();
    candidates.sort_by_key(|item| !item.explicit_for(topic));
    candidates
}

fn pick(candidates: &[&'static LibraryItem], req: &TryOneRequest<'_>) -> &'static LibraryItem {
    let symbol = req.primary_symbol;
    let explicit: Vec<_> = candidates
        .iter()
        .copied()
        .filter(|item| item.explicit_for(req.topic) && item.symbols.matches(symbol))
        .collect();
    let matching: Vec<_> = candidates
        .iter()
        .copied()
        .filter(|item| item.symbols.matches(symbol))
        .collect();

    let pool = if !explicit.is_empty() {
        explicit
    } else if !matching.is_empty() {
        matching
    } else {
        candidates.to_vec()
    };

    pool[(req.rotation_seed % pool.len() as u64) as usize]
}

/// Next item after `current` in `rotation`, wrapping. Rotations of one or
/// zero items keep `current`.
fn next_in_rotation(
    rotation: &[&'static LibraryItem],
    current: &'static LibraryItem,
) -> &'static LibraryItem {
    if rotation.len() <= 1 {
        return current;
    }
    let next = rotation
        .iter()
        .position(|item| item.id == current.id)
        .map(|pos| (pos + 1) % rotation.len())
        .unwrap_or(0);
    rotation[next]
}

fn hash_of(items: [&LibraryItem; 3]) -> String {
    items.map(|item| item.id).join("|")
}

pub fn try_one_suggestions(req: &TryOneRequest<'_>) -> TryOne {
    let candidates = Lane::ORDER.map(|lane| lane_candidates(lane, req.topic));
    let mut picked = [0, 1, 2].map(|lane| pick(&candidates[lane], req));
    let mut hash = hash_of(picked);

    let repeated = req
        .previous_hash
        .is_some_and(|prev| !prev.trim().is_empty() && prev == hash);
    if repeated {
        for (lane, current) in picked.iter_mut().enumerate() {
            let rotation: Vec<_> = candidates[lane]
                .iter()
                .copied()
                .filter(|item| item.symbols.matches(req.primary_symbol))
                .collect();
            *current = next_in_rotation(&rotation, *current);
        }
        hash = hash_of(picked);
    }

    TryOne {
        suggestions: picked.map(LibraryItem::to_suggestion),
        hash,
    }
}

/// Most dysregulated symbol among the selection, by [`StateSymbol::PRIORITY`].
pub fn primary_of(symbols: &[StateSymbol]) -> StateSymbol {
    StateSymbol::PRIORITY
        .into_iter()
        .find(|symbol| symbols.contains(symbol))
        .unwrap_or(StateSymbol::NEUTRAL)
}

/// Same as [`primary_of`] for raw glyph strings; unknown glyphs are ignored.
pub fn primary_symbol<S: AsRef<str>>(glyphs: &[S]) -> StateSymbol {
    let symbols: Vec<_> = glyphs
        .iter()
        .filter_map(|glyph| StateSymbol::from_glyph(glyph.as_ref()))
        .collect();
    primary_of(&symbols)
}

pub fn rotation_seed(
    created_at: DateTime<Utc>,
    emotions: usize,
    body_signals: usize,
    state_tags: usize,
) -> u64 {
    let sum = created_at.timestamp_millis()
        + emotions as i64 * 11
        + body_signals as i64 * 7
        + state_tags as i64 * 5;
    sum.unsigned_abs()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::TimeZone;

    use super::*;

    fn request(topic: Topic, symbol: StateSymbol, seed: u64) -> TryOneRequest<'static> {
        TryOneRequest {
            topic,
            primary_symbol: symbol,
            rotation_seed: seed,
            previous_hash: None,
        }
    }

    fn ids(result: &TryOne) -> Vec<&str> {
        result.suggestions.iter().map(|s| s.id.as_str()).collect()
    }

    fn by_id(id: &str) -> &'static LibraryItem {
        LIBRARY.iter().find(|item| item.id == id).unwrap()
    }

    #[test]
    fn library_ids_are_unique() {
        let ids: HashSet<_> = LIBRARY.iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), LIBRARY.len());
    }

    #[test]
    fn every_lane_has_an_unrestricted_item() {
        for lane in Lane::ORDER {
            assert!(
                LIBRARY
                    .iter()
                    .any(|i| i.lane == lane && i.any_topic && i.symbols == SymbolScope::Any),
                "{lane:?}"
            );
        }
    }

    #[test]
    fn trio_has_one_item_per_lane() {
        for topic in Topic::ALL {
            for symbol in StateSymbol::PRIORITY {
                for seed in 0..6 {
                    let result = try_one_suggestions(&request(topic, symbol, seed));
                    let lanes: Vec<_> = result.suggestions.iter().map(|s| s.lane).collect();
                    assert_eq!(lanes, Lane::ORDER.to_vec());
                    assert_eq!(result.hash, ids(&result).join("|"));
                }
            }
        }
    }

    #[test]
    fn explicit_topic_items_win_their_lane() {
        let result = try_one_suggestions(&request(Topic::Conflict, Activated, 0));
        assert_eq!(
            ids(&result),
            vec!["body-breath-4-6", "conflict-remove-escalators", "conflict-delay-reply"]
        );
        assert_eq!(
            result.hash,
            "body-breath-4-6|conflict-remove-escalators|conflict-delay-reply"
        );
    }

    #[test]
    fn seed_rotates_within_tier() {
        let result = try_one_suggestions(&request(Topic::Conflict, Activated, 1));
        assert_eq!(result.suggestions[0].id, "body-move-90");
        let result = try_one_suggestions(&request(Topic::Conflict, Activated, 5));
        assert_eq!(result.suggestions[0].id, "body-release-jaw-shoulders");
    }

    #[test]
    fn symbol_filters_out_mismatched_items() {
        // body-move-90 is not offered for shutdown.
        for seed in 0..10 {
            let result = try_one_suggestions(&request(Topic::RecordWin, Shutdown, seed));
            assert_ne!(result.suggestions[0].id, "body-move-90");
        }
    }

    #[test]
    fn falls_back_to_lane_matches_when_explicit_items_miss_symbol() {
        // freeze-nature-pet does not cover ⊕, so the general pool is used.
        let result = try_one_suggestions(&request(Topic::FreezeStuck, Connected, 0));
        assert_eq!(result.suggestions[1].id, "env-remove-noise");

        let result = try_one_suggestions(&request(Topic::FreezeStuck, Shutdown, 3));
        assert_eq!(result.suggestions[0].id, "freeze-prioritize-rest-food-safety");
        assert_eq!(result.suggestions[1].id, "freeze-nature-pet");
    }

    #[test]
    fn same_request_is_deterministic() {
        let req = request(Topic::ShameSpiral, HoldingIn, 1_739_354_400_123);
        assert_eq!(try_one_suggestions(&req), try_one_suggestions(&req));
    }

    #[test]
    fn repeat_of_previous_hash_advances_every_lane() {
        let first = try_one_suggestions(&request(Topic::Conflict, Activated, 0));
        let second = try_one_suggestions(&TryOneRequest {
            previous_hash: Some(&first.hash),
            ..request(Topic::Conflict, Activated, 0)
        });
        assert_eq!(
            ids(&second),
            vec!["body-move-90", "env-remove-noise", "cog-buy-time"]
        );
        assert_ne!(second.hash, first.hash);
        assert_eq!(second.hash, "body-move-90|env-remove-noise|cog-buy-time");
    }

    #[test]
    fn different_or_blank_previous_hash_is_ignored() {
        let base = try_one_suggestions(&request(Topic::Conflict, Activated, 0));
        for prev in ["", "  ", "a|b|c"] {
            let result = try_one_suggestions(&TryOneRequest {
                previous_hash: Some(prev),
                ..request(Topic::Conflict, Activated, 0)
            });
            assert_eq!(result, base, "previous = {prev:?}");
        }
    }

    #[test]
    fn short_rotation_keeps_current_item() {
        let only = by_id("conflict-delay-reply");
        assert!(std::ptr::eq(next_in_rotation(&[only], only), only));
        assert!(std::ptr::eq(next_in_rotation(&[], only), only));

        let a = by_id("cog-buy-time");
        let b = by_id("cog-neutral-truth");
        assert!(std::ptr::eq(next_in_rotation(&[a, b], b), a));
        // Not in the rotation: start over.
        assert!(std::ptr::eq(next_in_rotation(&[a, b], only), a));
    }

    #[test]
    fn primary_symbol_follows_priority() {
        assert_eq!(primary_symbol(&["⊕", "●"]), Shutdown);
        assert_eq!(primary_symbol(&["⊜", "◉", "◯"]), HoldingIn);
        assert_eq!(primary_symbol(&["x", "⊜"]), Steady);
        assert_eq!(primary_symbol::<&str>(&[]), TippingPoint);
        assert_eq!(primary_symbol(&["nope"]), StateSymbol::NEUTRAL);
    }

    #[test]
    fn rotation_seed_weights_counts() {
        let created = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        assert_eq!(rotation_seed(created, 2, 1, 3), 1_700_000_000_000 + 22 + 7 + 15);

        let before_epoch = Utc.timestamp_millis_opt(-5_000).unwrap();
        assert_eq!(rotation_seed(before_epoch, 0, 0, 0), 5_000);
        assert_eq!(rotation_seed(before_epoch, 2, 0, 0), 4_978);
    }
}
