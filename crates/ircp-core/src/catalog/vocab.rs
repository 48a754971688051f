use ircp_schema::StateSymbol;
use ircp_schema::StateSymbol::{Activated, Connected, HoldingIn, Shutdown, Steady, TippingPoint};

/// Flat emotion list from before emotions were pulled per topic.
pub static ALL_EMOTIONS: [&str; 30] = [
    "Calm", "Relieved", "Hopeful", "Grateful", "Proud", "Motivated", "Happy", "Content",
    "Connected", "Safe", "Curious", "Playful", "Anxious", "Nervous", "Overwhelmed", "Stressed",
    "Irritable", "Frustrated", "Angry", "Hurt", "Sad", "Lonely", "Ashamed", "Embarrassed",
    "Guilty", "Resentful", "Defensive", "Numb", "Hopeless", "Confused",
];

pub static NEEDS: [&str; 31] = [
    "Safety", "Space", "Rest", "Clarity", "Structure", "Support", "Connection", "Reassurance",
    "Respect", "Recognition", "Fairness", "Autonomy", "Boundaries", "Consistency", "Truth",
    "Repair", "Time", "Peace", "Understanding", "Choice", "Stability", "Purpose", "Belonging",
    "Comfort", "Privacy", "Validation", "Co-regulation", "Guidance", "Accountability",
    "Simplicity", "Grounding",
];

/// Needs shown before "more needs" is expanded.
pub static PRIMARY_NEEDS: [&str; 12] = [
    "Space", "Clarity", "Respect", "Reassurance", "Support", "Safety", "Rest", "Connection",
    "Autonomy", "Boundaries", "Simplicity", "Time",
];

#[derive(Debug)]
pub struct BodySignal {
    pub term: &'static str,
    pub symbols: &'static [StateSymbol],
}

pub static BODY_SIGNALS: [BodySignal; 18] = [
    BodySignal { term: "Jaw tight", symbols: &[Activated, HoldingIn, TippingPoint] },
    BodySignal { term: "Chest heavy", symbols: &[Shutdown, HoldingIn] },
    BodySignal { term: "Shallow breath", symbols: &[Activated, TippingPoint, HoldingIn] },
    BodySignal { term: "Lump in throat", symbols: &[HoldingIn, Shutdown] },
    BodySignal { term: "Stomach tight", symbols: &[TippingPoint, HoldingIn, Activated] },
    BodySignal { term: "Heart racing", symbols: &[Activated, TippingPoint] },
    BodySignal { term: "Shoulders up", symbols: &[Activated, TippingPoint, Steady] },
    BodySignal { term: "Buzzing energy", symbols: &[Steady, Activated] },
    BodySignal { term: "Shaky", symbols: &[Activated, TippingPoint] },
    BodySignal { term: "Restless legs", symbols: &[Steady, TippingPoint] },
    BodySignal { term: "Head pressure", symbols: &[TippingPoint, Activated, Shutdown] },
    BodySignal { term: "Numb/floaty", symbols: &[Shutdown] },
    BodySignal { term: "Warm face", symbols: &[Activated, HoldingIn, Steady] },
    BodySignal { term: "Cold hands", symbols: &[Shutdown, TippingPoint] },
    BodySignal { term: "Steady breath", symbols: &[Connected, Steady] },
    BodySignal { term: "Loose shoulders", symbols: &[Connected] },
    BodySignal { term: "Warm chest", symbols: &[Connected] },
    BodySignal { term: "Feet grounded", symbols: &[Connected, Steady] },
];

/// Body signals offered for the selected states, in catalog order.
/// With nothing selected the whole list is offered.
pub fn body_signal_catalog(symbols: &[StateSymbol]) -> Vec<&'static str> {
    BODY_SIGNALS
        .iter()
        .filter(|signal| {
            symbols.is_empty() || signal.symbols.iter().any(|s| symbols.contains(s))
        })
        .map(|signal| signal.term)
        .collect()
}
