//! Canonical nervous-system state catalog and its legacy alias tables.

use ircp_schema::StateSymbol;

#[derive(Debug)]
pub struct StateRecord {
    pub id: &'static str,
    pub symbol: StateSymbol,
    pub label: &'static str,
    pub micro_description: &'static str,
    pub tone_color: &'static str,
    pub human_label: &'static str,
    pub expanded_lines: &'static [&'static str],
    pub clinical_label: &'static str,
    pub common_pattern: &'static str,
    pub stabilizing_actions: &'static [&'static str],
}

impl StateRecord {
    /// `"<symbol> <label>"`, as printed in exports.
    pub fn display(&self) -> String {
        format!("{} {}", self.symbol.glyph(), self.label)
    }
}

pub static STATES: [StateRecord; 6] = [
    StateRecord {
        id: "connected_centered_flexible",
        symbol: StateSymbol::Connected,
        label: "Connected. Centered. Flexible.",
        micro_description: "You feel steady, present, and able to respond instead of react.",
        tone_color: "#5f7f84",
        human_label: "Free to be myself.",
        expanded_lines: &[
            "I belong here.",
            "I’m not performing.",
            "I don’t have to prove anything.",
        ],
        clinical_label: "Regulated state (often associated with ventral vagal engagement).",
        common_pattern: "Steady heart rate, clearer thinking, easier connection.",
        stabilizing_actions: &[
            "Notice what helped you get here.",
            "Record what worked so you can reuse it.",
            "Reach out to someone while you have capacity.",
        ],
    },
    StateRecord {
        id: "energized_but_steady",
        symbol: StateSymbol::Steady,
        label: "Energized but steady.",
        micro_description: "There’s energy in your system, but it’s contained and usable.",
        tone_color: "#7a7163",
        human_label: "Fired up, still me.",
        expanded_lines: &[
            "I can handle this.",
            "I have energy and a direction.",
            "I can stay in the conversation.",
        ],
        clinical_label: "Mobilized with regulation (activation with social engagement online).",
        common_pattern: "Focused energy, assertive communication, productive urgency.",
        stabilizing_actions: &[
            "Pick one clear next step and take it.",
            "Move your body for 90 seconds to spend extra charge.",
            "Pause before you respond.",
        ],
    },
    StateRecord {
        id: "something_feels_off",
        symbol: StateSymbol::TippingPoint,
        label: "Something feels off.",
        micro_description: "Tension is building and your system is narrowing slightly.",
        tone_color: "#6d7286",
        human_label: "LOUD NOISES!",
        expanded_lines: &[
            "One more noise and I combust.",
            "Everything is too loud.",
            "Not another thing.",
            "My brain is full.",
        ],
        clinical_label: "Sensory overload / heightened arousal.",
        common_pattern: "Lower tolerance, irritability, sensory sensitivity.",
        stabilizing_actions: &[
            "Remove one source of noise or stimulation.",
            "Lengthen your exhale for five breaths.",
            "Name the exact thing that feels off.",
        ],
    },
    StateRecord {
        id: "stress_is_running_this",
        symbol: StateSymbol::Activated,
        label: "Stress is running this.",
        micro_description: "Your body is in protection mode and reacting quickly.",
        tone_color: "#7b6f7f",
        human_label: "Might punch you. Might disappear.",
        expanded_lines: &[
            "Say one more thing.",
            "I’ll handle it myself.",
            "Everything feels urgent.",
            "I’m either exploding or leaving.",
        ],
        clinical_label: "Heightened sympathetic activation (fight-or-flight response).",
        common_pattern: "Elevated heart rate, muscle tension, urgency in thoughts.",
        stabilizing_actions: &[
            "Delay the reply. Space first, clarity second.",
            "Step outside for 2 minutes.",
            "Inhale 4 seconds, exhale 6 seconds.",
        ],
    },
    StateRecord {
        id: "shrinking_to_keep_calm",
        symbol: StateSymbol::HoldingIn,
        label: "I’m shrinking to keep things calm.",
        micro_description: "You’re adjusting yourself to prevent conflict or disconnection.",
        tone_color: "#6d7c72",
        human_label: "I’ll adjust. Again.",
        expanded_lines: &[
            "I’ll do it to keep the peace.",
            "I want to say no.",
            "Shrinking is comfortable.",
        ],
        clinical_label: "Appeasement / fawn pattern (social survival strategy).",
        common_pattern: "Over-attunement to others, tension under compliance.",
        stabilizing_actions: &[
            "Pause before saying yes. Ask for time.",
            "Write down what you actually want.",
            "Practice one honest sentence.",
        ],
    },
    StateRecord {
        id: "shutting_down",
        symbol: StateSymbol::Shutdown,
        label: "I’m shutting down.",
        micro_description: "Your system is conserving energy and pulling inward.",
        tone_color: "#766f67",
        human_label: "Meh.",
        expanded_lines: &[
            "Nothing matters.",
            "Don’t ask me.",
            "I’m tired of explaining.",
            "I’d rather disappear.",
        ],
        clinical_label: "Low-energy protective response (often associated with dorsal shutdown).",
        common_pattern: "Low energy, heaviness, numbness, reduced engagement.",
        stabilizing_actions: &[
            "Prioritize rest, food, and warmth.",
            "Do one gentle two-minute action.",
            "Connect with nature or a pet.",
        ],
    },
];

/// Ids used before the catalog was relabeled.
pub static LEGACY_STATE_IDS: [(&str, &str); 6] = [
    ("ventral", "connected_centered_flexible"),
    ("mobilized", "stress_is_running_this"),
    ("shutdown", "shutting_down"),
    ("fawn", "shrinking_to_keep_calm"),
    ("overstimulation", "something_feels_off"),
    ("dorsal_drift", "shutting_down"),
];

/// Older display labels, stored lowercase.
pub static LEGACY_STATE_LABELS: [(&str, &str); 15] = [
    ("free to be myself.", "connected_centered_flexible"),
    ("ventral (safe/connected)", "connected_centered_flexible"),
    (
        "you can handle daily stress without losing connection.",
        "energized_but_steady",
    ),
    ("loud noises!", "something_feels_off"),
    ("overstimulation (sensory flood)", "something_feels_off"),
    ("at the tipping point.", "something_feels_off"),
    ("might punch you. might disappear.", "stress_is_running_this"),
    ("mobilized (fight/flight)", "stress_is_running_this"),
    ("i’ll adjust. again.", "shrinking_to_keep_calm"),
    ("fawn (appease/people-please)", "shrinking_to_keep_calm"),
    ("holding it in.", "shrinking_to_keep_calm"),
    ("meh.", "shutting_down"),
    ("sleep. avoid. repeat.", "shutting_down"),
    ("shutdown (freeze/collapse)", "shutting_down"),
    ("dorsal drift (low energy/withdrawn)", "shutting_down"),
];

/// Glyphs of the old anchor pills.
pub static LEGACY_SYMBOLS: [(&str, &str); 2] = [
    ("⊝", "something_feels_off"),
    ("◉⇠", "shrinking_to_keep_calm"),
];

pub fn state_by_id(id: &str) -> Option<&'static StateRecord> {
    STATES.iter().find(|state| state.id == id)
}

pub fn state_by_symbol(symbol: StateSymbol) -> Option<&'static StateRecord> {
    STATES.iter().find(|state| state.symbol == symbol)
}

/// Entry on the read-only symbol key reference page.
#[derive(Debug)]
pub struct SymbolKeyEntry {
    pub state_id: &'static str,
    pub label: &'static str,
    pub definition: &'static str,
    pub behaviors: &'static [&'static str],
}

impl SymbolKeyEntry {
    pub fn symbol(&self) -> StateSymbol {
        state_by_id(self.state_id)
            .map(|state| state.symbol)
            .unwrap_or(StateSymbol::NEUTRAL)
    }
}

/// Symbol key in catalog order.
pub fn symbol_key() -> &'static [SymbolKeyEntry] {
    &SYMBOL_KEY
}

pub static SYMBOL_KEY: [SymbolKeyEntry; 6] = [
    SymbolKeyEntry {
        state_id: "connected_centered_flexible",
        label: "Connected. Centered. Flexible.",
        definition: "Stable regulation with connection and flexible engagement.",
        behaviors: &[
            "Curiosity in conversation",
            "Clear and respectful boundaries",
            "Willingness to repair after tension",
            "Tolerates disagreement without escalation",
        ],
    },
    SymbolKeyEntry {
        state_id: "energized_but_steady",
        label: "You can handle daily stress without losing connection.",
        definition: "Activation is present, but grounded thinking and connection stay online.",
        behaviors: &[
            "Assertive communication",
            "Direct action-taking",
            "Protective but measured responses",
            "Productive use of energy",
        ],
    },
    SymbolKeyEntry {
        state_id: "something_feels_off",
        label: "At the tipping point.",
        definition: "Something doesn’t feel safe. Grounded thinking is slipping as protection prepares to take over.",
        behaviors: &[
            "Shorter patience and rising urgency",
            "Narrowing focus under stress",
            "Sensitivity to tone and ambiguity",
            "Reduced access to flexible thinking",
        ],
    },
    SymbolKeyEntry {
        state_id: "stress_is_running_this",
        label: "Stress is running this.",
        definition: "Acute outward stress response with narrowed cognitive processing.",
        behaviors: &[
            "Reactive or sharp responses",
            "Urgent need to resolve immediately",
            "Black-and-white conclusions",
            "Defensive posture in conflict",
        ],
    },
    SymbolKeyEntry {
        state_id: "shrinking_to_keep_calm",
        label: "Holding it in.",
        definition: "Pressure builds inward while boundaries thin to preserve connection and reduce conflict.",
        behaviors: &[
            "Self-blame after conflict",
            "Over-apologizing",
            "People-pleasing to reduce tension",
            "Replaying conversations repeatedly",
        ],
    },
    SymbolKeyEntry {
        state_id: "shutting_down",
        label: "I’m shutting down.",
        definition: "Energy withdrawal with reduced emotional engagement.",
        behaviors: &[
            "Withdrawing from interaction",
            "Avoiding decisions or conversations",
            "Low motivation",
            "Emotional numbness or detachment",
        ],
    },
];
