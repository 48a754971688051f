//! "User Compass" reference sheet: read-only orientation content.

#[derive(Debug)]
pub struct PathStep {
    pub title: &'static str,
    pub description: &'static str,
}

pub static WHAT_IT_IS: [&str; 3] = [
    "A guided reflection framework for nervous-system-aware journaling.",
    "A way to slow down, name experience, and restore clarity.",
    "A practical bridge from reaction to aligned action.",
];

pub static FLOW_STEPS: [&str; 5] = [
    "Pause and orient to your body before writing.",
    "Choose the topic that best matches your current experience.",
    "Answer prompts in short, honest phrases—no performance needed.",
    "Notice patterns with curiosity, not judgment.",
    "Name one next-right action and close gently.",
];

pub static CORE_PATH: [PathStep; 4] = [
    PathStep {
        title: "Awareness",
        description: "Name what is happening in your body and nervous system right now.",
    },
    PathStep {
        title: "Observation",
        description: "Separate facts from interpretation with steady attention.",
    },
    PathStep {
        title: "Pattern Recognition",
        description: "Notice recurring loops, triggers, and protective strategies.",
    },
    PathStep {
        title: "Freedom",
        description: "Choose a grounded response that aligns with your values.",
    },
];

pub static WHEN_TO_USE: [&str; 3] = [
    "After conflict, overwhelm, shutdown, or looping thoughts.",
    "When you want clearer language for emotions, needs, and next steps.",
    "For brief daily check-ins to build reflection rhythm.",
];

pub static WHEN_NOT_TO_USE: [&str; 3] = [
    "Not for emergencies, crisis stabilization, or immediate safety threats.",
    "Not as a substitute for medical, legal, or licensed mental health care.",
    "If reflection increases distress, pause and seek trusted live support.",
];

pub const SAFETY_NOTE: &str = "Safety note: If you may harm yourself or someone else, contact local emergency services immediately.";
