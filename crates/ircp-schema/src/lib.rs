use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reflection category chosen on the landing screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    RecordWin,
    ShameSpiral,
    Conflict,
    OverthinkingLoop,
    PeoplePleasing,
    FreezeStuck,
    AngerBoundary,
}

impl Topic {
    /// Landing-screen order.
    pub const ALL: [Topic; 7] = [
        Topic::RecordWin,
        Topic::ShameSpiral,
        Topic::Conflict,
        Topic::OverthinkingLoop,
        Topic::PeoplePleasing,
        Topic::FreezeStuck,
        Topic::AngerBoundary,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Topic::RecordWin => "record_win",
            Topic::ShameSpiral => "shame_spiral",
            Topic::Conflict => "conflict",
            Topic::OverthinkingLoop => "overthinking_loop",
            Topic::PeoplePleasing => "people_pleasing",
            Topic::FreezeStuck => "freeze_stuck",
            Topic::AngerBoundary => "anger_boundary",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.key())
    }
}

impl FromStr for Topic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase().replace('-', "_");
        Topic::ALL
            .into_iter()
            .find(|topic| topic.key() == needle)
            .ok_or_else(|| format!("unknown topic: {s}"))
    }
}

/// Symbolic nervous-system state glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateSymbol {
    #[serde(rename = "●")]
    Shutdown,
    #[serde(rename = "◯")]
    HoldingIn,
    #[serde(rename = "◉")]
    Activated,
    #[serde(rename = "◑")]
    TippingPoint,
    #[serde(rename = "⊜")]
    Steady,
    #[serde(rename = "⊕")]
    Connected,
}

impl StateSymbol {
    /// Most dysregulated first. Used to pick the primary symbol of a selection.
    pub const PRIORITY: [StateSymbol; 6] = [
        StateSymbol::Shutdown,
        StateSymbol::HoldingIn,
        StateSymbol::Activated,
        StateSymbol::TippingPoint,
        StateSymbol::Steady,
        StateSymbol::Connected,
    ];

    /// Used when nothing selected maps onto the priority list.
    pub const NEUTRAL: StateSymbol = StateSymbol::TippingPoint;

    pub fn glyph(self) -> &'static str {
        match self {
            StateSymbol::Shutdown => "●",
            StateSymbol::HoldingIn => "◯",
            StateSymbol::Activated => "◉",
            StateSymbol::TippingPoint => "◑",
            StateSymbol::Steady => "⊜",
            StateSymbol::Connected => "⊕",
        }
    }

    pub fn from_glyph(glyph: &str) -> Option<Self> {
        let glyph = glyph.trim();
        Self::PRIORITY.into_iter().find(|s| s.glyph() == glyph)
    }
}

impl fmt::Display for StateSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.glyph())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lane {
    Body,
    Environment,
    Cognitive,
}

impl Lane {
    pub const ORDER: [Lane; 3] = [Lane::Body, Lane::Environment, Lane::Cognitive];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Low,
    Med,
}

/// A suggested micro-action as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    pub lane: Lane,
    pub text: String,
    pub intensity: Intensity,
}

/// "Win type" selector, only offered for [`Topic::RecordWin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceType {
    SmallWin,
    HardConversation,
    BoundaryKept,
    ChoseRegulation,
    SelfRespect,
    ParentingWin,
    HealthChoice,
    WorkEffort,
    Connection,
    Courage,
    Other,
}

impl ExperienceType {
    pub const ALL: [ExperienceType; 11] = [
        ExperienceType::SmallWin,
        ExperienceType::HardConversation,
        ExperienceType::BoundaryKept,
        ExperienceType::ChoseRegulation,
        ExperienceType::SelfRespect,
        ExperienceType::ParentingWin,
        ExperienceType::HealthChoice,
        ExperienceType::WorkEffort,
        ExperienceType::Connection,
        ExperienceType::Courage,
        ExperienceType::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExperienceType::SmallWin => "Small win",
            ExperienceType::HardConversation => "Hard conversation",
            ExperienceType::BoundaryKept => "Boundary kept",
            ExperienceType::ChoseRegulation => "Chose regulation",
            ExperienceType::SelfRespect => "Self-respect",
            ExperienceType::ParentingWin => "Parenting win",
            ExperienceType::HealthChoice => "Health choice",
            ExperienceType::WorkEffort => "Work effort",
            ExperienceType::Connection => "Connection",
            ExperienceType::Courage => "Courage",
            ExperienceType::Other => "Other experience",
        }
    }
}

impl FromStr for ExperienceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ExperienceType::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| format!("unknown experience type: {s}"))
    }
}

/// Session-only summary pushed after each successful export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub entry_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub exported_at: DateTime<Utc>,
    pub topic: Topic,
    pub state_tags: Vec<String>,
    pub situation: String,
}

/// Flattened entry handed to a document exporter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub created_at: DateTime<Utc>,
    pub topic: Topic,
    pub topic_label: String,

    pub context: String,
    pub body_signals: String,
    pub ns_state: String,

    pub emotions_selected: Vec<String>,
    pub emotions_other: String,
    pub needs_selected: Vec<String>,

    pub snapshot_topic: String,
    pub snapshot_symbols: String,
    pub snapshot_body_signals: Vec<String>,
    pub snapshot_emotions: Vec<String>,

    pub try_one_suggestions: Vec<String>,
    pub next_move_text: String,
    pub win_or_reframe: String,

    #[serde(default)]
    pub experience_type: Option<String>,
    #[serde(default)]
    pub experience_other: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidancePoint {
    pub label: String,
    pub text: String,
}

/// "North Star" block printed at the end of an exported document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicGuidance {
    pub label: String,
    pub blurb: String,
    pub points: Vec<GuidancePoint>,
}
