//! Per-topic prompts, vocabulary pulls and guidance.

use ircp_schema::{GuidancePoint, StateSymbol, Topic, TopicGuidance};

#[derive(Debug)]
pub struct NorthStarPoint {
    pub label: &'static str,
    pub text: &'static str,
}

#[derive(Debug)]
pub struct NorthStar {
    pub blurb: &'static str,
    pub points: &'static [NorthStarPoint],
}

#[derive(Debug)]
pub struct Prompts {
    pub situation: &'static str,
    pub facts: &'static str,
    pub meaning: &'static str,
    pub step: &'static str,
    pub lock: &'static str,
}

/// Emotion pills offered for a topic: shown first, then behind "more".
#[derive(Debug)]
pub struct EmotionPulls {
    pub suggested: &'static [&'static str],
    pub more: &'static [&'static str],
}

/// Topic-specific phrasing of a state symbol.
#[derive(Debug)]
pub struct TopicAnchor {
    pub id: &'static str,
    pub symbol: StateSymbol,
    pub label: &'static str,
    pub note: &'static str,
}

#[derive(Debug)]
pub struct TopicConfig {
    pub topic: Topic,
    pub label: &'static str,
    pub tagline: &'static str,
    pub prompts: Prompts,
    pub quick_emotions: &'static [&'static str],
    pub quick_needs: &'static [&'static str],
    pub emotion_pulls: EmotionPulls,
    pub anchors: &'static [TopicAnchor],
    pub north_star: NorthStar,
}

impl TopicConfig {
    /// The topic's emotion catalog: suggested pills then "more" pills.
    pub fn emotion_catalog(&self) -> impl Iterator<Item = &'static str> {
        self.emotion_pulls
            .suggested
            .iter()
            .chain(self.emotion_pulls.more.iter())
            .copied()
    }

    pub fn guidance(&self) -> TopicGuidance {
        TopicGuidance {
            label: self.label.to_string(),
            blurb: self.north_star.blurb.to_string(),
            points: self
                .north_star
                .points
                .iter()
                .map(|p| GuidancePoint {
                    label: p.label.to_string(),
                    text: p.text.to_string(),
                })
                .collect(),
        }
    }
}

pub fn topic_config(topic: Topic) -> &'static TopicConfig {
    match topic {
        Topic::RecordWin => &RECORD_WIN,
        Topic::ShameSpiral => &SHAME_SPIRAL,
        Topic::Conflict => &CONFLICT,
        Topic::OverthinkingLoop => &OVERTHINKING_LOOP,
        Topic::PeoplePleasing => &PEOPLE_PLEASING,
        Topic::FreezeStuck => &FREEZE_STUCK,
        Topic::AngerBoundary => &ANGER_BOUNDARY,
    }
}

/// Every emotion pulled by any topic, first occurrence order.
pub fn all_topic_emotions() -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for topic in Topic::ALL {
        for emotion in topic_config(topic).emotion_catalog() {
            if !out.contains(&emotion) {
                out.push(emotion);
            }
        }
    }
    out
}

static RECORD_WIN: TopicConfig = TopicConfig {
    topic: Topic::RecordWin,
    label: "Record a Win",
    tagline: "Train your brain to notice progress, not just problems.",
    prompts: Prompts {
        situation: "Where/when did this happen? Keep it to 1–2 sentences.",
        facts: "What did you do (or choose) that mattered? Facts only.",
        meaning: "What does this prove about you or your growth?",
        step: "One small action to reinforce this momentum.",
        lock: "Write a short statement you want to remember.",
    },
    quick_emotions: &["Proud", "Relieved", "Calm", "Grateful", "Hopeful", "Motivated"],
    quick_needs: &["Recognition", "Rest", "Support", "Consistency", "Connection", "Purpose"],
    emotion_pulls: EmotionPulls {
        suggested: &["Proud", "Relieved", "Grateful", "Calm", "Connected", "Hopeful"],
        more: &["Motivated", "Confident", "Clear", "Grounded", "Energized", "Peaceful"],
    },
    anchors: &[
        TopicAnchor { id: "win-1", symbol: StateSymbol::Connected, label: "I’m proud of how I showed up.", note: "Aligned with who I want to be." },
        TopicAnchor { id: "win-2", symbol: StateSymbol::Connected, label: "I stayed regulated under pressure.", note: "Old me would’ve spiraled." },
        TopicAnchor { id: "win-3", symbol: StateSymbol::Steady, label: "I recovered faster than usual.", note: "Bounced back instead of stuck." },
        TopicAnchor { id: "win-4", symbol: StateSymbol::Connected, label: "I created something meaningful.", note: "Purpose is online." },
        TopicAnchor { id: "win-5", symbol: StateSymbol::Connected, label: "I held a boundary respectfully.", note: "No explosion. No collapse." },
        TopicAnchor { id: "win-6", symbol: StateSymbol::Connected, label: "I used what I learned.", note: "Progress, not performance." },
    ],
    north_star: NorthStar {
        blurb: "Early learning pillars that unlock clarity and freedom.",
        points: &[
            NorthStarPoint { label: "Awareness", text: "Notice what’s happening inside you — without judgment." },
            NorthStarPoint { label: "Observation", text: "Watch triggers, body signals, and thoughts like data." },
            NorthStarPoint { label: "Pattern Recognition", text: "Connect the dots across time. Patterns = leverage." },
        ],
    },
};

static SHAME_SPIRAL: TopicConfig = TopicConfig {
    topic: Topic::ShameSpiral,
    label: "Shame Spiral",
    tagline: "Name the spiral, reduce the heat, and rebuild dignity.",
    prompts: Prompts {
        situation: "What triggered the shame (where/when)?",
        facts: "What happened, and what did your inner critic say?",
        meaning: "What is shame trying to do (protect, punish, control)?",
        step: "One dignified step you can take today.",
        lock: "Write a kinder, truer statement you can believe.",
    },
    quick_emotions: &["Ashamed", "Embarrassed", "Anxious", "Defensive", "Sad", "Angry"],
    quick_needs: &["Repair", "Reassurance", "Safety", "Clarity", "Boundaries", "Support"],
    emotion_pulls: EmotionPulls {
        suggested: &["Shame", "Anxious", "Sad", "Exposed", "Guilty", "Overwhelmed"],
        more: &["Embarrassed", "Worthless", "Defective", "Lonely", "Self-doubt", "Hopeless"],
    },
    anchors: &[
        TopicAnchor { id: "shame-1", symbol: StateSymbol::HoldingIn, label: "It’s my fault. Obviously.", note: "I’m blaming myself for everything." },
        TopicAnchor { id: "shame-2", symbol: StateSymbol::Activated, label: "I can’t turn my brain off.", note: "Thoughts are looping like a broken record." },
        TopicAnchor { id: "shame-3", symbol: StateSymbol::TippingPoint, label: "I feel exposed.", note: "Small, watched, judged—even if nobody’s judging me." },
        TopicAnchor { id: "shame-4", symbol: StateSymbol::Shutdown, label: "I want to disappear.", note: "Low energy. No capacity for people." },
        TopicAnchor { id: "shame-5", symbol: StateSymbol::Steady, label: "I can interrupt the spiral.", note: "Not fixed—just slowing it down." },
        TopicAnchor { id: "shame-6", symbol: StateSymbol::Connected, label: "I have my own back today.", note: "Kindness without earning it." },
    ],
    north_star: NorthStar {
        blurb: "Shame feels like truth, but it’s often old conditioning with a megaphone.",
        points: &[
            NorthStarPoint { label: "Truth", text: "Separate facts from self-attack." },
            NorthStarPoint { label: "Body", text: "Soften jaw/shoulders; lengthen exhale." },
            NorthStarPoint { label: "Compassion", text: "Talk to yourself like someone you protect." },
            NorthStarPoint { label: "Repair", text: "A small repair beats endless punishment." },
        ],
    },
};

static CONFLICT: TopicConfig = TopicConfig {
    topic: Topic::Conflict,
    label: "Conflict",
    tagline: "Slow down the threat response and choose your lane.",
    prompts: Prompts {
        situation: "Who/what/when — what’s the core situation?",
        facts: "What was said/done (no mind-reading)?",
        meaning: "What do you actually need underneath the tension?",
        step: "Pause, clarify, boundary, or repair — pick one.",
        lock: "Write the one sentence you want to say calmly.",
    },
    quick_emotions: &["Frustrated", "Hurt", "Angry", "Overwhelmed", "Nervous", "Misunderstood"],
    quick_needs: &["Respect", "Clarity", "Boundaries", "Repair", "Space", "Fairness"],
    emotion_pulls: EmotionPulls {
        suggested: &["Angry", "Overwhelmed", "Defensive", "Frustrated", "Hurt", "Anxious"],
        more: &["Resentful", "Disrespected", "Irritated", "Confused", "Sad", "Shame"],
    },
    anchors: &[
        TopicAnchor { id: "conflict-1", symbol: StateSymbol::Steady, label: "I can talk without burning it down.", note: "I’m heated, but I still have steering." },
        TopicAnchor { id: "conflict-2", symbol: StateSymbol::Activated, label: "Say one more thing.", note: "Everything feels urgent. I’m either exploding or leaving." },
        TopicAnchor { id: "conflict-3", symbol: StateSymbol::Activated, label: "I need space right now.", note: "My brain is fried. I can’t process mid-argument." },
        TopicAnchor { id: "conflict-4", symbol: StateSymbol::HoldingIn, label: "I’ll adjust. Again.", note: "I’m shrinking to keep it calm. I want to say no." },
        TopicAnchor { id: "conflict-5", symbol: StateSymbol::Shutdown, label: "I’m shutting down.", note: "I’m going numb. I can’t access words." },
        TopicAnchor { id: "conflict-6", symbol: StateSymbol::Connected, label: "I stayed present and clear.", note: "I held my boundary without escalating." },
    ],
    north_star: NorthStar {
        blurb: "Conflict is information. Your job is to keep it from becoming a fire.",
        points: &[
            NorthStarPoint { label: "Lane", text: "What’s mine to own vs theirs to own?" },
            NorthStarPoint { label: "Clarity", text: "Ask, don’t assume." },
            NorthStarPoint { label: "Boundary", text: "Protect the relationship by protecting your limits." },
            NorthStarPoint { label: "Repair", text: "Repair is a skill, not a personality trait." },
        ],
    },
};

static OVERTHINKING_LOOP: TopicConfig = TopicConfig {
    topic: Topic::OverthinkingLoop,
    label: "Overthinking Loop",
    tagline: "Turn mental spinning into a simple decision tree.",
    prompts: Prompts {
        situation: "What are you looping on (one sentence)?",
        facts: "What question are you trying to answer or avoid?",
        meaning: "What fear is driving the loop (uncertainty, rejection, failure)?",
        step: "One action that creates new data (instead of more thinking).",
        lock: "Write: “I’m allowed to choose with incomplete information.”",
    },
    quick_emotions: &["Anxious", "Uncertain", "Restless", "Doubtful", "Irritable", "Stuck"],
    quick_needs: &["Clarity", "Grounding", "Support", "Time", "Structure", "Simplicity"],
    emotion_pulls: EmotionPulls {
        suggested: &["Anxious", "Overwhelmed", "Uncertain", "Confused", "Restless", "Stuck"],
        more: &["Afraid", "Frustrated", "Self-doubt", "Distracted", "Pressured", "Shame"],
    },
    anchors: &[
        TopicAnchor { id: "overthink-1", symbol: StateSymbol::Activated, label: "My brain won’t stop running scenarios.", note: "Trying to solve the future." },
        TopicAnchor { id: "overthink-2", symbol: StateSymbol::TippingPoint, label: "I don’t trust my decision.", note: "Everything feels like a trapdoor." },
        TopicAnchor { id: "overthink-3", symbol: StateSymbol::Activated, label: "I need certainty before I move.", note: "Perfection is blocking action." },
        TopicAnchor { id: "overthink-4", symbol: StateSymbol::Shutdown, label: "I’m stuck.", note: "Too much input. No output." },
        TopicAnchor { id: "overthink-5", symbol: StateSymbol::Steady, label: "I can pick one tiny next step.", note: "Not best—just real." },
        TopicAnchor { id: "overthink-6", symbol: StateSymbol::Connected, label: "I can choose and move on.", note: "Trust myself enough to act." },
    ],
    north_star: NorthStar {
        blurb: "Overthinking is often protection disguised as productivity.",
        points: &[
            NorthStarPoint { label: "Question", text: "Name the exact question." },
            NorthStarPoint { label: "Data", text: "What evidence do I actually have?" },
            NorthStarPoint { label: "Action", text: "One small experiment breaks the loop." },
            NorthStarPoint { label: "Rest", text: "Your brain can’t solve safety by sprinting." },
        ],
    },
};

static PEOPLE_PLEASING: TopicConfig = TopicConfig {
    topic: Topic::PeoplePleasing,
    label: "People-Pleasing",
    tagline: "Track the moment you abandon yourself — then renegotiate.",
    prompts: Prompts {
        situation: "Where did you feel pressure to please?",
        facts: "What was asked/implied, and what did you say/do?",
        meaning: "What were you trying to avoid (conflict, rejection, disapproval)?",
        step: "Smallest boundary or honest statement you can make.",
        lock: "Write a respectful “no” you could actually use.",
    },
    quick_emotions: &["Nervous", "Guilty", "Pressured", "Resentful", "Anxious", "Tired"],
    quick_needs: &["Boundaries", "Autonomy", "Respect", "Safety", "Space", "Reassurance"],
    emotion_pulls: EmotionPulls {
        suggested: &["Anxious", "Guilty", "Resentful", "Afraid", "Overwhelmed", "Small"],
        more: &["Invisible", "Tense", "Conflicted", "Unsafe", "Irritated", "Shame"],
    },
    anchors: &[
        TopicAnchor { id: "people-1", symbol: StateSymbol::HoldingIn, label: "I’ll adjust. Again.", note: "Shrinking to keep things calm." },
        TopicAnchor { id: "people-2", symbol: StateSymbol::HoldingIn, label: "I don’t want to fight. I’ll stay quiet.", note: "Silence feels safer than honesty." },
        TopicAnchor { id: "people-3", symbol: StateSymbol::TippingPoint, label: "I’m overthinking my tone.", note: "Trying to be acceptable instead of real." },
        TopicAnchor { id: "people-4", symbol: StateSymbol::Activated, label: "I feel trapped in being nice.", note: "Resentful, but smiling." },
        TopicAnchor { id: "people-5", symbol: StateSymbol::Steady, label: "I can pause before I say yes.", note: "Buy time and check myself." },
        TopicAnchor { id: "people-6", symbol: StateSymbol::Connected, label: "I can say no without explaining.", note: "My needs count too." },
    ],
    north_star: NorthStar {
        blurb: "People-pleasing buys short-term peace and sells long-term resentment.",
        points: &[
            NorthStarPoint { label: "Body", text: "Notice the yes that feels like a stomach drop." },
            NorthStarPoint { label: "Truth", text: "Your needs are not an inconvenience." },
            NorthStarPoint { label: "Boundary", text: "A clean no is kinder than a resentful yes." },
            NorthStarPoint { label: "Repair", text: "You can renegotiate after the fact." },
        ],
    },
};

static FREEZE_STUCK: TopicConfig = TopicConfig {
    topic: Topic::FreezeStuck,
    label: "Freeze / Stuck",
    tagline: "Reduce overwhelm and pick one gentle move.",
    prompts: Prompts {
        situation: "What feels frozen or impossible right now?",
        facts: "What are you avoiding or unable to start (no shame)?",
        meaning: "What might freeze be protecting you from?",
        step: "Smallest doable action (2 minutes counts).",
        lock: "Define success as the smallest version today.",
    },
    quick_emotions: &["Numb", "Overwhelmed", "Hopeless", "Anxious", "Tired", "Confused"],
    quick_needs: &["Rest", "Safety", "Support", "Simplicity", "Time", "Reassurance"],
    emotion_pulls: EmotionPulls {
        suggested: &["Numb", "Tired", "Overwhelmed", "Hopeless", "Lonely", "Shut down"],
        more: &["Foggy", "Heavy", "Afraid", "Sad", "Disconnected", "Shame"],
    },
    anchors: &[
        TopicAnchor { id: "freeze-1", symbol: StateSymbol::Shutdown, label: "I can’t move.", note: "My body is offline." },
        TopicAnchor { id: "freeze-2", symbol: StateSymbol::TippingPoint, label: "I’m here, but not here.", note: "Foggy, detached, slow." },
        TopicAnchor { id: "freeze-3", symbol: StateSymbol::Activated, label: "Everything feels too much.", note: "Overloaded—my system says nope." },
        TopicAnchor { id: "freeze-4", symbol: StateSymbol::HoldingIn, label: "I’m blaming myself for being stuck.", note: "Self-attack on top of shutdown." },
        TopicAnchor { id: "freeze-5", symbol: StateSymbol::Steady, label: "I can do one gentle action.", note: "Small movement counts." },
        TopicAnchor { id: "freeze-6", symbol: StateSymbol::Connected, label: "I’m back in my body.", note: "Grounded and present." },
    ],
    north_star: NorthStar {
        blurb: "Freeze is not laziness. It’s a nervous system brake slam.",
        points: &[
            NorthStarPoint { label: "Reduce", text: "Shrink the task until it’s non-threatening." },
            NorthStarPoint { label: "Body", text: "Warmth, water, breath, movement." },
            NorthStarPoint { label: "Support", text: "Ask for one specific kind of help." },
            NorthStarPoint { label: "Win", text: "2 minutes counts. It all counts." },
        ],
    },
};

static ANGER_BOUNDARY: TopicConfig = TopicConfig {
    topic: Topic::AngerBoundary,
    label: "Anger / Boundary",
    tagline: "Anger is energy + information. Aim it cleanly.",
    prompts: Prompts {
        situation: "What boundary feels crossed (where/when)?",
        facts: "What happened (facts only)?",
        meaning: "What value or boundary is anger protecting?",
        step: "Write the boundary you will enforce — calmly.",
        lock: "One sentence: “When X happens, I will Y.”",
    },
    quick_emotions: &["Angry", "Irritated", "Hurt", "Protective", "Frustrated", "Fed up"],
    quick_needs: &["Respect", "Boundaries", "Safety", "Fairness", "Space", "Clarity"],
    emotion_pulls: EmotionPulls {
        suggested: &["Angry", "Irritated", "Resentful", "Disrespected", "Pressured", "Defensive"],
        more: &["Frustrated", "Overwhelmed", "Hurt", "Protective", "Tense", "Done"],
    },
    anchors: &[
        TopicAnchor { id: "anger-1", symbol: StateSymbol::Activated, label: "I’m about to snap.", note: "My patience is gone." },
        TopicAnchor { id: "anger-2", symbol: StateSymbol::Activated, label: "I feel disrespected.", note: "My body reads threat." },
        TopicAnchor { id: "anger-3", symbol: StateSymbol::TippingPoint, label: "I’m irritated and I don’t know why.", note: "Something’s off, leaking out." },
        TopicAnchor { id: "anger-4", symbol: StateSymbol::Steady, label: "I can be direct without being cruel.", note: "Clean anger. Clean words." },
        TopicAnchor { id: "anger-5", symbol: StateSymbol::Steady, label: "I can pause before I respond.", note: "Delay is power." },
        TopicAnchor { id: "anger-6", symbol: StateSymbol::Connected, label: "I held the line.", note: "Boundary intact. No guilt spiral." },
    ],
    north_star: NorthStar {
        blurb: "Anger becomes destructive when it’s the only tool. Make it one tool.",
        points: &[
            NorthStarPoint { label: "Signal", text: "Anger is often “something is not okay.”" },
            NorthStarPoint { label: "Boundary", text: "Say what you will do, not what they must be." },
            NorthStarPoint { label: "Calm", text: "Power lands better when delivered slowly." },
            NorthStarPoint { label: "Follow-through", text: "A boundary without action is a wish." },
        ],
    },
};
