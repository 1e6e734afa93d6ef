//! Experimental factors describing the behavioral paradigm.

use serde::{Deserialize, Serialize};

use super::Categorical;

/// Task performed by the animal, defined by the sound categories to discriminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Task {
    /// Pure tone vs. white noise.
    PureToneDiscrimination,
    /// Click trains at fast and slow rates.
    ClickRateDiscrimination,
    /// Two complex chords; same structure as PTD.
    ComplexChordDiscrimination,
}

impl Categorical for Task {
    const KIND: &'static str = "Task";

    fn options() -> &'static [Self] {
        &[
            Task::PureToneDiscrimination,
            Task::ClickRateDiscrimination,
            Task::ComplexChordDiscrimination,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            Task::PureToneDiscrimination => "PTD",
            Task::ClickRateDiscrimination => "CLK",
            Task::ComplexChordDiscrimination => "CCH",
        }
    }

    fn full_label(&self) -> &'static str {
        match self {
            Task::PureToneDiscrimination => "Pure Tone Discrimination",
            Task::ClickRateDiscrimination => "Click Rate Discrimination",
            Task::ComplexChordDiscrimination => "Complex Chord Discrimination",
        }
    }
}

/// Attentional state, defined by the animal's engagement in a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attention {
    /// Aversive Go/No-Go engagement with a licking spout.
    Active,
    /// Listening only, no possibility to lick.
    Passive,
    /// Passive session preceding an active one.
    PrePassive,
    /// Passive session following an active one.
    PostPassive,
}

impl Attention {
    /// States observed in trained animals (all of them).
    pub fn trained() -> &'static [Self] {
        Self::options()
    }

    /// States observed in naive animals (passive only).
    pub fn naive() -> &'static [Self] {
        &[Attention::Passive]
    }
}

impl Categorical for Attention {
    const KIND: &'static str = "Attention";

    fn options() -> &'static [Self] {
        &[
            Attention::Active,
            Attention::Passive,
            Attention::PrePassive,
            Attention::PostPassive,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            Attention::Active => "a",
            Attention::Passive => "p",
            Attention::PrePassive => "p-pre",
            Attention::PostPassive => "p-post",
        }
    }

    fn full_label(&self) -> &'static str {
        match self {
            Attention::Active => "Active",
            Attention::Passive => "Passive",
            Attention::PrePassive => "Pre-Passive",
            Attention::PostPassive => "Post-Passive",
        }
    }
}

/// Behavioral category of a stimulus in the Go/No-Go task.
///
/// The same labels are used in both attentional states for consistency, even
/// though they are only meaningful in the active state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Go (safe) stimulus.
    Reference,
    /// No-Go (dangerous) stimulus.
    Target,
    /// Neutral stimulus (CLK only).
    Neutral,
}

impl Category {
    /// Categories presented in the CLK task (all).
    pub fn clk() -> &'static [Self] {
        Self::options()
    }

    /// Categories presented in the PTD task (no neutral stimulus).
    pub fn ptd() -> &'static [Self] {
        &[Category::Reference, Category::Target]
    }
}

impl Categorical for Category {
    const KIND: &'static str = "Category";

    fn options() -> &'static [Self] {
        &[Category::Reference, Category::Target, Category::Neutral]
    }

    fn code(&self) -> &'static str {
        match self {
            Category::Reference => "R",
            Category::Target => "T",
            Category::Neutral => "N",
        }
    }

    fn full_label(&self) -> &'static str {
        match self {
            Category::Reference => "Reference",
            Category::Target => "Target",
            Category::Neutral => "Neutral",
        }
    }
}

/// Physical nature of the auditory stimulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stimulus {
    /// Time-orthogonal ripple counter, noise-like sound.
    Torc,
    /// Click train.
    Click,
    /// Pure tone.
    Tone,
    /// White noise.
    Noise,
}

impl Categorical for Stimulus {
    const KIND: &'static str = "Stimulus";

    fn options() -> &'static [Self] {
        &[Stimulus::Torc, Stimulus::Click, Stimulus::Tone, Stimulus::Noise]
    }

    fn code(&self) -> &'static str {
        match self {
            Stimulus::Torc => "TORC",
            Stimulus::Click => "Click",
            Stimulus::Tone => "Tone",
            Stimulus::Noise => "Noise",
        }
    }

    fn full_label(&self) -> &'static str {
        match self {
            Stimulus::Torc => "Time-Orthogonal Ripple Counter",
            Stimulus::Click => "Click Train",
            Stimulus::Tone => "Pure Tone",
            Stimulus::Noise => "White Noise",
        }
    }
}

/// Behavioral choice of the animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Behavior {
    /// Lick.
    Go,
    /// Refrain from licking.
    NoGo,
}

impl Categorical for Behavior {
    const KIND: &'static str = "Behavior";

    fn options() -> &'static [Self] {
        &[Behavior::Go, Behavior::NoGo]
    }

    fn code(&self) -> &'static str {
        match self {
            Behavior::Go => "Go",
            Behavior::NoGo => "NoGo",
        }
    }

    fn full_label(&self) -> &'static str {
        match self {
            Behavior::Go => "Lick",
            Behavior::NoGo => "No Lick",
        }
    }
}

/// Outcome of the behavioral choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseOutcome {
    Hit,
    Miss,
    CorrectRejection,
    FalseAlarm,
    /// Neutral stimuli or passive state.
    NotApplicable,
}

impl Categorical for ResponseOutcome {
    const KIND: &'static str = "ResponseOutcome";

    fn options() -> &'static [Self] {
        &[
            ResponseOutcome::Hit,
            ResponseOutcome::Miss,
            ResponseOutcome::CorrectRejection,
            ResponseOutcome::FalseAlarm,
            ResponseOutcome::NotApplicable,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            ResponseOutcome::Hit => "Hit",
            ResponseOutcome::Miss => "Miss",
            ResponseOutcome::CorrectRejection => "CR",
            ResponseOutcome::FalseAlarm => "FA",
            ResponseOutcome::NotApplicable => "N/A",
        }
    }

    fn full_label(&self) -> &'static str {
        match self {
            ResponseOutcome::Hit => "Correct Response",
            ResponseOutcome::Miss => "Incorrect Response",
            ResponseOutcome::CorrectRejection => "Correct Rejection",
            ResponseOutcome::FalseAlarm => "False Alarm",
            ResponseOutcome::NotApplicable => "Not Applicable",
        }
    }
}
