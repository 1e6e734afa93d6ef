//! Attributes describing the biological system under investigation.

use serde::{Deserialize, Serialize};

use super::{Attribute, Categorical};
use crate::error::Result;

/// Animals in which neurons were recorded, by their three-letter alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Animal {
    Ath,
    Avo,
    Daf,
    Dai,
    Ele,
    Lem,
    Mor,
    Oni,
    Plu,
    Saf,
    Sir,
    Tan,
    Tel,
    Tul,
    Was,
}

impl Animal {
    /// Naive animals, recorded only during passive listening.
    pub fn naive() -> &'static [Self] {
        &[Animal::Mor, Animal::Tan]
    }

    /// Trained animals, recorded in both passive and active sessions.
    pub fn trained() -> Vec<Self> {
        Self::options()
            .iter()
            .copied()
            .filter(|animal| !Self::naive().contains(animal))
            .collect()
    }

    /// Check if this animal is naive.
    pub fn is_naive(&self) -> bool {
        Self::naive().contains(self)
    }
}

impl Categorical for Animal {
    const KIND: &'static str = "Animal";

    fn options() -> &'static [Self] {
        &[
            Animal::Ath,
            Animal::Avo,
            Animal::Daf,
            Animal::Dai,
            Animal::Ele,
            Animal::Lem,
            Animal::Mor,
            Animal::Oni,
            Animal::Plu,
            Animal::Saf,
            Animal::Sir,
            Animal::Tan,
            Animal::Tel,
            Animal::Tul,
            Animal::Was,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            Animal::Ath => "ath",
            Animal::Avo => "avo",
            Animal::Daf => "daf",
            Animal::Dai => "dai",
            Animal::Ele => "ele",
            Animal::Lem => "lem",
            Animal::Mor => "mor",
            Animal::Oni => "oni",
            Animal::Plu => "plu",
            Animal::Saf => "saf",
            Animal::Sir => "sir",
            Animal::Tan => "tan",
            Animal::Tel => "tel",
            Animal::Tul => "tul",
            Animal::Was => "was",
        }
    }

    fn full_label(&self) -> &'static str {
        match self {
            Animal::Ath => "Athena",
            Animal::Avo => "Avocado",
            Animal::Daf => "Daffodil",
            Animal::Dai => "Daisy",
            Animal::Ele => "Electra",
            Animal::Lem => "Lemon",
            Animal::Mor => "Morbier",
            Animal::Oni => "Onion",
            Animal::Plu => "Pluto",
            Animal::Saf => "Saffron",
            Animal::Sir => "Sirius",
            Animal::Tan => "Tango",
            Animal::Tel => "Telesto",
            Animal::Tul => "Tulip",
            Animal::Was => "Wasabi",
        }
    }
}

/// Brain areas in which neurons were recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Area {
    A1,
    Dpeg,
    Vpr,
    Pfc,
}

impl Area {
    /// Areas recorded in trained animals (all).
    pub fn trained() -> &'static [Self] {
        Self::options()
    }

    /// Areas recorded in naive animals (all except PFC).
    pub fn naive() -> &'static [Self] {
        &[Area::A1, Area::Dpeg, Area::Vpr]
    }
}

impl Categorical for Area {
    const KIND: &'static str = "Area";

    fn options() -> &'static [Self] {
        &[Area::A1, Area::Dpeg, Area::Vpr, Area::Pfc]
    }

    fn code(&self) -> &'static str {
        match self {
            Area::A1 => "A1",
            Area::Dpeg => "dPEG",
            Area::Vpr => "VPr",
            Area::Pfc => "PFC",
        }
    }

    fn full_label(&self) -> &'static str {
        match self {
            Area::A1 => "Primary Auditory Cortex",
            Area::Dpeg => "Dorsal Perigenual Cortex",
            Area::Vpr => "Ventral Prelimbic Cortex",
            Area::Pfc => "Prefrontal Cortex",
        }
    }
}

/// Depth of the recording electrode in the cortex, one letter per level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorticalDepth {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Categorical for CorticalDepth {
    const KIND: &'static str = "CorticalDepth";

    fn options() -> &'static [Self] {
        &[
            CorticalDepth::A,
            CorticalDepth::B,
            CorticalDepth::C,
            CorticalDepth::D,
            CorticalDepth::E,
            CorticalDepth::F,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            CorticalDepth::A => "a",
            CorticalDepth::B => "b",
            CorticalDepth::C => "c",
            CorticalDepth::D => "d",
            CorticalDepth::E => "e",
            CorticalDepth::F => "f",
        }
    }

    fn full_label(&self) -> &'static str {
        match self {
            CorticalDepth::A => "Depth a",
            CorticalDepth::B => "Depth b",
            CorticalDepth::C => "Depth c",
            CorticalDepth::D => "Depth d",
            CorticalDepth::E => "Depth e",
            CorticalDepth::F => "Depth f",
        }
    }
}

/// Training status of an animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Training(bool);

impl Training {
    /// Training status of a given animal.
    pub fn of(animal: Animal) -> Self {
        Training(!animal.is_naive())
    }

    /// Descriptive label.
    pub fn full_label(&self) -> &'static str {
        if self.0 { "Trained" } else { "Naive" }
    }
}

impl Attribute for Training {
    type Value = bool;

    fn from_value(value: bool) -> Result<Self> {
        Ok(Training(value))
    }

    fn is_valid(_value: &bool) -> bool {
        true
    }

    fn value(&self) -> bool {
        self.0
    }
}

impl From<Training> for bool {
    fn from(training: Training) -> bool {
        training.0
    }
}
