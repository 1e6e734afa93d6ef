//! Single units (neurons) isolated at a recording site.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::site::{Site, SITE_FRAGMENT};
use super::Entity;
use crate::attributes::{Animal, Categorical, Training};
use crate::error::{RasterError, Result};

/// Unit id: site id, a dash, electrode channel letter, unit digit.
/// Example: `avo052a-d1`.
static UNIT_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        "^(?P<site>{SITE_FRAGMENT})-(?P<el>[a-z])(?P<num>[0-9])$"
    ))
    .unwrap()
});

/// Single unit (neuron), identified within one recording site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    id: String,
    site_id: String,
    electrode: char,
    number: u8,
}

impl Unit {
    /// Parse a unit from its identifier. The embedded site id is validated
    /// in full.
    pub fn parse(id: &str) -> Result<Self> {
        let captures = UNIT_ID.captures(id).ok_or_else(|| Self::format_error(id))?;
        let site_id = captures["site"].to_string();
        Site::parse(&site_id).map_err(|_| Self::format_error(id))?;
        let electrode = captures["el"].chars().next().ok_or_else(|| Self::format_error(id))?;
        let number = captures["num"].parse::<u8>().map_err(|_| Self::format_error(id))?;
        Ok(Self {
            id: id.to_string(),
            site_id,
            electrode,
            number,
        })
    }

    fn format_error(id: &str) -> RasterError {
        RasterError::Format {
            kind: "Unit".to_string(),
            id: id.to_string(),
        }
    }

    /// Split the unit id into (site id, animal prefix, depth), without side
    /// effects.
    ///
    /// The animal prefix is the first three letters of the site id and the
    /// depth its last letter.
    pub fn split_id(&self) -> (String, String, String) {
        let animal = self.site_id[..3].to_string();
        let depth = self
            .site_id
            .chars()
            .last()
            .map(|c| c.to_string())
            .unwrap_or_default();
        (self.site_id.clone(), animal, depth)
    }

    /// Identifier of the site where the unit was recorded.
    pub fn site_id(&self) -> &str {
        &self.site_id
    }

    /// Electrode channel on which the unit was isolated.
    pub fn electrode(&self) -> char {
        self.electrode
    }

    /// Unit index relative to its electrode.
    pub fn number(&self) -> u8 {
        self.number
    }

    /// Animal in which the unit was recorded.
    pub fn animal(&self) -> Result<Animal> {
        let (_, animal, _) = self.split_id();
        Animal::parse(&animal)
    }

    /// Training status of the unit's animal.
    pub fn training(&self) -> Result<Training> {
        Ok(Training::of(self.animal()?))
    }
}

impl Entity for Unit {
    fn id(&self) -> &str {
        &self.id
    }
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Unit {}

impl std::hash::Hash for Unit {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
