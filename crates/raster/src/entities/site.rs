//! Recording sites: brain locations where sessions were performed.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::Entity;
use crate::attributes::{Animal, Categorical, CorticalDepth};
use crate::error::{RasterError, Result};

/// Site id: 3-letter animal alias (or the full name "lemon"), 3-digit tag,
/// 1-letter cortical depth. Example: `avo052a`.
static SITE_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<animal>lemon|[a-z]{3})(?P<tag>[0-9]{3})(?P<depth>[a-z])$").unwrap()
});

/// Pattern fragment for a site id embedded in longer identifiers.
pub(crate) const SITE_FRAGMENT: &str = "[a-z]{3,5}[0-9]{3}[a-z]";

/// Recording site, a brain location where several sessions were performed.
///
/// Each site gathers the units (neurons) isolated there and the sessions
/// recorded there; both collections are maintained by the [`Registry`] when
/// children are registered.
///
/// [`Registry`]: super::Registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    id: String,
    animal: Animal,
    tag: u16,
    depth: CorticalDepth,
    pub(crate) unit_ids: Vec<String>,
    pub(crate) session_ids: Vec<String>,
}

impl Site {
    /// Parse a site from its identifier, validating the animal alias and
    /// cortical depth against their domains.
    pub fn parse(id: &str) -> Result<Self> {
        let (animal, tag, depth) = Self::split_id(id)?;
        let animal = Animal::parse(&animal)
            .map_err(|_| Self::format_error(id))?;
        let depth = CorticalDepth::parse(&depth)
            .map_err(|_| Self::format_error(id))?;
        let tag = tag.parse::<u16>().map_err(|_| Self::format_error(id))?;
        Ok(Self {
            id: id.to_string(),
            animal,
            tag,
            depth,
            unit_ids: Vec::new(),
            session_ids: Vec::new(),
        })
    }

    /// Split a site id into its (animal, tag, depth) components, without
    /// side effects.
    ///
    /// The full name "lemon" is accepted in place of the alias "lem"; only
    /// the first three letters are kept.
    pub fn split_id(id: &str) -> Result<(String, String, String)> {
        let captures = SITE_ID.captures(id).ok_or_else(|| Self::format_error(id))?;
        let animal = &captures["animal"][..3];
        Ok((
            animal.to_string(),
            captures["tag"].to_string(),
            captures["depth"].to_string(),
        ))
    }

    fn format_error(id: &str) -> RasterError {
        RasterError::Format {
            kind: "Site".to_string(),
            id: id.to_string(),
        }
    }

    /// Animal in which the site was recorded.
    pub fn animal(&self) -> Animal {
        self.animal
    }

    /// Numerical tag identifying the site within the animal.
    pub fn tag(&self) -> u16 {
        self.tag
    }

    /// Depth of the site in the cortex.
    pub fn depth(&self) -> CorticalDepth {
        self.depth
    }

    /// Identifiers of the units recorded at this site.
    pub fn unit_ids(&self) -> &[String] {
        &self.unit_ids
    }

    /// Identifiers of the sessions performed at this site.
    pub fn session_ids(&self) -> &[String] {
        &self.session_ids
    }
}

impl Entity for Site {
    fn id(&self) -> &str {
        &self.id
    }
}

impl PartialEq for Site {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Site {}

impl std::hash::Hash for Site {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
