//! Recording sessions: one run of a task at a recording site.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::site::{Site, SITE_FRAGMENT};
use super::Entity;
use crate::attributes::{Attention, Attribute, Categorical, Recording, Task};
use crate::error::{RasterError, Result};

/// Session id: site id, 2-digit recording number, context letter, task code.
/// Example: `avo052a04_p_PTD`.
static SESSION_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        "^(?P<site>{SITE_FRAGMENT})(?P<rec>[0-9]{{2}})_(?P<ctx>[a-z])_(?P<task>[A-Z]{{3}})$"
    ))
    .unwrap()
});

/// Recording session, composed of a set of trials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    id: String,
    site_id: String,
    rec: Recording,
    attention: Attention,
    task: Task,
}

impl Session {
    /// Parse a session from its identifier. The embedded site id, recording
    /// number, context, and task are all validated.
    pub fn parse(id: &str) -> Result<Self> {
        let (site_id, rec, ctx, task) = Self::split_raw(id)?;
        Site::parse(&site_id).map_err(|_| Self::format_error(id))?;
        let rec = Recording::new(rec).map_err(|_| Self::format_error(id))?;
        let attention = Attention::parse(&ctx).map_err(|_| Self::format_error(id))?;
        let task = Task::parse(&task).map_err(|_| Self::format_error(id))?;
        Ok(Self {
            id: id.to_string(),
            site_id,
            rec,
            attention,
            task,
        })
    }

    /// Split a session id into (site id, recording number, context, task),
    /// without side effects.
    pub fn split_id(&self) -> (String, i64, String, String) {
        (
            self.site_id.clone(),
            self.rec.value(),
            self.attention.code().to_string(),
            self.task.code().to_string(),
        )
    }

    fn split_raw(id: &str) -> Result<(String, i64, String, String)> {
        let captures = SESSION_ID.captures(id).ok_or_else(|| Self::format_error(id))?;
        let rec = captures["rec"].parse::<i64>().map_err(|_| Self::format_error(id))?;
        Ok((
            captures["site"].to_string(),
            rec,
            captures["ctx"].to_string(),
            captures["task"].to_string(),
        ))
    }

    fn format_error(id: &str) -> RasterError {
        RasterError::Format {
            kind: "Session".to_string(),
            id: id.to_string(),
        }
    }

    /// Identifier of the site where the session was recorded.
    pub fn site_id(&self) -> &str {
        &self.site_id
    }

    /// Recording number at the site, ordering sessions chronologically.
    pub fn rec(&self) -> Recording {
        self.rec
    }

    /// Attentional state during the session.
    pub fn attention(&self) -> Attention {
        self.attention
    }

    /// Task performed during the session.
    pub fn task(&self) -> Task {
        self.task
    }
}

impl Entity for Session {
    fn id(&self) -> &str {
        &self.id
    }
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Session {}

impl std::hash::Hash for Session {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::Attribute;

    #[test]
    fn test_split_id() {
        let session = Session::parse("avo052a04_p_PTD").unwrap();
        assert_eq!(
            session.split_id(),
            (
                "avo052a".to_string(),
                4,
                "p".to_string(),
                "PTD".to_string()
            )
        );
    }

    #[test]
    fn test_components() {
        let session = Session::parse("avo052a04_p_PTD").unwrap();
        assert_eq!(session.site_id(), "avo052a");
        assert_eq!(session.rec().value(), 4);
        assert_eq!(session.attention(), Attention::Passive);
        assert_eq!(session.task(), Task::PureToneDiscrimination);
    }

    #[test]
    fn test_parse_rejects_malformed_ids() {
        // Recording number 0 is out of bounds.
        assert!(Session::parse("avo052a00_p_PTD").is_err());
        // Unknown task code.
        assert!(Session::parse("avo052a04_p_XYZ").is_err());
        // Context must be a single known letter.
        assert!(Session::parse("avo052a04_q_PTD").is_err());
        // Missing separator.
        assert!(Session::parse("avo052a04pPTD").is_err());
    }
}
