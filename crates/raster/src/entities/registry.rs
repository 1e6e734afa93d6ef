//! Central owning registry for the entity graph.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Entity, Session, Site, Unit};
use crate::error::{RasterError, Result};

/// Owning store for sites, units, and sessions, keyed by identifier.
///
/// Registering a child entity resolves (or creates) its parent site and
/// records the child's id in the site's collection, exactly once per entity.
/// Children hold the parent's id, not the parent itself, so the back
/// reference is resolved through the registry and no ownership cycle exists.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Registry {
    sites: IndexMap<String, Site>,
    units: IndexMap<String, Unit>,
    sessions: IndexMap<String, Session>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and register a unit, resolving or creating its site.
    ///
    /// Registering the same id twice is a no-op returning the existing unit.
    pub fn register_unit(&mut self, id: &str) -> Result<&Unit> {
        if !self.units.contains_key(id) {
            let unit = Unit::parse(id)?;
            let site = self.resolve_site(unit.site_id())?;
            if !site.unit_ids.iter().any(|u| u == id) {
                site.unit_ids.push(id.to_string());
            }
            self.units.insert(id.to_string(), unit);
        }
        self.units
            .get(id)
            .ok_or_else(|| RasterError::Lookup(format!("unit '{id}' not registered")))
    }

    /// Parse and register a session, resolving or creating its site.
    pub fn register_session(&mut self, id: &str) -> Result<&Session> {
        if !self.sessions.contains_key(id) {
            let session = Session::parse(id)?;
            let site = self.resolve_site(session.site_id())?;
            if !site.session_ids.iter().any(|s| s == id) {
                site.session_ids.push(id.to_string());
            }
            self.sessions.insert(id.to_string(), session);
        }
        self.sessions
            .get(id)
            .ok_or_else(|| RasterError::Lookup(format!("session '{id}' not registered")))
    }

    fn resolve_site(&mut self, site_id: &str) -> Result<&mut Site> {
        if !self.sites.contains_key(site_id) {
            let site = Site::parse(site_id)?;
            self.sites.insert(site_id.to_string(), site);
        }
        self.sites
            .get_mut(site_id)
            .ok_or_else(|| RasterError::Lookup(format!("site '{site_id}' not registered")))
    }

    pub fn site(&self, id: &str) -> Option<&Site> {
        self.sites.get(id)
    }

    pub fn unit(&self, id: &str) -> Option<&Unit> {
        self.units.get(id)
    }

    pub fn session(&self, id: &str) -> Option<&Session> {
        self.sessions.get(id)
    }

    /// Resolve a unit's owning site through its back reference.
    pub fn site_of(&self, unit: &Unit) -> Result<&Site> {
        self.sites.get(unit.site_id()).ok_or_else(|| {
            RasterError::Lookup(format!(
                "site '{}' of unit '{}' not registered",
                unit.site_id(),
                unit.id()
            ))
        })
    }

    pub fn n_sites(&self) -> usize {
        self.sites.len()
    }

    pub fn n_units(&self) -> usize {
        self.units.len()
    }

    pub fn n_sessions(&self) -> usize {
        self.sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_unit_creates_site() {
        let mut registry = Registry::new();
        registry.register_unit("avo052a-d1").unwrap();

        let site = registry.site("avo052a").unwrap();
        assert_eq!(site.id(), "avo052a");
        assert!(site.unit_ids().contains(&"avo052a-d1".to_string()));
    }

    #[test]
    fn test_bidirectional_invariant() {
        let mut registry = Registry::new();
        registry.register_unit("avo052a-d1").unwrap();
        registry.register_unit("avo052a-b2").unwrap();
        registry.register_unit("tan101c-a3").unwrap();

        // Every unit in a site's collection reports that site as its own.
        for site_id in ["avo052a", "tan101c"] {
            let site = registry.site(site_id).unwrap().clone();
            for unit_id in site.unit_ids() {
                let unit = registry.unit(unit_id).unwrap();
                assert_eq!(unit.site_id(), site_id);
                assert_eq!(registry.site_of(unit).unwrap().id(), site_id);
            }
        }
        assert_eq!(registry.n_sites(), 2);
        assert_eq!(registry.n_units(), 3);
    }

    #[test]
    fn test_registration_is_idempotent() {
        let mut registry = Registry::new();
        registry.register_unit("avo052a-d1").unwrap();
        registry.register_unit("avo052a-d1").unwrap();

        assert_eq!(registry.n_units(), 1);
        assert_eq!(registry.site("avo052a").unwrap().unit_ids().len(), 1);
    }

    #[test]
    fn test_register_session_shares_site() {
        let mut registry = Registry::new();
        registry.register_unit("avo052a-d1").unwrap();
        registry.register_session("avo052a04_p_PTD").unwrap();

        let site = registry.site("avo052a").unwrap();
        assert_eq!(site.unit_ids().len(), 1);
        assert_eq!(site.session_ids().len(), 1);
        assert_eq!(registry.n_sites(), 1);
    }

    #[test]
    fn test_malformed_id_leaves_registry_untouched() {
        let mut registry = Registry::new();
        assert!(registry.register_unit("bogus").is_err());
        assert_eq!(registry.n_sites(), 0);
        assert_eq!(registry.n_units(), 0);
    }
}
