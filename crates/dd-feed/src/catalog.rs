//! `SiteCatalog`: lookup table of known destinations.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use dd_core::{DEPOT_NAME, Site};

use crate::{FeedError, FeedResult};

/// Destinations keyed by name.
///
/// Sites are handed out as `Arc<Site>` so every request for the same site
/// shares one allocation.  Iteration follows load order.
#[derive(Default, Debug)]
pub struct SiteCatalog {
    by_name: FxHashMap<String, Arc<Site>>,
    order:   Vec<Arc<Site>>,
}

impl SiteCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from `sites`, failing on the first duplicate name.
    pub fn from_sites<I: IntoIterator<Item = Site>>(sites: I) -> FeedResult<Self> {
        let mut catalog = Self::new();
        for site in sites {
            catalog.insert(site)?;
        }
        Ok(catalog)
    }

    /// Add `site`, rejecting a name already present or the reserved depot
    /// name.
    pub fn insert(&mut self, site: Site) -> FeedResult<Arc<Site>> {
        if site.name == DEPOT_NAME {
            return Err(FeedError::ReservedSiteName(site.name));
        }
        if self.by_name.contains_key(&site.name) {
            return Err(FeedError::DuplicateSite(site.name));
        }
        let site = Arc::new(site);
        self.by_name.insert(site.name.clone(), Arc::clone(&site));
        self.order.push(Arc::clone(&site));
        Ok(site)
    }

    pub fn get(&self, name: &str) -> Option<&Arc<Site>> {
        self.by_name.get(name)
    }

    /// Sites in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Site>> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
