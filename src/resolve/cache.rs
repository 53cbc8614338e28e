//! Memoized alias resolution shared by every lookup against one table

use crate::io::error::ResolutionError;
use crate::math::distribution::Distribution;
use crate::resolve::resolver::resolve;
use crate::table::property::{PropertyKind, PropertyTable};
use crate::tissue::label::TissueId;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

/// Memoization cache for alias resolution against one table
///
/// Tables never change after construction, so a resolved entry stays valid
/// for the lifetime of the table. Lookups take a read lock; only misses
/// take the write lock. Failed resolutions are not cached.
#[derive(Debug, Default)]
pub struct ResolutionCache {
    resolved: RwLock<HashMap<(PropertyKind, TissueId), Distribution>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

/// Snapshot of cache effectiveness
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

impl ResolutionCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached resolution or resolve against `table` and store it
    ///
    /// Use one cache per table; keys do not record which table produced them.
    ///
    /// # Errors
    ///
    /// Propagates resolution failures from [`resolve`]
    pub fn get_or_resolve(
        &self,
        table: &PropertyTable,
        tissue: TissueId,
        kind: PropertyKind,
    ) -> Result<Distribution, ResolutionError> {
        let key = (kind, tissue);

        let cached = self
            .resolved
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .copied();
        if let Some(distribution) = cached {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(distribution);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let distribution = *resolve(table, tissue, kind)?;
        log::debug!("resolved {kind} for {tissue} to {distribution}");

        self.resolved
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, distribution);
        Ok(distribution)
    }

    /// Resolve every entry of `table` up front
    ///
    /// After warming, concurrent lookups only ever take the read lock.
    ///
    /// # Errors
    ///
    /// Returns the first resolution failure
    pub fn warm(&self, table: &PropertyTable) -> Result<(), ResolutionError> {
        for &kind in table.domain().kinds() {
            for tissue in table.tissues(kind) {
                self.get_or_resolve(table, tissue, kind)?;
            }
        }
        Ok(())
    }

    /// Number of resolved entries held
    pub fn len(&self) -> usize {
        self.resolved
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing has been resolved yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current hit and miss counts
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}
