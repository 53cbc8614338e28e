//! Alias chain walking with revisit and depth guards

use crate::io::configuration::MAX_ALIAS_DEPTH;
use crate::io::error::ResolutionError;
use crate::math::distribution::Distribution;
use crate::table::property::{PropertyKind, PropertyTable};
use crate::tissue::label::TissueId;
use bitvec::prelude::*;

/// Follow alias entries until a concrete distribution is reached
///
/// Every hop stays within the same property. The walk fails on the first
/// revisited tissue or once more than [`MAX_ALIAS_DEPTH`] hops were taken.
///
/// # Errors
///
/// Returns:
/// - [`ResolutionError::DomainMismatch`] if `kind` is not held by `table`
/// - [`ResolutionError::PropertyUndefined`] for the first tissue in the chain
///   without an entry
/// - [`ResolutionError::AliasCycle`] for cyclic or overly long chains
pub fn resolve(
    table: &PropertyTable,
    tissue: TissueId,
    kind: PropertyKind,
) -> Result<&Distribution, ResolutionError> {
    resolve_with_chain(table, tissue, kind).map(|(distribution, _)| distribution)
}

/// Resolve and also return the tissues visited, starting with `tissue`
///
/// The last tissue of the chain owns the returned distribution.
///
/// # Errors
///
/// Same as [`resolve`]
pub fn resolve_with_chain(
    table: &PropertyTable,
    tissue: TissueId,
    kind: PropertyKind,
) -> Result<(&Distribution, Vec<TissueId>), ResolutionError> {
    resolve_with_depth(table, tissue, kind, MAX_ALIAS_DEPTH)
}

/// Resolve following at most `max_depth` alias hops
///
/// With the built-in tissue set the revisit check ends every cyclic walk
/// within 17 hops, so [`MAX_ALIAS_DEPTH`] only bounds acyclic chains. A
/// smaller `max_depth` enforces a tighter bound on table authors.
///
/// # Errors
///
/// Same as [`resolve`]; a chain needing more than `max_depth` hops is an
/// [`ResolutionError::AliasCycle`]
pub fn resolve_with_depth(
    table: &PropertyTable,
    tissue: TissueId,
    kind: PropertyKind,
    max_depth: usize,
) -> Result<(&Distribution, Vec<TissueId>), ResolutionError> {
    table.check_domain(kind)?;

    // One bit per possible label
    let mut visited = bitarr![u64, Lsb0; 0; 256];
    visited.set(usize::from(tissue.label()), true);

    let mut chain = vec![tissue];
    let mut current = tissue;

    loop {
        let entry = table
            .entry(kind, current)
            .ok_or(ResolutionError::PropertyUndefined {
                tissue: current,
                kind,
            })?;

        let Distribution::Alias(target) = *entry else {
            return Ok((entry, chain));
        };

        chain.push(target);
        let label = usize::from(target.label());
        let revisited = visited.get(label).as_deref() == Some(&true);
        if revisited || chain.len() > max_depth + 1 {
            return Err(ResolutionError::AliasCycle {
                tissue,
                kind,
                chain,
            });
        }
        visited.set(label, true);

        log::debug!("{kind}: {current} aliases {target}");
        current = target;
    }
}
