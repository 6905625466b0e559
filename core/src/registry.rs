//! Table of built-in rules, keyed by identifier.
//!
//! Hosts use the registry to list rules (name, tooltip, folders, ...) without
//! constructing them, and to construct a rule once the user has picked one.

use itertools::Itertools;
use log::{debug, warn};

use crate::errors::{RuleError, RuleResult};
use crate::lattice::Lattice;
use crate::rule::{AnyRule, EdgeFilter, RuleFolder, RuleMetadata, SearsTower};

/// Metadata-only description of a rule, which can construct the rule itself
/// on demand.
#[derive(Debug, Copy, Clone)]
pub struct RuleDescriptor {
    /// Unique identifier, lowercase with hyphens.
    pub id: &'static str,
    /// Static metadata, identical to what the constructed rule reports.
    pub metadata: &'static RuleMetadata,
    constructor: fn() -> AnyRule,
}
impl RuleDescriptor {
    /// Constructs a new instance of the rule.
    pub fn construct(&self) -> AnyRule {
        (self.constructor)()
    }
}

lazy_static! {
    static ref REGISTRY: Vec<RuleDescriptor> = {
        let registry = vec![
            RuleDescriptor {
                id: "edge-filter",
                metadata: &EdgeFilter::METADATA,
                constructor: || AnyRule::from(EdgeFilter),
            },
            RuleDescriptor {
                id: "sears-tower",
                metadata: &SearsTower::METADATA,
                constructor: || AnyRule::from(SearsTower),
            },
        ];
        debug!(
            "Registered {} rules: {}",
            registry.len(),
            registry.iter().map(|d| d.id).join(", "),
        );
        registry
    };
}

/// Returns every registered rule, in the order they should be listed.
pub fn descriptors() -> &'static [RuleDescriptor] {
    &REGISTRY
}

/// Returns the descriptor with the given identifier. Matching ignores ASCII
/// case.
pub fn lookup(id: &str) -> RuleResult<&'static RuleDescriptor> {
    descriptors()
        .iter()
        .find(|d| d.id.eq_ignore_ascii_case(id))
        .ok_or_else(|| {
            warn!("Unknown rule {:?}", id);
            RuleError::UnknownRule { id: id.to_owned() }
        })
}

/// Constructs the rule with the given identifier.
pub fn construct(id: &str) -> RuleResult<AnyRule> {
    lookup(id).map(RuleDescriptor::construct)
}

/// Returns the rules listed under a folder.
pub fn in_folder(folder: RuleFolder) -> impl Iterator<Item = &'static RuleDescriptor> {
    descriptors()
        .iter()
        .filter(move |d| d.metadata.folders.contains(&folder))
}

/// Returns the rules that may run on a lattice.
pub fn compatible_with(lattice: Lattice) -> impl Iterator<Item = &'static RuleDescriptor> {
    descriptors()
        .iter()
        .filter(move |d| d.metadata.is_compatible_with(lattice))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::rule::Rule;

    #[test]
    fn test_registry_ids_are_unique() {
        let ids: HashSet<_> = descriptors().iter().map(|d| d.id).collect();
        assert_eq!(descriptors().len(), ids.len());
    }

    #[test]
    fn test_every_descriptor_constructs_matching_rule() {
        for d in descriptors() {
            let rule = d.construct();
            assert_eq!(d.metadata, rule.metadata());
            assert_eq!(d.metadata.display_name, rule.to_string());
            assert!(d.metadata.display_name.chars().count() <= 15);
            assert!(!d.metadata.folders.is_empty());
            assert_eq!(d.id, lookup(d.id).unwrap().id);
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(AnyRule::from(SearsTower), construct("sears-tower").unwrap());
        assert_eq!(AnyRule::from(EdgeFilter), construct("Edge-Filter").unwrap());
        assert_eq!(
            Err(RuleError::UnknownRule {
                id: "rule-30".to_owned()
            }),
            construct("rule-30"),
        );
    }

    #[test]
    fn test_folders_and_lattices() {
        let fractal = in_folder(RuleFolder::Fractal).map(|d| d.id).collect_vec();
        assert_eq!(vec!["sears-tower"], fractal);
        assert_eq!(0, in_folder(RuleFolder::Classics).count());

        let square = compatible_with(Lattice::SquareMoore).map(|d| d.id).collect_vec();
        assert_eq!(vec!["edge-filter"], square);
        assert_eq!(2, compatible_with(Lattice::OneDimNearest).count());
    }
}
