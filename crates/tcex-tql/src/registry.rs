//! Process-wide lookup from resource type to its field table.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::debug;

use tcex_core::{AppError, AppResult};

use crate::field::ResourceSpec;
use crate::resource::ResourceKind;
use crate::resources;

static REGISTRY: LazyLock<HashMap<ResourceKind, &'static ResourceSpec>> = LazyLock::new(|| {
    let map: HashMap<_, _> = resources::ALL.iter().map(|spec| (spec.kind, *spec)).collect();
    debug!(resources = map.len(), "Resource field registry initialized");
    map
});

/// The field table for `kind`.
pub fn spec(kind: ResourceKind) -> AppResult<&'static ResourceSpec> {
    REGISTRY
        .get(&kind)
        .copied()
        .ok_or_else(|| AppError::internal(format!("No field table registered for {kind}")))
}

/// Every registered resource type, sorted.
pub fn registered() -> Vec<ResourceKind> {
    let mut kinds: Vec<_> = REGISTRY.keys().copied().collect();
    kinds.sort();
    kinds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_registered() {
        assert_eq!(registered(), ResourceKind::ALL.to_vec());
        for kind in ResourceKind::ALL {
            assert_eq!(spec(kind).unwrap().kind, kind);
        }
    }

    #[test]
    fn test_relations_point_at_registered_kinds() {
        for kind in ResourceKind::ALL {
            let table = spec(kind).unwrap();
            for relation in table.relations {
                assert!(spec(relation.target).is_ok());
                assert!(relation.keyword.starts_with("has"));
            }
            for field in table.fields {
                assert_eq!(table.field(field.keyword), Some(field));
            }
        }
    }
}
