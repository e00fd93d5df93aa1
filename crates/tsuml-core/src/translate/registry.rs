//! Interface declaration merging.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::model::{FileDeclaration, InterfaceEntity};

/// Accumulates same-named interface declarations within one translation run.
///
/// Keyed by display name, not identity.
#[derive(Debug, Default)]
pub struct InterfaceRegistry {
    interfaces: HashMap<String, InterfaceEntity>,
}

impl InterfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an interface, merging it into an earlier one with the same name.
    ///
    /// On a repeat name the new members are appended to the registered
    /// interface and the returned entity carries the merged member lists.
    pub fn merge(&mut self, mut entity: InterfaceEntity) -> InterfaceEntity {
        match self.interfaces.entry(entity.name.clone()) {
            Entry::Occupied(mut slot) => {
                let merged = slot.get_mut();
                log::debug!("merging interface declaration {}", entity.name);
                merged.methods.extend(entity.methods);
                merged.properties.extend(entity.properties);
                entity.methods = merged.methods.clone();
                entity.properties = merged.properties.clone();
                entity
            }
            Entry::Vacant(slot) => {
                slot.insert(entity.clone());
                entity
            }
        }
    }

    /// Get the merged interface registered under a display name.
    pub fn get(&self, name: &str) -> Option<&InterfaceEntity> {
        self.interfaces.get(name)
    }

    pub fn len(&self) -> usize {
        self.interfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }

    /// Point every emitted copy of a merged interface at the final member lists.
    ///
    /// Copies emitted before a later declaration of the same name was seen
    /// only hold the members known at that time.
    pub fn rebind(&self, files: &mut [FileDeclaration]) {
        for interface in files.iter_mut().flat_map(|f| f.interfaces.iter_mut()) {
            if let Some(merged) = self.interfaces.get(&interface.name) {
                interface.methods = merged.methods.clone();
                interface.properties = merged.properties.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MethodDetail, PropertyDetail};

    fn method(name: &str) -> MethodDetail {
        MethodDetail {
            name: name.to_string(),
            return_type: Some("number".to_string()),
            ..Default::default()
        }
    }

    fn shape(methods: &[&str]) -> InterfaceEntity {
        InterfaceEntity {
            name: "Shape".to_string(),
            id: "\"shape\".Shape".to_string(),
            properties: Vec::new(),
            methods: methods.iter().map(|m| method(m)).collect(),
        }
    }

    #[test]
    fn test_first_sight_registers_as_is() {
        let mut registry = InterfaceRegistry::new();
        let result = registry.merge(shape(&["area"]));

        assert_eq!(result, shape(&["area"]));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("Shape"), Some(&shape(&["area"])));
    }

    #[test]
    fn test_repeat_sight_appends_in_first_seen_order() {
        let mut registry = InterfaceRegistry::new();
        registry.merge(shape(&["area"]));
        let second = registry.merge(shape(&["perimeter"]));
        let third = registry.merge(InterfaceEntity {
            properties: vec![PropertyDetail {
                name: "sides".to_string(),
                type_name: Some("number".to_string()),
                ..Default::default()
            }],
            ..shape(&["scale"])
        });

        let names: Vec<&str> = third.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["area", "perimeter", "scale"]);
        assert_eq!(second.methods.len(), 2);
        assert_eq!(third.properties.len(), 1);
        assert_eq!(registry.get("Shape").unwrap().methods, third.methods);
    }

    #[test]
    fn test_rebind_updates_earlier_copies() {
        let mut registry = InterfaceRegistry::new();
        let mut first = FileDeclaration::new("a.ts");
        first.interfaces.push(registry.merge(shape(&["area"])));
        let mut second = FileDeclaration::new("b.ts");
        second.interfaces.push(registry.merge(shape(&["perimeter"])));

        let mut files = vec![first, second];
        registry.rebind(&mut files);

        assert_eq!(files[0].interfaces[0].methods, files[1].interfaces[0].methods);
        assert_eq!(files[0].interfaces[0].methods.len(), 2);
    }

    #[test]
    fn test_different_names_do_not_merge() {
        let mut registry = InterfaceRegistry::new();
        registry.merge(shape(&["area"]));
        let other = registry.merge(InterfaceEntity::new("Solid", "\"shape\".Solid"));

        assert!(other.methods.is_empty());
        assert_eq!(registry.len(), 2);
    }
}
