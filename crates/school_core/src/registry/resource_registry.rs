//! Resource arena with reserve/release by id.

use crate::error::{EntityKind, SchoolError, SchoolResult};
use crate::model::resource::{Resource, ResourceType};
use log::info;
use std::collections::BTreeMap;

/// Well-known id of the default math course resource.
pub const MATH_CALCULATOR_ID: &str = "math-calculator";
/// Well-known id of the default science course resource.
pub const SCIENCE_LAB_ID: &str = "science-lab";
/// Well-known id of the default history course resource.
pub const HISTORY_PROJECTOR_ID: &str = "history-projector";

#[derive(Debug, Default)]
pub struct ResourceRegistry {
    resources: BTreeMap<String, Resource>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the resources the course factory attaches.
    pub fn with_default_resources() -> Self {
        let mut registry = Self::new();
        registry.add_resource(Resource::new(
            MATH_CALCULATOR_ID,
            "Scientific Calculator",
            ResourceType::Equipment,
            "Math Department",
        ));
        registry.add_resource(Resource::new(
            SCIENCE_LAB_ID,
            "Laboratory Equipment",
            ResourceType::Equipment,
            "Science Department",
        ));
        registry.add_resource(Resource::new(
            HISTORY_PROJECTOR_ID,
            "History Projector",
            ResourceType::Equipment,
            "History Department",
        ));
        registry
    }

    pub fn add_resource(&mut self, resource: Resource) {
        self.resources.insert(resource.id.clone(), resource);
    }

    pub fn get_resource(&self, id: &str) -> Option<&Resource> {
        self.resources.get(id)
    }

    pub fn get_all_resources(&self) -> Vec<&Resource> {
        self.resources.values().collect()
    }

    pub fn get_resources_by_type(&self, kind: ResourceType) -> Vec<&Resource> {
        self.resources
            .values()
            .filter(|resource| resource.kind == kind)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn reserve_resource(&mut self, id: &str) -> SchoolResult<()> {
        self.resource_mut(id)?.reserve()?;
        info!("event=resource_reserve module=registry status=ok resource_id={id}");
        Ok(())
    }

    pub fn release_resource(&mut self, id: &str) -> SchoolResult<()> {
        self.resource_mut(id)?.release();
        info!("event=resource_release module=registry status=ok resource_id={id}");
        Ok(())
    }

    fn resource_mut(&mut self, id: &str) -> SchoolResult<&mut Resource> {
        self.resources
            .get_mut(id)
            .ok_or_else(|| SchoolError::not_found(EntityKind::Resource, id))
    }
}

#[cfg(test)]
mod tests {
    use super::{ResourceRegistry, MATH_CALCULATOR_ID};
    use crate::error::{EntityKind, SchoolError};
    use crate::model::resource::{Resource, ResourceType};

    #[test]
    fn reserve_and_release_unknown_ids_fail_with_not_found() {
        let mut registry = ResourceRegistry::new();

        let err = registry.reserve_resource("ghost").unwrap_err();
        assert!(matches!(
            err,
            SchoolError::NotFound { kind: EntityKind::Resource, ref id } if id == "ghost"
        ));
        assert!(registry.release_resource("ghost").is_err());
    }

    #[test]
    fn reservation_is_visible_through_lookup() {
        let mut registry = ResourceRegistry::with_default_resources();

        registry.reserve_resource(MATH_CALCULATOR_ID).unwrap();
        assert!(!registry.get_resource(MATH_CALCULATOR_ID).unwrap().is_available());

        let err = registry.reserve_resource(MATH_CALCULATOR_ID).unwrap_err();
        assert!(matches!(err, SchoolError::ResourceUnavailable(_)));

        registry.release_resource(MATH_CALCULATOR_ID).unwrap();
        assert!(registry.get_resource(MATH_CALCULATOR_ID).unwrap().is_available());
    }

    #[test]
    fn resources_filter_by_type() {
        let mut registry = ResourceRegistry::with_default_resources();
        registry.add_resource(Resource::new(
            "room-7",
            "Room 7",
            ResourceType::Classroom,
            "East",
        ));

        assert_eq!(registry.len(), 4);
        assert_eq!(registry.get_resources_by_type(ResourceType::Equipment).len(), 3);
        let rooms = registry.get_resources_by_type(ResourceType::Classroom);
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].id, "room-7");
        assert!(registry.get_resources_by_type(ResourceType::Supplies).is_empty());
    }
}
