//! Reservable school resource.
//!
//! # Invariants
//! - `is_available` only changes through `reserve`/`release`.
//! - `reserve` on an unavailable resource fails and leaves state untouched.

use super::KindParseError;
use crate::error::{SchoolError, SchoolResult};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceType {
    Classroom,
    Equipment,
    Supplies,
}

impl ResourceType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Classroom => "CLASSROOM",
            Self::Equipment => "EQUIPMENT",
            Self::Supplies => "SUPPLIES",
        }
    }
}

impl Display for ResourceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = KindParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "CLASSROOM" => Ok(Self::Classroom),
            "EQUIPMENT" => Ok(Self::Equipment),
            "SUPPLIES" => Ok(Self::Supplies),
            _ => Err(KindParseError {
                family: "resource type",
                value: value.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub location: String,
    is_available: bool,
}

impl Resource {
    /// Creates an available resource.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: ResourceType,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            location: location.into(),
            is_available: true,
        }
    }

    pub fn is_available(&self) -> bool {
        self.is_available
    }

    pub fn reserve(&mut self) -> SchoolResult<()> {
        if !self.is_available {
            return Err(SchoolError::ResourceUnavailable(self.id.clone()));
        }
        self.is_available = false;
        Ok(())
    }

    pub fn release(&mut self) {
        self.is_available = true;
    }
}

#[cfg(test)]
mod tests {
    use super::{Resource, ResourceType};
    use crate::error::SchoolError;

    #[test]
    fn second_reserve_fails_until_released() {
        let mut projector = Resource::new("p-1", "Projector", ResourceType::Equipment, "Room 4");
        assert!(projector.is_available());

        projector.reserve().unwrap();
        assert!(!projector.is_available());

        let err = projector.reserve().unwrap_err();
        assert!(matches!(err, SchoolError::ResourceUnavailable(id) if id == "p-1"));
        assert!(!projector.is_available());

        projector.release();
        assert!(projector.is_available());
        projector.reserve().unwrap();
    }

    #[test]
    fn release_is_unconditional() {
        let mut room = Resource::new("r-1", "Room 1", ResourceType::Classroom, "North wing");
        room.release();
        room.release();
        assert!(room.is_available());
    }

    #[test]
    fn resource_type_parses_case_insensitively() {
        assert_eq!("supplies".parse::<ResourceType>().unwrap(), ResourceType::Supplies);
        assert_eq!(" Classroom ".parse::<ResourceType>().unwrap(), ResourceType::Classroom);
        assert!("lab".parse::<ResourceType>().is_err());
    }

    #[test]
    fn wire_shape_uses_type_key_and_upper_case_kind() {
        let resource = Resource::new(
            "math-calculator",
            "Scientific Calculator",
            ResourceType::Equipment,
            "Math Department",
        );
        assert_eq!(
            serde_json::to_value(&resource).unwrap(),
            serde_json::json!({
                "id": "math-calculator",
                "name": "Scientific Calculator",
                "type": "EQUIPMENT",
                "location": "Math Department",
                "is_available": true
            })
        );
    }
}
