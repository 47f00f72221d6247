use serde::{Deserialize, Serialize};

/// Category of airborne object reported by the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectType {
    Airplane,
    Drone,
    Helicopter,
    Unknown,
}

impl ObjectType {
    /// Map a detector class index onto an object type.
    ///
    /// The map is closed; any index it does not name resolves to
    /// `Unknown` rather than guessing.
    pub fn from_class_id(class_id: u32) -> Self {
        match class_id {
            0 => Self::Airplane,
            1 => Self::Drone,
            2 => Self::Helicopter,
            _ => Self::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_mapping() {
        assert_eq!(ObjectType::from_class_id(0), ObjectType::Airplane);
        assert_eq!(ObjectType::from_class_id(1), ObjectType::Drone);
        assert_eq!(ObjectType::from_class_id(2), ObjectType::Helicopter);
        assert_eq!(ObjectType::from_class_id(3), ObjectType::Unknown);
        assert_eq!(ObjectType::from_class_id(999), ObjectType::Unknown);
    }
}
