use serde::{Deserialize, Serialize};

/// Discrete threat classification, ordered from least to most severe.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ThreatLevel {
    Low,
    High,
    Critical,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(ThreatLevel::Low < ThreatLevel::High);
        assert!(ThreatLevel::High < ThreatLevel::Critical);
    }
}
