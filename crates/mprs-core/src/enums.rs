//! Enumerated field types and the entity-kind discriminator.
//!
//! Field enums serialize in `SCREAMING_SNAKE_CASE` (`"HIGH"`, `"TRANSPRT"`),
//! which is also the TEXT representation stored in the database.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// QualityStateType
// ---------------------------------------------------------------------------

/// Graded condition of an inspected item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QualityStateType {
    High,
    Middle,
    Low,
}

impl QualityStateType {
    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Middle => "MIDDLE",
            Self::Low => "LOW",
        }
    }
}

impl fmt::Display for QualityStateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// InfraType
// ---------------------------------------------------------------------------

/// Category of a nearby infrastructure facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InfraType {
    School,
    Transprt,
    Mart,
    Hospital,
    Park,
    Etc,
}

impl InfraType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::School => "SCHOOL",
            Self::Transprt => "TRANSPRT",
            Self::Mart => "MART",
            Self::Hospital => "HOSPITAL",
            Self::Park => "PARK",
            Self::Etc => "ETC",
        }
    }
}

impl fmt::Display for InfraType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EntityKind
// ---------------------------------------------------------------------------

/// Every record type managed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Report,
    Author,
    Bathroom,
    Bedroom,
    Entrance,
    EnvFactor,
    Infrastructure,
    Kitchen,
    LivingRoom,
}

impl EntityKind {
    pub const ALL: [Self; 9] = [
        Self::Report,
        Self::Author,
        Self::Bathroom,
        Self::Bedroom,
        Self::Entrance,
        Self::EnvFactor,
        Self::Infrastructure,
        Self::Kitchen,
        Self::LivingRoom,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Report => "report",
            Self::Author => "author",
            Self::Bathroom => "bathroom",
            Self::Bedroom => "bedroom",
            Self::Entrance => "entrance",
            Self::EnvFactor => "env_factor",
            Self::Infrastructure => "infrastructure",
            Self::Kitchen => "kitchen",
            Self::LivingRoom => "living_room",
        }
    }

    /// Store table name. Also the stem of the search table (`{table}_search`).
    #[must_use]
    pub const fn table(self) -> &'static str {
        self.as_str()
    }

    /// Whether records of this kind hang off a parent Report.
    #[must_use]
    pub const fn is_section(self) -> bool {
        !matches!(self, Self::Report | Self::Author)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| CoreError::Validation(format!("unknown entity kind '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(quality_high, QualityStateType, QualityStateType::High, "HIGH");
    test_serde_roundtrip!(
        quality_middle,
        QualityStateType,
        QualityStateType::Middle,
        "MIDDLE"
    );
    test_serde_roundtrip!(infra_transprt, InfraType, InfraType::Transprt, "TRANSPRT");
    test_serde_roundtrip!(kind_env_factor, EntityKind, EntityKind::EnvFactor, "env_factor");

    #[test]
    fn as_str_matches_serde() {
        for state in [
            QualityStateType::High,
            QualityStateType::Middle,
            QualityStateType::Low,
        ] {
            let json = serde_json::to_string(&state).unwrap();
            assert_eq!(json, format!("\"{}\"", state.as_str()));
        }
        for kind in EntityKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn kind_parses_kebab_and_snake() {
        assert_eq!("living-room".parse::<EntityKind>().unwrap(), EntityKind::LivingRoom);
        assert_eq!("env_factor".parse::<EntityKind>().unwrap(), EntityKind::EnvFactor);
        assert_eq!("Report".parse::<EntityKind>().unwrap(), EntityKind::Report);
        assert!("garage".parse::<EntityKind>().is_err());
    }

    #[test]
    fn only_rooms_and_factors_are_sections() {
        assert!(!EntityKind::Report.is_section());
        assert!(!EntityKind::Author.is_section());
        assert!(EntityKind::Kitchen.is_section());
        assert!(EntityKind::EnvFactor.is_section());
    }
}
