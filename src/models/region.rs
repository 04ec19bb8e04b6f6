use serde::{Deserialize, Serialize};
use std::fmt;

/// Geographic location of a region. Informational only; the map does not
/// project these.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Label anchor in map view-box space (800x600, y grows downward).
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
pub struct MapPosition {
    pub x: f64,
    pub y: f64,
}

/// Prominence ranking of a region. Serialized as the bare integer 1, 2 or 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Tier {
    /// Must-have regions, shown in the quick-select grid
    Essential,
    Important,
    Optional,
}

impl Tier {
    pub fn as_u8(self) -> u8 {
        match self {
            Tier::Essential => 1,
            Tier::Important => 2,
            Tier::Optional => 3,
        }
    }
}

impl TryFrom<u8> for Tier {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Tier::Essential),
            2 => Ok(Tier::Important),
            3 => Ok(Tier::Optional),
            other => Err(format!("invalid region tier {}, expected 1, 2 or 3", other)),
        }
    }
}

impl From<Tier> for u8 {
    fn from(tier: Tier) -> Self {
        tier.as_u8()
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// A selectable date region as served by the metadata endpoint.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Region {
    pub id: String,
    pub display_name: String,
    pub emoji: String,
    pub coordinates: Coordinates,
    pub map_position: MapPosition,
    pub svg_path: String,
    pub popularity_score: f64,
    pub available_places_count: u32,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub tier: Tier,
    pub is_active: bool,
}

impl Region {
    /// Whether this region belongs in the quick-select grid.
    pub fn is_quick_selectable(&self) -> bool {
        self.tier == Tier::Essential && self.is_active
    }

    /// Identity comparison; two snapshots of the same region compare equal.
    pub fn same_as(&self, other: &Region) -> bool {
        self.id == other.id
    }
}

/// Body of `GET /regions/metadata`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct RegionMetadataResponse {
    pub regions: Vec<Region>,
}
