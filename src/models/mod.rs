mod region;

pub use region::{Coordinates, MapPosition, Region, RegionMetadataResponse, Tier};
