//! Clients for the region backend.

pub mod regions;

pub use regions::{RegionApi, METADATA_PATH};
