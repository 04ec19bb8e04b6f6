//! AppMessage enum for async communication within the application.

use crate::error::LoadResult;
use crate::models::Region;

/// Messages sent from background tasks to the UI task.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// The metadata fetch for mount `generation` finished.
    RegionsLoaded {
        generation: u64,
        result: LoadResult<Vec<Region>>,
    },
}
