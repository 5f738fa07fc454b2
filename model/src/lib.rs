#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

mod axis;
mod import;
mod resample;
mod scene;
mod trajectory;

use serde::{Deserialize, Serialize};

pub use self::axis::UpAxis;
pub use self::import::{import, import_trc, MotionFile};
pub use self::scene::{Color, MarkerID, Scene};
pub use self::trajectory::Trajectory;
pub use trc::{MarkerName, TrcFile};

/// Everything tunable about one import. Passed explicitly so imports with
/// different settings never interfere.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImportSettings {
    pub up_axis: UpAxis,
    /// Output animation rate. The file is decimated down to (approximately)
    /// this; it's an error for it to exceed the file's own rate.
    pub target_framerate: usize,
    /// Marker sphere radius, in scene length units.
    pub radius: f64,
    pub color: Color,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            up_axis: UpAxis::ZUp,
            target_framerate: 30,
            radius: 0.012,
            color: [0.0, 1.0, 0.0, 0.8],
        }
    }
}
