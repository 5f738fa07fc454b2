use std::path::Path;

use anyhow::Result;
use glam::DVec3;
use serde::{Deserialize, Serialize};

use trc::MarkerName;

/// RGBA, each channel in [0, 1].
pub type Color = [f32; 4];

/// Host-assigned handle for one created marker object. The importer keeps
/// these indexed by trajectory, so markers are never re-resolved by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MarkerID(pub usize);

/// The host application's scene graph, as seen by the importer. One
/// implementation per host; a failure from any method aborts the import
/// without rolling back markers already created.
pub trait Scene {
    /// Set the scene's playback rate, in frames per second.
    fn set_playback_rate(&mut self, fps: usize) -> Result<()>;

    /// Create one visual marker (a small colored sphere in most hosts) and
    /// return its handle.
    fn add_marker(&mut self, name: &MarkerName, radius: f64, color: Color) -> Result<MarkerID>;

    /// Record the marker's position at a 1-based output frame.
    fn insert_keyframe(&mut self, marker: MarkerID, frame: usize, position: DVec3) -> Result<()>;

    /// Hand a binary C3D file to the host's own importer, which owns all
    /// resampling and axis conventions for that format.
    fn import_c3d(&mut self, path: &Path) -> Result<()>;
}
