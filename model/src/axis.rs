use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Which scene axis is vertical. TRC files store Y-up coordinates; the remap
/// reorders (and for Z-up, negates) each raw triple to match the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpAxis {
    ZUp,
    YUp,
}

impl Default for UpAxis {
    fn default() -> Self {
        Self::ZUp
    }
}

impl UpAxis {
    /// Raw file triple `(a, b, c)` to a scene position.
    pub fn remap(self, raw: DVec3) -> DVec3 {
        match self {
            // Y-up to Z-up: x stays, file y becomes scene z, file z becomes -y
            UpAxis::ZUp => DVec3::new(raw.x, -raw.z, raw.y),
            UpAxis::YUp => DVec3::new(raw.x, raw.z, raw.y),
        }
    }

    /// Exact inverse of `remap`.
    pub fn unmap(self, pos: DVec3) -> DVec3 {
        match self {
            UpAxis::ZUp => DVec3::new(pos.x, pos.z, -pos.y),
            UpAxis::YUp => DVec3::new(pos.x, pos.z, pos.y),
        }
    }
}
