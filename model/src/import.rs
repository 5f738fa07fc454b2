use std::path::{Path, PathBuf};

use anyhow::Result;
use glam::DVec3;

use trc::{MarkerName, TrcFile};

use crate::{resample, ImportSettings, MarkerID, Scene, Trajectory};

/// The input kinds this importer understands, decided once by extension
/// instead of re-sniffing the path at each branch.
#[derive(Clone, Debug, PartialEq)]
pub enum MotionFile {
    /// Tabular text markers; parsed, resampled, and remapped here.
    Trc(PathBuf),
    /// Binary markers; delegated wholesale to the host's importer.
    C3d(PathBuf),
}

impl MotionFile {
    pub fn classify<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("trc") => Ok(Self::Trc(path.to_path_buf())),
            Some("c3d") => Ok(Self::C3d(path.to_path_buf())),
            _ => bail!("{:?} isn't a .trc or .c3d file", path),
        }
    }
}

/// Import a marker file into the scene. The whole call is synchronous and
/// fail-fast; errors leave any markers created so far in place.
pub fn import<S: Scene>(scene: &mut S, path: &Path, settings: &ImportSettings) -> Result<()> {
    match MotionFile::classify(path)? {
        MotionFile::Trc(path) => {
            let file = TrcFile::load(&path)?;
            import_trc(scene, &file, settings)
        }
        MotionFile::C3d(path) => {
            info!("Handing {:?} to the host's C3D importer", path);
            scene.import_c3d(&path)
        }
    }
}

/// Drive creation and animation of one marker per trajectory in an
/// already-loaded TRC file.
pub fn import_trc<S: Scene>(scene: &mut S, file: &TrcFile, settings: &ImportSettings) -> Result<()> {
    let trajectories = extract_trajectories(file)?;

    let times = file.times();
    let fps = resample::intrinsic_framerate(&times)?;
    let stride = resample::decimation_factor(fps, settings.target_framerate)?;
    if fps % settings.target_framerate != 0 {
        warn!(
            "intrinsic rate {} isn't a multiple of target {}; output plays at {} fps",
            fps,
            settings.target_framerate,
            fps / stride
        );
    }
    info!(
        "{} markers, {} samples at {} fps; keeping every {} samples for {} fps",
        trajectories.len(),
        file.num_samples(),
        fps,
        stride,
        settings.target_framerate
    );

    let (mut min, mut max) = trajectories[0].1.bounds();
    for (_, trajectory) in &trajectories {
        let (lo, hi) = trajectory.bounds();
        min = min.min(lo);
        max = max.max(hi);
    }
    info!(
        "Capture covers {:.3}s to {:.3}s; markers stay within {min:?} to {max:?} (raw file \
         coordinates)",
        trajectories[0].1.start_time(),
        trajectories[0].1.end_time()
    );

    scene.set_playback_rate(settings.target_framerate)?;

    // Create everything up front, remembering each handle by trajectory
    // index. Looking markers back up by name would misbehave when one name is
    // a substring of another.
    let mut markers: Vec<MarkerID> = Vec::new();
    for (name, _) in &trajectories {
        markers.push(scene.add_marker(name, settings.radius, settings.color)?);
    }

    for ((_, trajectory), id) in trajectories.iter().zip(&markers) {
        for (n, raw) in trajectory.decimate(stride) {
            let frame = resample::output_frame(n, stride);
            scene.insert_keyframe(*id, frame, settings.up_axis.remap(raw))?;
        }
    }
    Ok(())
}

/// Split the sample matrix into one raw-coordinate trajectory per marker,
/// after checking the column arithmetic actually works out.
fn extract_trajectories(file: &TrcFile) -> Result<Vec<(MarkerName, Trajectory)>> {
    let expected = 1 + 3 * file.marker_names.len();
    if file.num_columns() != expected {
        bail!(
            "{} marker names require {} columns per sample, but rows have {}",
            file.marker_names.len(),
            expected,
            file.num_columns()
        );
    }

    let mut result = Vec::new();
    for (i, name) in file.marker_names.iter().enumerate() {
        let mut raw = Vec::new();
        for n in 0..file.num_samples() {
            let row = file.row(n);
            let pos = DVec3::new(row[3 * i + 1], row[3 * i + 2], row[3 * i + 3]);
            raw.push((pos, row[0]));
        }
        result.push((name.clone(), Trajectory::new(raw)?));
    }
    Ok(result)
}
