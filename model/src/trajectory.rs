use anyhow::Result;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Time-ordered positions for one marker, in raw file coordinates. Axis
/// remapping happens when keyframes are emitted, not here.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Trajectory {
    inner: Vec<(DVec3, f64)>,
}

impl Trajectory {
    pub fn new(raw: Vec<(DVec3, f64)>) -> Result<Self> {
        for pair in raw.windows(2) {
            if pair[0].1 > pair[1].1 {
                bail!(
                    "trajectory input out-of-order: {} then {}",
                    pair[0].1,
                    pair[1].1
                );
            }
        }
        if raw.len() < 2 {
            bail!("trajectory doesn't have at least 2 samples");
        }
        Ok(Self { inner: raw })
    }

    pub fn num_samples(&self) -> usize {
        self.inner.len()
    }

    pub fn start_time(&self) -> f64 {
        self.inner[0].1
    }

    pub fn end_time(&self) -> f64 {
        self.inner.last().unwrap().1
    }

    /// Every `stride`-th sample, starting from the first, with its original
    /// sample index. `stride` must be at least 1.
    pub fn decimate(&self, stride: usize) -> impl Iterator<Item = (usize, DVec3)> + '_ {
        (0..self.inner.len())
            .step_by(stride)
            .map(move |n| (n, self.inner[n].0))
    }

    /// Axis-aligned bounding box of all positions, as (min, max).
    pub fn bounds(&self) -> (DVec3, DVec3) {
        let mut min = self.inner[0].0;
        let mut max = min;
        for (pos, _) in &self.inner {
            min = min.min(*pos);
            max = max.max(*pos);
        }
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(t: f64) -> (DVec3, f64) {
        (DVec3::new(t, 2.0 * t, -t), t)
    }

    #[test]
    fn rejects_out_of_order_times() {
        assert!(Trajectory::new(vec![pt(0.0), pt(2.0), pt(1.0)]).is_err());
    }

    #[test]
    fn rejects_single_sample() {
        assert!(Trajectory::new(vec![pt(0.0)]).is_err());
        assert!(Trajectory::new(Vec::new()).is_err());
    }

    #[test]
    fn decimate_stride_one_retains_everything() {
        let t = Trajectory::new((0..10).map(|i| pt(i as f64)).collect()).unwrap();
        let kept: Vec<usize> = t.decimate(1).map(|(n, _)| n).collect();
        assert_eq!(kept, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn decimate_strides_from_first_sample() {
        let t = Trajectory::new((0..10).map(|i| pt(i as f64)).collect()).unwrap();
        let kept: Vec<usize> = t.decimate(4).map(|(n, _)| n).collect();
        assert_eq!(kept, vec![0, 4, 8]);
    }

    #[test]
    fn bounds_cover_all_samples() {
        let t = Trajectory::new(vec![pt(0.0), pt(1.0), pt(3.0)]).unwrap();
        let (min, max) = t.bounds();
        assert_eq!(min, DVec3::new(0.0, 0.0, -3.0));
        assert_eq!(max, DVec3::new(3.0, 6.0, 0.0));
    }
}
