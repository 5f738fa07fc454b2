//! Rate arithmetic: the file's intrinsic sample rate, the integer stride used
//! to decimate it down to a target rate, and output frame numbering.

use anyhow::Result;

/// Sample rate implied by the file's own time column, truncated to a whole
/// number of frames per second.
pub fn intrinsic_framerate(times: &[f64]) -> Result<usize> {
    if times.len() < 2 {
        bail!(
            "can't derive a frame rate from {} samples; need at least 2",
            times.len()
        );
    }
    let span = times[times.len() - 1] - times[0];
    if span <= 0.0 {
        bail!("sample times span {span} seconds; expected an increasing time column");
    }
    Ok(((times.len() - 1) as f64 / span) as usize)
}

/// Integer stride to walk samples with: every `k`-th sample is retained,
/// yielding an output rate of approximately `target`. Upsampling isn't
/// supported, so a target above the intrinsic rate is a configuration error
/// rather than a zero stride.
pub fn decimation_factor(intrinsic: usize, target: usize) -> Result<usize> {
    if target == 0 {
        bail!("target framerate must be positive");
    }
    if target > intrinsic {
        bail!(
            "target framerate {} exceeds the file's intrinsic rate {}; this importer only \
             downsamples",
            target,
            intrinsic
        );
    }
    Ok(intrinsic / target)
}

/// 1-based host frame number for retained sample `n`. The first retained
/// sample always lands on frame 1.
pub fn output_frame(n: usize, stride: usize) -> usize {
    n / stride + 1
}
