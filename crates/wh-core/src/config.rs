//! Animation configuration.
//!
//! # Timeline model
//!
//! The animation timeline is a plain integer frame counter shared by every
//! worker.  Wall-clock playback speed is a rendering concern and is carried
//! here only as `frame_duration_ms`:
//!
//!   playback_ms = max_frames * frame_duration_ms
//!
//! `steps_between` and `dwell_time` are signed so that a config file with a
//! negative value deserializes and is then rejected by [`AnimationConfig::validate`]
//! with a descriptive error instead of a generic parse failure.

use crate::{CoreError, CoreResult};

/// Top-level animation configuration.
///
/// Typically loaded from a JSON file by the application crate (feature
/// `serde`) and passed to `wh_anim::synthesize_with`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnimationConfig {
    /// Interpolated frames per leg, both endpoints included.  Must be ≥ 1.
    pub steps_between: i64,

    /// Frames a worker holds position at each pick stop.  Must be ≥ 0.
    pub dwell_time: i64,

    /// Playback duration of one frame in milliseconds.  Must be > 0.
    pub frame_duration_ms: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            steps_between:     10,
            dwell_time:        3,
            frame_duration_ms: 100,
        }
    }
}

impl AnimationConfig {
    /// Check every field, returning the first violation.
    pub fn validate(&self) -> CoreResult<()> {
        if self.steps_between < 1 {
            return Err(CoreError::Config(format!(
                "steps_between must be >= 1, got {}",
                self.steps_between
            )));
        }
        if self.dwell_time < 0 {
            return Err(CoreError::Config(format!(
                "dwell_time must be >= 0, got {}",
                self.dwell_time
            )));
        }
        if self.frame_duration_ms == 0 {
            return Err(CoreError::Config("frame_duration_ms must be > 0".into()));
        }
        Ok(())
    }

    /// Total playback time for a timeline of `frames` frames.
    #[inline]
    pub fn playback_ms(&self, frames: usize) -> u64 {
        frames as u64 * self.frame_duration_ms as u64
    }
}
