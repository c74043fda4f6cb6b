//! Leg interpolation and raw sequence expansion for a single path.

use std::iter;

use wh_core::Point;

use crate::Frame;

/// `steps` points from `from` to `to`, both endpoints included:
///
/// ```text
/// pos(t) = from + t / (steps - 1) * (to - from)     t = 0 .. steps-1
/// ```
///
/// With `steps == 1` the single point is `to`; with `steps == 0` nothing is
/// yielded.  The first and last points equal the inputs exactly.
pub fn interpolate(from: Point, to: Point, steps: usize) -> impl Iterator<Item = Point> {
    let last = steps.saturating_sub(1);
    (0..steps).map(move |t| {
        if last == 0 {
            to
        } else {
            from.lerp(to, t as f64 / last as f64)
        }
    })
}

/// Length of the raw (unpadded) sequence for a path of `waypoints` points.
///
/// `(n - 1) * steps_between + (n - 2) * dwell_time`, or `0` for `n < 2`.
pub fn raw_len(waypoints: usize, steps_between: usize, dwell_time: usize) -> usize {
    if waypoints < 2 {
        return 0;
    }
    (waypoints - 1) * steps_between + (waypoints - 2) * dwell_time
}

/// Expand one path into its raw frame sequence.
///
/// Per leg: the moving frames, then the stop index is advanced (except after
/// leg 0), then the dwell frames, which therefore carry the advanced index.
/// The final leg does neither.
///
/// Callers guarantee `path.len() >= 2` and `steps_between >= 1`.
pub(crate) fn expand(path: &[Point], steps_between: usize, dwell_time: usize) -> Vec<Frame> {
    let legs = path.len() - 1;
    let mut frames = Vec::with_capacity(raw_len(path.len(), steps_between, dwell_time));
    let mut stop_index = 0u32;

    for (leg, pair) in path.windows(2).enumerate() {
        let (from, to) = (pair[0], pair[1]);
        frames.extend(interpolate(from, to, steps_between).map(|pos| Frame::moving(pos, stop_index)));

        // The return-to-depot leg neither dwells nor counts.
        if leg + 1 == legs {
            break;
        }
        if leg != 0 {
            stop_index += 1;
        }
        frames.extend(iter::repeat_n(Frame::dwelling(to, stop_index), dwell_time));
    }

    debug_assert_eq!(frames.len(), raw_len(path.len(), steps_between, dwell_time));
    frames
}
