//! `wh-anim` — multi-agent route-animation frame synthesis.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`frame`]   | `Frame`, `FramePhase`: one agent at one time step              |
//! | [`segment`] | `interpolate`, `raw_len`: per-leg motion and dwell expansion   |
//! | [`synth`]   | `synthesize`, `Animation`, `FrameSequence`                      |
//! | [`error`]   | `AnimError`, `AnimResult<T>`                                    |
//!
//! # Timeline model
//!
//! Every agent's path is expanded independently into a *raw* sequence:
//!
//! ```text
//! for each leg p[i] → p[i+1]:
//!   ① Move:  steps_between frames lerped from p[i] to p[i+1], both ends
//!              included (a single frame at p[i+1] when steps_between == 1).
//!   ② Count: stop_index += 1, except after the first and the final leg.
//!   ③ Dwell: dwell_time frames held at p[i+1], carrying the updated
//!              stop_index; skipped on the final return-to-depot leg.
//!
//! raw_len = (n - 1) * steps_between + (n - 2) * dwell_time
//! ```
//!
//! The raw sequences are then padded to `max_frames = max(raw_len)` by
//! repeating each agent's final frame, marked finished when the path closes
//! at its starting point (the depot).  Frame `k` of every
//! sequence therefore refers to the same global time step.
//!
//! Synthesis is a pure function of its inputs: no randomness, no clock, no
//! state kept between calls.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Expands raw sequences on Rayon's thread pool.           |

pub mod error;
pub mod frame;
pub mod segment;
pub mod synth;

#[cfg(test)]
mod tests;

pub use error::{AnimError, AnimResult};
pub use frame::{Frame, FramePhase};
pub use segment::{interpolate, raw_len};
pub use synth::{synthesize, synthesize_with, Animation, FrameSequence};
