//! `wh-core` — foundational types for the `rust_wh` warehouse route animator.
//!
//! This crate is a dependency of every other `wh-*` crate.  It has no `wh-*`
//! dependencies and a single required external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `LocationId`, `AgentId`                               |
//! | [`geo`]         | `Point`, planar warehouse coordinate in metres       |
//! | [`symbol`]      | `MarkerSymbol` display token                          |
//! | [`config`]      | `AnimationConfig`                                     |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod symbol;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::AnimationConfig;
pub use error::{CoreError, CoreResult};
pub use geo::Point;
pub use ids::{AgentId, LocationId};
pub use symbol::MarkerSymbol;
