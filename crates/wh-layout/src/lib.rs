//! `wh-layout` — warehouse locations, route definitions, and the Waypoint
//! Resolver.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`table`]   | `Location`, `LocationTable`, `LocationTableBuilder`, `Bounds` |
//! | [`route`]   | `RouteDefinition`, `WaypointPath`, `resolve_path`             |
//! | [`loader`]  | `load_layout_csv`, `load_layout_reader`                       |
//! | [`error`]   | `LayoutError`, `LayoutResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `fx-hash` | Uses `rustc-hash` for the id → location index.             |
//! | `serde`   | Propagates serde derives to `wh-core` types.               |

pub mod error;
pub mod loader;
pub mod route;
pub mod table;

#[cfg(test)]
mod tests;

pub use error::{LayoutError, LayoutResult};
pub use loader::{load_layout_csv, load_layout_reader};
pub use route::{resolve_path, resolve_routes, RouteDefinition, WaypointPath};
pub use table::{Bounds, Location, LocationTable, LocationTableBuilder};
