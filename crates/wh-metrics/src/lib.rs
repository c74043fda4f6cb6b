//! `wh-metrics` — loadform scenario results and the ROI calculator.
//!
//! A *scenario* pairs the per-order travel distance and pick time of the
//! optimized routing against current practice.  The ROI calculator scales the
//! per-order difference to a year of operation:
//!
//! ```text
//! annual_orders           = orders_per_day × working_days_per_year
//! annual_time_saved_hours = (time_current − time_optimized) × annual_orders
//! annual_cost_savings     = annual_time_saved_hours × hourly_wage
//! annual_distance_saved   = (distance_current − distance_optimized) × annual_orders
//! ```
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`scenario`] | `ScenarioRecord`, `ScenarioTable`                        |
//! | [`loader`]   | `load_scenarios_csv`, `load_scenarios_reader`            |
//! | [`roi`]      | `RoiParams`, `ScenarioRoi`, `compare_all`                |
//! | [`error`]    | `MetricsError`, `MetricsResult<T>`                       |

pub mod error;
pub mod loader;
pub mod roi;
pub mod scenario;


pub use error::{MetricsError, MetricsResult};
pub use loader::{load_scenarios_csv, load_scenarios_reader};
pub use roi::{best_by_savings, compare_all, RoiParams, ScenarioRoi};
pub use scenario::{ScenarioRecord, ScenarioTable};
