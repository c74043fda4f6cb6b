//! Route definitions and the Waypoint Resolver.
//!
//! Every route starts and ends at the depot:
//!
//! ```text
//! waypoints = [depot] ++ [table[id] for id in stops] ++ [depot]
//! ```
//!
//! Resolution is all-or-nothing.  A stop id missing from the table fails the
//! whole route; no default coordinate is ever substituted, because a skipped
//! or misplaced stop would silently change the distances being compared.

use tracing::debug;

use wh_core::{LocationId, MarkerSymbol, Point};

use crate::{LayoutResult, LocationTable};

// ── RouteDefinition ───────────────────────────────────────────────────────────

/// A named pick route for one animated worker.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteDefinition {
    pub name:   String,
    /// Opaque display token (e.g. `"#e74c3c"`); never interpreted here.
    pub color:  String,
    pub symbol: MarkerSymbol,
    /// Pick stops in visiting order.  Repeats are allowed; may be empty.
    pub stops:  Vec<LocationId>,
}

impl RouteDefinition {
    pub fn new(
        name:   impl Into<String>,
        color:  impl Into<String>,
        symbol: MarkerSymbol,
        stops:  Vec<LocationId>,
    ) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            symbol,
            stops,
        }
    }

    #[inline]
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }
}

// ── WaypointPath ──────────────────────────────────────────────────────────────

/// Ordered coordinates one worker visits, depot-first and depot-last.
///
/// Only produced by [`resolve_path`], so it always holds at least two points.
#[derive(Debug, Clone, PartialEq)]
pub struct WaypointPath(Vec<Point>);

impl WaypointPath {
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; see the type-level invariant.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The depot coordinate (first and last waypoint).
    #[inline]
    pub fn depot(&self) -> Point {
        self.0[0]
    }

    /// Number of pick stops between the two depot visits.
    #[inline]
    pub fn stop_count(&self) -> usize {
        self.0.len().saturating_sub(2)
    }

    /// Euclidean length of the polyline in metres.
    pub fn total_distance(&self) -> f64 {
        self.0.windows(2).map(|w| w[0].distance(w[1])).sum()
    }

    pub fn into_points(self) -> Vec<Point> {
        self.0
    }
}

impl AsRef<[Point]> for WaypointPath {
    fn as_ref(&self) -> &[Point] {
        &self.0
    }
}

// ── Resolution ────────────────────────────────────────────────────────────────

/// Build the waypoint path for `stops`.
///
/// Returns exactly `stops.len() + 2` points.
///
/// # Errors
///
/// [`LayoutError::MissingLocation`][crate::LayoutError::MissingLocation] for
/// the first stop absent from `table`.
pub fn resolve_path(table: &LocationTable, stops: &[LocationId]) -> LayoutResult<WaypointPath> {
    let depot = table.lookup(LocationId::DEPOT)?;

    let mut points = Vec::with_capacity(stops.len() + 2);
    points.push(depot);
    for &id in stops {
        points.push(table.lookup(id)?);
    }
    points.push(depot);

    Ok(WaypointPath(points))
}

/// Resolve every route in order.  Fails on the first missing stop of any
/// route; no partial list is returned.
pub fn resolve_routes(
    table:  &LocationTable,
    routes: &[RouteDefinition],
) -> LayoutResult<Vec<WaypointPath>> {
    let paths = routes
        .iter()
        .map(|r| resolve_path(table, &r.stops))
        .collect::<LayoutResult<Vec<_>>>()?;

    debug!(
        routes    = paths.len(),
        waypoints = paths.iter().map(WaypointPath::len).sum::<usize>(),
        "resolved waypoint paths"
    );
    Ok(paths)
}
