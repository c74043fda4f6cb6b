//! Warehouse location table and builder.
//!
//! # Data layout
//!
//! Locations are stored in insertion order in a `Vec<Location>` (the order
//! the layout sheet lists them in, which is also the order the layout view
//! draws them).  A hash index maps `LocationId → slot` for O(1) resolution.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps a floor-plan point to the nearest location.
//! Backs [`LocationTable::nearest`] and is bulk-loaded on its first call, so
//! tables used only for waypoint resolution never build it.

use std::sync::OnceLock;

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use tracing::debug;

use wh_core::{LocationId, Point};

use crate::{LayoutError, LayoutResult};

#[cfg(feature = "fx-hash")]
type IdIndex = rustc_hash::FxHashMap<LocationId, usize>;
#[cfg(not(feature = "fx-hash"))]
type IdIndex = std::collections::HashMap<LocationId, usize>;

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a 2-D `[x, y]` point with its table slot.
#[derive(Clone)]
struct SlotEntry {
    point: [f64; 2],
    slot:  usize,
}

impl RTreeObject for SlotEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for SlotEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── Location ──────────────────────────────────────────────────────────────────

/// One row of the warehouse layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id:   LocationId,
    /// Display label from the layout sheet (`Start`, `Rack 12`, …).
    pub name: String,
    pub pos:  Point,
}

impl Location {
    #[inline]
    pub fn is_depot(&self) -> bool {
        self.id.is_depot()
    }
}

/// Axis-aligned extent of a layout, shown in the layout statistics panel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

// ── LocationTable ─────────────────────────────────────────────────────────────

/// Immutable id → coordinate lookup.  Always contains the depot.
///
/// Do not construct directly; use [`LocationTableBuilder`].
pub struct LocationTable {
    locations: Vec<Location>,
    index:     IdIndex,
    depot:     Point,
    spatial:   OnceLock<RTree<SlotEntry>>,
}

impl LocationTable {
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Never true for a built table (the depot is mandatory); provided for
    /// API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Coordinate of the depot.
    #[inline]
    pub fn depot(&self) -> Point {
        self.depot
    }

    /// Coordinate of `id`, or `None` if the layout has no such location.
    #[inline]
    pub fn get(&self, id: LocationId) -> Option<Point> {
        self.index.get(&id).map(|&slot| self.locations[slot].pos)
    }

    /// Like [`get`](Self::get) but fails with [`LayoutError::MissingLocation`].
    pub fn lookup(&self, id: LocationId) -> LayoutResult<Point> {
        self.get(id).ok_or(LayoutError::MissingLocation(id))
    }

    pub fn contains(&self, id: LocationId) -> bool {
        self.index.contains_key(&id)
    }

    /// Full row for `id`.
    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.index.get(&id).map(|&slot| &self.locations[slot])
    }

    /// All locations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    /// Every non-depot location in insertion order.
    pub fn racks(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter().filter(|l| !l.is_depot())
    }

    /// Extent of all locations, depot included.
    pub fn bounds(&self) -> Option<Bounds> {
        let first = self.locations.first()?.pos;
        let init = Bounds { min: first, max: first };
        Some(self.locations.iter().fold(init, |b, l| Bounds {
            min: Point::new(b.min.x.min(l.pos.x), b.min.y.min(l.pos.y)),
            max: Point::new(b.max.x.max(l.pos.x), b.max.y.max(l.pos.y)),
        }))
    }

    /// The location nearest to `pos`.
    pub fn nearest(&self, pos: Point) -> Option<&Location> {
        self.spatial
            .get_or_init(|| self.build_spatial())
            .nearest_neighbor(&[pos.x, pos.y])
            .map(|e| &self.locations[e.slot])
    }

    fn build_spatial(&self) -> RTree<SlotEntry> {
        let entries: Vec<SlotEntry> = self
            .locations
            .iter()
            .enumerate()
            .map(|(slot, l)| SlotEntry { point: [l.pos.x, l.pos.y], slot })
            .collect();
        debug!(entries = entries.len(), "built location R-tree");
        RTree::bulk_load(entries)
    }
}

// ── LocationTableBuilder ──────────────────────────────────────────────────────

/// Construct a [`LocationTable`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use wh_core::{LocationId, Point};
/// use wh_layout::LocationTableBuilder;
///
/// let mut b = LocationTableBuilder::new();
/// b.add(LocationId::DEPOT, "Start", Point::new(0.0, 0.0));
/// b.add(LocationId(1), "Rack 1", Point::new(10.0, 4.0));
/// let table = b.build().unwrap();
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.get(LocationId(1)), Some(Point::new(10.0, 4.0)));
/// ```
pub struct LocationTableBuilder {
    locations: Vec<Location>,
}

impl LocationTableBuilder {
    pub fn new() -> Self {
        Self { locations: Vec::new() }
    }

    pub fn with_capacity(locations: usize) -> Self {
        Self { locations: Vec::with_capacity(locations) }
    }

    /// Queue a location.  Duplicates are reported by `build`, not here, so
    /// loaders can stream rows without checking each one.
    pub fn add(&mut self, id: LocationId, name: impl Into<String>, pos: Point) -> &mut Self {
        self.locations.push(Location { id, name: name.into(), pos });
        self
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Consume the builder and produce a [`LocationTable`].
    ///
    /// # Errors
    ///
    /// - [`LayoutError::InvalidCoordinate`] for a NaN or infinite coordinate.
    /// - [`LayoutError::DuplicateLocation`] for the first repeated id.
    /// - [`LayoutError::MissingDepot`] if no location has id 0.
    pub fn build(self) -> LayoutResult<LocationTable> {
        let mut index = IdIndex::default();
        index.reserve(self.locations.len());
        for (slot, loc) in self.locations.iter().enumerate() {
            if !(loc.pos.x.is_finite() && loc.pos.y.is_finite()) {
                return Err(LayoutError::InvalidCoordinate(loc.id));
            }
            if index.insert(loc.id, slot).is_some() {
                return Err(LayoutError::DuplicateLocation(loc.id));
            }
        }

        let depot = index
            .get(&LocationId::DEPOT)
            .map(|&slot| self.locations[slot].pos)
            .ok_or(LayoutError::MissingDepot)?;

        debug!(locations = self.locations.len(), "built location table");

        Ok(LocationTable {
            locations: self.locations,
            index,
            depot,
            spatial: OnceLock::new(),
        })
    }
}

impl Default for LocationTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}
