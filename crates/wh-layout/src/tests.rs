//! Unit tests for wh-layout.
//!
//! All tests use hand-built layouts so they run without any spreadsheet
//! export.

#[cfg(test)]
mod helpers {
    use wh_core::{LocationId, Point};

    use crate::{LocationTable, LocationTableBuilder};

    /// Depot at the origin and three racks in a row:
    ///
    ///   0:(0,0)   1:(10,0)  2:(20,0)  3:(20,10)
    pub fn small_table() -> LocationTable {
        let mut b = LocationTableBuilder::new();
        b.add(LocationId::DEPOT, "Start", Point::new(0.0, 0.0));
        b.add(LocationId(1), "Rack 1", Point::new(10.0, 0.0));
        b.add(LocationId(2), "Rack 2", Point::new(20.0, 0.0));
        b.add(LocationId(3), "Rack 3", Point::new(20.0, 10.0));
        b.build().unwrap()
    }
}

// ── LocationTable ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod table {
    use wh_core::{LocationId, Point};

    use super::helpers::small_table;
    use crate::{LayoutError, LocationTableBuilder};

    #[test]
    fn lookup_known_ids() {
        let t = small_table();
        assert_eq!(t.len(), 4);
        assert_eq!(t.depot(), Point::new(0.0, 0.0));
        assert_eq!(t.get(LocationId(2)), Some(Point::new(20.0, 0.0)));
        assert_eq!(t.lookup(LocationId(3)).unwrap(), Point::new(20.0, 10.0));
        assert_eq!(t.location(LocationId(1)).unwrap().name, "Rack 1");
    }

    #[test]
    fn lookup_unknown_id_errors() {
        let t = small_table();
        assert!(t.get(LocationId(99)).is_none());
        assert!(matches!(
            t.lookup(LocationId(99)),
            Err(LayoutError::MissingLocation(LocationId(99)))
        ));
    }

    #[test]
    fn racks_exclude_depot_and_keep_order() {
        let t = small_table();
        let ids: Vec<_> = t.racks().map(|l| l.id.0).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn bounds_cover_all_locations() {
        let b = small_table().bounds().unwrap();
        assert_eq!(b.min, Point::new(0.0, 0.0));
        assert_eq!(b.max, Point::new(20.0, 10.0));
        assert_eq!(b.width(), 20.0);
        assert_eq!(b.height(), 10.0);
    }

    #[test]
    fn nearest_snaps_to_closest_location() {
        let t = small_table();
        assert_eq!(t.nearest(Point::new(19.0, 8.0)).unwrap().id, LocationId(3));
        assert_eq!(t.nearest(Point::new(-5.0, -5.0)).unwrap().id, LocationId::DEPOT);
    }

    #[test]
    fn nearest_is_stable_across_calls() {
        let t = small_table();
        let first = t.nearest(Point::new(11.0, 1.0)).unwrap().id;
        let second = t.nearest(Point::new(11.0, 1.0)).unwrap().id;
        assert_eq!(first, LocationId(1));
        assert_eq!(first, second);
    }

    #[test]
    fn non_finite_coordinate_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut b = LocationTableBuilder::new();
            b.add(LocationId::DEPOT, "Start", Point::new(0.0, 0.0));
            b.add(LocationId(1), "Rack 1", Point::new(10.0, bad));
            assert!(matches!(b.build(), Err(LayoutError::InvalidCoordinate(LocationId(1)))));
        }
    }

    #[test]
    fn duplicate_id_rejected() {
        let mut b = LocationTableBuilder::new();
        b.add(LocationId::DEPOT, "Start", Point::new(0.0, 0.0));
        b.add(LocationId(4), "Rack 4", Point::new(1.0, 1.0));
        b.add(LocationId(4), "Rack 4", Point::new(2.0, 2.0));
        assert!(matches!(b.build(), Err(LayoutError::DuplicateLocation(LocationId(4)))));
    }

    #[test]
    fn missing_depot_rejected() {
        let mut b = LocationTableBuilder::new();
        b.add(LocationId(1), "Rack 1", Point::new(1.0, 1.0));
        assert!(matches!(b.build(), Err(LayoutError::MissingDepot)));
    }
}

// ── Waypoint resolution ───────────────────────────────────────────────────────

#[cfg(test)]
mod resolve {
    use wh_core::{LocationId, MarkerSymbol, Point};

    use super::helpers::small_table;
    use crate::{resolve_path, resolve_routes, LayoutError, RouteDefinition};

    #[test]
    fn depot_stops_depot() {
        let t = small_table();
        let path = resolve_path(&t, &[LocationId(1), LocationId(2), LocationId(3)]).unwrap();
        let d = t.depot();
        assert_eq!(
            path.points(),
            &[
                d,
                Point::new(10.0, 0.0),
                Point::new(20.0, 0.0),
                Point::new(20.0, 10.0),
                d,
            ]
        );
        assert_eq!(path.len(), 5);
        assert_eq!(path.stop_count(), 3);
    }

    #[test]
    fn empty_stops_is_depot_pair() {
        let t = small_table();
        let path = resolve_path(&t, &[]).unwrap();
        assert_eq!(path.points(), &[t.depot(), t.depot()]);
        assert_eq!(path.stop_count(), 0);
        assert_eq!(path.total_distance(), 0.0);
    }

    #[test]
    fn repeated_stops_allowed() {
        let t = small_table();
        let path = resolve_path(&t, &[LocationId(1), LocationId(1)]).unwrap();
        assert_eq!(path.len(), 4);
        assert_eq!(path.points()[1], path.points()[2]);
    }

    #[test]
    fn missing_stop_fails_whole_route() {
        let t = small_table();
        let err = resolve_path(&t, &[LocationId(1), LocationId(42)]).unwrap_err();
        assert!(matches!(err, LayoutError::MissingLocation(LocationId(42))));
    }

    #[test]
    fn resolution_is_idempotent() {
        let t = small_table();
        let stops = [LocationId(3), LocationId(1)];
        assert_eq!(resolve_path(&t, &stops).unwrap(), resolve_path(&t, &stops).unwrap());
    }

    #[test]
    fn total_distance_sums_legs() {
        let t = small_table();
        // 0 → 2 (20 m) → 3 (10 m) → 0 (√500 m)
        let path = resolve_path(&t, &[LocationId(2), LocationId(3)]).unwrap();
        let expected = 20.0 + 10.0 + 500f64.sqrt();
        assert!((path.total_distance() - expected).abs() < 1e-9);
    }

    #[test]
    fn resolve_routes_all_or_nothing() {
        let t = small_table();
        let good = RouteDefinition::new("A", "#2ecc71", MarkerSymbol::Circle, vec![LocationId(1)]);
        let bad = RouteDefinition::new("B", "#e74c3c", MarkerSymbol::Cross, vec![LocationId(7)]);

        let paths = resolve_routes(&t, std::slice::from_ref(&good)).unwrap();
        assert_eq!(paths.len(), 1);

        assert!(resolve_routes(&t, &[good, bad]).is_err());
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use wh_core::{LocationId, Point};

    use crate::{load_layout_csv, load_layout_reader, LayoutError};

    const LAYOUT: &str = "\
Location,x,y\n\
Start,0,0\n\
Rack 1,10,6\n\
Rack 2,20,6\n\
3,30,6\n\
";

    #[test]
    fn parses_labels_and_coordinates() {
        let t = load_layout_reader(Cursor::new(LAYOUT)).unwrap();
        assert_eq!(t.len(), 4);
        assert_eq!(t.get(LocationId(2)), Some(Point::new(20.0, 6.0)));
        assert_eq!(t.get(LocationId(3)), Some(Point::new(30.0, 6.0)));
        assert_eq!(t.location(LocationId::DEPOT).unwrap().name, "Start");
    }

    #[test]
    fn blank_coordinates_are_skipped() {
        let csv = "Location,x,y\nStart,0,0\nRack 1,,6\nRack 2,20,6\n";
        let t = load_layout_reader(Cursor::new(csv)).unwrap();
        assert_eq!(t.len(), 2);
        assert!(!t.contains(LocationId(1)));
    }

    #[test]
    fn extra_columns_ignored() {
        let csv = "Location,x,y,Zone\nStart,0,0,A\nRack 1,5,5,B\n";
        let t = load_layout_reader(Cursor::new(csv)).unwrap();
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn non_numeric_coordinate_is_parse_error() {
        let csv = "Location,x,y\nStart,0,0\nRack 1,ten,6\n";
        assert!(matches!(
            load_layout_reader(Cursor::new(csv)),
            Err(LayoutError::Parse(_))
        ));
    }

    #[test]
    fn whitespace_around_fields_is_trimmed() {
        let csv = "Location, x, y\nStart, 0, 0\n Rack 1 , 10 , 6\n";
        let t = load_layout_reader(Cursor::new(csv)).unwrap();
        assert_eq!(t.get(LocationId(1)), Some(Point::new(10.0, 6.0)));
        assert_eq!(t.location(LocationId(1)).unwrap().name, "Rack 1");
    }

    #[test]
    fn blank_location_is_skipped() {
        let csv = "Location,x,y\nStart,0,0\n,5,5\nRack 1,10,6\n";
        let t = load_layout_reader(Cursor::new(csv)).unwrap();
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn nan_depot_rejected() {
        let csv = "Location,x,y\nStart,NaN,0\nRack 1,10,0\nRack 2,20,0\n";
        assert!(matches!(
            load_layout_reader(Cursor::new(csv)),
            Err(LayoutError::InvalidCoordinate(LocationId::DEPOT))
        ));
    }

    #[test]
    fn infinite_coordinate_rejected() {
        let csv = "Location,x,y\nStart,0,0\nRack 1,inf,0\n";
        assert!(matches!(
            load_layout_reader(Cursor::new(csv)),
            Err(LayoutError::InvalidCoordinate(LocationId(1)))
        ));
    }

    #[test]
    fn bad_label_is_core_parse_error() {
        let csv = "Location,x,y\nStart,0,0\nShelf A,1,1\n";
        assert!(matches!(
            load_layout_reader(Cursor::new(csv)),
            Err(LayoutError::Core(_))
        ));
    }

    #[test]
    fn layout_without_start_rejected() {
        let csv = "Location,x,y\nRack 1,1,1\n";
        assert!(matches!(
            load_layout_reader(Cursor::new(csv)),
            Err(LayoutError::MissingDepot)
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_layout_csv(std::path::Path::new("/nonexistent/layout.csv"));
        assert!(matches!(result, Err(LayoutError::Io(_))));
    }
}
