//! Embedded 30-rack warehouse layout.
//!
//! Racks sit on a 5-column grid, 10 m apart along x and 8 m apart along y,
//! with the depot ("Start") at the origin:
//!
//! ```text
//!   y=50  26 27 28 29 30
//!   ...
//!   y=10   1  2  3  4  5
//!          x=10 ...  x=50
//! ```

use std::io::Cursor;

use wh_layout::{load_layout_reader, LayoutResult, LocationTable};

const LAYOUT_CSV: &str = "\
Location,x,y\n\
Start,0,0\n\
Rack 1,10,10\n\
Rack 2,20,10\n\
Rack 3,30,10\n\
Rack 4,40,10\n\
Rack 5,50,10\n\
Rack 6,10,18\n\
Rack 7,20,18\n\
Rack 8,30,18\n\
Rack 9,40,18\n\
Rack 10,50,18\n\
Rack 11,10,26\n\
Rack 12,20,26\n\
Rack 13,30,26\n\
Rack 14,40,26\n\
Rack 15,50,26\n\
Rack 16,10,34\n\
Rack 17,20,34\n\
Rack 18,30,34\n\
Rack 19,40,34\n\
Rack 20,50,34\n\
Rack 21,10,42\n\
Rack 22,20,42\n\
Rack 23,30,42\n\
Rack 24,40,42\n\
Rack 25,50,42\n\
Rack 26,10,50\n\
Rack 27,20,50\n\
Rack 28,30,50\n\
Rack 29,40,50\n\
Rack 30,50,50\n\
";

pub fn build_layout() -> LayoutResult<LocationTable> {
    load_layout_reader(Cursor::new(LAYOUT_CSV))
}
