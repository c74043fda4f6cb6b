//! Marker symbol attached to a route for display.
//!
//! The core never interprets the symbol; it is carried through to the
//! rendering adapter next to the route's color token.

/// Shape used to draw a worker marker.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[non_exhaustive]
pub enum MarkerSymbol {
    #[default]
    Circle,
    Cross,
    Square,
    Star,
}

impl MarkerSymbol {
    /// Lowercase label, used as the CSV/JSON column value.
    pub fn as_str(self) -> &'static str {
        match self {
            MarkerSymbol::Circle => "circle",
            MarkerSymbol::Cross  => "cross",
            MarkerSymbol::Square => "square",
            MarkerSymbol::Star   => "star",
        }
    }
}

impl std::fmt::Display for MarkerSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
