//! Geteilte, layer-übergreifende Bausteine.
//!
//! Enthält Optionen und Polylinien-Hilfen, die von `app`, `io` und der
//! Binary gemeinsam genutzt werden.

pub mod options;
pub mod spline_geometry;

pub use options::SplineOptions;
pub use options::{MAX_POINTS, SELECTION_RADIUS};
