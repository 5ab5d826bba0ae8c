//! Spline-Engine: Bézier-Spline-Modell ohne UI- und I/O-Abhängigkeiten.
//!
//! Enthält die Punktfolge mit Tangenten-Handles, die lokale Tangenten-Korrektur
//! nach Änderungen sowie Längen- und Ray-Picking-Abfragen.
//! Transform und Lifecycle-Hooks liefert der Besitzer über [`SplineOwner`].

pub mod geometry;
pub mod owner;
pub mod point;
pub mod spline;

pub use geometry::{Aabb, CubicSegment, LineSegment};
pub use owner::{DEFAULT_MIN_POINTS, SplineOwner, StaticOwner};
pub use point::SplinePoint;
pub use spline::{EdgeHit, PointHit, Spline, SplineParam};
