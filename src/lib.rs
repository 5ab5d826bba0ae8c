//! Spline Editor Library.
//! Bézier-Spline-Objekte, Persistenz und Optionen als Library exportiert
//! für die Binary, Tests und Benchmarks.

pub mod app;
pub mod cli;
pub mod io;
pub mod shared;

pub use app::{MergeEnd, ObjectOwner, SplineHit, SplineObject};
pub use io::{load_spline_file, parse_spline_document, save_spline_file, write_spline_document};
pub use shared::SplineOptions;
pub use spline_engine::{
    Aabb, EdgeHit, PointHit, Spline, SplineOwner, SplineParam, SplinePoint, StaticOwner,
};
