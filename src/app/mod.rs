//! Application-Layer: Spline-Objekte und ihre Editier-Operationen.

pub mod object;

pub use object::{MergeEnd, ObjectOwner, SplineHit, SplineObject};
