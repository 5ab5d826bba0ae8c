//! Spline-Objekt: Editor-seitiger Besitzer eines Bézier-Splines.
//!
//! Aufgeteilt in:
//! - `owner`   : `ObjectOwner` (Transform, Mindestanzahl, Dirty-Flags der Hooks)
//! - `state`   : Struct, Konstruktoren, delegierte Punkt-Operationen, Bounding-Box
//! - `editing` : Punkt-Attribute, Umkehren, Teilen, Zusammenführen
//! - `picking` : Hit-Test, Einfügen auf Kanten, Arc-Length-Sampling

mod editing;
mod owner;
mod picking;
mod state;

pub use editing::MergeEnd;
pub use owner::ObjectOwner;
pub use picking::SplineHit;
pub use state::SplineObject;
