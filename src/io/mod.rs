//! JSON Import/Export für Spline-Objekte.
//!
//! Ein Dokument enthält den Welt-Transform (zerlegt in Translation, Rotation
//! und Skalierung) sowie die Kontrollpunkte inklusive gespeicherter Handles.

pub mod document;
pub mod reader;
pub mod writer;

pub use document::SplineDocument;
pub use reader::{load_spline_file, parse_spline_document};
pub use writer::{save_spline_file, write_spline_document};
