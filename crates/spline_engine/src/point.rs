//! Einzelner Kontrollpunkt eines Splines.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Kontrollpunkt mit eingehendem (`back`) und ausgehendem (`forw`) Bézier-Handle.
///
/// Die Handles werden von der Tangenten-Korrektur abgeleitet; Winkel und Breite
/// sind kosmetische Attribute für Straßen-/Schienen-Splines.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SplinePoint {
    /// Position im lokalen Raum des Besitzers
    #[serde(rename = "pos")]
    pub position: Vec3,
    /// Handle des Segments, das an diesem Punkt endet
    #[serde(rename = "back")]
    pub back_handle: Vec3,
    /// Handle des Segments, das an diesem Punkt beginnt
    #[serde(rename = "forw")]
    pub forward_handle: Vec3,
    /// Querneigung (Banking) in Grad
    #[serde(default)]
    pub angle: f32,
    /// Breite am Punkt (nur relevant wenn `uses_default_width == false`)
    #[serde(default)]
    pub width: f32,
    #[serde(rename = "isDefaultWidth", default = "default_uses_default_width")]
    pub uses_default_width: bool,
}

fn default_uses_default_width() -> bool {
    true
}

impl SplinePoint {
    /// Erstellt einen Punkt, dessen Handles auf der Position liegen.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            back_handle: position,
            forward_handle: position,
            angle: 0.0,
            width: 0.0,
            uses_default_width: true,
        }
    }

    /// `true` wenn beide Handles exakt auf der Position liegen.
    pub fn has_degenerate_handles(&self) -> bool {
        self.back_handle == self.position && self.forward_handle == self.position
    }

    /// Vertauscht eingehendes und ausgehendes Handle (für Richtungsumkehr).
    pub fn swap_handles(&mut self) {
        std::mem::swap(&mut self.back_handle, &mut self.forward_handle);
    }
}

impl From<Vec3> for SplinePoint {
    fn from(position: Vec3) -> Self {
        Self::new(position)
    }
}

/// Gleichheit nur über die Position; Handles, Winkel und Breite sind abgeleitet.
impl PartialEq for SplinePoint {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}
