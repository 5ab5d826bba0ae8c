//! Besitzer-Zustand eines `SplineObject` für die Spline-Hooks.

use glam::Affine3A;
use spline_engine::SplineOwner;

/// Transform und Dirty-Flags, die das Spline-Modell über seine Hooks setzt.
///
/// Das Objekt wertet die Flags nach jeder Operation aus
/// (Bounding-Box neu berechnen, UI aktualisieren).
#[derive(Debug, Clone)]
pub struct ObjectOwner {
    pub(crate) transform: Affine3A,
    pub(crate) min_points: usize,
    /// Punkte geändert → Bounding-Box veraltet
    pub(crate) bounds_dirty: bool,
    /// Selektion geändert → Property-Anzeige veraltet
    pub(crate) ui_dirty: bool,
    /// Zähler aller Punkt-Mutationen
    pub(crate) revision: u64,
}

impl ObjectOwner {
    pub fn new(transform: Affine3A, min_points: usize) -> Self {
        Self {
            transform,
            min_points,
            bounds_dirty: true,
            ui_dirty: false,
            revision: 0,
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl SplineOwner for ObjectOwner {
    fn world_transform(&self) -> Affine3A {
        self.transform
    }

    fn min_points(&self) -> usize {
        self.min_points
    }

    fn on_point_moved(&mut self) {
        self.bounds_dirty = true;
        self.revision += 1;
    }

    fn on_selection_changed(&mut self) {
        self.ui_dirty = true;
    }
}
