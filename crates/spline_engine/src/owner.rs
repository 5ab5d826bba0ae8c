//! Fähigkeits-Schnittstelle zwischen Spline-Modell und seinem Besitzer.

use glam::Affine3A;

/// Standard-Mindestanzahl an Punkten eines Splines.
pub const DEFAULT_MIN_POINTS: usize = 2;

/// Vom Besitzer bereitgestellte Fähigkeiten (Transform, Policy, Hooks).
///
/// Wird dem [`Spline`](crate::Spline) bei der Konstruktion übergeben.
pub trait SplineOwner {
    /// Lokal → Welt.
    fn world_transform(&self) -> Affine3A;

    /// Untergrenze für `remove_point`.
    fn min_points(&self) -> usize {
        DEFAULT_MIN_POINTS
    }

    /// Nach jeder Punkt-Mutation (Bounding-Box, Abhängige aktualisieren).
    fn on_point_moved(&mut self) {}

    /// Nach jeder Selektionsänderung.
    fn on_selection_changed(&mut self) {}
}

/// Besitzer mit festem Transform und ohne Hooks.
///
/// Für freistehende Splines, z.B. in Property-Editoren.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticOwner {
    pub transform: Affine3A,
    pub min_points: usize,
}

impl StaticOwner {
    pub fn new(transform: Affine3A) -> Self {
        Self {
            transform,
            min_points: DEFAULT_MIN_POINTS,
        }
    }
}

impl Default for StaticOwner {
    fn default() -> Self {
        Self::new(Affine3A::IDENTITY)
    }
}

impl SplineOwner for StaticOwner {
    fn world_transform(&self) -> Affine3A {
        self.transform
    }

    fn min_points(&self) -> usize {
        self.min_points
    }
}
