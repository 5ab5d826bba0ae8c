//! Struct und Grundoperationen des Spline-Objekts.

use super::owner::ObjectOwner;
use crate::shared::SplineOptions;
use glam::{Affine3A, Vec3};
use spline_engine::{Aabb, Spline, SplinePoint};

/// Spline mit Welt-Transform, Punkt-Policy und gecachter Bounding-Box.
#[derive(Debug, Clone)]
pub struct SplineObject {
    pub(crate) spline: Spline<ObjectOwner>,
    pub(crate) options: SplineOptions,
    /// Lokale Bounding-Box (Positionen + Handles, um halbe Breite erweitert)
    pub(crate) bounds: Option<Aabb>,
}

impl SplineObject {
    /// Erstellt ein leeres Objekt mit Identitäts-Transform.
    pub fn new(options: SplineOptions) -> Self {
        Self::from_points(Vec::new(), Affine3A::IDENTITY, options)
    }

    /// Übernimmt gespeicherte Punkte unverändert (inkl. Handles).
    pub fn from_points(
        points: Vec<SplinePoint>,
        transform: Affine3A,
        options: SplineOptions,
    ) -> Self {
        let owner = ObjectOwner::new(transform, options.min_points);
        let mut object = Self {
            spline: Spline::from_points(owner, points),
            options,
            bounds: None,
        };
        object.after_edit();
        object
    }

    pub fn spline(&self) -> &Spline<ObjectOwner> {
        &self.spline
    }

    pub fn options(&self) -> &SplineOptions {
        &self.options
    }

    pub fn world_transform(&self) -> Affine3A {
        self.spline.owner().transform
    }

    pub fn set_world_transform(&mut self, transform: Affine3A) {
        self.spline.owner_mut().transform = transform;
    }

    /// Inverser Welt-Transform; `None` wenn der Transform singulär ist
    /// (z. B. Skalierung 0 aus einem Dokument).
    pub fn world_to_local(&self) -> Option<Affine3A> {
        let transform = self.world_transform();
        let det = transform.matrix3.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        Some(transform.inverse())
    }

    /// Zähler aller Punkt-Mutationen seit Erstellung.
    pub fn revision(&self) -> u64 {
        self.spline.owner().revision()
    }

    /// Liefert und quittiert das UI-Dirty-Flag (Selektion geändert).
    pub fn take_ui_dirty(&mut self) -> bool {
        std::mem::take(&mut self.spline.owner_mut().ui_dirty)
    }

    /// Verschiebt einen Punkt (lokaler Raum).
    pub fn set_point(&mut self, index: usize, position: Vec3) {
        self.spline.update_point(index, position);
        self.after_edit();
    }

    /// Fügt einen Punkt ein; `None` wenn `max_points` bereits erreicht ist.
    pub fn insert_point(&mut self, index: Option<usize>, position: Vec3) -> Option<usize> {
        if self.spline.point_count() >= self.options.max_points {
            log::warn!(
                "Punkt nicht eingefügt: Maximum von {} Punkten erreicht",
                self.options.max_points
            );
            return None;
        }
        let used = self.spline.insert_point(index, position);
        self.after_edit();
        Some(used)
    }

    pub fn remove_point(&mut self, index: usize) {
        self.spline.remove_point(index);
        self.after_edit();
    }

    pub fn select_point(&mut self, index: Option<usize>) {
        self.spline.select_point(index);
    }

    /// Leitet alle Handles aus den Positionen neu ab.
    pub fn rederive_tangents(&mut self) {
        let points = self.spline.points().to_vec();
        self.spline.replace_points(points);
        self.after_edit();
    }

    /// Lokale Bounding-Box; `None` für einen leeren Spline.
    pub fn local_bounds(&self) -> Option<Aabb> {
        self.bounds
    }

    /// Bounding-Box im Weltraum.
    pub fn world_bounds(&self) -> Option<Aabb> {
        self.bounds
            .map(|bounds| bounds.transformed(&self.world_transform()))
    }

    /// Wertet die Hook-Flags nach einer Mutation aus.
    pub(crate) fn after_edit(&mut self) {
        if !self.spline.owner().bounds_dirty {
            return;
        }
        self.bounds = calc_bounds(self.spline.points());
        self.spline.owner_mut().bounds_dirty = false;
    }
}

/// Bounding-Box über Positionen und Handles, erweitert um die halbe maximale Breite.
fn calc_bounds(points: &[SplinePoint]) -> Option<Aabb> {
    let bbox = Aabb::from_points(
        points
            .iter()
            .flat_map(|p| [p.position, p.back_handle, p.forward_handle]),
    )?;
    let max_width = points
        .iter()
        .filter(|p| !p.uses_default_width)
        .map(|p| p.width)
        .fold(0.0f32, f32::max);
    Some(bbox.expanded(max_width * 0.5))
}
