//! Bézier-Spline-Modell: geordnete Kontrollpunkte mit abgeleiteten Tangenten-Handles.
//!
//! Aufgeteilt in:
//! - `mod.rs`   : Struct, Punkt-Mutationen, Selektion
//! - `tangents` : lokale Handle-Korrektur nach Änderungen
//! - `queries`  : Bézier-Auswertung, Bogenlänge, Ray-Picking

mod queries;
mod tangents;

pub use queries::{EdgeHit, PointHit, SplineParam};

use crate::owner::SplineOwner;
use crate::point::SplinePoint;
use glam::Vec3;

/// Spline aus kubischen Bézier-Segmenten zwischen aufeinanderfolgenden Punkten.
///
/// Die Reihenfolge der Punkte bestimmt die Segment-Nachbarschaft.
/// Alle Index-Mutationen ignorieren ungültige Eingaben stillschweigend;
/// Aufrufer prüfen Vorbedingungen über `point_count()` / `min_points()`.
#[derive(Debug, Clone)]
pub struct Spline<O: SplineOwner> {
    points: Vec<SplinePoint>,
    selected: Option<usize>,
    owner: O,
}

impl<O: SplineOwner> Spline<O> {
    /// Erstellt einen leeren Spline für den gegebenen Besitzer.
    pub fn new(owner: O) -> Self {
        Self {
            points: Vec::new(),
            selected: None,
            owner,
        }
    }

    /// Übernimmt bestehende Punkte unverändert (inkl. gespeicherter Handles).
    pub fn from_points(owner: O, points: Vec<SplinePoint>) -> Self {
        Self {
            points,
            selected: None,
            owner,
        }
    }

    pub fn owner(&self) -> &O {
        &self.owner
    }

    pub fn owner_mut(&mut self) -> &mut O {
        &mut self.owner
    }

    pub fn min_points(&self) -> usize {
        self.owner.min_points()
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Lokale Position des Punkts, `None` außerhalb des Bereichs.
    pub fn point(&self, index: usize) -> Option<Vec3> {
        self.points.get(index).map(|p| p.position)
    }

    pub fn points(&self) -> &[SplinePoint] {
        &self.points
    }

    pub fn selected_point(&self) -> Option<usize> {
        self.selected
    }

    pub fn has_selected_point(&self) -> bool {
        self.selected.is_some()
    }

    /// Weltposition des selektierten Punkts (Transform vom Besitzer).
    pub fn selected_point_world_position(&self) -> Option<Vec3> {
        let position = self.point(self.selected?)?;
        Some(self.owner.world_transform().transform_point3(position))
    }

    /// Fügt einen Punkt ein und gibt den tatsächlich verwendeten Index zurück.
    ///
    /// `None` oder ein Index außerhalb `[0, len)` hängt den Punkt an,
    /// sonst wird vor `index` eingefügt. Der neue Punkt wird selektiert.
    pub fn insert_point(&mut self, index: Option<usize>, position: Vec3) -> usize {
        let used_index = match index {
            Some(i) if i < self.points.len() => {
                self.points.insert(i, SplinePoint::new(position));
                i
            }
            _ => {
                self.points.push(SplinePoint::new(position));
                self.points.len() - 1
            }
        };

        if let Some(selected) = self.selected.filter(|&s| s >= used_index) {
            // Bestehende Selektion wandert mit ihrem Punkt
            self.selected = Some(selected + 1);
        }

        self.correct_tangents(used_index);
        self.owner.on_point_moved();
        self.select_point(Some(used_index));
        used_index
    }

    /// Entfernt den Punkt, sofern mehr als `min_points()` vorhanden sind.
    pub fn remove_point(&mut self, index: usize) {
        if index >= self.points.len() || self.points.len() <= self.owner.min_points() {
            log::debug!(
                "remove_point({}) ignoriert: {} Punkte, Minimum {}",
                index,
                self.points.len(),
                self.owner.min_points()
            );
            return;
        }

        if self.selected == Some(index) {
            self.select_point(None);
        }

        self.points.remove(index);

        if let Some(selected) = self.selected.filter(|&s| s > index) {
            self.selected = Some(selected - 1);
        }

        if let Some(last) = self.points.len().checked_sub(1) {
            self.correct_tangents(index.min(last));
        }
        self.owner.on_point_moved();
    }

    /// Setzt die Position eines Punkts und leitet die Handles der Umgebung neu ab.
    pub fn update_point(&mut self, index: usize, position: Vec3) {
        let Some(point) = self.points.get_mut(index) else {
            log::debug!("update_point({}) außerhalb des Bereichs ignoriert", index);
            return;
        };
        point.position = position;
        self.correct_tangents(index);
        self.owner.on_point_moved();
    }

    /// Ändert die Selektion; gleiche Selektion löst keinen Hook aus.
    pub fn select_point(&mut self, index: Option<usize>) {
        if self.selected == index {
            return;
        }
        if let Some(i) = index.filter(|&i| i >= self.points.len()) {
            log::debug!("select_point({}) außerhalb des Bereichs ignoriert", i);
            return;
        }
        self.selected = index;
        self.owner.on_selection_changed();
    }

    /// Setzt die Querneigung eines Punkts (Grad).
    pub fn set_point_angle(&mut self, index: usize, angle: f32) {
        if let Some(point) = self.points.get_mut(index) {
            point.angle = angle;
            self.owner.on_point_moved();
        }
    }

    /// Setzt die Breite eines Punkts und markiert sie als individuell.
    pub fn set_point_width(&mut self, index: usize, width: f32) {
        if let Some(point) = self.points.get_mut(index) {
            point.width = width;
            point.uses_default_width = false;
            self.owner.on_point_moved();
        }
    }

    pub fn set_point_default_width(&mut self, index: usize, uses_default_width: bool) {
        if let Some(point) = self.points.get_mut(index) {
            point.uses_default_width = uses_default_width;
            self.owner.on_point_moved();
        }
    }

    /// Kehrt die Laufrichtung um; Handles werden getauscht, die Selektion folgt ihrem Punkt.
    pub fn reverse(&mut self) {
        self.points.reverse();
        for point in &mut self.points {
            point.swap_handles();
        }
        if let Some(selected) = self.selected {
            self.selected = Some(self.points.len() - 1 - selected);
            self.owner.on_selection_changed();
        }
        self.owner.on_point_moved();
    }

    /// Ersetzt die komplette Punktfolge und leitet alle Handles neu ab.
    ///
    /// Eine Selektion außerhalb der neuen Länge wird aufgehoben.
    pub fn replace_points(&mut self, points: Vec<SplinePoint>) {
        self.points = points;
        if self.selected.is_some_and(|s| s >= self.points.len()) {
            self.select_point(None);
        }
        self.correct_all_tangents();
        self.owner.on_point_moved();
    }
}

/// Gleichheit über die Punktfolge (Positionen), unabhängig von Besitzer und Selektion.
impl<O: SplineOwner> PartialEq for Spline<O> {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
    }
}
