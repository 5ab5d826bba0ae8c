//! Hit-Test und abgeleitete Abfragen im Weltraum.

use super::state::SplineObject;
use crate::shared::spline_geometry::{dense_polyline, resample_by_distance, to_world};
use glam::Vec3;

/// Ergebnis eines Hit-Tests gegen ein Spline-Objekt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplineHit {
    /// Kontrollpunkt innerhalb des Auswahlradius
    Point { index: usize, distance: f32 },
    /// Kurvenkante zwischen `start` und `end` (Position in Weltkoordinaten)
    Edge {
        start: usize,
        end: usize,
        position: Vec3,
        distance: f32,
    },
}

impl SplineObject {
    /// Hit-Test mit dem Auswahlradius aus den Optionen.
    ///
    /// Kontrollpunkte haben Vorrang vor Kanten.
    pub fn hit_test(&self, ray_origin: Vec3, ray_dir: Vec3) -> Option<SplineHit> {
        let radius = self.options.selection_radius;

        if let Some(hit) = self
            .spline
            .nearest_point(ray_origin, ray_dir)
            .filter(|hit| hit.distance <= radius)
        {
            return Some(SplineHit::Point {
                index: hit.index,
                distance: hit.distance,
            });
        }

        self.spline
            .nearest_edge(ray_origin, ray_dir)
            .filter(|hit| hit.distance <= radius)
            .map(|hit| SplineHit::Edge {
                start: hit.start,
                end: hit.end,
                position: hit.position,
                distance: hit.distance,
            })
    }

    /// Fügt am getroffenen Kantenpunkt einen neuen Kontrollpunkt ein.
    ///
    /// Gibt den Index des neuen Punkts zurück, `None` ohne Kanten-Treffer
    /// oder bei singulärem Welt-Transform.
    pub fn insert_point_on_edge(&mut self, ray_origin: Vec3, ray_dir: Vec3) -> Option<usize> {
        let hit = self
            .spline
            .nearest_edge(ray_origin, ray_dir)
            .filter(|hit| hit.distance <= self.options.selection_radius)?;
        let Some(world_to_local) = self.world_to_local() else {
            log::debug!("Einfügen auf Kante ignoriert: Welt-Transform nicht invertierbar");
            return None;
        };
        let local = world_to_local.transform_point3(hit.position);
        self.insert_point(Some(hit.end), local)
    }

    /// Gleichmäßig verteilte Weltpositionen entlang der Kurve.
    pub fn sample_by_distance(&self, step: f32) -> Vec<Vec3> {
        let world = self.world_polyline();
        resample_by_distance(&world, step)
    }

    /// Dichte Polyline der Kurve im Weltraum.
    pub fn world_polyline(&self) -> Vec<Vec3> {
        let dense = dense_polyline(&self.spline, self.options.samples_per_segment);
        to_world(&dense, &self.world_transform())
    }

    /// Bogenlänge im Weltraum (über die dichte Polyline).
    pub fn world_length(&self) -> f32 {
        crate::shared::spline_geometry::polyline_length(&self.world_polyline())
    }
}
