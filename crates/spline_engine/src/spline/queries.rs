//! Abfragen auf dem Spline: Bézier-Auswertung, Normalen, Bogenlänge, Ray-Picking.

use super::Spline;
use crate::geometry::{
    CubicSegment, LineSegment, NORMAL_EPSILON, banking_blend, exceeds_normal_epsilon,
};
use crate::owner::SplineOwner;
use glam::{Quat, Vec3};

/// Länge des Pick-Strahls in Welteinheiten.
pub const PICK_RAY_LENGTH: f32 = 100_000.0;

/// Teilkanten pro Segment für `nearest_edge`.
pub const EDGE_PICK_STEPS: usize = 6;

/// Parameter-Offset für die Normale per finiter Differenz.
const NORMAL_SAMPLE_OFFSET: f32 = 0.0001;

/// Position auf dem Spline als (Segment, Parameter).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplineParam {
    /// Index des Start-Punkts des Segments
    pub segment: usize,
    /// Anteil innerhalb des Segments (Bogenlänge / Segmentlänge)
    pub t: f32,
}

/// Treffer von `nearest_edge`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeHit {
    /// Punkt-Index am Segmentanfang
    pub start: usize,
    /// Punkt-Index am Segmentende
    pub end: usize,
    /// Abstand Strahl ↔ Kurve (Welteinheiten)
    pub distance: f32,
    /// Nächster Punkt auf der Kurve (Weltkoordinaten)
    pub position: Vec3,
}

/// Treffer von `nearest_point`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointHit {
    pub index: usize,
    /// Abstand Strahl ↔ Kontrollpunkt (Welteinheiten)
    pub distance: f32,
}

impl<O: SplineOwner> Spline<O> {
    /// Bézier-Segment zwischen Punkt `index` und `index + 1` (lokaler Raum).
    pub fn segment(&self, index: usize) -> Option<CubicSegment> {
        let a = self.points.get(index)?;
        let b = self.points.get(index.checked_add(1)?)?;
        Some(CubicSegment::new(
            a.position,
            a.forward_handle,
            b.back_handle,
            b.position,
        ))
    }

    /// Anzahl der Segmente (`len - 1`, mindestens 0).
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Position auf Segment `index` bei `t`; `Vec3::ZERO` für ungültige Segmente.
    pub fn bezier_pos(&self, index: usize, t: f32) -> Vec3 {
        self.segment(index).map_or(Vec3::ZERO, |seg| seg.point(t))
    }

    /// Normalisierte Tangente auf Segment `index`; `Vec3::ZERO` wenn entartet.
    pub fn bezier_tangent(&self, index: usize, t: f32) -> Vec3 {
        self.segment(index).map_or(Vec3::ZERO, |seg| seg.tangent(t))
    }

    /// Bogenlänge von Segment `index` im Bereich `[0, t]`.
    pub fn bezier_segment_length(&self, index: usize, t: f32) -> f32 {
        self.segment(index).map_or(0.0, |seg| seg.sampled_length(t))
    }

    /// Indizes ab dem letzten Punkt werden auf das letzte Segment mit `t + 1` abgebildet.
    fn remap_segment(&self, index: usize, t: f32) -> Option<(usize, f32)> {
        let last_segment = self.points.len().checked_sub(2)?;
        if index > last_segment {
            Some((last_segment, t + 1.0))
        } else {
            Some((index, t))
        }
    }

    /// Welt-Normale der Kurve: Differenz-Tangente × Welt-Up.
    pub fn bezier_normal(&self, index: usize, t: f32) -> Vec3 {
        let Some((i, t)) = self.remap_segment(index, t) else {
            return Vec3::ZERO;
        };
        let Some(segment) = self.segment(i) else {
            return Vec3::ZERO;
        };
        let world = segment.transformed(&self.owner.world_transform());

        let p0 = world.point(t + NORMAL_SAMPLE_OFFSET);
        let p1 = world.point(t - NORMAL_SAMPLE_OFFSET);
        let n = (p0 - p1).cross(Vec3::Z);
        if exceeds_normal_epsilon(n) {
            n.normalize()
        } else {
            n
        }
    }

    /// Lokale Normale inklusive Querneigung (Banking) zwischen den Segment-Endpunkten.
    pub fn local_bezier_normal(&self, index: usize, t: f32) -> Vec3 {
        let Some((i, t)) = self.remap_segment(index, t) else {
            return Vec3::ZERO;
        };
        let Some(segment) = self.segment(i) else {
            return Vec3::ZERO;
        };

        // Nur eine exakt verschwindende Tangente liefert keine Normale
        let e = segment.tangent(t);
        if e == Vec3::ZERO {
            return Vec3::ZERO;
        }

        let angle_start = self.points[i].angle;
        let angle_end = self.points[i + 1].angle;

        let n = if angle_start.abs() > NORMAL_EPSILON || angle_end.abs() > NORMAL_EPSILON {
            let blend = banking_blend(t);
            let angle = ((1.0 - blend) * angle_start + blend * angle_end).to_radians();
            Quat::from_axis_angle(e, angle) * Vec3::Z.cross(e)
        } else {
            Vec3::Z.cross(e)
        };

        if exceeds_normal_epsilon(n) {
            n.normalize()
        } else {
            n
        }
    }

    /// Gesamte Bogenlänge (Summe der Segmentlängen).
    pub fn spline_length(&self) -> f32 {
        (0..self.segment_count())
            .map(|i| self.bezier_segment_length(i, 1.0))
            .sum()
    }

    /// Rechnet eine Bogenlänge ab Splinestart in (Segment, Anteil) um.
    ///
    /// Hinter dem Ende wird `segment == len - 1` geliefert und der Anteil
    /// auf das letzte Segment bezogen; `bezier_normal` bildet das wieder
    /// auf das letzte Segment ab.
    pub fn pos_by_distance(&self, distance: f32) -> SplineParam {
        let mut accumulated = 0.0;
        let mut segment_length = 0.0;
        let mut index = 0;

        let segments = self.segment_count();
        while index < segments {
            segment_length = self.bezier_segment_length(index, 1.0);
            if accumulated + segment_length > distance {
                break;
            }
            accumulated += segment_length;
            index += 1;
        }

        let t = if segment_length > 0.0 {
            (distance - accumulated) / segment_length
        } else {
            0.0
        };
        SplineParam { segment: index, t }
    }

    /// Nächste Kurvenkante zum Strahl (Weltkoordinaten).
    ///
    /// Jedes Segment wird in `EDGE_PICK_STEPS` Teilkanten zerlegt.
    /// Liefert `None` bei weniger als `min_points()` Punkten.
    pub fn nearest_edge(&self, ray_origin: Vec3, ray_dir: Vec3) -> Option<EdgeHit> {
        if self.points.len() < self.owner.min_points() {
            return None;
        }

        let ray = LineSegment::from_ray(ray_origin, ray_dir, PICK_RAY_LENGTH);
        let wtm = self.owner.world_transform();
        let step = 1.0 / EDGE_PICK_STEPS as f32;

        let mut best: Option<EdgeHit> = None;
        let mut best_sq = f32::MAX;

        for i in 0..self.segment_count() {
            let Some(segment) = self.segment(i) else {
                continue;
            };
            let world = segment.transformed(&wtm);
            for k in 0..EDGE_PICK_STEPS {
                let t0 = k as f32 * step;
                let edge = LineSegment::new(world.point(t0), world.point(t0 + step));
                let (dist_sq, _, edge_t) = ray.segment_distance_sq(&edge);
                if dist_sq < best_sq {
                    best_sq = dist_sq;
                    best = Some(EdgeHit {
                        start: i,
                        end: i + 1,
                        distance: 0.0,
                        position: edge.point_at(edge_t),
                    });
                }
            }
        }

        best.map(|hit| EdgeHit {
            distance: best_sq.sqrt(),
            ..hit
        })
    }

    /// Nächster Kontrollpunkt zum Strahl (Weltkoordinaten).
    ///
    /// Abstände von exakt 0 werden übersprungen.
    pub fn nearest_point(&self, ray_origin: Vec3, ray_dir: Vec3) -> Option<PointHit> {
        let ray = LineSegment::from_ray(ray_origin, ray_dir, PICK_RAY_LENGTH);
        let wtm = self.owner.world_transform();

        let mut best: Option<(usize, f32)> = None;
        for (index, point) in self.points.iter().enumerate() {
            let (dist_sq, _) = ray.point_distance_sq(wtm.transform_point3(point.position));
            let closer = best.is_none_or(|(_, best_sq)| dist_sq < best_sq);
            if closer && dist_sq > 0.0 {
                best = Some((index, dist_sq));
            }
        }

        best.map(|(index, dist_sq)| PointHit {
            index,
            distance: dist_sq.sqrt(),
        })
    }
}
