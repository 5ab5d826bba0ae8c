//! Geometrie-Primitive: kubisches Bézier-Segment, Liniensegment-Abstände, AABB.
//!
//! Layer-neutral und zustandslos: das Spline-Modell setzt daraus seine
//! Abfragen zusammen.

use glam::{Affine3A, DVec3, Vec3};

/// Unterteilungen für die Polylinien-Approximation der Segmentlänge.
pub const SEGMENT_LENGTH_STEPS: usize = 32;

/// Unterhalb dieser Länge gilt ein Vektor als entartet.
pub const DEGENERATE_LENGTH: f32 = 1e-6;

/// Komponenten-Schwelle, ab der eine Normale normalisiert wird.
pub const NORMAL_EPSILON: f32 = 1e-5;

/// Kubisches Bézier-Segment aus vier Kontrollpunkten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub p0: Vec3,
    pub p1: Vec3,
    pub p2: Vec3,
    pub p3: Vec3,
}

impl CubicSegment {
    pub fn new(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
    pub fn point(&self, t: f32) -> Vec3 {
        let inv = 1.0 - t;
        let inv2 = inv * inv;
        let t2 = t * t;
        self.p0 * (inv2 * inv)
            + self.p1 * (3.0 * t * inv2)
            + self.p2 * (3.0 * t2 * inv)
            + self.p3 * (t2 * t)
    }

    /// Ableitung B'(t) / 3 (Richtung reicht für Tangente und Normale).
    pub fn derivative(&self, t: f32) -> Vec3 {
        let inv = 1.0 - t;
        -self.p0 * (inv * inv)
            + self.p1 * (inv * (inv - 2.0 * t))
            + self.p2 * (t * (2.0 * inv - t))
            + self.p3 * (t * t)
    }

    /// Normalisierte Tangente, `Vec3::ZERO` bei verschwindender Ableitung.
    pub fn tangent(&self, t: f32) -> Vec3 {
        self.derivative(t).normalize_or_zero()
    }

    /// Bogenlänge von 0 bis `t`, über Sehnen angenähert.
    ///
    /// Es werden `floor(t·32 + 1)` Sehnen zu den Parametern `t·k/kn` summiert.
    pub fn sampled_length(&self, t: f32) -> f32 {
        let kn = t * SEGMENT_LENGTH_STEPS as f32 + 1.0;
        let mut length = 0.0;
        let mut prev = self.point(0.0);
        let mut k = 1.0f32;
        while k <= kn {
            let next = self.point(t * k / kn);
            length += prev.distance(next);
            prev = next;
            k += 1.0;
        }
        length
    }

    /// Segment mit allen vier Punkten durch `transform` abgebildet.
    pub fn transformed(&self, transform: &Affine3A) -> Self {
        Self {
            p0: transform.transform_point3(self.p0),
            p1: transform.transform_point3(self.p1),
            p2: transform.transform_point3(self.p2),
            p3: transform.transform_point3(self.p3),
        }
    }
}

/// Endliches Liniensegment `start → end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Vec3,
    pub end: Vec3,
}

impl LineSegment {
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }

    /// Segment entlang eines Strahls mit fester Länge.
    pub fn from_ray(origin: Vec3, direction: Vec3, length: f32) -> Self {
        Self::new(origin, origin + direction * length)
    }

    /// Punkt bei Parameter `t` (0 = Start, 1 = Ende).
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.start + (self.end - self.start) * t
    }

    /// Quadratischer Abstand von `point` zum Segment und Parameter des Lotfußpunkts.
    ///
    /// Rechnet intern in `f64`, da Pick-Strahlen sehr lang sind.
    pub fn point_distance_sq(&self, point: Vec3) -> (f32, f32) {
        let a = self.start.as_dvec3();
        let d = self.end.as_dvec3() - a;
        let p = point.as_dvec3();

        let dd = d.length_squared();
        let t = if dd > f64::EPSILON {
            ((p - a).dot(d) / dd).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let closest = a + d * t;
        (closest.distance_squared(p) as f32, t as f32)
    }

    /// Quadratischer Abstand zwischen zwei Segmenten.
    ///
    /// Gibt `(dist², s, t)` zurück; `s` parametrisiert `self`, `t` parametrisiert `other`.
    pub fn segment_distance_sq(&self, other: &LineSegment) -> (f32, f32, f32) {
        let (dist_sq, s, t) = closest_params(
            self.start.as_dvec3(),
            self.end.as_dvec3(),
            other.start.as_dvec3(),
            other.end.as_dvec3(),
        );
        (dist_sq as f32, s as f32, t as f32)
    }
}

/// Nächste Punkte zweier Segmente p1→q1 und p2→q2 (Parameter jeweils geklemmt).
fn closest_params(p1: DVec3, q1: DVec3, p2: DVec3, q2: DVec3) -> (f64, f64, f64) {
    const EPS: f64 = 1e-12;

    let d1 = q1 - p1;
    let d2 = q2 - p2;
    let r = p1 - p2;
    let a = d1.length_squared();
    let e = d2.length_squared();
    let f = d2.dot(r);

    let (s, t) = if a <= EPS && e <= EPS {
        (0.0, 0.0)
    } else if a <= EPS {
        (0.0, (f / e).clamp(0.0, 1.0))
    } else {
        let c = d1.dot(r);
        if e <= EPS {
            ((-c / a).clamp(0.0, 1.0), 0.0)
        } else {
            let b = d1.dot(d2);
            let denom = a * e - b * b;
            let mut s = if denom > EPS * a * e {
                ((b * f - c * e) / denom).clamp(0.0, 1.0)
            } else {
                // Parallel: beliebiger Startpunkt auf Segment 1
                0.0
            };
            let mut t = (b * s + f) / e;
            if t < 0.0 {
                t = 0.0;
                s = (-c / a).clamp(0.0, 1.0);
            } else if t > 1.0 {
                t = 1.0;
                s = ((b - c) / a).clamp(0.0, 1.0);
            }
            (s, t)
        }
    };

    let c1 = p1 + d1 * s;
    let c2 = p2 + d2 * t;
    (c1.distance_squared(c2), s, t)
}

/// Achsenparallele Bounding-Box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Umschließende Box aller Punkte; `None` bei leerer Eingabe.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bbox = Self {
            min: first,
            max: first,
        };
        for p in iter {
            bbox.add_point(p);
        }
        Some(bbox)
    }

    pub fn add_point(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Vergrößert die Box um `margin` in alle Richtungen.
    pub fn expanded(&self, margin: f32) -> Self {
        Self {
            min: self.min - Vec3::splat(margin),
            max: self.max + Vec3::splat(margin),
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn contains(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// Box nach Transformation (über alle 8 Ecken).
    pub fn transformed(&self, transform: &Affine3A) -> Self {
        let corners = (0..8).map(|i| {
            Vec3::new(
                if i & 1 == 0 { self.min.x } else { self.max.x },
                if i & 2 == 0 { self.min.y } else { self.max.y },
                if i & 4 == 0 { self.min.z } else { self.max.z },
            )
        });
        let mut out = Self {
            min: Vec3::splat(f32::MAX),
            max: Vec3::splat(f32::MIN),
        };
        for corner in corners {
            out.add_point(transform.transform_point3(corner));
        }
        out
    }
}

/// Überblendfaktor der Querneigung zwischen zwei Punkten.
///
/// Kubisches Ease auf `2t - 1`, zurück in [0, 1] abgebildet:
/// flach an den Kontrollpunkten, steil in der Segmentmitte.
pub fn banking_blend(t: f32) -> f32 {
    let af = t * 2.0 - 1.0;
    let ed = if af < 0.0 { -1.0 } else { 1.0 };
    let inner = ed - af;
    let eased = ed - inner * inner * inner;
    (eased + 1.0) / 2.0
}

/// `true` wenn mindestens eine Komponente betragsmäßig über `NORMAL_EPSILON` liegt.
pub fn exceeds_normal_epsilon(v: Vec3) -> bool {
    v.abs().max_element() > NORMAL_EPSILON
}
