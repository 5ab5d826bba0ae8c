//! Polylinien-Hilfen für Bézier-Splines: Dicht-Sampling und Arc-Length-Resampling.
//!
//! Layer-neutral: arbeitet direkt auf `Spline` bzw. Punktlisten, ohne
//! Abhängigkeit zum Objekt- oder I/O-Layer.

use glam::{Affine3A, Vec3};
use spline_engine::{Spline, SplineOwner};

/// Dichte Polyline entlang aller Segmente (lokaler Raum, Endpunkt eingeschlossen).
///
/// `samples_per_segment`: Anzahl der Zwischenpunkte pro Segment (ohne Endpunkt).
pub fn dense_polyline<O: SplineOwner>(spline: &Spline<O>, samples_per_segment: usize) -> Vec<Vec3> {
    let samples = samples_per_segment.max(1);
    let segments = spline.segment_count();
    if segments == 0 {
        return spline.points().iter().map(|p| p.position).collect();
    }

    let mut result = Vec::with_capacity(segments * samples + 1);
    for seg in 0..segments {
        let steps = if seg == segments - 1 {
            samples + 1 // letztes Segment: Endpunkt einschließen
        } else {
            samples
        };
        for i in 0..steps {
            let t = i as f32 / samples as f32;
            result.push(spline.bezier_pos(seg, t));
        }
    }
    result
}

/// Bildet eine Polyline in den Weltraum ab.
pub fn to_world(points: &[Vec3], transform: &Affine3A) -> Vec<Vec3> {
    points
        .iter()
        .map(|&p| transform.transform_point3(p))
        .collect()
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[Vec3]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Höchstanzahl an Abschnitten beim Resampling.
pub const MAX_RESAMPLE_SEGMENTS: usize = 100_000;

/// Anzahl der Abschnitte für `resample_by_distance`; `None` wenn der Abstand
/// ungültig ist oder mehr als `MAX_RESAMPLE_SEGMENTS` Abschnitte ergäbe.
pub fn resample_segment_count(total_length: f32, max_segment_length: f32) -> Option<usize> {
    if !max_segment_length.is_finite() || max_segment_length <= 0.0 {
        return None;
    }
    let count = (total_length / max_segment_length).ceil().max(1.0);
    if !count.is_finite() || count > MAX_RESAMPLE_SEGMENTS as f32 {
        return None;
    }
    Some(count as usize)
}

/// Verteilt Punkte gleichmäßig (Arc-Length) entlang einer Polyline.
///
/// Die Abschnittsanzahl wird auf `MAX_RESAMPLE_SEGMENTS` begrenzt.
pub fn resample_by_distance(polyline: &[Vec3], max_segment_length: f32) -> Vec<Vec3> {
    let (Some(&first), Some(&last)) = (polyline.first(), polyline.last()) else {
        return Vec::new();
    };
    if polyline.len() < 2 {
        return vec![first];
    }

    let total = polyline_length(polyline);
    if total < f32::EPSILON || max_segment_length.is_nan() || max_segment_length <= 0.0 {
        return vec![first];
    }

    let segment_count = resample_segment_count(total, max_segment_length).unwrap_or_else(|| {
        log::warn!(
            "Abstand {} ergibt zu viele Abschnitte, begrenze auf {}",
            max_segment_length,
            MAX_RESAMPLE_SEGMENTS
        );
        MAX_RESAMPLE_SEGMENTS
    });
    let spacing = total / segment_count as f32;

    let mut result = Vec::with_capacity(segment_count + 1);
    result.push(first);

    let mut poly_idx = 0;
    let mut remainder = 0.0f32; // Rest-Distanz im aktuellen Polyline-Segment

    for _ in 1..segment_count {
        let mut needed = spacing;

        while poly_idx + 1 < polyline.len() {
            let seg_len = polyline[poly_idx].distance(polyline[poly_idx + 1]);
            let available = seg_len - remainder;

            if available >= needed {
                remainder += needed;
                let t = remainder / seg_len;
                result.push(polyline[poly_idx].lerp(polyline[poly_idx + 1], t));
                break;
            }
            needed -= available;
            remainder = 0.0;
            poly_idx += 1;
        }
    }

    // Endpunkt immer exakt übernehmen
    result.push(last);
    result
}
