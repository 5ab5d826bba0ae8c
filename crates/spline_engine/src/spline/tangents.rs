//! Lokale Tangenten-Korrektur: leitet Bézier-Handles aus den Punktpositionen ab.
//!
//! Jede Änderung stört nur eine 5-Punkte-Umgebung; ein globales Gleichungssystem
//! ist nicht nötig.

use super::Spline;
use crate::geometry::DEGENERATE_LENGTH;
use crate::owner::SplineOwner;
use glam::Vec3;

impl<O: SplineOwner> Spline<O> {
    /// Leitet die Handles der Punkte `changed-2 ..= changed+2` neu ab.
    ///
    /// Innere Punkte werden vor den Endpunkten korrigiert, da die Endpunkte
    /// das Handle ihres direkten Nachbarn lesen. Endpunkt-Handles entsprechen
    /// damit immer einer vollständigen Neuableitung, auch wenn eine Korrektur in
    /// fester Nachbar-Reihenfolge (`i-1, i, i+1, i-2, i+2`) ein veraltetes
    /// Nachbar-Handle gelesen und ein anderes Ergebnis geliefert hätte.
    pub fn correct_tangents(&mut self, changed: usize) {
        let Some(last) = self.points.len().checked_sub(1) else {
            return;
        };
        let lo = changed.saturating_sub(2);
        let hi = changed.saturating_add(2).min(last);
        if lo > hi {
            return;
        }

        for i in lo..=hi {
            if i > 0 && i < last {
                self.correct_handles(i);
            }
        }
        if lo == 0 {
            self.correct_handles(0);
        }
        if hi == last && last > 0 {
            self.correct_handles(last);
        }
    }

    /// Leitet die Handles aller Punkte neu ab.
    pub fn correct_all_tangents(&mut self) {
        let Some(last) = self.points.len().checked_sub(1) else {
            return;
        };
        for i in 1..last {
            self.correct_handles(i);
        }
        self.correct_handles(0);
        if last > 0 {
            self.correct_handles(last);
        }
    }

    /// Handles eines einzelnen Punkts aus seinen Nachbarn.
    fn correct_handles(&mut self, index: usize) {
        let Some(last) = self.points.len().checked_sub(1) else {
            return;
        };
        if index > last {
            return;
        }
        let position = self.points[index].position;

        let (back, forward) = if last == 0 {
            (position, position)
        } else if index == 0 {
            let next = self.points[1];
            let forward = if last == 1 {
                position + (next.position - position) / 3.0
            } else {
                scaled_toward(position, next.back_handle, next.position)
            };
            (position, forward)
        } else if index == last {
            let prev = self.points[index - 1];
            let back = scaled_toward(position, prev.forward_handle, prev.position);
            (back, position)
        } else {
            let prev = self.points[index - 1].position;
            let next = self.points[index + 1].position;
            let span = prev.distance(next);
            if span < DEGENERATE_LENGTH {
                (position, position)
            } else {
                let len_back = prev.distance(position);
                let len_forward = next.distance(position);
                (
                    position + (prev - next) * (len_back / span / 3.0),
                    position + (next - prev) * (len_forward / span / 3.0),
                )
            }
        };

        let point = &mut self.points[index];
        point.back_handle = back;
        point.forward_handle = forward;
    }
}

/// Handle am Endpunkt: Richtung des Nachbar-Handles, Länge = Sehne / 3.
fn scaled_toward(position: Vec3, neighbor_handle: Vec3, neighbor_position: Vec3) -> Vec3 {
    let to_handle = neighbor_handle - position;
    let handle_len = to_handle.length();
    let chord = neighbor_position.distance(position);
    if handle_len > DEGENERATE_LENGTH && chord > DEGENERATE_LENGTH {
        position + to_handle * (chord / (handle_len * 3.0))
    } else {
        position
    }
}
