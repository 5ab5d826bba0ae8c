//! Editier-Operationen: Punkt-Attribute, Umkehren, Teilen, Zusammenführen.

use super::state::SplineObject;
use glam::Affine3A;
use spline_engine::SplinePoint;

/// Abstand, unter dem zwei Verbindungspunkte beim Zusammenführen als identisch gelten.
const MERGE_JOINT_EPSILON: f32 = 1e-4;

/// Ende, an dem ein anderer Spline angehängt wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeEnd {
    /// Vor dem ersten Punkt
    Start,
    /// Hinter dem letzten Punkt
    #[default]
    End,
}

impl SplineObject {
    /// Querneigung des selektierten Punkts (0 ohne Selektion).
    pub fn point_angle(&self) -> f32 {
        self.selected().map_or(0.0, |p| p.angle)
    }

    /// Setzt die Querneigung des selektierten Punkts, geklemmt auf `±angle_range`.
    pub fn set_point_angle(&mut self, angle: f32) {
        let Some(index) = self.spline.selected_point() else {
            return;
        };
        let angle = self.options.clamp_angle(angle);
        self.spline.set_point_angle(index, angle);
        self.after_edit();
    }

    /// Breite des selektierten Punkts (0 ohne Selektion).
    pub fn point_width(&self) -> f32 {
        self.selected().map_or(0.0, |p| p.width)
    }

    pub fn set_point_width(&mut self, width: f32) {
        let Some(index) = self.spline.selected_point() else {
            return;
        };
        self.spline.set_point_width(index, width.max(0.0));
        self.after_edit();
    }

    /// `true` ohne Selektion oder wenn der selektierte Punkt die Standardbreite nutzt.
    pub fn is_point_default_width(&self) -> bool {
        self.selected().is_none_or(|p| p.uses_default_width)
    }

    pub fn set_point_default_width(&mut self, uses_default_width: bool) {
        let Some(index) = self.spline.selected_point() else {
            return;
        };
        self.spline.set_point_default_width(index, uses_default_width);
        self.after_edit();
    }

    /// Kehrt die Laufrichtung des Splines um.
    pub fn reverse_shape(&mut self) {
        self.spline.reverse();
        self.after_edit();
    }

    /// Teilt den Spline an einem neuen Punkt vor `index`.
    ///
    /// Der neue Punkt wird letzter Punkt dieses Objekts und erster Punkt des
    /// zurückgegebenen Objekts, das alle folgenden Punkte übernimmt.
    /// `None` wenn eine Hälfte unter `min_points` fallen würde.
    pub fn split(&mut self, index: usize, position: glam::Vec3) -> Option<SplineObject> {
        let count = self.spline.point_count();
        if index == 0 || index >= count {
            log::debug!("split({}) ignoriert: kein inneres Segment", index);
            return None;
        }
        let head_len = index + 1;
        let tail_len = count + 1 - index;
        let min = self.options.min_points;
        if head_len < min || tail_len < min {
            log::debug!(
                "split({}) ignoriert: Teile {}/{} unter Minimum {}",
                index,
                head_len,
                tail_len,
                min
            );
            return None;
        }

        // Eine Selektion ab `index` wandert mit ihrem Punkt in den hinteren Teil
        let moved_selection = self.spline.selected_point().filter(|&s| s >= index);
        if moved_selection.is_some() {
            self.spline.select_point(None);
        }

        let mut points = self.spline.points().to_vec();
        points.insert(index, SplinePoint::new(position));
        let tail = points.split_off(index);
        points.push(tail[0]);

        self.spline.replace_points(points);
        self.after_edit();

        let mut other =
            SplineObject::from_points(tail, self.world_transform(), self.options.clone());
        other.rederive_tangents();
        if let Some(selected) = moved_selection {
            other.select_point(Some(selected - index + 1));
        }
        log::info!(
            "Spline geteilt: {} + {} Punkte",
            self.spline.point_count(),
            other.spline.point_count()
        );
        Some(other)
    }

    /// Hängt die Punkte von `other` an (in den lokalen Raum dieses Objekts umgerechnet).
    ///
    /// Ein doppelter Verbindungspunkt wird nur einmal übernommen.
    /// Gibt `false` zurück, wenn `max_points` überschritten würde oder der
    /// eigene Welt-Transform singulär ist.
    pub fn merge(&mut self, other: &SplineObject, end: MergeEnd) -> bool {
        let Some(world_to_local) = self.world_to_local() else {
            log::debug!("Zusammenführen ignoriert: Welt-Transform nicht invertierbar");
            return false;
        };
        let to_local: Affine3A = world_to_local * other.world_transform();
        let mut incoming: Vec<SplinePoint> = other
            .spline
            .points()
            .iter()
            .map(|p| {
                let mut point = *p;
                point.position = to_local.transform_point3(p.position);
                point
            })
            .collect();

        let own = self.spline.points();
        match end {
            MergeEnd::End => {
                if let (Some(last), Some(first)) = (own.last(), incoming.first()) {
                    if last.position.distance(first.position) < MERGE_JOINT_EPSILON {
                        incoming.remove(0);
                    }
                }
            }
            MergeEnd::Start => {
                if let (Some(first), Some(last)) = (own.first(), incoming.last()) {
                    if first.position.distance(last.position) < MERGE_JOINT_EPSILON {
                        incoming.pop();
                    }
                }
            }
        }

        let total = own.len() + incoming.len();
        if total > self.options.max_points {
            log::warn!(
                "Zusammenführen abgelehnt: {} Punkte über Maximum {}",
                total,
                self.options.max_points
            );
            return false;
        }

        let selected = self.spline.selected_point();
        let offset = match end {
            MergeEnd::Start => incoming.len(),
            MergeEnd::End => 0,
        };
        let merged: Vec<SplinePoint> = match end {
            MergeEnd::End => own.iter().copied().chain(incoming).collect(),
            MergeEnd::Start => incoming.into_iter().chain(own.iter().copied()).collect(),
        };

        self.spline.select_point(None);
        self.spline.replace_points(merged);
        self.spline.select_point(selected.map(|s| s + offset));
        self.after_edit();
        true
    }

    fn selected(&self) -> Option<&SplinePoint> {
        self.spline.points().get(self.spline.selected_point()?)
    }
}
