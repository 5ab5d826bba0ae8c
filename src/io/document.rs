//! Serialisierbares Abbild eines `SplineObject`.

use crate::app::SplineObject;
use crate::shared::SplineOptions;
use glam::{Affine3A, Quat, Vec3};
use serde::{Deserialize, Serialize};
use spline_engine::SplinePoint;

/// Dateiformat: Transform-Komponenten + Punktliste.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplineDocument {
    #[serde(default = "default_translation")]
    pub translation: Vec3,
    #[serde(default = "default_rotation")]
    pub rotation: Quat,
    #[serde(default = "default_scale")]
    pub scale: Vec3,
    #[serde(default)]
    pub points: Vec<SplinePoint>,
}

fn default_translation() -> Vec3 {
    Vec3::ZERO
}

fn default_rotation() -> Quat {
    Quat::IDENTITY
}

fn default_scale() -> Vec3 {
    Vec3::ONE
}

impl SplineDocument {
    /// Erfasst Transform und Punkte eines Objekts.
    pub fn from_object(object: &SplineObject) -> Self {
        let (scale, rotation, translation) =
            object.world_transform().to_scale_rotation_translation();
        Self {
            translation,
            rotation,
            scale,
            points: object.spline().points().to_vec(),
        }
    }

    pub fn transform(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(
            self.scale,
            self.rotation.normalize(),
            self.translation,
        )
    }

    /// `true` wenn keine Handles gespeichert wurden (alle fallen auf ihre Position).
    pub fn has_only_degenerate_handles(&self) -> bool {
        self.points.iter().all(SplinePoint::has_degenerate_handles)
    }

    /// Baut das Objekt; fehlende Handles werden aus den Positionen abgeleitet.
    pub fn into_object(self, options: SplineOptions) -> SplineObject {
        let transform = self.transform();
        let rederive = self.points.len() > 1 && self.has_only_degenerate_handles();
        let mut object = SplineObject::from_points(self.points, transform, options);
        if rederive {
            log::debug!("Keine Handles im Dokument, leite Tangenten neu ab");
            object.rederive_tangents();
        }
        object
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_transform_defaults_to_identity() {
        let doc: SplineDocument =
            serde_json::from_str(r#"{ "points": [] }"#).expect("gültiges JSON");
        assert_eq!(doc.transform(), Affine3A::IDENTITY);
        assert!(doc.points.is_empty());
    }

    #[test]
    fn test_point_fields_use_file_names() {
        let doc: SplineDocument = serde_json::from_str(
            r#"{ "points": [ { "pos": [1.0, 2.0, 3.0], "back": [1.0, 2.0, 3.0],
                 "forw": [1.0, 2.0, 3.0], "angle": 15.0, "width": 2.5,
                 "isDefaultWidth": false } ] }"#,
        )
        .expect("gültiges JSON");
        let point = doc.points[0];
        assert_eq!(point.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(point.angle, 15.0);
        assert_eq!(point.width, 2.5);
        assert!(!point.uses_default_width);
    }
}
