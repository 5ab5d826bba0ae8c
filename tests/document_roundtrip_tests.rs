//! Integrationstests für das JSON-Dokumentformat:
//! - Laden mit Tangenten-Ableitung
//! - Schreiben → erneutes Parsen
//! - Datei-Roundtrip

use approx::assert_relative_eq;
use glam::{Affine3A, Quat, Vec3};
use spline_editor::{
    load_spline_file, parse_spline_document, save_spline_file, write_spline_document,
    SplineObject, SplineOptions, SplinePoint,
};

fn fixture() -> SplineObject {
    let json = include_str!("fixtures/curved_road.json");
    parse_spline_document(json, &SplineOptions::default()).expect("Fixture gültig")
}

fn assert_points_match(a: &[SplinePoint], b: &[SplinePoint]) {
    assert_eq!(a.len(), b.len());
    for (pa, pb) in a.iter().zip(b) {
        assert!(pa.position.distance(pb.position) < 1e-4);
        assert!(pa.back_handle.distance(pb.back_handle) < 1e-4);
        assert!(pa.forward_handle.distance(pb.forward_handle) < 1e-4);
        assert_relative_eq!(pa.angle, pb.angle);
        assert_relative_eq!(pa.width, pb.width);
        assert_eq!(pa.uses_default_width, pb.uses_default_width);
    }
}

// ─── Laden ──────────────────────────────────────────────────────────

#[test]
fn test_fixture_loads_with_derived_handles() {
    let object = fixture();
    let points = object.spline().points();

    assert_eq!(points.len(), 4);
    assert!(points.iter().all(|p| !p.has_degenerate_handles()));
    assert_relative_eq!(points[1].angle, 15.0);
    assert!(!points[2].uses_default_width);
    assert_relative_eq!(points[2].width, 6.0);

    let origin = object.world_transform().transform_point3(Vec3::ZERO);
    assert!(origin.distance(Vec3::new(100.0, 0.0, -50.0)) < 1e-4);
}

#[test]
fn test_fixture_world_bounds_include_width() {
    let object = fixture();
    let bounds = object.world_bounds().expect("Bounds vorhanden");

    // Halbe Breite 3m um alle Punkte und Handles
    assert!(bounds.min.x <= 97.0 + 1e-3);
    assert!(bounds.max.z >= -50.0 + 10.0 + 3.0 - 1e-3);
    assert!(bounds.contains(Vec3::new(110.0, 0.0, -50.0)));
}

// ─── Schreiben ──────────────────────────────────────────────────────

#[test]
fn test_write_then_parse_preserves_points_and_transform() {
    let object = fixture();

    let json = write_spline_document(&object).expect("Export fehlgeschlagen");
    let reparsed = parse_spline_document(&json, &SplineOptions::default())
        .expect("Re-Parsing fehlgeschlagen");

    assert_points_match(object.spline().points(), reparsed.spline().points());
    assert!(object
        .world_transform()
        .abs_diff_eq(reparsed.world_transform(), 1e-5));
    assert_relative_eq!(
        object.world_length(),
        reparsed.world_length(),
        epsilon = 1e-3
    );
}

#[test]
fn test_rotation_and_scale_survive_roundtrip() {
    let transform = Affine3A::from_scale_rotation_translation(
        Vec3::splat(2.0),
        Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
        Vec3::new(1.0, 2.0, 3.0),
    );
    let mut object = SplineObject::new(SplineOptions::default());
    object.set_world_transform(transform);
    object.insert_point(None, Vec3::ZERO);
    object.insert_point(None, Vec3::new(4.0, 0.0, 0.0));

    let json = write_spline_document(&object).expect("Export fehlgeschlagen");
    let reparsed =
        parse_spline_document(&json, &SplineOptions::default()).expect("Re-Parsing fehlgeschlagen");

    let world_end = reparsed
        .world_transform()
        .transform_point3(Vec3::new(4.0, 0.0, 0.0));
    // +X gedreht um 90° um Y → -Z, skaliert ×2, verschoben
    assert!(world_end.distance(Vec3::new(1.0, 2.0, -5.0)) < 1e-4);
}

#[test]
fn test_written_document_uses_file_field_names() {
    let json = write_spline_document(&fixture()).expect("Export fehlgeschlagen");
    let keys = [
        "\"translation\"",
        "\"rotation\"",
        "\"scale\"",
        "\"pos\"",
        "\"back\"",
        "\"forw\"",
        "\"isDefaultWidth\"",
    ];
    for key in keys {
        assert!(json.contains(key), "Feld {key} fehlt");
    }
}

// ─── Datei-I/O ──────────────────────────────────────────────────────

#[test]
fn test_save_and_load_file() {
    let object = fixture();
    let path =
        std::env::temp_dir().join(format!("spline_editor_roundtrip_{}.json", std::process::id()));

    save_spline_file(&object, &path).expect("Speichern fehlgeschlagen");
    let loaded = load_spline_file(&path, &SplineOptions::default()).expect("Laden fehlgeschlagen");
    let _ = std::fs::remove_file(&path);

    assert_points_match(object.spline().points(), loaded.spline().points());
}
