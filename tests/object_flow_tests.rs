//! Integrationstests für Editier-Abläufe auf einem `SplineObject`:
//! - Einfügen per Strahl im Weltraum
//! - Teilen und wieder Zusammenführen
//! - Verschieben mit lokaler Tangenten-Korrektur

use approx::assert_relative_eq;
use glam::{Affine3A, Vec3};
use spline_editor::{MergeEnd, SplineHit, SplineObject, SplineOptions};

/// Gerader Spline entlang +X mit 4 Punkten im Abstand 10, verschoben nach (0, 0, 50).
fn road() -> SplineObject {
    let mut object = SplineObject::new(SplineOptions::default());
    object.set_world_transform(Affine3A::from_translation(Vec3::new(0.0, 0.0, 50.0)));
    for x in [0.0, 10.0, 20.0, 30.0] {
        object.insert_point(None, Vec3::new(x, 0.0, 0.0));
    }
    object
}

// ─── Picking ────────────────────────────────────────────────────────

#[test]
fn test_pick_then_insert_on_edge() {
    let mut object = road();
    let origin = Vec3::new(15.0, 20.0, 50.2);

    match object.hit_test(origin, Vec3::NEG_Y) {
        Some(SplineHit::Edge { start, end, .. }) => assert_eq!((start, end), (1, 2)),
        other => panic!("Kanten-Treffer erwartet, erhalten {other:?}"),
    }

    let index = object
        .insert_point_on_edge(origin, Vec3::NEG_Y)
        .expect("Einfügen erfolgreich");
    assert_eq!(index, 2);
    assert_eq!(object.spline().point_count(), 5);

    let world = object
        .spline()
        .selected_point_world_position()
        .expect("neuer Punkt selektiert");
    assert!(world.distance(Vec3::new(15.0, 0.0, 50.0)) < 1e-3);
    assert_relative_eq!(object.spline().spline_length(), 30.0, epsilon = 1e-3);
}

#[test]
fn test_pick_point_after_insert() {
    let mut object = road();
    object
        .insert_point_on_edge(Vec3::new(15.0, 20.0, 50.2), Vec3::NEG_Y)
        .expect("Einfügen erfolgreich");

    match object.hit_test(Vec3::new(15.0, 20.0, 50.2), Vec3::NEG_Y) {
        Some(SplineHit::Point { index, distance }) => {
            assert_eq!(index, 2);
            assert_relative_eq!(distance, 0.2, epsilon = 1e-3);
        }
        other => panic!("Punkt-Treffer erwartet, erhalten {other:?}"),
    }
}

// ─── Teilen / Zusammenführen ────────────────────────────────────────

#[test]
fn test_split_then_merge_restores_shape() {
    let mut object = road();
    object.set_point(2, Vec3::new(20.0, 4.0, 0.0));
    let split_at = Vec3::new(15.0, 2.0, 0.0);

    let mut reference = object.clone();
    reference.insert_point(Some(2), split_at);

    let tail = object.split(2, split_at).expect("Teilung möglich");
    assert_eq!(object.spline().point_count(), 3);
    assert_eq!(tail.spline().point_count(), 3);

    assert!(object.merge(&tail, MergeEnd::End));
    assert_eq!(object.spline().point_count(), 5);
    for (a, b) in object
        .spline()
        .points()
        .iter()
        .zip(reference.spline().points())
    {
        assert!(a.position.distance(b.position) < 1e-4);
    }
    assert_relative_eq!(
        object.spline().spline_length(),
        reference.spline().spline_length(),
        epsilon = 1e-2
    );
}

// ─── Verschieben ────────────────────────────────────────────────────

#[test]
fn test_move_point_only_touches_neighbourhood() {
    let mut object = SplineObject::new(SplineOptions::default());
    for x in 0..8 {
        object.insert_point(None, Vec3::new(x as f32 * 10.0, 0.0, 0.0));
    }
    let before = object.spline().points().to_vec();

    object.set_point(6, Vec3::new(60.0, 5.0, 0.0));

    let after = object.spline().points();
    // Punkte weit vor dem geänderten Punkt behalten ihre Handles
    for (a, b) in after.iter().zip(&before).take(4) {
        assert_eq!(a.back_handle, b.back_handle);
        assert_eq!(a.forward_handle, b.forward_handle);
    }
    assert_ne!(after[6].back_handle, before[6].back_handle);
}

#[test]
fn test_world_bounds_track_edits() {
    let mut object = road();
    let before = object.world_bounds().expect("Bounds vorhanden");

    object.set_point(3, Vec3::new(30.0, 12.0, 0.0));
    let after = object.world_bounds().expect("Bounds vorhanden");

    assert!(after.max.y >= 12.0 - 1e-4);
    assert!(after.max.y > before.max.y);
}
