// Scene node layout and camera.

use claw_core::*;
use glam::Vec3;

fn close(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-5
}

#[test]
fn node_translations_follow_claw_position() {
    let p = ClawPosition::new(0.3, -0.5, -0.2);
    assert!(close(
        node_translation(NodeRole::Claw, p),
        Vec3::new(0.3, -0.5 + RAIL_HEIGHT, -0.2)
    ));
    assert!(close(
        node_translation(NodeRole::ClawBase, p),
        Vec3::new(0.3, RAIL_HEIGHT, -0.2)
    ));
    assert!(close(
        node_translation(NodeRole::Track, p),
        Vec3::new(0.0, RAIL_HEIGHT, -0.2)
    ));
}

#[test]
fn node_names_round_trip() {
    for role in NodeRole::ALL {
        assert_eq!(NodeRole::from_node_name(role.node_name()), Some(role));
    }
    assert_eq!(NodeRole::from_node_name("cabinet"), None);
}

#[test]
fn world_translation_applies_group_transform() {
    let w = world_translation(Vec3::new(1.0, 2.0, 3.0));
    assert!(close(
        w,
        model_offset_vec3() + Vec3::new(1.0, 2.0, 3.0) * MODEL_SCALE
    ));
}

#[test]
fn instances_cover_claw_and_cabinet() {
    let at_rest = build_instances(ClawPosition::ORIGIN);
    // claw, base, track, floor, four posts; the claw hugs the carriage at rest
    assert_eq!(at_rest.len(), 8);
    let claw_world = world_translation(node_translation(NodeRole::Claw, ClawPosition::ORIGIN));
    assert!(close(Vec3::from(at_rest[0].pos), claw_world));

    let dropped = build_instances(ClawPosition::new(0.0, -1.0, 0.0));
    assert_eq!(dropped.len(), 9);
    assert!(dropped.len() <= MAX_INSTANCES);
    assert!(dropped[0].pos[1] < at_rest[0].pos[1]);
    // cable spans from the carriage to the top of the gripper
    assert!(dropped[3].size[1] > 0.5 * MODEL_SCALE);
}

#[test]
fn cube_has_six_faces_of_two_triangles() {
    let verts = cube_vertices();
    assert_eq!(verts.len(), 36);
    for v in &verts {
        for c in &v[0..3] {
            assert!((c.abs() - 0.5).abs() < 1e-6);
        }
    }
}

#[test]
fn default_camera_looks_down_negative_z() {
    let cam = OrbitCamera::default();
    assert!(close(cam.eye(), Vec3::new(0.0, 0.0, CAMERA_DISTANCE)));
}

#[test]
fn orbit_pitch_is_clamped() {
    let mut cam = OrbitCamera::default();
    cam.orbit(0.0, 1.0e6);
    assert!(cam.pitch < std::f32::consts::FRAC_PI_2);
    cam.orbit(0.0, -2.0e6);
    assert!(cam.pitch > -std::f32::consts::FRAC_PI_2);
    assert!((cam.eye() - cam.target).length() - cam.distance < 1e-4);
}

#[test]
fn zoom_respects_limits() {
    let mut cam = OrbitCamera::default();
    for _ in 0..100 {
        cam.zoom(-500.0);
    }
    assert!((cam.distance - CAMERA_MIN_DISTANCE).abs() < 1e-6);
    for _ in 0..100 {
        cam.zoom(500.0);
    }
    assert!((cam.distance - CAMERA_MAX_DISTANCE).abs() < 1e-6);
}

#[test]
fn uniforms_carry_a_unit_light() {
    let u = SceneUniforms::new(OrbitCamera::default().view_proj(16.0 / 9.0));
    let l = Vec3::new(u.light_dir[0], u.light_dir[1], u.light_dir[2]);
    assert!((l.length() - 1.0).abs() < 1e-5);
    assert_eq!(std::mem::size_of::<InstanceData>(), 40);
}
