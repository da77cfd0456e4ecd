//! Scene layout for the claw model and cabinet.
//!
//! The claw model is a group of named nodes whose transforms are derived from
//! `ClawPosition` every tick; the renderer never writes position state.
//! Everything here is plain data so both frontends share one instance layout.

use crate::constants::{model_offset_vec3, MODEL_SCALE, RAIL_HEIGHT, X_MAX, X_MIN, Z_MAX, Z_MIN};
use crate::state::ClawPosition;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeRole {
    /// The gripper; follows x, y and z.
    Claw,
    /// Carriage on the rail; follows x and z at rail height.
    ClawBase,
    /// Cross rail; follows z only.
    Track,
}

impl NodeRole {
    pub const ALL: [NodeRole; 3] = [NodeRole::Claw, NodeRole::ClawBase, NodeRole::Track];

    /// Node name inside the claw model.
    pub fn node_name(self) -> &'static str {
        match self {
            NodeRole::Claw => "claw",
            NodeRole::ClawBase => "clawBase",
            NodeRole::Track => "track",
        }
    }

    pub fn from_node_name(name: &str) -> Option<NodeRole> {
        NodeRole::ALL.into_iter().find(|r| r.node_name() == name)
    }
}

/// Translation of a node in model space.
#[inline]
pub fn node_translation(role: NodeRole, pos: ClawPosition) -> Vec3 {
    match role {
        NodeRole::Claw => Vec3::new(pos.x, pos.y + RAIL_HEIGHT, pos.z),
        NodeRole::ClawBase => Vec3::new(pos.x, RAIL_HEIGHT, pos.z),
        NodeRole::Track => Vec3::new(0.0, RAIL_HEIGHT, pos.z),
    }
}

/// Apply the model group transform (uniform scale, then offset).
#[inline]
pub fn world_translation(model_space: Vec3) -> Vec3 {
    model_offset_vec3() + model_space * MODEL_SCALE
}

// Box sizes in model space
const CLAW_SIZE: [f32; 3] = [0.22, 0.3, 0.22];
const BASE_SIZE: [f32; 3] = [0.3, 0.1, 0.3];
const TRACK_SIZE: [f32; 3] = [1.8, 0.05, 0.08];
const CABLE_WIDTH: f32 = 0.03;
const FLOOR_Y: f32 = 1.55;
const FLOOR_THICKNESS: f32 = 0.06;
const POST_WIDTH: f32 = 0.06;
const CABINET_MARGIN: f32 = 0.2;

const CLAW_COLOR: [f32; 4] = [0.95, 0.78, 0.3, 1.0];
const BASE_COLOR: [f32; 4] = [0.55, 0.57, 0.62, 1.0];
const TRACK_COLOR: [f32; 4] = [0.3, 0.32, 0.36, 1.0];
const CABLE_COLOR: [f32; 4] = [0.2, 0.2, 0.22, 1.0];
const FLOOR_COLOR: [f32; 4] = [0.93, 0.6, 0.75, 1.0];
const POST_COLOR: [f32; 4] = [0.62, 0.55, 0.95, 1.0];

/// One box instance as uploaded to the GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub pos: [f32; 3],
    pub size: [f32; 3],
    pub color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub light_dir: [f32; 4],
}

impl SceneUniforms {
    pub fn new(view_proj: glam::Mat4) -> Self {
        let light = Vec3::new(0.4, 1.0, 0.6).normalize();
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            light_dir: [light.x, light.y, light.z, 0.0],
        }
    }
}

/// Upper bound on instances emitted by `build_instances`.
pub const MAX_INSTANCES: usize = 16;

fn push_box(out: &mut Vec<InstanceData>, center: Vec3, size: [f32; 3], color: [f32; 4]) {
    out.push(InstanceData {
        pos: world_translation(center).to_array(),
        size: (Vec3::from(size) * MODEL_SCALE).to_array(),
        color,
    });
}

/// Build every box instance for the current claw position.
pub fn build_instances(pos: ClawPosition) -> Vec<InstanceData> {
    let mut out = Vec::with_capacity(MAX_INSTANCES);

    let claw = node_translation(NodeRole::Claw, pos);
    let base = node_translation(NodeRole::ClawBase, pos);
    let track = node_translation(NodeRole::Track, pos);
    push_box(&mut out, claw, CLAW_SIZE, CLAW_COLOR);
    push_box(&mut out, base, BASE_SIZE, BASE_COLOR);
    push_box(&mut out, track, TRACK_SIZE, TRACK_COLOR);

    // Cable from the carriage down to the top of the gripper
    let cable_len = (base.y - claw.y - CLAW_SIZE[1] * 0.5).max(0.0);
    if cable_len > 0.0 {
        let mid = Vec3::new(pos.x, base.y - cable_len * 0.5, pos.z);
        push_box(
            &mut out,
            mid,
            [CABLE_WIDTH, cable_len, CABLE_WIDTH],
            CABLE_COLOR,
        );
    }

    // Static cabinet
    let x0 = X_MIN - CABINET_MARGIN;
    let x1 = X_MAX + CABINET_MARGIN;
    let z0 = Z_MIN - CABINET_MARGIN;
    let z1 = Z_MAX + CABINET_MARGIN;
    let floor_center = Vec3::new((x0 + x1) * 0.5, FLOOR_Y, (z0 + z1) * 0.5);
    push_box(
        &mut out,
        floor_center,
        [x1 - x0, FLOOR_THICKNESS, z1 - z0],
        FLOOR_COLOR,
    );
    let post_h = RAIL_HEIGHT - FLOOR_Y;
    for (px, pz) in [(x0, z0), (x1, z0), (x0, z1), (x1, z1)] {
        push_box(
            &mut out,
            Vec3::new(px, FLOOR_Y + post_h * 0.5, pz),
            [POST_WIDTH, post_h, POST_WIDTH],
            POST_COLOR,
        );
    }
    out
}

/// Unit cube centred on the origin: 36 vertices of `[position, normal]`.
pub fn cube_vertices() -> Vec<[f32; 6]> {
    const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        // normal, u axis, v axis
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ];
    let mut verts = Vec::with_capacity(36);
    for (n, u, v) in FACES {
        let (n, u, v) = (Vec3::from(n), Vec3::from(u), Vec3::from(v));
        let c = n * 0.5;
        let corners = [
            c - u * 0.5 - v * 0.5,
            c + u * 0.5 - v * 0.5,
            c + u * 0.5 + v * 0.5,
            c - u * 0.5 + v * 0.5,
        ];
        for i in [0usize, 1, 2, 0, 2, 3] {
            let p = corners[i];
            verts.push([p.x, p.y, p.z, n.x, n.y, n.z]);
        }
    }
    verts
}
