//! Pose resolution for dropped items.
//!
//! Turns the default lying-flat item presentation into an upright, ground
//! flush pose. Everything here is a pure function of the [`PoseRequest`]; the
//! ECS side lives in `crate::render`.

use bevy::prelude::*;

use super::adjustment::{Axis, PoseAdjustment};
use super::config::PoseConfig;
use super::stacking::stacking_offset;
use crate::item::{DropMotion, ItemTraits, ModelHints};
use crate::registry::block::BlockCategory;
use crate::world::EnvironmentFlags;

/// Height of the pivot used when standing items up and spinning them.
pub const PIVOT_HEIGHT: f32 = 0.185;
/// Drop that makes full blocks sit flush with the ground.
pub const BLOCK_FLUSH_DROP: f32 = 0.06;
/// Drop that makes flat blocks sit flush with the floor.
pub const FLAT_FLUSH_DROP: f32 = 0.065;
/// Clearance along the model's depth axis for upright items.
pub const DEPTH_CLEARANCE: f32 = 0.195;
pub const SOUL_SAND_SINK: f32 = 0.1;
pub const SKULL_LIFT: f32 = 0.11;
/// Ticks per spin unit.
pub const TICKS_PER_SPIN: f32 = 20.0;

/// Snapshot of one dropped item and the world around it for this frame.
#[derive(Debug, Clone, Copy)]
pub struct PoseRequest {
    pub traits: ItemTraits,
    pub env: EnvironmentFlags,
    pub motion: DropMotion,
    pub age_ticks: u32,
    /// Progress through the current tick, `0.0..1.0`.
    pub partial_tick: f32,
    pub entity_height: f32,
    pub hints: ModelHints,
    /// Same-type items drawn this frame, this one included.
    pub render_count: usize,
}

impl PoseRequest {
    pub fn is_airborne(&self) -> bool {
        !self.motion.on_ground && !self.motion.submerged && !self.env.above_water
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPose {
    pub render_flat: bool,
    pub adjustment: PoseAdjustment,
    /// Spin rotation to cache on the item, set only while airborne.
    pub rotation: Option<Vec3>,
}

/// Short block items (carpets, slabs, pressure plates) stay lying down.
/// Aliased and plain items never do.
pub fn renders_flat(traits: &ItemTraits, threshold: f32) -> bool {
    traits.is_true_block() && traits.collision_height <= threshold
}

/// Spin value for an airborne item. Offsetting by the entity height keeps
/// different item types out of phase.
pub fn spin_angle(age_ticks: u32, partial_tick: f32, entity_height: f32) -> f32 {
    (age_ticks as f32 + partial_tick) / TICKS_PER_SPIN + entity_height
}

pub fn resolve_pose(req: &PoseRequest, config: &PoseConfig) -> ResolvedPose {
    let traits = &req.traits;
    let flat = renders_flat(traits, config.flat_height_threshold);
    let mut pose = PoseAdjustment::new();
    let mut rotation = None;

    if traits.is_true_block() && !flat {
        pose.translate(Vec3::new(0.0, -BLOCK_FLUSH_DROP, 0.0));
    }
    if !flat {
        pose.rotate_about(PIVOT_HEIGHT, Axis::X, 90.0);
    }

    if req.is_airborne() {
        let spin = spin_angle(req.age_ticks, req.partial_tick, req.entity_height);
        let degrees = config.spin_unit.to_degrees(spin);

        if flat {
            pose.rotate(Axis::Y, degrees);
            rotation = Some(Vec3::new(0.0, spin, 0.0));
            pose.translate(Vec3::new(0.0, -FLAT_FLUSH_DROP, 0.0));
        } else {
            pose.rotate_about(PIVOT_HEIGHT, Axis::Z, degrees);
            rotation = Some(Vec3::new(0.0, 0.0, spin));
        }

        if traits.aliased || !traits.block_derived {
            pose.translate(Vec3::new(0.0, 0.0, DEPTH_CLEARANCE));
        }
    } else if flat {
        pose.translate(Vec3::new(0.0, -FLAT_FLUSH_DROP, 0.0));
    } else {
        pose.translate(Vec3::new(0.0, 0.0, DEPTH_CLEARANCE));
    }

    if req.env.ground_block == BlockCategory::SoulSand {
        pose.translate(Vec3::new(0.0, 0.0, -SOUL_SAND_SINK));
    }
    if traits.block_derived && traits.block_category == BlockCategory::Skull {
        pose.translate(Vec3::new(0.0, SKULL_LIFT, 0.0));
    }

    if let Some(offset) = stacking_offset(&config.stacking, &req.hints, req.render_count) {
        pose.translate(offset);
    }

    ResolvedPose {
        render_flat: flat,
        adjustment: pose,
        rotation,
    }
}
