use bevy::prelude::*;

use super::ledger::FrameRenderLedger;
use crate::item::{DropMotion, DroppedItem, ItemClassifier, ItemModel, ModelHints, SpinCache};
use crate::pose::{PoseConfig, PoseRequest, resolve_pose};
use crate::world::{DropWorld, EnvironmentFlags};

/// Poses the model child of every dropped item for this frame.
///
/// Items already handled this frame are skipped, so the system may be
/// scheduled in more than one pass.
pub fn apply_drop_poses(
    world: DropWorld,
    config: Res<PoseConfig>,
    fixed_time: Res<Time<Fixed>>,
    mut ledger: ResMut<FrameRenderLedger>,
    mut drops: Query<(&DroppedItem, &DropMotion, &Transform, &mut SpinCache), Without<ItemModel>>,
    mut models: Query<(Entity, &ChildOf, &ModelHints, &mut Transform), With<ItemModel>>,
) {
    let world_ref = world.as_ref();
    let classifier = world_ref.classifier();
    let partial_tick = fixed_time.overstep_fraction();

    for (model, child_of, hints, mut model_tf) in &mut models {
        let parent = child_of.parent();
        let Ok((drop, motion, root_tf, mut spin)) = drops.get_mut(parent) else {
            continue;
        };
        let Some(render_count) = ledger.claim(parent, drop.item) else {
            debug!("Skipping repeat pose of {parent} (model {model}) this frame");
            continue;
        };

        let request = PoseRequest {
            traits: classifier.traits(drop.item),
            env: EnvironmentFlags::sample(&world_ref, root_tf.translation),
            motion: *motion,
            age_ticks: drop.age_ticks,
            partial_tick,
            entity_height: drop.height,
            hints: *hints,
            render_count,
        };
        let resolved = resolve_pose(&request, &config);

        *model_tf = resolved.adjustment.to_transform(hints.ground_scale);
        if let Some(rotation) = resolved.rotation {
            spin.0 = rotation;
        }
    }
}
