pub mod ledger;
pub mod systems;

use bevy::prelude::*;

use crate::item::{TICKS_PER_SECOND, advance_item_age};
use crate::registry::AppState;
use crate::sets::DropSet;

pub use ledger::FrameRenderLedger;

pub struct DropRenderPlugin;

impl Plugin for DropRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FrameRenderLedger>()
            .insert_resource(Time::<Fixed>::from_hz(TICKS_PER_SECOND))
            .add_systems(First, ledger::begin_render_frame)
            .add_systems(
                FixedUpdate,
                advance_item_age.run_if(in_state(AppState::Ready)),
            )
            .add_systems(
                Update,
                systems::apply_drop_poses
                    .in_set(DropSet::Pose)
                    .run_if(in_state(AppState::Ready)),
            );
    }
}
