pub mod auto_pickup;

use bevy::prelude::*;

use crate::registry::AppState;
use crate::sets::DropSet;

pub use auto_pickup::{AutoPickupConfig, InteractRequested, LocalPlayer};

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<InteractRequested>()
            .init_resource::<AutoPickupConfig>()
            .add_systems(
                Update,
                auto_pickup::auto_pickup_system
                    .in_set(DropSet::Interaction)
                    .run_if(in_state(AppState::Ready)),
            );
    }
}
