use bevy::prelude::*;

/// Ordering sets for the per-frame drop systems.
///
/// Configured as a chain: Pose → Interaction → Ui. Host systems that move
/// items or edit the voxel map should run before `Pose`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum DropSet {
    Pose,
    Interaction,
    Ui,
}
