use bevy::prelude::*;

use super::config::{StackingConfig, StackingPolicy};
use crate::item::ModelHints;

/// Offset that staggers an item against earlier copies of the same item.
///
/// `render_count` counts same-type items drawn this frame, this one included.
pub fn stacking_offset(
    config: &StackingConfig,
    hints: &ModelHints,
    render_count: usize,
) -> Option<Vec3> {
    let step = Vec3::from_array(config.step) * hints.ground_scale;
    match config.policy {
        StackingPolicy::Off => None,
        StackingPolicy::RenderCount if hints.has_depth => None,
        StackingPolicy::RenderCount => Some(step * render_count as f32 * 0.5),
        StackingPolicy::Constant => Some(step),
    }
}
