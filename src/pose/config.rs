use bevy::prelude::*;
use serde::Deserialize;

/// Unit the spin value is interpreted in when it becomes a rotation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum SpinUnit {
    /// One unit is a full revolution: one turn every 20 ticks.
    #[default]
    Turns,
    /// One unit is one degree, as the host engine reads it.
    Degrees,
}

impl SpinUnit {
    pub fn to_degrees(self, spin: f32) -> f32 {
        match self {
            SpinUnit::Turns => spin * 360.0,
            SpinUnit::Degrees => spin,
        }
    }
}

/// How copies of the same item drawn in one frame are staggered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum StackingPolicy {
    Off,
    /// Scales with the number of same-type items drawn so far this frame.
    /// Flat icon models only.
    #[default]
    RenderCount,
    /// Same offset for every item, whatever its model.
    Constant,
}

fn default_step() -> [f32; 3] {
    [0.0, 0.0, -0.09375]
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct StackingConfig {
    pub policy: StackingPolicy,
    /// Per-axis offset of one stacking step, before ground scale.
    pub step: [f32; 3],
}

impl Default for StackingConfig {
    fn default() -> Self {
        Self {
            policy: StackingPolicy::default(),
            step: default_step(),
        }
    }
}

/// Tunables of the pose resolver, loaded from `drops.config.ron`.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PoseConfig {
    /// Block items whose outline is no taller than this lie flat.
    pub flat_height_threshold: f32,
    pub spin_unit: SpinUnit,
    pub stacking: StackingConfig,
}

impl Default for PoseConfig {
    fn default() -> Self {
        Self {
            flat_height_threshold: 0.5,
            spin_unit: SpinUnit::default(),
            stacking: StackingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = PoseConfig::default();
        assert_eq!(c.flat_height_threshold, 0.5);
        assert_eq!(c.spin_unit, SpinUnit::Turns);
        assert_eq!(c.stacking.policy, StackingPolicy::RenderCount);
        assert_eq!(c.stacking.step, [0.0, 0.0, -0.09375]);
    }

    #[test]
    fn spin_units() {
        assert_eq!(SpinUnit::Turns.to_degrees(0.5), 180.0);
        assert_eq!(SpinUnit::Degrees.to_degrees(0.5), 0.5);
    }

    #[test]
    fn partial_ron_keeps_other_defaults() {
        let c: PoseConfig = ron::from_str("(stacking: (policy: Constant))").unwrap();
        assert_eq!(c.stacking.policy, StackingPolicy::Constant);
        assert_eq!(c.stacking.step, [0.0, 0.0, -0.09375]);
        assert_eq!(c.flat_height_threshold, 0.5);
    }
}
