pub mod adjustment;
pub mod config;
pub mod resolver;
pub mod stacking;

pub use adjustment::{Axis, PoseAdjustment, PoseOp};
pub use config::{PoseConfig, SpinUnit, StackingConfig, StackingPolicy};
pub use resolver::{PoseRequest, ResolvedPose, renders_flat, resolve_pose, spin_angle};
pub use stacking::stacking_offset;
