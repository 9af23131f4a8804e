pub mod ctx;
pub mod probe;
pub mod voxel_map;

pub use ctx::{DropWorld, DropWorldRef};
pub use probe::{EnvironmentFlags, WorldProbe};
pub use voxel_map::VoxelMap;
