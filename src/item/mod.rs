pub mod classify;
pub mod definition;
pub mod dropped_item;
pub mod registry;

pub use classify::*;
pub use definition::*;
pub use dropped_item::*;
pub use registry::*;
