pub mod image_harvester;
pub mod item_index;
pub mod ownership;
pub mod series_builder;
pub mod slug;
pub mod stats;
pub mod summary;

pub use image_harvester::*;
pub use item_index::*;
pub use ownership::*;
pub use series_builder::*;
pub use slug::*;
pub use stats::*;
pub use summary::*;
