pub mod cardinality;
pub mod width;

pub use cardinality::CardinalityStage;
pub use width::WidthStage;
