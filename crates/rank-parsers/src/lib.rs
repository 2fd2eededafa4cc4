pub mod builder;
pub mod cells;
pub mod error;
pub mod lines;
pub mod normalize;

pub use builder::build_distribution;
pub use cells::collapse_cells;
pub use error::{BuildError, ParseError};
pub use lines::parse_lines;
pub use normalize::normalize;
