pub mod band;
pub mod convert;

pub use band::{band_for, Band};
pub use convert::{convert, UnknownTierError};
