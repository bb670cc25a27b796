pub mod document;
pub mod weekday;

pub use document::*;
pub use weekday::*;
