pub mod datetime;
pub mod errors;
pub mod logging;
pub mod validation;
