pub mod domain;
pub mod error;
pub mod preprocess;
pub mod readability;
