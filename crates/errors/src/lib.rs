pub mod error;

pub use anyhow;
