mod client;
mod errors;
pub mod types;

pub use self::client::{Client, Config};
pub use self::errors::Error;

/// Version of this wrapper, taken from the crate metadata.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
