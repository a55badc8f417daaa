pub mod consts;
pub mod config;
pub mod error;
pub mod client;
pub mod characters;
pub mod destiny;
pub mod destiny2;

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use super::consts::*;
    pub use super::config::Settings;
    pub use super::error::Error;
    pub use super::client::Client;
    pub use super::characters::{CharacterArray, DestinyClass};
    pub use super::destiny;
    pub use super::destiny2;
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

lazy_static::lazy_static! {
    /// Timeout of remote requests, in seconds
    ///
    /// Can be changed with the `BUNGIE_NET_API_REQUESTS_TIMEOUT`
    /// environment variable
    pub static ref REQUESTS_TIMEOUT: u64 = std::env::var("BUNGIE_NET_API_REQUESTS_TIMEOUT")
        .ok()
        .and_then(|timeout| timeout.parse().ok())
        .unwrap_or(8);
}
