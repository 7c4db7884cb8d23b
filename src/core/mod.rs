pub mod api;
pub mod config;
pub mod constants;
pub mod hex;

pub use api::*;
pub use config::*;
pub use constants::*;
pub use hex::*;
