mod auth;
pub mod client;
pub mod normalize;
pub mod types;
mod verification;

pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
