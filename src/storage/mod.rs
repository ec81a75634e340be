/// Credential provider capability and its store-backed implementation
pub mod credential;
/// Local key-value stores
pub mod store;

pub use credential::*;
pub use store::*;
