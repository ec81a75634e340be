/// Client facade implementing every service interface
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces, one per backend resource
pub mod interfaces;
