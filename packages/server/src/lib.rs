// Food-supply coordination platform - API Core
//
// This crate provides the backend API for coordinating food supplies,
// donations, community posts, and volunteer sign-ups.
// Architecture follows domain-driven design: an auth domain and a generic
// resource domain over a shared document store.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
