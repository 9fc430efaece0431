//! Auth domain - admin registration and login
//!
//! Responsibilities:
//! - Account registration with bcrypt password hashing
//! - Credential checks against the admin collection
//! - Stateless session token issuance (access + refresh JWT pair)

pub mod jwt;
pub mod models;
pub mod password;
pub mod service;

pub use jwt::{Claims, JwtService};
pub use service::{AuthService, TokenPair};
