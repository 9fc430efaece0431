//! Resource domain - generic CRUD over the operational collections
//!
//! One service implementation covers every collection; which of its
//! operations a collection exposes over HTTP is a routing-layer decision.

pub mod collections;
pub mod service;

pub use collections::{
    CommunityPosts, DashboardData, Donations, ResourceCollection, Supplies, Testimonials,
    Volunteers,
};
pub use service::{parse_object_id, ResourceService, DEFAULT_LIMIT};
