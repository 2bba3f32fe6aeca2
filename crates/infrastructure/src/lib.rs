//! Resolver API Infrastructure Layer
pub mod dns;
