pub mod client_addr;
pub mod cors;

pub use client_addr::ClientAddr;
pub use cors::cors_layer;
