//! Static file serving
//!
//! This module maps request paths to files beneath the public root and turns
//! their contents into HTTP responses, rejecting anything that would escape
//! the root.

pub mod handler;
pub mod resolver;

pub use handler::StaticHandler;
pub use resolver::Resolver;
