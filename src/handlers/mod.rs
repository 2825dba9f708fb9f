//! HTTP request handlers, one module per resource.

pub mod chefs;
pub mod events;
pub mod http;
pub mod sections;

pub use http::*;
