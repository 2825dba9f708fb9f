//! Request-shaping logic that sits between handlers and the database.

pub mod images;

pub use images::{data_uri, ImageInput, SectionForm};
