//! Row and request models for chefs, sections, events and accounts.

pub mod chef;
mod de;
pub mod event;
pub mod section;
pub mod user;

pub use chef::*;
pub use event::*;
pub use section::*;
pub use user::*;
