//! Database layer: query gateway and repositories for MySQL.

mod pool;
mod repositories;

pub use pool::{Database, Param};
pub use repositories::*;
