pub mod db;
mod keys;

pub use db::{Database, DatabaseError};
pub use keys::*;
