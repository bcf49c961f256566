pub mod dedup;
pub mod error;
pub mod logging;
pub mod sql;
pub mod table;

pub use error::{Result, ToolError};
