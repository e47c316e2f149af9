//! Command implementations.

pub mod check;
pub mod tool;

pub use self::check::execute_check;
pub use self::tool::execute_tool;
