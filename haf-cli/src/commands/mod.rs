//! Command implementations for the HAF CLI.

pub mod append;
pub mod concatenate;
pub mod create;
pub mod delete;
pub mod extract;
pub mod list;

pub use append::cmd_append;
pub use concatenate::cmd_concatenate;
pub use create::cmd_create;
pub use delete::cmd_delete;
pub use extract::cmd_extract;
pub use list::cmd_list;
