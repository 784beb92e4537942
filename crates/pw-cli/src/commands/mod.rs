//! Command implementations for pw-cli

pub mod delegate;
pub mod rechecks;
pub mod resolve;

pub use delegate::run_set_delegate;
pub use rechecks::run_list_rechecks;
pub use resolve::{run_list_maintainers, run_list_trees};
