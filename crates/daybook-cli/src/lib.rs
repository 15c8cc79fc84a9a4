//! Library side of the `daybook` command-line driver.

pub mod check;
pub mod config;
pub mod logging;
pub mod output;
