//! Command modules for the jlext CLI.
//!
//! Each subcommand lives in its own file and implements
//! [`traits::Command`].

pub mod common;
pub mod traits;

pub mod check;
pub mod tokenize;

// Re-export command types and functions
pub use check::{run_check, CheckArgs};
pub use tokenize::{run_tokenize, TokenizeArgs};
