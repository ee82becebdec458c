//! Lexer module.
//!
//! This module organizes the state machine into smaller, focused components:
//! - `core` - Lexer struct, driving loop, `NONE` state and token emission
//! - `identifier` - `WORD` state: identifiers, keywords, annotations
//! - `number` - `NUMBER`, `HEX` and `BINARY` states
//! - `string` - `STRING` and `CHAR` states
//! - `operator` - `OPERATORS` state
//! - `comment` - `LINE_COMMENT` and `BLOCK_COMMENT` states

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;
