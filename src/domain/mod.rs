// Domain types for lambda-counter.

pub mod ast;
pub mod error;
pub mod language;
