// Main library entry point for lambda-counter.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;
