//! Command implementations for userbase CLI

pub mod serve;

pub use serve::run_serve;
