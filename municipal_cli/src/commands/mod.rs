//! CLI subcommand implementations.

pub mod ask;
pub mod forecast;
pub mod items;
pub mod municipalities;
pub mod query;
mod submit;
