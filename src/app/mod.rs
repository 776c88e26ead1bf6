pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
mod context;
mod generator;

pub use context::AppContext;
pub use generator::Generator;
