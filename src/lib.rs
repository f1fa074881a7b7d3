pub mod config;
pub mod console;
pub mod demos;
pub mod runtime;
