//! Bridge between the UI thread and the async generation worker.

pub mod commands;
pub mod runtime;
