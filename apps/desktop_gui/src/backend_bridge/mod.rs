//! Backend bridge: commands from the UI thread and the worker that executes them.

pub mod commands;
pub mod runtime;
