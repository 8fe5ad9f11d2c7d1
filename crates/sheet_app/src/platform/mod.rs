//! Host wiring: logging, settings and command execution.
mod app;
pub(crate) mod settings;
mod terminal;

pub(crate) use app::run;
