//! classnav - navigate PHP projects by class name
//!
//! The console layer: output dumpers, the console wiring extension, and the
//! command implementations the binary dispatches to. The resolution core
//! lives in `classnav-infrastructure` (container, wiring) and
//! `classnav-domain`/`classnav-providers` (capabilities and strategies).

pub mod commands;
pub mod console;
pub mod dumper;

pub use console::ConsoleExtension;
