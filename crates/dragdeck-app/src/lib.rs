//! DragDeck Application
//!
//! Headless application shell: the page table, configuration and a replayer
//! that drives the editor and sortable pages from recorded gesture scripts.

mod config;
mod pages;
mod replay;
mod script;

pub use config::AppConfig;
pub use pages::{PAGES, Page};
pub use replay::{ReplayReport, replay};
pub use script::{Script, Step, Tick};
