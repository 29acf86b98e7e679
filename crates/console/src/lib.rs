//! Terminal front end for the IndustrialERP dashboard.
//!
//! `views` turns the record store into page models, `render` draws them with
//! comfy-table and `cli`/`commands` wire both to the `industrialerp` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod navigation;
pub mod render;
pub mod views;

pub use navigation::{ModuleId, NavAction, NavigationState, Theme};
pub use views::{Page, ViewError, ViewQuery, build_page};
