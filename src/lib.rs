//! Build-time visualization pipeline for colcon workspaces.
//!
//! Log file -> per-package durations, workspace -> package directories,
//! directories -> hierarchy tree, tree + durations -> flat treemap node list.
//! The binary wires these together and writes the chart documents.

pub mod error;
pub mod fmt;
pub mod log;
pub mod model;
pub mod render;
pub mod resolver;
pub mod tree;

pub type Result<T> = anyhow::Result<T>;
