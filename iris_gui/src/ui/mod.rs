//! UI module for the Iris Classifier GUI
//!
//! # Panel Structure
//! - `toolbar` - Title and theme toggle
//! - `input_panel` - Left: measurement fields, sample presets, classify button
//! - `results_panel` - Right: idle hint, loading, prediction, or error
//! - `status_bar` - Bottom: endpoint and request state

pub mod input_panel;
pub mod results_panel;
pub mod status_bar;
pub mod toolbar;
