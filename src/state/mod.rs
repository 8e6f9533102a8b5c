//! State management module
//!
//! This module contains the countdown component and the view structures it
//! publishes.

pub mod app_state;
pub mod view_state;

// Re-export main types
pub use app_state::{CountdownApp, MountHandle};
pub use view_state::{PickerSelection, ToastNotice, UiMode, ViewSnapshot};
