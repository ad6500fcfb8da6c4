//! Widget modules for UI rendering.
//!
//! Each widget is a pure function that reads the session snapshot and renders
//! to a terminal frame. No widget mutates state.

pub mod battlefield;
pub mod footer;
pub mod header;
pub mod menu;
pub mod messages;
pub mod roster;
pub mod side_view;
pub mod title;
