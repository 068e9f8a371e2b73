//! Terminal presentation: controls, surfaces, theme and screen layout

pub mod controls;
pub mod surface;
pub mod theme;
pub mod ui;
