// ui/mod.rs - Terminal UI for the code widget

pub mod renderer;
pub mod theme;
pub mod widgets;

pub use theme::Theme;
