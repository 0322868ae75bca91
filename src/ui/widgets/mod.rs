// ui/widgets/mod.rs - UI widgets

pub mod completion;
pub mod editor_pane;
pub mod gutter;
pub mod status_bar;
