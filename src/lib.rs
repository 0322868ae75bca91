// lib.rs - Library root for the codepad editor

pub mod buffer;
pub mod cli;
pub mod completion;
pub mod config;
pub mod editor;
pub mod motion;
pub mod surface;
pub mod text_area;
pub mod ui;
pub mod viewport;
pub mod widget;
