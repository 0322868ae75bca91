// src/editor.rs - Host application state around the code widget

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::buffer::BufferError;
use crate::completion::CompletionMode;
use crate::config::WidgetConfig;
use crate::text_area::TextArea;
use crate::ui::widgets::completion::CompletionList;
use crate::widget::CodeWidget;

pub type TerminalCodeWidget = CodeWidget<TextArea, CompletionList>;

/// Shell commands the host handles before the widget sees a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    Save,
    Quit,
    CycleCompletionMode,
}

impl HostCommand {
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('s'), m) if m.contains(KeyModifiers::CONTROL) => Some(HostCommand::Save),
            (KeyCode::Char('q'), m) if m.contains(KeyModifiers::CONTROL) => Some(HostCommand::Quit),
            (KeyCode::F(2), _) => Some(HostCommand::CycleCompletionMode),
            _ => None,
        }
    }
}

pub struct Editor {
    pub widget: TerminalCodeWidget,
    pub status_message: Option<String>,
}

impl Editor {
    pub fn new(config: WidgetConfig, mode: CompletionMode) -> Self {
        Self::with_text_area(TextArea::new(), config, mode)
    }

    pub fn with_text_area(area: TextArea, config: WidgetConfig, mode: CompletionMode) -> Self {
        Self {
            widget: CodeWidget::new(area, CompletionList::new(), config, mode),
            status_message: None,
        }
    }

    pub fn open_file(&mut self, path: &str) -> Result<(), BufferError> {
        self.widget.surface_mut().open_file(path)?;
        log::info!("Opened {}", path);
        Ok(())
    }

    /// Use `path` as the save target without reading it.
    pub fn set_file_path(&mut self, path: &str) {
        self.widget.surface_mut().buffer.file_path = Some(path.to_string());
    }

    pub fn text_area(&self) -> &TextArea {
        self.widget.surface()
    }

    pub fn popup(&self) -> &CompletionList {
        self.widget.popup()
    }

    /// Fit the text area to a new size. The cursor stays on screen and an
    /// open popup follows it.
    pub fn handle_resize(&mut self, rows: usize, cols: usize) {
        let area = self.widget.surface();
        if area.viewport.rows == rows.max(1) && area.viewport.cols == cols.max(1) {
            return;
        }
        self.widget.surface_mut().resize_viewport(rows, cols);
        self.widget.reanchor_popup();
    }

    /// Route a key press. Returns true when the host should quit.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match HostCommand::from_key(key) {
            Some(command) => self.execute(command),
            None => {
                self.status_message = None;
                self.widget.handle_key(key);
                false
            }
        }
    }

    pub fn execute(&mut self, command: HostCommand) -> bool {
        match command {
            HostCommand::Quit => return true,
            HostCommand::Save => {
                self.status_message = Some(match self.widget.surface_mut().save() {
                    Ok(()) => "Saved".to_string(),
                    Err(e) => {
                        log::error!("Save failed: {}", e);
                        format!("Save failed: {}", e)
                    }
                });
            }
            HostCommand::CycleCompletionMode => {
                let mode = self.widget.completion_mode().cycle();
                self.widget.set_completion_mode(mode);
                if mode == CompletionMode::Disabled {
                    self.widget.hide_popup();
                }
                self.status_message = Some(format!("Completion: {}", mode));
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::CompletionPopup;
    use std::fs;
    use tempfile::TempDir;

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_host_command_mapping() {
        assert_eq!(HostCommand::from_key(&ctrl('s')), Some(HostCommand::Save));
        assert_eq!(HostCommand::from_key(&ctrl('q')), Some(HostCommand::Quit));
        assert_eq!(
            HostCommand::from_key(&KeyEvent::new(KeyCode::F(2), KeyModifiers::NONE)),
            Some(HostCommand::CycleCompletionMode)
        );
        assert_eq!(
            HostCommand::from_key(&KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn test_quit() {
        let mut editor = Editor::new(WidgetConfig::default(), CompletionMode::Full);
        assert!(editor.handle_key(&ctrl('q')));
    }

    #[test]
    fn test_cycle_mode_hides_popup_when_disabled() {
        let mut editor = Editor::new(WidgetConfig::default(), CompletionMode::KeyTriggered);
        editor.handle_key(&KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE));
        editor.handle_key(&ctrl(' '));
        assert!(editor.popup().is_visible());

        editor.execute(HostCommand::CycleCompletionMode);
        assert_eq!(editor.widget.completion_mode(), CompletionMode::Disabled);
        assert!(!editor.popup().is_visible());
        assert_eq!(editor.status_message.as_deref(), Some("Completion: none"));
    }

    #[test]
    fn test_resize_moves_popup_with_cursor() {
        let text = vec!["x"; 21].join("\n");
        let mut editor = Editor::with_text_area(
            TextArea::from_text(&text),
            WidgetConfig::default(),
            CompletionMode::Full,
        );
        editor.handle_resize(23, 26);
        for _ in 0..20 {
            editor.handle_key(&KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        }
        editor.handle_key(&KeyEvent::new(KeyCode::End, KeyModifiers::NONE));
        editor.handle_key(&KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE));
        for c in "sp".chars() {
            editor.handle_key(&KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        assert!(editor.popup().is_visible());
        assert_eq!(editor.popup().anchor.y, 20);

        editor.handle_resize(9, 26);
        assert!(editor.popup().is_visible());
        assert_eq!(editor.popup().anchor.y, 8);
        assert_eq!(editor.popup().anchor.x, 4);
        assert_eq!(editor.popup().anchor.width, 6);
    }

    #[test]
    fn test_open_edit_save() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("spells.txt");
        fs::write(&file_path, "\tcast").unwrap();

        let mut editor = Editor::new(WidgetConfig::default(), CompletionMode::Disabled);
        editor.open_file(file_path.to_str().unwrap()).unwrap();
        editor.handle_key(&KeyEvent::new(KeyCode::End, KeyModifiers::NONE));
        editor.handle_key(&KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        editor.handle_key(&KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
        assert!(!editor.handle_key(&ctrl('s')));

        assert_eq!(editor.status_message.as_deref(), Some("Saved"));
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "\tcast\n\tx");
    }

    #[test]
    fn test_save_without_file_reports_error() {
        let mut editor = Editor::new(WidgetConfig::default(), CompletionMode::Full);
        editor.handle_key(&ctrl('s'));
        assert!(editor.status_message.unwrap().starts_with("Save failed"));
    }
}
