// ui/widgets/status_bar.rs - Status bar widget

use ratatui::{buffer::Buffer, layout::Rect, style::Style, text::Line, widgets::Widget};

use crate::editor::Editor;
use crate::ui::theme::Theme;

/// Status bar showing file, completion mode, cursor position and messages
pub struct StatusBar<'a> {
    pub editor: &'a Editor,
    pub theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(editor: &'a Editor, theme: &'a Theme) -> Self {
        Self { editor, theme }
    }

    pub fn status_text(&self) -> String {
        let text_area = self.editor.text_area();
        let file = text_area
            .buffer
            .file_path
            .as_deref()
            .unwrap_or("[No Name]");
        let base_status = format!(
            " {}{} | {}:{} | completion: {}",
            file,
            if text_area.buffer.modified { " [+]" } else { "" },
            text_area.cursor.line + 1,
            text_area.cursor.col + 1,
            self.editor.widget.completion_mode()
        );

        match &self.editor.status_message {
            Some(msg) => format!("{} | {}", base_status, msg),
            None => base_status,
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let status = self.status_text();

        // Pad the status text to fill the entire width
        let width = area.width as usize;
        let padded_status = format!("{:<width$}", status, width = width);

        let line_widget = Line::from(padded_status).style(
            Style::default()
                .bg(self.theme.ui.status_bar_bg)
                .fg(self.theme.ui.status_bar_fg),
        );

        buf.set_line(area.x, area.y, &line_widget, area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::CompletionMode;
    use crate::config::WidgetConfig;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_status_text() {
        let mut editor = Editor::new(WidgetConfig::default(), CompletionMode::KeyTriggered);
        editor.handle_key(&KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
        let theme = Theme::default();
        let bar = StatusBar::new(&editor, &theme);
        assert_eq!(bar.status_text(), " [No Name] [+] | 1:2 | completion: key");
    }

    #[test]
    fn test_status_message_appended() {
        let mut editor = Editor::new(WidgetConfig::default(), CompletionMode::Full);
        editor.set_file_path("spells.txt");
        editor.status_message = Some("Saved".to_string());
        let theme = Theme::default();
        let bar = StatusBar::new(&editor, &theme);
        assert_eq!(bar.status_text(), " spells.txt | 1:1 | completion: full | Saved");
    }
}
