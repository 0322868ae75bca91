// Common test utilities for driving the code widget with key presses

use codepad::completion::CompletionMode;
use codepad::config::WidgetConfig;
use codepad::editor::TerminalCodeWidget;
use codepad::motion::Position;
use codepad::text_area::TextArea;
use codepad::ui::widgets::completion::CompletionList;
use codepad::widget::CodeWidget;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Widget holding `text` with the cursor at the end of the last line.
pub fn widget_with_text(text: &str, mode: CompletionMode) -> TerminalCodeWidget {
    let mut area = TextArea::from_text(text);
    let last = area.buffer.line_count() - 1;
    area.set_cursor(Position::new(last, area.buffer.line_len(last)));
    CodeWidget::new(area, CompletionList::new(), WidgetConfig::default(), mode)
}

pub fn press(widget: &mut TerminalCodeWidget, code: KeyCode) {
    widget.handle_key(&KeyEvent::new(code, KeyModifiers::NONE));
}

pub fn type_text(widget: &mut TerminalCodeWidget, text: &str) {
    for c in text.chars() {
        press(widget, KeyCode::Char(c));
    }
}

/// The Ctrl+Space completion trigger.
pub fn force_complete(widget: &mut TerminalCodeWidget) {
    widget.handle_key(&KeyEvent::new(KeyCode::Char(' '), KeyModifiers::CONTROL));
}

#[allow(dead_code)]
pub fn filtered(widget: &TerminalCodeWidget) -> Vec<String> {
    widget
        .popup()
        .filtered_items()
        .map(str::to_string)
        .collect()
}
