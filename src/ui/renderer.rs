// ui/renderer.rs - Ratatui-based renderer for the code editor

use crossterm::{
    cursor::Show,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::io::{self, Stdout, Write};

use crate::editor::Editor;
use crate::surface::{CompletionPopup, TextSurface};
use crate::ui::theme::Theme;
use crate::ui::widgets::editor_pane::EditorPane;
use crate::ui::widgets::gutter::Gutter;
use crate::ui::widgets::status_bar::StatusBar;

const GUTTER_WIDTH: u16 = 4;

/// Ratatui-based renderer for the editor
pub struct TuiRenderer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
}

impl TuiRenderer {
    pub fn new() -> std::io::Result<Self> {
        let backend = CrosstermBackend::new(std::io::stdout());
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            theme: Theme::default(),
        })
    }

    /// Draw the editor UI
    pub fn draw(&mut self, editor: &mut Editor) -> std::io::Result<()> {
        let theme = &self.theme;
        self.terminal.draw(|f| draw_frame(f, editor, theme))?;
        Ok(())
    }
}

/// Raw mode and the alternate screen for as long as the guard lives.
/// Dropping it, including while unwinding, restores the terminal.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        // From here on a failure drops the guard and leaves raw mode again.
        let guard = Self { _private: () };
        crossterm::execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal(&mut io::stdout());
    }
}

/// Leave the alternate screen, show the cursor and turn raw mode off.
/// Errors are ignored since this runs on the way out.
pub fn restore_terminal<W: Write>(out: &mut W) {
    let _ = crossterm::execute!(out, LeaveAlternateScreen, Show);
    let _ = disable_raw_mode();
}

/// Restore the terminal before the panic message is printed, so it lands
/// on the normal screen.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal(&mut io::stdout());
        previous(info);
    }));
}

/// Lay out text area, gutter, status bar and the completion popup.
pub fn draw_frame(f: &mut Frame, editor: &mut Editor, theme: &Theme) {
    let size = f.size();

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Editor area
            Constraint::Length(1), // Status bar (1 line)
        ])
        .split(size);

    let editor_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(GUTTER_WIDTH), Constraint::Min(1)])
        .split(vertical_chunks[0]);
    let text_rect = editor_chunks[1];

    // Keep the viewport in step with the terminal before positioning anything.
    editor.handle_resize(text_rect.height as usize, text_rect.width as usize);

    f.render_widget(Gutter::new(editor.text_area(), theme), editor_chunks[0]);
    f.render_widget(EditorPane::new(editor.text_area(), theme), text_rect);
    f.render_widget(StatusBar::new(editor, theme), vertical_chunks[1]);

    let cursor = editor.text_area().cursor_rect();
    if cursor.y < text_rect.height && cursor.x < text_rect.width {
        f.set_cursor(text_rect.x + cursor.x, text_rect.y + cursor.y);
    }

    let popup = editor.popup();
    if popup.is_visible() {
        let popup_area = popup.calculate_position(text_rect);
        f.render_widget(popup, popup_area);
    }
}
