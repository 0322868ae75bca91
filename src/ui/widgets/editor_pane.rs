// ui/widgets/editor_pane.rs - Editor pane widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::surface::TextSurface;
use crate::text_area::TextArea;
use crate::ui::theme::Theme;

/// Editor pane widget that renders the text area content
pub struct EditorPane<'a> {
    pub area: &'a TextArea,
    pub theme: &'a Theme,
}

impl<'a> EditorPane<'a> {
    pub fn new(area: &'a TextArea, theme: &'a Theme) -> Self {
        Self { area, theme }
    }
}

/// Expand tabs to spaces up to the next tab stop.
pub fn expand_tabs(line: &str, tab_width: usize) -> String {
    let tab_width = tab_width.max(1);
    let mut out = String::with_capacity(line.len());
    let mut cells = 0;
    for grapheme in line.graphemes(true) {
        if grapheme == "\t" {
            let pad = tab_width - cells % tab_width;
            out.push_str(&" ".repeat(pad));
            cells += pad;
        } else {
            out.push_str(grapheme);
            cells += grapheme.width();
        }
    }
    out
}

/// Drop the first `cols` display cells of `line`. A wide grapheme cut in
/// half by the scroll offset leaves a blank cell behind.
fn skip_cells(line: &str, cols: usize) -> String {
    let mut out = String::with_capacity(line.len());
    let mut cells = 0;
    for grapheme in line.graphemes(true) {
        let width = grapheme.width();
        if cells >= cols {
            out.push_str(grapheme);
        } else if cells + width > cols {
            out.push_str(&" ".repeat(cells + width - cols));
        }
        cells += width;
    }
    out
}

impl Widget for EditorPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let base = Style::default()
            .bg(self.theme.general.background)
            .fg(self.theme.general.foreground);
        buf.set_style(area, base);

        let viewport = &self.area.viewport;
        for i in 0..area.height as usize {
            let line_idx = viewport.offset_line + i;
            let text = match self.area.buffer.line(line_idx) {
                Some(line) => skip_cells(
                    &expand_tabs(&line, self.area.tab_width as usize),
                    viewport.offset_col,
                ),
                None => "~".to_string(),
            };
            let line_widget = Line::from(Span::styled(text, base));
            buf.set_line(area.x, area.y + i as u16, &line_widget, area.width);
        }

        let cursor = self.area.cursor_rect();
        if cursor.y < area.height && cursor.x < area.width {
            buf.get_mut(area.x + cursor.x, area.y + cursor.y)
                .set_style(
                    Style::default()
                        .bg(self.theme.ui.cursor_bg)
                        .fg(self.theme.ui.cursor_fg),
                );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Position;

    #[test]
    fn test_expand_tabs() {
        assert_eq!(expand_tabs("\tx", 4), "    x");
        assert_eq!(expand_tabs("ab\tx", 4), "ab  x");
        assert_eq!(expand_tabs("abcd\tx", 4), "abcd    x");
        assert_eq!(expand_tabs("no tabs", 4), "no tabs");
        assert_eq!(expand_tabs("漢\tx", 4), "漢  x");
    }

    #[test]
    fn test_skip_cells_splits_wide_grapheme() {
        assert_eq!(skip_cells("abc", 1), "bc");
        assert_eq!(skip_cells("漢字x", 2), "字x");
        assert_eq!(skip_cells("漢字x", 3), " x");
    }

    #[test]
    fn test_cursor_after_wide_text() {
        let mut text_area = TextArea::from_text("漢字sp");
        text_area.set_cursor(Position::new(0, 3));
        let theme = Theme::default();
        let area = Rect::new(0, 0, 12, 1);
        let mut buf = Buffer::empty(area);
        EditorPane::new(&text_area, &theme).render(area, &mut buf);

        assert_eq!(buf.get(0, 0).symbol(), "漢");
        assert_eq!(buf.get(2, 0).symbol(), "字");
        assert_eq!(buf.get(5, 0).symbol(), "p");
        assert_eq!(buf.get(5, 0).bg, theme.ui.cursor_bg);
    }

    #[test]
    fn test_render_lines_and_filler() {
        let mut text_area = TextArea::from_text("\tspell\nid");
        text_area.set_tab_stop_width(4);
        text_area.set_cursor(Position::new(1, 0));
        let theme = Theme::default();
        let area = Rect::new(0, 0, 12, 3);
        let mut buf = Buffer::empty(area);
        EditorPane::new(&text_area, &theme).render(area, &mut buf);

        assert_eq!(buf.get(4, 0).symbol(), "s");
        assert_eq!(buf.get(0, 1).symbol(), "i");
        assert_eq!(buf.get(0, 1).bg, theme.ui.cursor_bg);
        assert_eq!(buf.get(0, 2).symbol(), "~");
    }
}
