// ui/widgets/gutter.rs - Line number gutter

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::text_area::TextArea;
use crate::ui::theme::Theme;

pub struct Gutter<'a> {
    pub area: &'a TextArea,
    pub theme: &'a Theme,
}

impl<'a> Gutter<'a> {
    pub fn new(area: &'a TextArea, theme: &'a Theme) -> Self {
        Self { area, theme }
    }
}

impl Widget for Gutter<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for i in 0..area.height as usize {
            let line_idx = self.area.viewport.offset_line + i;
            let text = if line_idx < self.area.buffer.line_count() {
                format!("{:>3} ", line_idx + 1)
            } else {
                "    ".to_string()
            };

            let line_widget = Line::from(Span::styled(
                text,
                Style::default().fg(self.theme.ui.gutter_fg),
            ));
            buf.set_line(area.x, area.y + i as u16, &line_widget, area.width);
        }
    }
}
