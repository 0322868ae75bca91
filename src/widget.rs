// src/widget.rs - Code editing widget with contextual completion

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;

use crate::completion::{self, CompletionMode};
use crate::config::WidgetConfig;
use crate::motion;
use crate::surface::{CompletionPopup, TextSurface};

/// A text surface with tab indentation carry-over and a completion popup.
///
/// All behaviour lives in [`CodeWidget::handle_key`]; the surface and the
/// popup are the host's text and list widgets.
pub struct CodeWidget<S, P> {
    surface: S,
    popup: P,
    mode: CompletionMode,
    config: WidgetConfig,
}

impl<S: TextSurface, P: CompletionPopup> CodeWidget<S, P> {
    pub fn new(mut surface: S, mut popup: P, config: WidgetConfig, mode: CompletionMode) -> Self {
        popup.set_model(completion::toplevel_candidates());

        surface.set_font(&config.font_family, config.font_size_pt);
        let tab_width = config
            .tab_stop_spaces
            .saturating_mul(surface.space_advance());
        surface.set_tab_stop_width(tab_width);

        log::debug!(
            "Code widget ready: font {} {}pt, tab stop {}, completion {}",
            config.font_family,
            config.font_size_pt,
            tab_width,
            mode
        );

        Self {
            surface,
            popup,
            mode,
            config,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn popup(&self) -> &P {
        &self.popup
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn completion_mode(&self) -> CompletionMode {
        self.mode
    }

    pub fn set_completion_mode(&mut self, mode: CompletionMode) {
        log::debug!("Completion mode {} -> {}", self.mode, mode);
        self.mode = mode;
    }

    pub fn hide_popup(&mut self) {
        if self.popup.is_visible() {
            self.popup.hide();
        }
    }

    /// Move a visible popup back under the cursor, e.g. after the surface
    /// scrolled without a key press.
    pub fn reanchor_popup(&mut self) {
        if self.popup.is_visible() {
            let anchor = self.popup_anchor();
            self.popup.complete(anchor);
        }
    }

    fn popup_anchor(&self) -> Rect {
        let cursor = self.surface.cursor_rect();
        let width = self.popup.size_hint_width() + self.popup.scrollbar_width();
        Rect { width, ..cursor }
    }

    /// Insert `candidate` at the end of the current word, skipping the part
    /// already typed. Leaves the popup as it is.
    pub fn auto_complete(&mut self, candidate: &str) {
        let typed = self.popup.completion_prefix().chars().count();
        let suffix: String = candidate.chars().skip(typed).collect();
        log::trace!("Completing '{}' with suffix '{}'", candidate, suffix);
        self.surface.move_to_end_of_word();
        self.surface.insert_text(&suffix);
    }

    pub fn handle_key(&mut self, key: &KeyEvent) {
        if self.popup.is_visible() {
            match key.code {
                KeyCode::Tab => {
                    if let Some(candidate) = self.popup.current_completion().map(str::to_string) {
                        self.auto_complete(&candidate);
                    }
                    self.popup.hide();
                    return;
                }
                KeyCode::Esc => {
                    self.popup.hide();
                    return;
                }
                KeyCode::Down => {
                    self.popup.select_next();
                    return;
                }
                KeyCode::Up => {
                    self.popup.select_prev();
                    return;
                }
                _ => {}
            }
        }

        self.surface.apply_key(key);

        let is_space = key.code == KeyCode::Char(' ');
        let is_enter = key.code == KeyCode::Enter;

        if is_enter {
            self.carry_indentation();
        }

        if (is_space || is_enter) && self.popup.is_visible() {
            self.popup.hide();
            return;
        }

        if self.mode == CompletionMode::Disabled {
            return;
        }

        let word = self.surface.word_under_cursor();
        let line = self.surface.line_before_cursor();

        let context = if line.is_empty() {
            ""
        } else {
            // Whitespace-only line: nothing to complete.
            let Some(token) = completion::context_token(&line) else {
                return;
            };
            let candidates = completion::candidates_for(token);
            log::trace!("Context '{}' offers {:?}", token, candidates);
            self.popup.set_model(candidates);
            token
        };

        let forced = is_space && key.modifiers.contains(KeyModifiers::CONTROL);

        if self.mode == CompletionMode::KeyTriggered && !forced {
            return;
        }

        if context.is_empty() && !forced {
            if self.popup.is_visible() {
                self.popup.hide();
            }
            return;
        }

        if word != self.popup.completion_prefix() {
            self.popup.set_completion_prefix(&word);
            self.popup.set_current_row(0);
        }

        let anchor = self.popup_anchor();
        self.popup.complete(anchor);
    }

    /// Copy the previous line's leading tabs onto the current line.
    fn carry_indentation(&mut self) {
        let line = self.surface.cursor().line;
        if line == 0 {
            return;
        }
        let tabs = self
            .surface
            .line(line - 1)
            .map(|prev| motion::leading_tabs(&prev))
            .unwrap_or(0);
        if tabs > 0 {
            self.surface.insert_text(&"\t".repeat(tabs));
        }
    }
}
