// tests/completion_behavior_test.rs - Key-driven completion and indentation behaviour

mod common;

use codepad::completion::CompletionMode;
use codepad::motion::Position;
use codepad::surface::CompletionPopup;
use common::{filtered, force_complete, press, type_text, widget_with_text};
use crossterm::event::KeyCode;

#[test]
fn test_enter_copies_previous_indentation() {
    let mut widget = widget_with_text("\t\t\tcast(spell)", CompletionMode::Full);
    press(&mut widget, KeyCode::Enter);
    assert_eq!(widget.surface().text(), "\t\t\tcast(spell)\n\t\t\t");
    assert_eq!(widget.surface().cursor, Position::new(1, 3));
}

#[test]
fn test_enter_ignores_tabs_after_spaces() {
    let mut widget = widget_with_text(" \tfoo", CompletionMode::Full);
    press(&mut widget, KeyCode::Enter);
    assert_eq!(widget.surface().text(), " \tfoo\n");
}

#[test]
fn test_enter_in_middle_of_line_indents_remainder() {
    let mut widget = widget_with_text("\tab", CompletionMode::Disabled);
    widget.surface_mut().set_cursor(Position::new(0, 2));
    press(&mut widget, KeyCode::Enter);
    assert_eq!(widget.surface().text(), "\ta\n\tb");
    assert_eq!(widget.surface().cursor, Position::new(1, 1));
}

#[test]
fn test_toplevel_candidates_without_dot() {
    let mut widget = widget_with_text("x = ", CompletionMode::Full);
    type_text(&mut widget, "s");
    assert_eq!(widget.popup().model(), &["spell".to_string()]);
    assert_eq!(filtered(&widget), vec!["spell"]);
}

#[test]
fn test_spell_members_after_dot() {
    let mut widget = widget_with_text("", CompletionMode::Full);
    type_text(&mut widget, "spell.x");
    assert_eq!(widget.popup().model(), &["id", "name", "rank"]);
    assert!(!widget.popup().is_visible());

    press(&mut widget, KeyCode::Backspace);
    assert!(widget.popup().is_visible());
    assert_eq!(filtered(&widget), vec!["id", "name", "rank"]);
}

#[test]
fn test_unknown_namespace_never_pops_up() {
    let mut widget = widget_with_text("", CompletionMode::Full);
    type_text(&mut widget, "foo.x");
    assert!(widget.popup().model().is_empty());
    assert!(!widget.popup().is_visible());

    force_complete(&mut widget);
    assert!(widget.popup().model().is_empty());
    assert!(!widget.popup().is_visible());
}

#[test]
fn test_commit_inserts_only_suffix() {
    let mut widget = widget_with_text("let a = ", CompletionMode::Full);
    type_text(&mut widget, "sp");
    assert_eq!(widget.popup().completion_prefix(), "sp");

    widget.auto_complete("spell");
    assert_eq!(widget.surface().text(), "let a = spell");
    assert_eq!(widget.surface().cursor, Position::new(0, 13));
    // Committing does not close the popup by itself.
    assert!(widget.popup().is_visible());
}

#[test]
fn test_commit_in_front_of_following_text() {
    let mut widget = widget_with_text("sp + 1", CompletionMode::Full);
    widget.surface_mut().set_cursor(Position::new(0, 2));
    force_complete(&mut widget);
    assert!(widget.popup().is_visible());
    press(&mut widget, KeyCode::Tab);
    assert_eq!(widget.surface().text(), "spell + 1");
    assert_eq!(widget.surface().cursor, Position::new(0, 5));
}

#[test]
fn test_key_mode_requires_trigger() {
    let mut widget = widget_with_text("", CompletionMode::KeyTriggered);
    type_text(&mut widget, "sp");
    assert!(!widget.popup().is_visible());

    force_complete(&mut widget);
    assert!(widget.popup().is_visible());
    assert_eq!(filtered(&widget), vec!["spell"]);

    type_text(&mut widget, "e");
    // Typing keeps an open popup but never refreshes its prefix.
    assert_eq!(widget.popup().completion_prefix(), "sp");
}

#[test]
fn test_key_mode_trigger_after_dot() {
    let mut widget = widget_with_text("", CompletionMode::KeyTriggered);
    type_text(&mut widget, "spell.na");
    force_complete(&mut widget);
    assert!(widget.popup().is_visible());
    assert_eq!(filtered(&widget), vec!["name"]);
    press(&mut widget, KeyCode::Tab);
    assert_eq!(widget.surface().text(), "spell.name");
}

#[test]
fn test_space_hides_popup_without_completing() {
    for mode in [CompletionMode::Full, CompletionMode::KeyTriggered] {
        let mut widget = widget_with_text("sp", mode);
        force_complete(&mut widget);
        assert!(widget.popup().is_visible());

        press(&mut widget, KeyCode::Char(' '));
        assert!(!widget.popup().is_visible());
        assert_eq!(widget.surface().text(), "sp ");
    }
}

#[test]
fn test_enter_hides_popup_without_completing() {
    let mut widget = widget_with_text("\t", CompletionMode::Full);
    type_text(&mut widget, "sp");
    assert!(widget.popup().is_visible());

    press(&mut widget, KeyCode::Enter);
    assert!(!widget.popup().is_visible());
    assert_eq!(widget.surface().text(), "\tsp\n\t");
}

#[test]
fn test_forced_trigger_hides_visible_popup() {
    let mut widget = widget_with_text("", CompletionMode::Full);
    type_text(&mut widget, "sp");
    assert!(widget.popup().is_visible());
    force_complete(&mut widget);
    assert!(!widget.popup().is_visible());
}

#[test]
fn test_prefix_change_resets_row() {
    let mut widget = widget_with_text("", CompletionMode::Full);
    type_text(&mut widget, "spell.");
    press(&mut widget, KeyCode::Down);
    press(&mut widget, KeyCode::Down);
    assert_eq!(widget.popup().current_completion(), Some("rank"));

    press(&mut widget, KeyCode::Char('n'));
    press(&mut widget, KeyCode::Backspace);
    assert_eq!(widget.popup().current_row(), Some(0));
    assert_eq!(widget.popup().current_completion(), Some("id"));
}
