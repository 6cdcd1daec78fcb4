//! Reusable form field widgets for TUI forms

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

/// Byte offset of the given char position, for cursor edits in
/// multi-byte text
fn byte_index(value: &str, char_pos: usize) -> usize {
    value
        .char_indices()
        .nth(char_pos)
        .map(|(i, _)| i)
        .unwrap_or(value.len())
}

/// Single-line editing shared by the text and password inputs.
/// The cursor is a char position, not a byte offset.
fn handle_text_key(value: &mut String, cursor: &mut usize, key: KeyCode) -> bool {
    match key {
        KeyCode::Char(c) => {
            let at = byte_index(value, *cursor);
            value.insert(at, c);
            *cursor += 1;
            true
        }
        KeyCode::Backspace => {
            if *cursor > 0 {
                *cursor -= 1;
                let at = byte_index(value, *cursor);
                value.remove(at);
            }
            true
        }
        KeyCode::Delete => {
            if *cursor < value.chars().count() {
                let at = byte_index(value, *cursor);
                value.remove(at);
            }
            true
        }
        KeyCode::Left => {
            if *cursor > 0 {
                *cursor -= 1;
            }
            true
        }
        KeyCode::Right => {
            if *cursor < value.chars().count() {
                *cursor += 1;
            }
            true
        }
        KeyCode::Home => {
            *cursor = 0;
            true
        }
        KeyCode::End => {
            *cursor = value.chars().count();
            true
        }
        _ => false,
    }
}

/// A form field widget that can handle different input types
pub enum FormField {
    /// Single-line text input
    TextInput {
        value: String,
        cursor: usize,
        placeholder: String,
    },
    /// Masked single-line input with a visibility toggle
    PasswordInput {
        value: String,
        cursor: usize,
        placeholder: String,
        visible: bool,
    },
    /// Pick one option from a fixed list; nothing counts as picked
    /// until the user engages the field
    EnumSelect {
        options: Vec<String>,
        selected: Option<usize>,
        placeholder: String,
        list_state: ListState,
    },
    /// Consent checkbox with its own inline label
    Checkbox { value: bool, label: String },
}

impl FormField {
    pub fn text(placeholder: &str) -> Self {
        FormField::TextInput {
            value: String::new(),
            cursor: 0,
            placeholder: placeholder.to_string(),
        }
    }

    pub fn password(placeholder: &str) -> Self {
        FormField::PasswordInput {
            value: String::new(),
            cursor: 0,
            placeholder: placeholder.to_string(),
            visible: false,
        }
    }

    pub fn select(options: Vec<String>, placeholder: &str) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        FormField::EnumSelect {
            options,
            selected: None,
            placeholder: placeholder.to_string(),
            list_state,
        }
    }

    pub fn checkbox(label: &str) -> Self {
        FormField::Checkbox {
            value: false,
            label: label.to_string(),
        }
    }

    /// Get the current value as a string
    pub fn value(&self) -> String {
        match self {
            FormField::TextInput { value, .. } => value.clone(),
            FormField::PasswordInput { value, .. } => value.clone(),
            FormField::EnumSelect {
                options, selected, ..
            } => selected
                .and_then(|i| options.get(i))
                .cloned()
                .unwrap_or_default(),
            FormField::Checkbox { value, .. } => value.to_string(),
        }
    }

    /// Checkbox state; false for every other field type
    pub fn checked(&self) -> bool {
        matches!(self, FormField::Checkbox { value: true, .. })
    }

    /// Flip a password field between masked and plain display
    pub fn toggle_visibility(&mut self) {
        if let FormField::PasswordInput { visible, .. } = self {
            *visible = !*visible;
        }
    }

    /// Handle a key event, returns true if the key was consumed
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match self {
            FormField::TextInput { value, cursor, .. } => handle_text_key(value, cursor, key),
            FormField::PasswordInput { value, cursor, .. } => handle_text_key(value, cursor, key),
            FormField::EnumSelect {
                options,
                selected,
                list_state,
                ..
            } => match key {
                KeyCode::Up => {
                    let highlighted = list_state.selected().unwrap_or(0);
                    let next = if selected.is_none() {
                        highlighted
                    } else {
                        highlighted.saturating_sub(1)
                    };
                    list_state.select(Some(next));
                    *selected = Some(next);
                    true
                }
                KeyCode::Down => {
                    let highlighted = list_state.selected().unwrap_or(0);
                    let next = if selected.is_none() {
                        highlighted
                    } else {
                        (highlighted + 1).min(options.len().saturating_sub(1))
                    };
                    list_state.select(Some(next));
                    *selected = Some(next);
                    true
                }
                KeyCode::Char(' ') => {
                    *selected = Some(list_state.selected().unwrap_or(0));
                    true
                }
                _ => false,
            },
            FormField::Checkbox { value, .. } => match key {
                KeyCode::Char(' ') => {
                    *value = !*value;
                    true
                }
                KeyCode::Left => {
                    *value = false;
                    true
                }
                KeyCode::Right => {
                    *value = true;
                    true
                }
                _ => false,
            },
        }
    }

    /// Get the height needed to render this field
    pub fn render_height(&self, focused: bool) -> u16 {
        match self {
            FormField::EnumSelect { options, .. } if focused => (options.len() as u16).min(7),
            _ => 1,
        }
    }

    /// Render the field
    pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        match self {
            FormField::TextInput {
                value,
                cursor,
                placeholder,
            } => {
                render_text_line(frame, area, value, *cursor, placeholder, focused);
            }
            FormField::PasswordInput {
                value,
                cursor,
                placeholder,
                visible,
            } => {
                let shown = if *visible {
                    value.clone()
                } else {
                    "•".repeat(value.chars().count())
                };
                render_text_line(frame, area, &shown, *cursor, placeholder, focused);
            }
            FormField::EnumSelect {
                options,
                selected,
                placeholder,
                list_state,
            } => {
                if focused {
                    let items: Vec<ListItem> = options
                        .iter()
                        .enumerate()
                        .map(|(i, opt)| {
                            let is_picked = *selected == Some(i);
                            let radio = if is_picked { "(o)" } else { "( )" };
                            ListItem::new(Line::from(vec![
                                Span::styled(
                                    radio,
                                    Style::default().fg(if is_picked {
                                        Color::Green
                                    } else {
                                        Color::DarkGray
                                    }),
                                ),
                                Span::raw(" "),
                                Span::styled(
                                    opt.as_str(),
                                    Style::default().fg(if is_picked {
                                        Color::White
                                    } else {
                                        Color::Gray
                                    }),
                                ),
                            ]))
                        })
                        .collect();

                    let list = List::new(items)
                        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
                        .highlight_symbol("> ");
                    frame.render_stateful_widget(list, area, list_state);
                } else {
                    let line = match selected.and_then(|i| options.get(i)) {
                        Some(picked) => Line::from(Span::raw(picked.as_str())),
                        None => Line::from(Span::styled(
                            placeholder.as_str(),
                            Style::default().fg(Color::DarkGray),
                        )),
                    };
                    frame.render_widget(Paragraph::new(line), area);
                }
            }
            FormField::Checkbox { value, label } => {
                let mark_style = if *value {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                let label_style = if focused {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let line = Line::from(vec![
                    Span::styled(if *value { "[x] " } else { "[ ] " }, mark_style),
                    Span::styled(label.as_str(), label_style),
                ]);
                frame.render_widget(Paragraph::new(line), area);
            }
        }
    }
}

fn render_text_line(
    frame: &mut Frame,
    area: Rect,
    shown: &str,
    cursor: usize,
    placeholder: &str,
    focused: bool,
) {
    let content = if shown.is_empty() && !focused {
        Line::from(Span::styled(
            placeholder,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let mut text = shown.to_string();
        if focused {
            let at = byte_index(&text, cursor);
            text.insert(at, '|');
        }
        Line::from(Span::raw(text))
    };

    let para = Paragraph::new(content).style(Style::default().fg(if focused {
        Color::White
    } else {
        Color::Gray
    }));
    frame.render_widget(para, area);
}
