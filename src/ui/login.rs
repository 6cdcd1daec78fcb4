//! Login screen for owners with an existing account

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::auth::LoginRequest;
use crate::forms::LoginForm;

use super::centered_rect;
use super::form_field::FormField;

/// What the login screen asks the app to do
pub enum LoginSignal {
    None,
    /// Both fields are filled; the payload is ready to send
    Submit(LoginRequest),
    SwitchToSignup,
    Leave,
}

pub struct LoginScreen {
    pub form: LoginForm,
    email: FormField,
    password: FormField,
    focused: usize,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self {
            form: LoginForm::new(),
            email: FormField::text("ایمیل خود را وارد کنید"),
            password: FormField::password("رمز عبور خود را وارد کنید"),
            focused: 0,
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) -> LoginSignal {
        if self.form.is_submitting() {
            return LoginSignal::None;
        }

        match key {
            KeyCode::F(3) => return LoginSignal::SwitchToSignup,
            KeyCode::F(2) => {
                self.password.toggle_visibility();
                return LoginSignal::None;
            }
            KeyCode::Esc => return LoginSignal::Leave,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focused = 1 - self.focused;
                return LoginSignal::None;
            }
            KeyCode::Enter => {
                return match self.form.begin_submit() {
                    Some(request) => LoginSignal::Submit(request),
                    None => LoginSignal::None,
                };
            }
            _ => {}
        }

        let widget = if self.focused == 0 {
            &mut self.email
        } else {
            &mut self.password
        };
        let before = widget.value();
        if widget.handle_key(key) {
            let after = widget.value();
            if after != before {
                if self.focused == 0 {
                    self.form.set_email(after);
                } else {
                    self.form.set_password(after);
                }
            }
        }
        LoginSignal::None
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = centered_rect(60, 60, frame.area());
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    "Menuza",
                    Style::default()
                        .fg(Color::LightRed)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" ورود "),
            ]))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(1), // Heading
                Constraint::Length(2), // Subtitle
                Constraint::Length(1), // Error
                Constraint::Length(2), // Email label + input
                Constraint::Length(1), // Spacer
                Constraint::Length(2), // Password label + input
                Constraint::Min(1),    // Spacer
                Constraint::Length(2), // Footer
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "ورود به پنل مدیریت",
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center),
            chunks[0],
        );
        frame.render_widget(
            Paragraph::new(Line::from("به سیستم مدیریت رستوران خود وارد شوید"))
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray)),
            chunks[1],
        );

        if let Some(message) = self.form.error() {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    message,
                    Style::default().fg(Color::Red),
                )))
                .alignment(Alignment::Center),
                chunks[2],
            );
        }

        self.render_labeled_field(frame, chunks[3], "ایمیل", 0);
        self.render_labeled_field(frame, chunks[5], "رمز عبور", 1);
        self.render_footer(frame, chunks[7]);
    }

    fn render_labeled_field(
        &mut self,
        frame: &mut Frame,
        area: ratatui::layout::Rect,
        label: &str,
        index: usize,
    ) {
        let focused = self.focused == index;
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);
        let style = if focused {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        frame.render_widget(Paragraph::new(Line::from(Span::styled(label, style))), rows[0]);
        let widget = if index == 0 {
            &mut self.email
        } else {
            &mut self.password
        };
        widget.render(frame, rows[1], focused);
    }

    fn render_footer(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let line = if self.form.is_submitting() {
            Line::from(Span::styled(
                "در حال ورود...",
                Style::default().fg(Color::Yellow),
            ))
        } else {
            let submit_style = if self.form.can_submit() {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(vec![
                Span::styled("Enter", submit_style),
                Span::raw(" ورود به پنل  "),
                Span::styled("Tab", Style::default().fg(Color::Yellow)),
                Span::raw(" فیلد بعدی  "),
                Span::styled("F2", Style::default().fg(Color::Yellow)),
                Span::raw(" نمایش رمز  "),
                Span::styled("F3", Style::default().fg(Color::Yellow)),
                Span::raw(" ثبت نام  "),
                Span::styled("Esc", Style::default().fg(Color::Yellow)),
                Span::raw(" بازگشت"),
            ])
        };
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(screen: &mut LoginScreen, text: &str) {
        for c in text.chars() {
            screen.handle_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn test_submit_blocked_until_both_fields_filled() {
        let mut screen = LoginScreen::new();
        assert!(matches!(screen.handle_key(KeyCode::Enter), LoginSignal::None));

        type_str(&mut screen, "owner@cafe.ir");
        assert!(matches!(screen.handle_key(KeyCode::Enter), LoginSignal::None));

        screen.handle_key(KeyCode::Tab);
        type_str(&mut screen, "secret");
        let signal = screen.handle_key(KeyCode::Enter);
        let LoginSignal::Submit(request) = signal else {
            panic!("expected a submit signal");
        };
        assert_eq!(request.email, "owner@cafe.ir");
        assert_eq!(request.password, "secret");
        assert!(screen.form.is_submitting());
    }

    #[test]
    fn test_no_second_submit_while_in_flight() {
        let mut screen = LoginScreen::new();
        type_str(&mut screen, "owner@cafe.ir");
        screen.handle_key(KeyCode::Tab);
        type_str(&mut screen, "secret");
        assert!(matches!(
            screen.handle_key(KeyCode::Enter),
            LoginSignal::Submit(_)
        ));
        assert!(matches!(screen.handle_key(KeyCode::Enter), LoginSignal::None));
    }

    #[test]
    fn test_navigation_signals() {
        let mut screen = LoginScreen::new();
        assert!(matches!(screen.handle_key(KeyCode::Esc), LoginSignal::Leave));
        assert!(matches!(
            screen.handle_key(KeyCode::F(3)),
            LoginSignal::SwitchToSignup
        ));
    }
}
