//! Two-step signup wizard screen

use std::ops::Range;

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::auth::SignupRequest;
use crate::forms::{RestaurantType, SignupAdvance, SignupField, SignupForm, SignupStep};

use super::centered_rect;
use super::form_field::FormField;

/// What the signup screen asks the app to do
pub enum SignupSignal {
    None,
    /// Validation passed on the final step; the payload is ready to send
    Submit(SignupRequest),
    SwitchToLogin,
    Leave,
}

pub struct SignupScreen {
    pub form: SignupForm,
    fields: Vec<(SignupField, FormField)>,
    focused: usize,
}

impl SignupScreen {
    pub fn new() -> Self {
        let type_labels = RestaurantType::all()
            .iter()
            .map(|t| t.label().to_string())
            .collect();
        let fields = vec![
            (
                SignupField::RestaurantName,
                FormField::text("مثل: رستوران سنتی ایرانی"),
            ),
            (
                SignupField::RestaurantType,
                FormField::select(type_labels, "نوع رستوران خود را انتخاب کنید"),
            ),
            (SignupField::Address, FormField::text("خیابان اصلی، پلاک 123")),
            (SignupField::City, FormField::text("تهران")),
            (SignupField::ZipCode, FormField::text("1234567890")),
            (SignupField::Phone, FormField::text("09123456789")),
            (SignupField::OwnerName, FormField::text("احمد محمدی")),
            (SignupField::Email, FormField::text("ahmad@restaurant.com")),
            (SignupField::Password, FormField::password("حداقل 8 کاراکتر")),
            (
                SignupField::ConfirmPassword,
                FormField::password("رمز عبور را دوباره وارد کنید"),
            ),
            (
                SignupField::AgreeToTerms,
                FormField::checkbox("با شرایط خدمات و سیاست حفظ حریم خصوصی موافقم"),
            ),
            (
                SignupField::AgreeToMarketing,
                FormField::checkbox("دوست دارم نکات، به‌روزرسانی‌ها و پیشنهادات ویژه Menuza را دریافت کنم"),
            ),
        ];
        Self {
            form: SignupForm::new(),
            fields,
            focused: 0,
        }
    }

    /// Field indices belonging to the step on display
    fn step_range(&self) -> Range<usize> {
        match self.form.step() {
            SignupStep::RestaurantInfo => 0..6,
            _ => 6..12,
        }
    }

    fn next_field(&mut self) {
        let range = self.step_range();
        let offset = self.focused - range.start;
        self.focused = range.start + (offset + 1) % range.len();
    }

    fn prev_field(&mut self) {
        let range = self.step_range();
        let offset = self.focused - range.start;
        self.focused = range.start + (offset + range.len() - 1) % range.len();
    }

    pub fn handle_key(&mut self, key: KeyCode) -> SignupSignal {
        if self.form.is_submitting() {
            return SignupSignal::None;
        }

        match key {
            KeyCode::F(3) => return SignupSignal::SwitchToLogin,
            KeyCode::F(2) => {
                self.fields[self.focused].1.toggle_visibility();
                return SignupSignal::None;
            }
            KeyCode::Esc => {
                return if self.form.back() {
                    self.focused = self.step_range().start;
                    SignupSignal::None
                } else {
                    SignupSignal::Leave
                };
            }
            KeyCode::Tab => {
                self.next_field();
                return SignupSignal::None;
            }
            KeyCode::BackTab => {
                self.prev_field();
                return SignupSignal::None;
            }
            _ => {}
        }

        let (field, widget) = &mut self.fields[self.focused];
        let field = *field;
        let value_before = widget.value();
        let checked_before = widget.checked();
        if widget.handle_key(key) {
            let is_checkbox = matches!(widget, FormField::Checkbox { .. });
            let value_after = widget.value();
            let checked_after = widget.checked();
            if is_checkbox {
                if checked_after != checked_before {
                    self.form.set_flag(field, checked_after);
                }
            } else if value_after != value_before {
                self.form.set_text(field, value_after);
            }
            return SignupSignal::None;
        }

        match key {
            KeyCode::Enter => match self.form.advance() {
                SignupAdvance::Stay => SignupSignal::None,
                SignupAdvance::Continue => {
                    self.focused = self.step_range().start;
                    SignupSignal::None
                }
                SignupAdvance::Submit(request) => SignupSignal::Submit(request),
            },
            KeyCode::Up => {
                self.prev_field();
                SignupSignal::None
            }
            KeyCode::Down => {
                self.next_field();
                SignupSignal::None
            }
            _ => SignupSignal::None,
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = centered_rect(70, 90, frame.area());
        frame.render_widget(Clear, area);

        let step_number = match self.form.step() {
            SignupStep::RestaurantInfo => 1,
            _ => 2,
        };

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    "Menuza",
                    Style::default()
                        .fg(Color::LightRed)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" مرحله {step_number} از 2 ")),
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
                Constraint::Length(1), // Submit error
                Constraint::Min(10),   // Fields
                Constraint::Length(2), // Footer
            ])
            .split(inner);

        let (heading, subtitle) = if step_number == 1 {
            (
                "درباره رستوران خود بگویید",
                "Menuza را برای نیازهای رستوران شما سفارشی کنیم",
            )
        } else {
            (
                "حساب کاربری ایجاد کنید",
                "تقریباً آماده تبدیل تجربه رستوران خود هستید",
            )
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                heading,
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center),
            chunks[0],
        );
        let step_dots = Line::from(vec![
            Span::styled("●", Style::default().fg(Color::LightRed)),
            Span::raw(" "),
            if step_number == 1 {
                Span::styled("○", Style::default().fg(Color::DarkGray))
            } else {
                Span::styled("●", Style::default().fg(Color::LightRed))
            },
        ]);
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(subtitle, Style::default().fg(Color::Gray))),
                step_dots,
            ])
            .alignment(Alignment::Center),
            chunks[1],
        );

        if let Some(message) = self.form.submit_error() {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    message,
                    Style::default().fg(Color::Red),
                )))
                .alignment(Alignment::Center),
                chunks[2],
            );
        }

        self.render_fields(frame, chunks[3]);
        self.render_footer(frame, chunks[4], step_number);
    }

    fn render_fields(&mut self, frame: &mut Frame, area: Rect) {
        // (field index, label, error, input height) for each visible row
        let rows: Vec<(usize, Option<&'static str>, Option<String>, u16)> = self
            .step_range()
            .map(|idx| {
                let (field, widget) = &self.fields[idx];
                let label = field_label(*field);
                let error = self.form.error_for(*field).map(String::from);
                let height = widget.render_height(idx == self.focused);
                (idx, label, error, height)
            })
            .collect();

        let mut constraints = Vec::new();
        for (_, label, error, height) in &rows {
            if label.is_some() {
                constraints.push(Constraint::Length(1));
            }
            constraints.push(Constraint::Length(*height));
            if error.is_some() {
                constraints.push(Constraint::Length(1));
            }
        }
        constraints.push(Constraint::Min(0));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let mut chunk = 0;
        for (idx, label, error, _) in rows {
            let focused = idx == self.focused;
            if let Some(label) = label {
                let style = if focused {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                frame.render_widget(
                    Paragraph::new(Line::from(Span::styled(label, style))),
                    chunks[chunk],
                );
                chunk += 1;
            }
            self.fields[idx].1.render(frame, chunks[chunk], focused);
            chunk += 1;
            if let Some(error) = error {
                frame.render_widget(
                    Paragraph::new(Line::from(Span::styled(
                        error,
                        Style::default().fg(Color::Red),
                    ))),
                    chunks[chunk],
                );
                chunk += 1;
            }
        }
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect, step_number: u8) {
        let line = if self.form.is_submitting() {
            Line::from(Span::styled(
                "در حال ایجاد حساب کاربری...",
                Style::default().fg(Color::Yellow),
            ))
        } else {
            let action = if step_number == 1 {
                " ادامه  "
            } else {
                " ایجاد حساب کاربری  "
            };
            let mut spans = vec![
                Span::styled("Enter", Style::default().fg(Color::Yellow)),
                Span::raw(action),
                Span::styled("Tab", Style::default().fg(Color::Yellow)),
                Span::raw(" فیلد بعدی  "),
            ];
            if step_number == 2 {
                spans.push(Span::styled("F2", Style::default().fg(Color::Yellow)));
                spans.push(Span::raw(" نمایش رمز  "));
            }
            spans.push(Span::styled("Esc", Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(" بازگشت  "));
            spans.push(Span::styled("F3", Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(" ورود"));
            Line::from(spans)
        };
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }
}

impl Default for SignupScreen {
    fn default() -> Self {
        Self::new()
    }
}

fn field_label(field: SignupField) -> Option<&'static str> {
    match field {
        SignupField::RestaurantName => Some("نام رستوران *"),
        SignupField::RestaurantType => Some("نوع رستوران *"),
        SignupField::Address => Some("آدرس *"),
        SignupField::City => Some("شهر *"),
        SignupField::ZipCode => Some("کد پستی"),
        SignupField::Phone => Some("شماره تلفن *"),
        SignupField::OwnerName => Some("نام و نام خانوادگی *"),
        SignupField::Email => Some("آدرس ایمیل *"),
        SignupField::Password => Some("رمز عبور *"),
        SignupField::ConfirmPassword => Some("تکرار رمز عبور *"),
        SignupField::AgreeToTerms | SignupField::AgreeToMarketing => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(screen: &mut SignupScreen, text: &str) {
        for c in text.chars() {
            screen.handle_key(KeyCode::Char(c));
        }
    }

    fn fill_restaurant_step(screen: &mut SignupScreen) {
        type_str(screen, "کافه باغ");
        screen.handle_key(KeyCode::Tab);
        screen.handle_key(KeyCode::Down); // picks the first category
        screen.handle_key(KeyCode::Tab);
        type_str(screen, "خیابان ولیعصر 12");
        screen.handle_key(KeyCode::Tab);
        type_str(screen, "تهران");
        screen.handle_key(KeyCode::Tab); // zip left empty
        screen.handle_key(KeyCode::Tab);
        type_str(screen, "09123456789");
    }

    fn fill_account_step(screen: &mut SignupScreen) {
        type_str(screen, "احمد محمدی");
        screen.handle_key(KeyCode::Tab);
        type_str(screen, "ahmad@restaurant.com");
        screen.handle_key(KeyCode::Tab);
        type_str(screen, "secret-password");
        screen.handle_key(KeyCode::Tab);
        type_str(screen, "secret-password");
        screen.handle_key(KeyCode::Tab);
        screen.handle_key(KeyCode::Char(' ')); // agree to terms
    }

    #[test]
    fn test_wizard_emits_request_after_both_steps() {
        let mut screen = SignupScreen::new();
        fill_restaurant_step(&mut screen);
        assert!(matches!(
            screen.handle_key(KeyCode::Enter),
            SignupSignal::None
        ));
        assert_eq!(screen.form.step(), SignupStep::AccountInfo);

        fill_account_step(&mut screen);
        let signal = screen.handle_key(KeyCode::Enter);
        let SignupSignal::Submit(request) = signal else {
            panic!("expected a submit signal");
        };
        assert_eq!(request.restaurant_name, "کافه باغ");
        assert_eq!(request.restaurant_type, "رستوران سنتی");
        assert_eq!(request.email, "ahmad@restaurant.com");
        assert!(request.agree_to_terms);
        assert!(!request.agree_to_marketing);
        assert!(screen.form.is_submitting());
    }

    #[test]
    fn test_empty_step_stays_with_errors() {
        let mut screen = SignupScreen::new();
        assert!(matches!(
            screen.handle_key(KeyCode::Enter),
            SignupSignal::None
        ));
        assert_eq!(screen.form.step(), SignupStep::RestaurantInfo);
        assert!(screen.form.error_for(SignupField::RestaurantName).is_some());
        assert!(screen.form.error_for(SignupField::RestaurantType).is_some());
    }

    #[test]
    fn test_typing_clears_field_error() {
        let mut screen = SignupScreen::new();
        screen.handle_key(KeyCode::Enter);
        assert!(screen.form.error_for(SignupField::RestaurantName).is_some());
        screen.handle_key(KeyCode::Char('ک'));
        assert!(screen.form.error_for(SignupField::RestaurantName).is_none());
    }

    #[test]
    fn test_esc_leaves_from_first_step_only() {
        let mut screen = SignupScreen::new();
        fill_restaurant_step(&mut screen);
        screen.handle_key(KeyCode::Enter);
        assert_eq!(screen.form.step(), SignupStep::AccountInfo);

        assert!(matches!(screen.handle_key(KeyCode::Esc), SignupSignal::None));
        assert_eq!(screen.form.step(), SignupStep::RestaurantInfo);
        // the draft survives going back
        assert_eq!(screen.form.draft().restaurant_name, "کافه باغ");

        assert!(matches!(
            screen.handle_key(KeyCode::Esc),
            SignupSignal::Leave
        ));
    }

    #[test]
    fn test_switch_to_login_signal() {
        let mut screen = SignupScreen::new();
        assert!(matches!(
            screen.handle_key(KeyCode::F(3)),
            SignupSignal::SwitchToLogin
        ));
    }

    #[test]
    fn test_keys_ignored_while_submitting() {
        let mut screen = SignupScreen::new();
        fill_restaurant_step(&mut screen);
        screen.handle_key(KeyCode::Enter);
        fill_account_step(&mut screen);
        assert!(matches!(
            screen.handle_key(KeyCode::Enter),
            SignupSignal::Submit(_)
        ));
        assert!(matches!(screen.handle_key(KeyCode::Esc), SignupSignal::None));
        assert!(matches!(
            screen.handle_key(KeyCode::Enter),
            SignupSignal::None
        ));
    }
}
