//! Public landing screen with the platform pitch and entry points

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::centered_rect;

/// What the landing screen asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingSignal {
    None,
    GetStarted,
    SignIn,
    Quit,
}

pub struct LandingScreen;

impl LandingScreen {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key(&mut self, key: KeyCode) -> LandingSignal {
        match key {
            KeyCode::Enter | KeyCode::Char('s') => LandingSignal::GetStarted,
            KeyCode::Char('l') => LandingSignal::SignIn,
            KeyCode::Char('q') | KeyCode::Esc => LandingSignal::Quit,
            _ => LandingSignal::None,
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = centered_rect(70, 80, frame.area());
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
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(1), // Badge
                Constraint::Length(2), // Headline
                Constraint::Length(3), // Pitch
                Constraint::Length(1), // Trial notes
                Constraint::Length(1), // Spacer
                Constraint::Min(8),    // Features
                Constraint::Length(2), // Footer
            ])
            .split(inner);

        let badge = Paragraph::new(Line::from(Span::styled(
            "انقلاب منوی دیجیتال",
            Style::default().fg(Color::LightRed),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(badge, chunks[0]);

        let headline = Paragraph::new(Line::from(vec![
            Span::styled(
                "رستوران خود را با ",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "منوهای دیجیتال",
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" متحول کنید", Style::default().add_modifier(Modifier::BOLD)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(headline, chunks[1]);

        let pitch = Paragraph::new(vec![
            Line::from("منوهای زیبا و تعاملی ایجاد کنید که فروش را افزایش، هزینه‌ها را کاهش"),
            Line::from("و مشتریان را خوشحال می‌کند. به هزاران رستورانی بپیوندید که از Menuza استفاده می‌کنند."),
        ])
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
        frame.render_widget(pitch, chunks[2]);

        let notes = Paragraph::new(Line::from(vec![
            Span::styled("+ ", Style::default().fg(Color::Green)),
            Span::styled("بدون هزینه نصب   ", Style::default().fg(Color::DarkGray)),
            Span::styled("+ ", Style::default().fg(Color::Green)),
            Span::styled("14 روز آزمایش رایگان   ", Style::default().fg(Color::DarkGray)),
            Span::styled("+ ", Style::default().fg(Color::Green)),
            Span::styled("لغو در هر زمان", Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(notes, chunks[3]);

        let features = [
            (
                "مدیریت منوی دیجیتال",
                "منوهای زیبا و تعاملی ایجاد کنید که مشتریان فوراً به آن دسترسی داشته باشند",
            ),
            (
                "سفارش با کد QR",
                "مشتریان اسکن کرده، مرور و مستقیماً از تلفن خود سفارش می‌دهند",
            ),
            (
                "تحلیل زمان واقعی",
                "محبوب‌ترین غذاها، ساعات شلوغی و ترجیحات مشتریان را پیگیری کنید",
            ),
            (
                "مدیریت سفارشات",
                "عملیات آشپزخانه را با پیگیری منظم سفارشات ساده کنید",
            ),
        ];
        let mut feature_lines = Vec::new();
        for (title, description) in features {
            feature_lines.push(Line::from(vec![
                Span::styled("* ", Style::default().fg(Color::LightRed)),
                Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
            ]));
            feature_lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(description, Style::default().fg(Color::DarkGray)),
            ]));
        }
        frame.render_widget(Paragraph::new(feature_lines), chunks[5]);

        let footer = Paragraph::new(Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(" شروع آزمایش رایگان  "),
            Span::styled("L", Style::default().fg(Color::Yellow)),
            Span::raw(" ورود  "),
            Span::styled("Q", Style::default().fg(Color::Yellow)),
            Span::raw(" خروج"),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[6]);
    }
}

impl Default for LandingScreen {
    fn default() -> Self {
        Self::new()
    }
}
