//! Admin console: sidebar navigation plus the per-section panels

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::admin::{format_relative, AdminSection, AdminState, Order, OrderStatus};
use chrono::Local;

pub struct AdminScreen {
    sidebar_state: ListState,
    menu_state: ListState,
    order_state: ListState,
}

impl AdminScreen {
    pub fn new() -> Self {
        Self {
            sidebar_state: ListState::default(),
            menu_state: ListState::default(),
            order_state: ListState::default(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AdminState) {
        self.sidebar_state
            .select(AdminSection::all().iter().position(|s| *s == state.section));
        self.menu_state.select(Some(state.menu_selected));
        self.order_state.select(Some(state.order_selected));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Header
                Constraint::Min(10),   // Main content
                Constraint::Length(2), // Key hints
            ])
            .split(frame.area());

        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                "Menuza",
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  پنل مدیریت رستوران", Style::default().fg(Color::Gray)),
        ]));
        frame.render_widget(header, chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(26), Constraint::Min(40)])
            .split(chunks[1]);

        self.render_sidebar(frame, body[0]);
        match state.section {
            AdminSection::Dashboard => render_dashboard(frame, body[1], state),
            AdminSection::MenuItems => self.render_menu_items(frame, body[1], state),
            AdminSection::Categories => render_categories(frame, body[1], state),
            AdminSection::Orders => self.render_orders(frame, body[1], state),
            AdminSection::Analytics => render_placeholder(
                frame,
                body[1],
                "تحلیل‌ها",
                "آمار و تحلیل‌های فروش رستوران",
                "گزارش‌های دقیق به زودی در دسترس خواهد بود",
            ),
            AdminSection::Customers => render_placeholder(
                frame,
                body[1],
                "مشتریان",
                "اطلاعات و مدیریت مشتریان",
                "این بخش به زودی در دسترس خواهد بود",
            ),
            AdminSection::Settings => render_placeholder(
                frame,
                body[1],
                "تنظیمات",
                "تنظیمات عمومی رستوران",
                "پنل تنظیمات به زودی در دسترس خواهد بود",
            ),
        }

        self.render_footer(frame, chunks[2], state);
    }

    fn render_sidebar(&mut self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = AdminSection::all()
            .iter()
            .map(|section| ListItem::new(Span::raw(section.label().to_string())))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Gray)),
            )
            .highlight_style(
                Style::default()
                    .add_modifier(Modifier::REVERSED)
                    .fg(Color::LightRed),
            )
            .highlight_symbol("> ");

        frame.render_stateful_widget(list, area, &mut self.sidebar_state);
    }

    fn render_menu_items(&mut self, frame: &mut Frame, area: Rect, state: &AdminState) {
        let chunks = section_chunks(frame, area, "آیتم‌های منو", "آیتم‌های منوی رستوران خود را مدیریت کنید");

        let items: Vec<ListItem> = state
            .menu_items
            .iter()
            .map(|item| {
                let badge = if item.available {
                    Span::styled("[Available]", Style::default().fg(Color::Green))
                } else {
                    Span::styled("[Unavailable]", Style::default().fg(Color::DarkGray))
                };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(
                            item.name.clone(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(format!("  ${:.2}  ", item.price)),
                        badge,
                        Span::styled(
                            format!("  {}", item.category),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]),
                    Line::from(vec![
                        Span::raw("    "),
                        Span::styled(
                            item.description.clone(),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]),
                ])
            })
            .collect();

        let title = format!(" Items ({}) ", state.menu_items.len());
        let list = List::new(items)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, chunks[1], &mut self.menu_state);
    }

    fn render_orders(&mut self, frame: &mut Frame, area: Rect, state: &AdminState) {
        let filter_label = match state.status_filter {
            None => "All Orders",
            Some(status) => status.label(),
        };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Heading
                Constraint::Length(1), // Description and filter
                Constraint::Min(6),    // Order list
                Constraint::Length(8), // Selected order detail
            ])
            .split(area);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "سفارشات",
                Style::default().add_modifier(Modifier::BOLD),
            ))),
            chunks[0],
        );
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(
                    "سفارشات مشتریان را پیگیری و مدیریت کنید",
                    Style::default().fg(Color::Gray),
                ),
                Span::raw("   Filter: "),
                Span::styled(filter_label, Style::default().fg(Color::Yellow)),
            ])),
            chunks[1],
        );

        let now = Local::now();
        let orders = state.filtered_orders();
        let items: Vec<ListItem> = orders
            .iter()
            .map(|order| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(
                            order.id.clone(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::raw("  "),
                        status_badge(order.status),
                        Span::styled(
                            format!(" [{}]", order.order_type.label()),
                            Style::default().fg(Color::DarkGray),
                        ),
                        Span::raw(format!("  ${:.2}", order.total)),
                    ]),
                    Line::from(vec![
                        Span::raw("    "),
                        Span::raw(order.customer.clone()),
                        Span::styled(
                            format!("  {}  {}", order.phone, format_relative(order.placed_at, now)),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]),
                ])
            })
            .collect();

        let title = format!(" Orders ({}) ", orders.len());
        let list = List::new(items)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, chunks[2], &mut self.order_state);

        if let Some(order) = state.selected_order() {
            render_order_detail(frame, chunks[3], order);
        }
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect, state: &AdminState) {
        let mut spans = vec![
            Span::styled("Tab", Style::default().fg(Color::Yellow)),
            Span::raw(" بخش بعدی  "),
        ];
        match state.section {
            AdminSection::MenuItems => {
                spans.push(Span::styled("Space", Style::default().fg(Color::Yellow)));
                spans.push(Span::raw(" تغییر موجودی  "));
                spans.push(Span::styled("D", Style::default().fg(Color::Yellow)));
                spans.push(Span::raw(" حذف  "));
            }
            AdminSection::Orders => {
                if let Some(label) = state.selected_order().and_then(Order::advance_label) {
                    spans.push(Span::styled("Space", Style::default().fg(Color::Yellow)));
                    spans.push(Span::raw(format!(" {label}  ")));
                }
                spans.push(Span::styled("C", Style::default().fg(Color::Yellow)));
                spans.push(Span::raw(" لغو سفارش  "));
                spans.push(Span::styled("F", Style::default().fg(Color::Yellow)));
                spans.push(Span::raw(" فیلتر وضعیت  "));
            }
            _ => {}
        }
        spans.push(Span::styled("L", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(" خروج از حساب  "));
        spans.push(Span::styled("Q", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(" خروج"));

        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            area,
        );
    }
}

impl Default for AdminScreen {
    fn default() -> Self {
        Self::new()
    }
}

fn section_chunks(
    frame: &mut Frame,
    area: Rect,
    heading: &str,
    description: &str,
) -> std::rc::Rc<[Rect]> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(4)])
        .split(area);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                heading.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                description.to_string(),
                Style::default().fg(Color::Gray),
            )),
        ]),
        chunks[0],
    );
    chunks
}

fn render_dashboard(frame: &mut Frame, area: Rect, state: &AdminState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Heading
            Constraint::Length(5), // Stats cards
            Constraint::Length(4), // Welcome banner
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                "داشبورد",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "خوش آمدید! این یک نمای کلی از رستوران شماست.",
                Style::default().fg(Color::Gray),
            )),
        ]),
        chunks[0],
    );

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(chunks[1]);

    for (stat, card) in state.stats.iter().zip(cards.iter()) {
        let change_color = if stat.change.starts_with('-') {
            Color::Red
        } else {
            Color::Green
        };
        let block = Block::default()
            .title(Span::styled(
                stat.title.clone(),
                Style::default().fg(Color::Gray),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray));
        let inner = block.inner(*card);
        frame.render_widget(block, *card);
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(
                    stat.value.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(vec![
                    Span::styled(stat.change.clone(), Style::default().fg(change_color)),
                    Span::styled(" نسبت به ماه گذشته", Style::default().fg(Color::DarkGray)),
                ]),
            ]),
            inner,
        );
    }

    let banner = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightRed));
    let banner_inner = banner.inner(chunks[2]);
    frame.render_widget(banner, chunks[2]);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                "به Menuza خوش آمدید!",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "سیستم مدیریت رستوران شما آماده است. با تنظیم آیتم‌های منو شروع کنید.",
                Style::default().fg(Color::Gray),
            )),
        ]),
        banner_inner,
    );
}

fn render_categories(frame: &mut Frame, area: Rect, state: &AdminState) {
    let chunks = section_chunks(frame, area, "دسته‌بندی‌ها", "دسته‌بندی‌های منوی رستوران");

    let lines: Vec<Line> = state
        .categories
        .iter()
        .map(|category| {
            let count = state
                .menu_items
                .iter()
                .filter(|item| item.category == *category)
                .count();
            Line::from(vec![
                Span::raw(category.clone()),
                Span::styled(format!(" ({count})"), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        ),
        chunks[1],
    );
}

fn render_placeholder(frame: &mut Frame, area: Rect, heading: &str, description: &str, note: &str) {
    let chunks = section_chunks(frame, area, heading, description);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            note.to_string(),
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center),
        chunks[1],
    );
}

fn render_order_detail(frame: &mut Frame, area: Rect, order: &Order) {
    let mut lines = Vec::new();
    for item in &order.items {
        lines.push(Line::from(vec![
            Span::raw(format!("{}x {}", item.quantity, item.name)),
            Span::styled(
                format!("  ${:.2}", item.quantity as f64 * item.price),
                Style::default().fg(Color::Gray),
            ),
        ]));
    }
    lines.push(Line::from(Span::styled(
        format!("Total: ${:.2}", order.total),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    if let Some(address) = &order.address {
        lines.push(Line::from(Span::styled(
            address.clone(),
            Style::default().fg(Color::DarkGray),
        )));
    }
    if order.shows_estimate() {
        if let Some(minutes) = order.estimated_minutes {
            lines.push(Line::from(Span::styled(
                format!("Est. completion: {minutes} mins"),
                Style::default().fg(Color::Yellow),
            )));
        }
    }

    let block = Block::default()
        .title(format!(" {} ", order.id))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn status_badge(status: OrderStatus) -> Span<'static> {
    let color = match status {
        OrderStatus::Pending => Color::Yellow,
        OrderStatus::Preparing => Color::Cyan,
        OrderStatus::Ready => Color::Green,
        OrderStatus::Delivered => Color::DarkGray,
        OrderStatus::Cancelled => Color::Red,
    };
    Span::styled(format!("[{}]", status.label()), Style::default().fg(color))
}
