//! Admin console state: sections, dashboard stats, menu items and orders

use chrono::{DateTime, Duration, Local};

/// Sections reachable from the admin sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminSection {
    Dashboard,
    MenuItems,
    Categories,
    Orders,
    Analytics,
    Customers,
    Settings,
}

impl AdminSection {
    pub fn all() -> Vec<AdminSection> {
        vec![
            AdminSection::Dashboard,
            AdminSection::MenuItems,
            AdminSection::Categories,
            AdminSection::Orders,
            AdminSection::Analytics,
            AdminSection::Customers,
            AdminSection::Settings,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdminSection::Dashboard => "داشبورد",
            AdminSection::MenuItems => "آیتم‌های منو",
            AdminSection::Categories => "دسته‌بندی‌ها",
            AdminSection::Orders => "سفارشات",
            AdminSection::Analytics => "تحلیل‌ها",
            AdminSection::Customers => "مشتریان",
            AdminSection::Settings => "تنظیمات",
        }
    }
}

/// One card on the dashboard
#[derive(Debug, Clone)]
pub struct DashboardStat {
    pub title: String,
    pub value: String,
    pub change: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub available: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Pending,
            OrderStatus::Preparing,
            OrderStatus::Ready,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Ready => "Ready",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// The status an order moves to when the kitchen advances it.
    /// Delivered and cancelled orders stay put.
    pub fn next(&self) -> OrderStatus {
        match self {
            OrderStatus::Pending => OrderStatus::Preparing,
            OrderStatus::Preparing => OrderStatus::Ready,
            OrderStatus::Ready => OrderStatus::Delivered,
            OrderStatus::Delivered => OrderStatus::Delivered,
            OrderStatus::Cancelled => OrderStatus::Cancelled,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderType {
    DineIn,
    Takeaway,
    Delivery,
}

impl OrderType {
    pub fn label(&self) -> &'static str {
        match self {
            OrderType::DineIn => "Dine-in",
            OrderType::Takeaway => "Takeaway",
            OrderType::Delivery => "Delivery",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: String,
    pub customer: String,
    pub phone: String,
    pub address: Option<String>,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub status: OrderStatus,
    pub order_type: OrderType,
    pub placed_at: DateTime<Local>,
    pub estimated_minutes: Option<u32>,
}

impl Order {
    /// Label of the kitchen action that moves this order forward, if any.
    /// Dine-in orders stop at ready, there is nothing to deliver.
    pub fn advance_label(&self) -> Option<&'static str> {
        match self.status {
            OrderStatus::Pending => Some("Start Preparing"),
            OrderStatus::Preparing => Some("Mark Ready"),
            OrderStatus::Ready if self.order_type != OrderType::DineIn => Some("Mark Delivered"),
            _ => None,
        }
    }

    pub fn can_cancel(&self) -> bool {
        matches!(self.status, OrderStatus::Pending | OrderStatus::Preparing)
    }

    /// Whether the estimated completion time is still worth showing
    pub fn shows_estimate(&self) -> bool {
        self.estimated_minutes.is_some()
            && !matches!(self.status, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

/// "Just now" under a minute, then minutes, hours, days
pub fn format_relative(when: DateTime<Local>, now: DateTime<Local>) -> String {
    let elapsed = now.signed_duration_since(when);
    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{minutes}m ago")
    } else if minutes < 60 * 24 {
        format!("{}h ago", elapsed.num_hours())
    } else {
        format!("{}d ago", elapsed.num_days())
    }
}

pub struct AdminState {
    pub section: AdminSection,
    pub stats: Vec<DashboardStat>,
    pub menu_items: Vec<MenuItem>,
    pub categories: Vec<String>,
    pub orders: Vec<Order>,
    pub status_filter: Option<OrderStatus>,
    pub menu_selected: usize,
    pub order_selected: usize,
}

impl AdminState {
    pub fn new() -> Self {
        let now = Local::now();
        Self {
            section: AdminSection::Dashboard,
            stats: seed_stats(),
            menu_items: seed_menu_items(),
            categories: seed_categories(),
            orders: seed_orders(now),
            status_filter: None,
            menu_selected: 0,
            order_selected: 0,
        }
    }

    pub fn next_section(&mut self) {
        let all = AdminSection::all();
        let idx = all.iter().position(|s| *s == self.section).unwrap_or(0);
        self.section = all[(idx + 1) % all.len()];
    }

    pub fn prev_section(&mut self) {
        let all = AdminSection::all();
        let idx = all.iter().position(|s| *s == self.section).unwrap_or(0);
        self.section = all[(idx + all.len() - 1) % all.len()];
    }

    pub fn select_next_item(&mut self) {
        if !self.menu_items.is_empty() {
            self.menu_selected = (self.menu_selected + 1) % self.menu_items.len();
        }
    }

    pub fn select_prev_item(&mut self) {
        if !self.menu_items.is_empty() {
            let len = self.menu_items.len();
            self.menu_selected = (self.menu_selected + len - 1) % len;
        }
    }

    /// Flip the selected menu item between available and unavailable
    pub fn toggle_availability(&mut self) {
        if let Some(item) = self.menu_items.get_mut(self.menu_selected) {
            item.available = !item.available;
        }
    }

    /// Remove the selected menu item, keeping the selection in range
    pub fn delete_item(&mut self) {
        if self.menu_selected < self.menu_items.len() {
            self.menu_items.remove(self.menu_selected);
            if self.menu_selected >= self.menu_items.len() && self.menu_selected > 0 {
                self.menu_selected -= 1;
            }
        }
    }

    /// Orders matching the active status filter, all of them when unfiltered
    pub fn filtered_orders(&self) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|o| self.status_filter.is_none_or(|s| o.status == s))
            .collect()
    }

    /// Step the filter through: all, then each status in turn, back to all
    pub fn cycle_status_filter(&mut self) {
        self.status_filter = match self.status_filter {
            None => Some(OrderStatus::Pending),
            Some(current) => {
                let all = OrderStatus::all();
                let idx = all.iter().position(|s| *s == current).unwrap_or(0);
                if idx + 1 < all.len() {
                    Some(all[idx + 1])
                } else {
                    None
                }
            }
        };
        self.order_selected = 0;
    }

    pub fn select_next_order(&mut self) {
        let count = self.filtered_orders().len();
        if count > 0 {
            self.order_selected = (self.order_selected + 1) % count;
        }
    }

    pub fn select_prev_order(&mut self) {
        let count = self.filtered_orders().len();
        if count > 0 {
            self.order_selected = (self.order_selected + count - 1) % count;
        }
    }

    pub fn selected_order(&self) -> Option<&Order> {
        self.filtered_orders().get(self.order_selected).copied()
    }

    /// Move the selected order to its next status, when an action applies
    pub fn advance_selected_order(&mut self) {
        let id = self
            .selected_order()
            .filter(|o| o.advance_label().is_some())
            .map(|o| o.id.clone());
        if let Some(id) = id {
            if let Some(order) = self.orders.iter_mut().find(|o| o.id == id) {
                order.status = order.status.next();
            }
        }
    }

    /// Cancel the selected order while it is still pending or preparing
    pub fn cancel_selected_order(&mut self) {
        let id = self
            .selected_order()
            .filter(|o| o.can_cancel())
            .map(|o| o.id.clone());
        if let Some(id) = id {
            if let Some(order) = self.orders.iter_mut().find(|o| o.id == id) {
                order.status = OrderStatus::Cancelled;
            }
        }
    }
}

impl Default for AdminState {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_stats() -> Vec<DashboardStat> {
    vec![
        DashboardStat {
            title: "کل درآمد".to_string(),
            value: "۱۲,۳۴۵,۰۰۰ تومان".to_string(),
            change: "+12.5%".to_string(),
        },
        DashboardStat {
            title: "سفارشات امروز".to_string(),
            value: "84".to_string(),
            change: "+5.2%".to_string(),
        },
        DashboardStat {
            title: "مشتریان فعال".to_string(),
            value: "1,234".to_string(),
            change: "+8.1%".to_string(),
        },
        DashboardStat {
            title: "میانگین سفارش".to_string(),
            value: "۳۲۵,۰۰۰ تومان".to_string(),
            change: "-2.1%".to_string(),
        },
    ]
}

fn seed_categories() -> Vec<String> {
    ["Burgers", "Pizza", "Salads", "Appetizers", "Desserts", "Beverages"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn seed_menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            name: "Classic Burger".to_string(),
            description: "Juicy beef patty with lettuce, tomato, and special sauce".to_string(),
            price: 12.99,
            category: "Burgers".to_string(),
            available: true,
        },
        MenuItem {
            name: "Margherita Pizza".to_string(),
            description: "Fresh mozzarella, tomato sauce, and basil".to_string(),
            price: 16.50,
            category: "Pizza".to_string(),
            available: true,
        },
        MenuItem {
            name: "Caesar Salad".to_string(),
            description: "Crisp romaine lettuce with parmesan and croutons".to_string(),
            price: 9.99,
            category: "Salads".to_string(),
            available: false,
        },
    ]
}

fn seed_orders(now: DateTime<Local>) -> Vec<Order> {
    vec![
        Order {
            id: "ORD-001".to_string(),
            customer: "John Doe".to_string(),
            phone: "+1234567890".to_string(),
            address: Some("123 Main St, City".to_string()),
            items: vec![
                OrderItem {
                    name: "Classic Burger".to_string(),
                    quantity: 2,
                    price: 12.99,
                },
                OrderItem {
                    name: "Fries".to_string(),
                    quantity: 2,
                    price: 4.99,
                },
            ],
            total: 35.96,
            status: OrderStatus::Preparing,
            order_type: OrderType::Delivery,
            placed_at: now - Duration::minutes(15),
            estimated_minutes: Some(25),
        },
        Order {
            id: "ORD-002".to_string(),
            customer: "Jane Smith".to_string(),
            phone: "+1987654321".to_string(),
            address: None,
            items: vec![
                OrderItem {
                    name: "Margherita Pizza".to_string(),
                    quantity: 1,
                    price: 16.50,
                },
                OrderItem {
                    name: "Caesar Salad".to_string(),
                    quantity: 1,
                    price: 9.99,
                },
            ],
            total: 26.49,
            status: OrderStatus::Pending,
            order_type: OrderType::Takeaway,
            placed_at: now - Duration::minutes(5),
            estimated_minutes: Some(20),
        },
        Order {
            id: "ORD-003".to_string(),
            customer: "Mike Johnson".to_string(),
            phone: "+1122334455".to_string(),
            address: None,
            items: vec![OrderItem {
                name: "Fish & Chips".to_string(),
                quantity: 1,
                price: 22.75,
            }],
            total: 22.75,
            status: OrderStatus::Ready,
            order_type: OrderType::DineIn,
            placed_at: now - Duration::minutes(30),
            estimated_minutes: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_data_shape() {
        let state = AdminState::new();
        assert_eq!(state.section, AdminSection::Dashboard);
        assert_eq!(state.stats.len(), 4);
        assert_eq!(state.menu_items.len(), 3);
        assert_eq!(state.categories.len(), 6);
        assert_eq!(state.orders.len(), 3);
        assert!(state.status_filter.is_none());
    }

    #[test]
    fn test_section_cycle_wraps() {
        let mut state = AdminState::new();
        state.prev_section();
        assert_eq!(state.section, AdminSection::Settings);
        state.next_section();
        assert_eq!(state.section, AdminSection::Dashboard);
        state.next_section();
        assert_eq!(state.section, AdminSection::MenuItems);
    }

    #[test]
    fn test_toggle_availability_flips() {
        let mut state = AdminState::new();
        state.menu_selected = 2;
        assert!(!state.menu_items[2].available);
        state.toggle_availability();
        assert!(state.menu_items[2].available);
        state.toggle_availability();
        assert!(!state.menu_items[2].available);
    }

    #[test]
    fn test_delete_item_clamps_selection() {
        let mut state = AdminState::new();
        state.menu_selected = 2;
        state.delete_item();
        assert_eq!(state.menu_items.len(), 2);
        assert_eq!(state.menu_selected, 1);

        state.delete_item();
        state.delete_item();
        assert!(state.menu_items.is_empty());
        assert_eq!(state.menu_selected, 0);

        // nothing left to delete
        state.delete_item();
        assert!(state.menu_items.is_empty());
    }

    #[test]
    fn test_status_filter_cycle() {
        let mut state = AdminState::new();
        assert_eq!(state.filtered_orders().len(), 3);

        state.cycle_status_filter();
        assert_eq!(state.status_filter, Some(OrderStatus::Pending));
        assert_eq!(state.filtered_orders().len(), 1);
        assert_eq!(state.filtered_orders()[0].id, "ORD-002");

        state.cycle_status_filter();
        state.cycle_status_filter();
        state.cycle_status_filter();
        state.cycle_status_filter();
        assert_eq!(state.status_filter, Some(OrderStatus::Cancelled));
        assert!(state.filtered_orders().is_empty());

        state.cycle_status_filter();
        assert!(state.status_filter.is_none());
        assert_eq!(state.filtered_orders().len(), 3);
    }

    #[test]
    fn test_advance_selected_order() {
        let mut state = AdminState::new();
        state.order_selected = 1;
        assert_eq!(state.orders[1].status, OrderStatus::Pending);
        state.advance_selected_order();
        assert_eq!(state.orders[1].status, OrderStatus::Preparing);
        state.advance_selected_order();
        state.advance_selected_order();
        assert_eq!(state.orders[1].status, OrderStatus::Delivered);
        state.advance_selected_order();
        assert_eq!(state.orders[1].status, OrderStatus::Delivered);
    }

    #[test]
    fn test_advance_respects_filter() {
        let mut state = AdminState::new();
        state.cycle_status_filter();
        assert_eq!(state.status_filter, Some(OrderStatus::Pending));
        state.advance_selected_order();
        // ORD-002 was the only pending order
        let order = state.orders.iter().find(|o| o.id == "ORD-002").unwrap();
        assert_eq!(order.status, OrderStatus::Preparing);
        assert!(state.filtered_orders().is_empty());
    }

    #[test]
    fn test_cancelled_stays_cancelled() {
        assert_eq!(OrderStatus::Cancelled.next(), OrderStatus::Cancelled);
    }

    #[test]
    fn test_dine_in_stops_at_ready() {
        let mut state = AdminState::new();
        // ORD-003 is a dine-in order already marked ready
        state.order_selected = 2;
        assert!(state.selected_order().unwrap().advance_label().is_none());
        state.advance_selected_order();
        assert_eq!(state.orders[2].status, OrderStatus::Ready);
    }

    #[test]
    fn test_cancel_only_while_open() {
        let mut state = AdminState::new();
        state.order_selected = 2;
        state.cancel_selected_order();
        assert_eq!(state.orders[2].status, OrderStatus::Ready);

        state.order_selected = 1;
        state.cancel_selected_order();
        assert_eq!(state.orders[1].status, OrderStatus::Cancelled);
    }

    #[test]
    fn test_estimate_hidden_once_closed() {
        let mut state = AdminState::new();
        assert!(state.orders[0].shows_estimate());
        state.orders[0].status = OrderStatus::Cancelled;
        assert!(!state.orders[0].shows_estimate());
        assert!(!state.orders[2].shows_estimate());
    }

    #[test]
    fn test_format_relative_tiers() {
        let now = Local::now();
        assert_eq!(format_relative(now - Duration::seconds(30), now), "Just now");
        assert_eq!(format_relative(now - Duration::minutes(5), now), "5m ago");
        assert_eq!(format_relative(now - Duration::minutes(59), now), "59m ago");
        assert_eq!(format_relative(now - Duration::hours(3), now), "3h ago");
        assert_eq!(format_relative(now - Duration::hours(23), now), "23h ago");
        assert_eq!(format_relative(now - Duration::days(2), now), "2d ago");
    }

    #[test]
    fn test_labels_outlive_the_matched_value() {
        // The orders screen builds its filter caption from a by-value match
        // binding; labels must not borrow from it
        let filter = Some(OrderStatus::Preparing);
        let caption = match filter {
            None => "All Orders",
            Some(status) => status.label(),
        };
        assert_eq!(caption, "Preparing");

        let section: &'static str = AdminSection::Orders.label();
        let order_type: &'static str = OrderType::DineIn.label();
        assert_eq!(section, "سفارشات");
        assert_eq!(order_type, "Dine-in");
    }
}
