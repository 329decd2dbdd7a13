//! Order fixtures for unit tests

use chrono::{DateTime, TimeZone, Utc};

use shared::models::{MenuItem, MenuItemRef, Order, OrderItem, OrderStatus, StaffRef};

pub fn order(id: &str, status: OrderStatus) -> Order {
    Order {
        id: Some(id.to_string()),
        order_number: format!("N-{id}"),
        items: vec![item("m-1", "Attiéké poisson", 2500.0, 1)],
        total_amount: 2500.0,
        status,
        table_number: None,
        server: None,
        payment_method: None,
        notes: None,
        cancel_reason: None,
        created_at: Some(Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap()),
        updated_at: None,
    }
}

pub fn order_at(id: &str, status: OrderStatus, created_at: DateTime<Utc>) -> Order {
    Order {
        created_at: Some(created_at),
        ..order(id, status)
    }
}

pub fn item(menu_id: &str, name: &str, price: f64, quantity: u32) -> OrderItem {
    OrderItem {
        menu_item: MenuItemRef::Unresolved(menu_id.to_string()),
        name: Some(name.to_string()),
        price: Some(price),
        quantity,
        notes: None,
    }
}

pub fn menu_item(id: &str, name: &str, price: f64) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        price,
        category: None,
        image: None,
    }
}

pub fn with_server(mut order: Order, id: &str, name: &str) -> Order {
    order.server = Some(StaffRef {
        id: id.to_string(),
        name: name.to_string(),
    });
    order
}

pub fn with_table(mut order: Order, table: u32) -> Order {
    order.table_number = Some(table);
    order
}
