use chrono::FixedOffset;
use serde_json::Value;

use crate::domain::order::{display_value, is_truthy};
use crate::domain::time::format_timestamp;
use crate::domain::*;

/// Fragment shown in place of cards when the backend has no orders.
pub const EMPTY_PLACEHOLDER: &str = r#"<div class="loading">Заказов не найдено</div>"#;

/// Display strings for one order card, every field already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub customer: String,
    pub phone: String,
    pub origin: String,
    pub destination: String,
    pub weight: String,
    pub dimensions: String,
    pub price: String,
    pub date: String,
    pub tags: Vec<String>,
}

impl OrderCard {
    pub fn from_order(order: &Order, offset: FixedOffset) -> Self {
        Self {
            id: card_id(order),
            title: order.text_or_placeholder(&TITLE),
            description: order.text_or_placeholder(&DESCRIPTION),
            customer: order.text_or_placeholder(&CUSTOMER),
            phone: order.text_or_placeholder(&PHONE),
            origin: order.text_or_placeholder(&ORIGIN),
            destination: order.text_or_placeholder(&DESTINATION),
            weight: with_unit(order, &WEIGHT, "кг"),
            dimensions: dimensions(order),
            price: with_unit(order, &PRICE, "₽"),
            date: date(order, offset),
            tags: tags(order),
        }
    }

    pub fn to_html(&self) -> String {
        let tags = if self.tags.is_empty() {
            String::new()
        } else {
            let badges: String = self
                .tags
                .iter()
                .map(|t| format!(r#"<span class="tag">{}</span>"#, escape_html(t)))
                .collect();
            format!(r#"<div class="order-tags">{}</div>"#, badges)
        };

        format!(
            r#"
        <div class="order-card">
            <div class="order-header">
                <div class="order-id">#{id}</div>
                <div class="order-title">{title}</div>
            </div>
            <div class="order-details">
                <div class="order-detail">
                    <strong>Описание:</strong> {description}
                </div>
                <div class="order-detail">
                    <strong>Клиент:</strong> {customer} ({phone})
                </div>
                <div class="order-detail">
                    <strong>Маршрут:</strong> {origin} → {destination}
                </div>
                <div class="order-detail">
                    <strong>Вес:</strong> {weight}
                </div>
                <div class="order-detail">
                    <strong>Размеры:</strong> {dimensions}
                </div>
                <div class="order-detail">
                    <strong>Цена:</strong> {price}
                </div>
                <div class="order-detail">
                    <strong>Дата:</strong> {date}
                </div>
            </div>
            {tags}
        </div>
    "#,
            id = escape_html(&self.id),
            title = escape_html(&self.title),
            description = escape_html(&self.description),
            customer = escape_html(&self.customer),
            phone = escape_html(&self.phone),
            origin = escape_html(&self.origin),
            destination = escape_html(&self.destination),
            weight = escape_html(&self.weight),
            dimensions = escape_html(&self.dimensions),
            price = escape_html(&self.price),
            date = escape_html(&self.date),
            tags = tags,
        )
    }
}

/// Cards for every order, concatenated; the empty placeholder for none.
pub fn render_orders(orders: &[Order], offset: FixedOffset) -> String {
    if orders.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }

    orders
        .iter()
        .map(|o| OrderCard::from_order(o, offset).to_html())
        .collect()
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// ==================================================
// FIELD RESOLUTION
// ==================================================

fn card_id(order: &Order) -> String {
    match order.text(&ID) {
        Some(("uuid", uuid)) => uuid.chars().take(SHORT_ID_LEN).collect(),
        Some((_, id)) => id,
        None => ID.placeholder.to_string(),
    }
}

fn with_unit(order: &Order, field: &Field, unit: &str) -> String {
    match order.text(field) {
        Some((_, v)) => format!("{} {}", v, unit),
        None => field.placeholder.to_string(),
    }
}

fn dimensions(order: &Order) -> String {
    let [length, width, height] = DIMENSION_PARTS.map(|key| order.number(key));

    // The old page printed width twice; height belongs in the third slot.
    if let (Some(l), Some(w), Some(h)) = (length, width, height) {
        return format!("{}×{}×{} см", l, w, h);
    }

    order.text_or_placeholder(&DIMENSIONS)
}

fn date(order: &Order, offset: FixedOffset) -> String {
    order
        .lookup(&CREATED_AT)
        .and_then(|(_, v)| format_timestamp(v, offset))
        .unwrap_or_else(|| order.text_or_placeholder(&DATE))
}

fn tags(order: &Order) -> Vec<String> {
    match order.lookup(&TAGS) {
        Some((_, Value::Array(items))) => items
            .iter()
            .filter(|v| is_truthy(v))
            .filter_map(display_value)
            .collect(),
        Some((_, Value::String(tag))) if tag != NO_TAGS_SENTINEL => vec![tag.clone()],
        _ => Vec::new(),
    }
}
