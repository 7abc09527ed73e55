use log::{error, info, warn};

use crate::client::FetchError;
use crate::view::ViewState;

pub fn log_fetch_started(url: &str) {
    info!("📡 Fetching orders from {}", url);
}

pub fn log_fetch_failed(err: &FetchError) {
    error!("❌ Error loading orders: {}", err);
}

pub fn log_no_orders() {
    warn!("📭 No orders found");
}

pub fn log_orders_rendered(count: usize) {
    info!("✅ Rendered {} order card(s)", count);
}

pub fn log_state(state: ViewState) {
    info!("🖥️ View state: {}", state);
}
