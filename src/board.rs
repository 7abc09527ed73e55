use chrono::FixedOffset;

use crate::client::OrderSource;
use crate::config::RenderConfig;
use crate::logging::{log_fetch_failed, log_no_orders, log_orders_rendered, log_state};
use crate::view::card::{render_orders, EMPTY_PLACEHOLDER};
use crate::view::{Containers, Element, ViewState};

/// Loads the order list once and drives the three containers.
pub struct OrderBoard<S, E> {
    source: S,
    view: Containers<E>,
    offset: FixedOffset,
    state: ViewState,
}

impl<S: OrderSource, E: Element> OrderBoard<S, E> {
    /// Enters the loading state straight away.
    pub fn new(source: S, mut view: Containers<E>, render: &RenderConfig) -> Self {
        view.show(ViewState::Loading);

        Self {
            source,
            view,
            offset: render.offset(),
            state: ViewState::Loading,
        }
    }

    /// One request, one render. On failure the orders container keeps
    /// whatever it held before.
    pub async fn load(&mut self) -> ViewState {
        self.enter(ViewState::Loading);

        match self.source.fetch_orders().await {
            Ok(Some(orders)) if !orders.is_empty() => {
                self.view
                    .orders
                    .set_inner_html(render_orders(&orders, self.offset));
                log_orders_rendered(orders.len());
                self.enter(ViewState::Loaded);
            }
            Ok(_) => {
                log_no_orders();
                self.view.orders.set_inner_html(EMPTY_PLACEHOLDER.to_string());
                self.enter(ViewState::Loaded);
            }
            Err(e) => {
                log_fetch_failed(&e);
                self.enter(ViewState::Error);
            }
        }

        self.state
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn view(&self) -> &Containers<E> {
        &self.view
    }

    pub fn into_view(self) -> Containers<E> {
        self.view
    }

    fn enter(&mut self, state: ViewState) {
        self.view.show(state);
        self.state = state;
        log_state(state);
    }
}
