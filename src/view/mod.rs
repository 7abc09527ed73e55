pub mod card;
pub mod page;

pub use card::OrderCard;
pub use page::{HtmlPage, PageElement};

use std::fmt;

// ==================================================
// VISIBILITY STATE
// ==================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Error,
    Loaded,
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewState::Loading => write!(f, "loading"),
            ViewState::Error => write!(f, "error"),
            ViewState::Loaded => write!(f, "loaded"),
        }
    }
}

// ==================================================
// CONTAINERS
// ==================================================

/// A page element the board can show, hide and fill.
pub trait Element {
    fn id(&self) -> &str;
    fn is_hidden(&self) -> bool;
    fn set_hidden(&mut self, hidden: bool);
    fn inner_html(&self) -> &str;
    fn set_inner_html(&mut self, html: String);
}

/// The three containers the board drives.
#[derive(Debug, Clone)]
pub struct Containers<E> {
    pub loading: E,
    pub error: E,
    pub orders: E,
}

impl<E: Element> Containers<E> {
    pub fn new(loading: E, error: E, orders: E) -> Self {
        Self {
            loading,
            error,
            orders,
        }
    }

    /// Make `state`'s container the only visible one.
    pub fn show(&mut self, state: ViewState) {
        self.loading.set_hidden(state != ViewState::Loading);
        self.error.set_hidden(state != ViewState::Error);
        self.orders.set_hidden(state != ViewState::Loaded);
    }

    /// The state implied by which containers are visible, if exactly one is.
    pub fn visible(&self) -> Option<ViewState> {
        match (
            self.loading.is_hidden(),
            self.error.is_hidden(),
            self.orders.is_hidden(),
        ) {
            (false, true, true) => Some(ViewState::Loading),
            (true, false, true) => Some(ViewState::Error),
            (true, true, false) => Some(ViewState::Loaded),
            _ => None,
        }
    }
}
