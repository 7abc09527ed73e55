//! Orders board for the freight dispatch service.
//!
//! Fetches `GET /v1/orders` once, maps every record to an HTML card and
//! leaves exactly one of the loading, error and orders containers visible.

pub mod board;
pub mod client;
pub mod config;
pub mod domain;
pub mod logging;
pub mod view;
