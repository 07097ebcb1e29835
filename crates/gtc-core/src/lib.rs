pub mod config;
pub mod logging;

pub mod actions;
pub mod dispatch;
pub mod endpoints;
pub mod error;
pub mod form;
pub mod headers;
pub mod http;
pub mod save_as;
pub mod view;
