pub mod activity;
pub mod api;
pub mod cli;
pub mod error;
pub mod model;
pub mod profile;
pub mod repos;
pub mod tui;
pub mod util;
