pub mod api;
pub mod config;
pub mod error;
pub mod feeds;
pub mod routes;
pub mod state;
