pub mod api;
pub mod config;
pub mod engine;
pub mod entities;
pub mod error;
pub mod external;
pub mod fares;
pub mod geometry;
pub mod routing;
pub mod server;
