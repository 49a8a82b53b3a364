//! MCP (Model Context Protocol) server

pub mod server;

pub use server::WeatherServer;
