// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod endpoint_resolver;
pub mod history_store;
pub mod http_response;
pub mod insight_client;
pub mod simulated_transport;
pub mod tcp_transport;
pub mod weather_json;
