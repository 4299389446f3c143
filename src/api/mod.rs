/// API submodules for server communication
///
/// - `client`: reqwest-based HTTP client bound to one server
/// - `types`: serde wire types matching the server's JSON shapes
/// - `handlers`: one handler per UI action, emitting UI events
/// - `main_loop`: backend event loop on a dedicated tokio runtime
pub mod client;
pub mod handlers;
pub mod main_loop;
pub mod types;

pub use client::ApiClient;
pub use main_loop::run_backend;
