pub mod client_bridge;
pub(crate) mod handler;
pub mod settings;
pub(crate) mod state;

pub use client_bridge::ClientBridge;
pub use settings::{LogLevel, ServerSettings};
pub use state::NavLensServer;
