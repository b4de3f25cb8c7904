//! Middleware module
//!
//! actix-web middleware shared by the catalog service and the web client.

pub mod logging;
pub mod panic_guard;
pub mod session_gate;

pub use logging::RequestLogger;
pub use panic_guard::PanicGuard;
pub use session_gate::{DenyResponse, SessionGate};
