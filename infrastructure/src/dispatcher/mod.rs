//! Dispatcher adapters.
//!
//! Implementations of the [`DispatcherGateway`] port. The assistant ships
//! one adapter, for the Gemini `generateContent` API; the port keeps the
//! rest of the system ignorant of which hosted model is behind it.
//!
//! [`DispatcherGateway`]: clerk_application::ports::dispatcher::DispatcherGateway

pub mod gemini;

pub use gemini::GeminiDispatcher;
