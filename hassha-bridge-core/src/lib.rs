//! hassha-bridge library exports

pub mod error;
pub mod events;
pub mod notifier;
pub mod router;
