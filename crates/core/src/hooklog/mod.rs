//! Append-only hook log.
//!
//! Each invocation writes a short, human-readable trail of what it did:
//! a separator, the trigger notice and arguments, the detected kind and
//! destination, the outcome and a completion marker. Sinks implement
//! [`HookLog`]; [`FileHookLog`] is the one used in production.

mod events;
mod file;
mod store;

pub use events::*;
pub use file::*;
pub use store::*;
