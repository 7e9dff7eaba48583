//! Lifecycle hook system.
//!
//! Users bind shell command templates to hook keys around each lifecycle
//! event:
//! - `before:{event}` / `after:{event}`: global hooks for the event
//! - `before:{namespace}:{event}` / `after:{namespace}:{event}`: scoped to one
//!   plugin's work within the event
//!
//! Scoped "after" hooks fire only when the corresponding phase actually
//! executed; "before" hooks are unconditional.

pub mod lifecycle;
pub mod resolver;

pub use lifecycle::{HookPrefix, LifecycleEvent};
pub use resolver::resolve;
