//! Actions representing side effects to be executed by the host.
//!
//! This module defines the [`Action`] type, which represents imperative
//! commands produced by the event handler after processing user input. Actions
//! bridge pure state transformations and effectful operations the library has
//! no business performing itself, such as ending the host's input loop.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` alongside its redraw flag,
//! allowing side effects to be queued atomically. The host executes them in
//! sequence after each event.

/// Commands representing side effects to be executed by the host.
///
/// Every catalog operation completes synchronously inside the handler, so the
/// only effect left for the host is lifecycle control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Ends the session: the host should stop reading input and exit cleanly.
    Quit,
}
