//! Step navigation state machine
//!
//! Pure transitions over a fixed step sequence: the current session state and
//! a command go in, the next session state and a reply description come out.

pub mod command;
mod reply;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use command::Command;
pub use reply::{RenderedReply, Reply};
pub use state::{SessionState, StepSequence};
pub use transition::transition;
