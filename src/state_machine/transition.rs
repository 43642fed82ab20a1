//! Pure state transition function
//!
//! Bounds are handled by branching, never by errors: every command is valid
//! in every state.

use super::reply::CARD_TITLE;
use super::{Command, Reply, SessionState, StepSequence};
use crate::templates::keys;

/// Result of a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    pub new_state: SessionState,
    pub reply: Reply,
}

/// Cursor over a step sequence for one session turn
#[derive(Debug)]
pub struct Navigator<'a> {
    steps: &'a StepSequence,
    state: SessionState,
}

impl<'a> Navigator<'a> {
    pub fn new(steps: &'a StepSequence, state: SessionState) -> Self {
        Self {
            steps,
            state: state.clamped(steps),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn start(&mut self) -> Reply {
        self.state = SessionState::default();
        Reply::question([keys::WELCOME])
            .with_reprompt(keys::WELCOME_REPROMPT)
            .with_card(CARD_TITLE, keys::WELCOME_CARD)
    }

    /// Speak the step under the cursor, then move the cursor forward unless
    /// it already sits on the last step.
    pub fn advance(&mut self) -> Reply {
        let this_index = self.state.current_index;
        let (tagline, reprompt) = if this_index < self.steps.last_index() {
            self.state.current_index += 1;
            (keys::NEXT_TAGLINE, keys::REGULAR_REPROMPT)
        } else {
            (keys::LAST_TAGLINE, keys::LAST_REPROMPT)
        };

        let step = self.steps.step_at(this_index);
        tracing::debug!(step_index = this_index, step = step.id, "Rendering step");

        let mut prompt = vec![step.text_key];
        if self.state.detail_enabled {
            prompt.push(step.detail_key);
        }
        prompt.push(tagline);

        Reply::question(prompt).with_reprompt(reprompt)
    }

    pub fn retreat(&mut self) -> Reply {
        if self.state.current_index >= 2 {
            self.state.current_index -= 2;
            self.advance()
        } else {
            Reply::question([keys::NO_BACK]).with_reprompt(keys::REGULAR_REPROMPT)
        }
    }

    pub fn restart(&mut self) -> Reply {
        self.state.current_index = 0;
        self.advance()
    }

    pub fn set_detail(&mut self, enabled: bool) -> Reply {
        self.state.detail_enabled = enabled;
        self.advance()
    }

    pub fn help(&self) -> Reply {
        Reply::question([keys::HELP])
    }

    pub fn stop(&self) -> Reply {
        Reply::statement([keys::STOP_BYE])
    }

    pub fn cancel(&self) -> Reply {
        Reply::statement([keys::CANCEL_BYE])
    }
}

/// Pure transition function
///
/// Given the same state and command it always produces the same result.
pub fn transition(state: SessionState, steps: &StepSequence, command: Command) -> TransitionResult {
    let mut navigator = Navigator::new(steps, state);
    let reply = match command {
        Command::Start => navigator.start(),
        Command::Next => navigator.advance(),
        Command::PreviousStep => navigator.retreat(),
        Command::Restart => navigator.restart(),
        Command::DetailOn => navigator.set_detail(true),
        Command::DetailOff => navigator.set_detail(false),
        Command::Help => navigator.help(),
        Command::Stop => navigator.stop(),
        Command::Cancel => navigator.cancel(),
    };

    TransitionResult {
        new_state: navigator.state(),
        reply,
    }
}
