//! Navigation commands handed to the state machine

/// Commands that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Start,
    Next,
    Stop,
    Cancel,
    Help,
    DetailOn,
    DetailOff,
    PreviousStep,
    Restart,
}

impl Command {
    #[allow(dead_code)] // Used by property tests
    pub const ALL: [Command; 9] = [
        Command::Start,
        Command::Next,
        Command::Stop,
        Command::Cancel,
        Command::Help,
        Command::DetailOn,
        Command::DetailOff,
        Command::PreviousStep,
        Command::Restart,
    ];

    /// Whether this command ends the conversation
    pub fn is_terminal(self) -> bool {
        matches!(self, Command::Stop | Command::Cancel)
    }
}
