//! Intent name to command lookup table

use crate::state_machine::Command;

const INTENT_COMMANDS: &[(&str, Command)] = &[
    ("NextStepIntent", Command::Next),
    ("AMAZON.StopIntent", Command::Stop),
    ("AMAZON.CancelIntent", Command::Cancel),
    ("AMAZON.HelpIntent", Command::Help),
    ("DetailIntent", Command::DetailOn),
    ("AMAZON.YesIntent", Command::DetailOn),
    ("SummaryIntent", Command::DetailOff),
    ("AMAZON.NoIntent", Command::DetailOff),
    ("AMAZON.PreviousIntent", Command::PreviousStep),
    ("AMAZON.StartOverIntent", Command::Restart),
];

/// Look up the command bound to a platform intent
pub fn command_for_intent(name: &str) -> Option<Command> {
    INTENT_COMMANDS
        .iter()
        .find(|(intent, _)| *intent == name)
        .map(|(_, command)| *command)
}
