//! Property-based tests for the state machine
//!
//! These tests verify key invariants hold across all command sequences.

use super::*;
use crate::templates::keys;
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_command() -> impl Strategy<Value = Command> {
    proptest::sample::select(Command::ALL.to_vec())
}

fn arb_commands() -> impl Strategy<Value = Vec<Command>> {
    proptest::collection::vec(arb_command(), 0..40)
}

fn arb_state() -> impl Strategy<Value = SessionState> {
    (0usize..7, any::<bool>()).prop_map(|(current_index, detail_enabled)| SessionState {
        current_index,
        detail_enabled,
    })
}

fn run(commands: &[Command]) -> SessionState {
    let steps = StepSequence::diapering();
    commands.iter().fold(SessionState::default(), |state, command| {
        transition(state, &steps, *command).new_state
    })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    // Invariant 1: index stays on the sequence for every command sequence
    #[test]
    fn prop_index_stays_in_bounds(commands in arb_commands()) {
        let steps = StepSequence::diapering();
        let mut state = SessionState::default();

        for command in commands {
            state = transition(state, &steps, command).new_state;
            prop_assert!(
                state.current_index <= steps.last_index(),
                "Index out of range after {:?}: {:?}",
                command,
                state
            );
        }
    }

    // Invariant 2: once on the last step, advancing stays there
    #[test]
    fn prop_end_of_sequence_is_sticky(extra in 1usize..10, detail in any::<bool>()) {
        let steps = StepSequence::diapering();
        let mut state = SessionState { current_index: steps.last_index(), detail_enabled: detail };

        for _ in 0..extra {
            let result = transition(state, &steps, Command::Next);
            prop_assert_eq!(result.new_state.current_index, steps.last_index());
            prop_assert_eq!(result.reply.tagline(), Some(keys::LAST_TAGLINE));
            prop_assert_eq!(result.reply.reprompt, Some(keys::LAST_REPROMPT));
            state = result.new_state;
        }
    }

    // Invariant 3: advancing from the start hits the end branch only after every step was spoken
    #[test]
    fn prop_last_tagline_only_on_last_step(advances in 1usize..20) {
        let steps = StepSequence::diapering();
        let mut state = SessionState::default();
        let mut spoken_last = 0;

        for _ in 0..advances {
            let result = transition(state, &steps, Command::Next);
            if result.reply.tagline() == Some(keys::LAST_TAGLINE) {
                prop_assert_eq!(state.current_index, steps.last_index());
                spoken_last += 1;
            }
            state = result.new_state;
        }

        prop_assert_eq!(spoken_last, advances.saturating_sub(steps.last_index()));
    }

    // Invariant 4: going back from index 0 or 1 never moves the cursor
    #[test]
    fn prop_retreat_blocked_below_two(index in 0usize..2, detail in any::<bool>()) {
        let steps = StepSequence::diapering();
        let state = SessionState { current_index: index, detail_enabled: detail };

        let result = transition(state, &steps, Command::PreviousStep);
        prop_assert_eq!(result.new_state, state);
        prop_assert_eq!(result.reply.prompt, vec![keys::NO_BACK]);
    }

    // Invariant 5: going back from index >= 2 speaks the step two behind
    #[test]
    fn prop_retreat_speaks_two_behind(index in 2usize..7, detail in any::<bool>()) {
        let steps = StepSequence::diapering();
        let state = SessionState { current_index: index, detail_enabled: detail };

        let result = transition(state, &steps, Command::PreviousStep);
        prop_assert_eq!(result.reply.prompt.first().copied(), Some(steps.step_at(index - 2).text_key));
        prop_assert_eq!(result.new_state.current_index, index - 1);
    }

    // Invariant 6: restart always speaks the first step
    #[test]
    fn prop_restart_resets(commands in arb_commands()) {
        let steps = StepSequence::diapering();
        let state = run(&commands);

        let result = transition(state, &steps, Command::Restart);
        prop_assert_eq!(result.reply.prompt.first().copied(), Some(steps.step_at(0).text_key));
        prop_assert_eq!(result.new_state.current_index, 1);
        prop_assert_eq!(result.new_state.detail_enabled, state.detail_enabled);
    }

    // Invariant 7: help, stop and cancel leave state untouched
    #[test]
    fn prop_non_navigation_commands_preserve_state(state in arb_state()) {
        let steps = StepSequence::diapering();
        for command in [Command::Help, Command::Stop, Command::Cancel] {
            let result = transition(state, &steps, command);
            prop_assert_eq!(result.new_state, state);
            prop_assert_eq!(result.reply.end_session, command.is_terminal());
        }
    }

    // Invariant 8: detail text is spoken exactly when detail is enabled
    #[test]
    fn prop_detail_follows_flag(state in arb_state(), command in arb_command()) {
        let steps = StepSequence::diapering();
        let result = transition(state, &steps, command);
        let has_detail = result
            .reply
            .prompt
            .iter()
            .any(|key| steps.iter().any(|step| step.detail_key == *key));

        if has_detail {
            prop_assert!(result.new_state.detail_enabled);
        }
        if command == Command::DetailOff {
            prop_assert!(!has_detail);
        }
    }

    // Invariant 9: only stop and cancel end the session
    #[test]
    fn prop_only_stop_and_cancel_terminate(state in arb_state(), command in arb_command()) {
        let steps = StepSequence::diapering();
        let result = transition(state, &steps, command);
        prop_assert_eq!(result.reply.end_session, command.is_terminal());
        if result.reply.end_session {
            prop_assert_eq!(result.reply.reprompt, None);
        }
    }
}
