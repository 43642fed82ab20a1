//! Step sequence and session state types

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Steps
// ============================================================================

/// One stage of the diaper changing procedure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub id: &'static str,
    /// Template key for the short instruction
    pub text_key: &'static str,
    /// Template key for the expanded explanation
    pub detail_key: &'static str,
}

impl Step {
    pub const fn new(id: &'static str, text_key: &'static str, detail_key: &'static str) -> Self {
        Self {
            id,
            text_key,
            detail_key,
        }
    }
}

const DIAPERING_STEPS: [Step; 7] = [
    Step::new("prepare", "prepare_text", "prepare_detail"),
    Step::new("clean", "clean_text", "clean_detail"),
    Step::new("remove", "remove_text", "remove_detail"),
    Step::new("replace", "replace_text", "replace_detail"),
    Step::new("wash_child", "wash_child_text", "wash_child_detail"),
    Step::new("clean_up", "clean_up_text", "clean_up_detail"),
    Step::new("wash_your", "wash_your_text", "wash_your_detail"),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Step sequence must contain at least one step")]
    Empty,
}

/// Ordered, immutable list of steps. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSequence {
    steps: Vec<Step>,
}

impl StepSequence {
    #[allow(dead_code)] // Custom sequences are only built in tests
    pub fn new(steps: Vec<Step>) -> Result<Self, SequenceError> {
        if steps.is_empty() {
            return Err(SequenceError::Empty);
        }
        Ok(Self { steps })
    }

    /// The seven-step child care diapering procedure
    pub fn diapering() -> Self {
        Self {
            steps: DIAPERING_STEPS.to_vec(),
        }
    }

    /// Index of the final step
    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    /// Step at `index`, clamped to the last step
    pub fn step_at(&self, index: usize) -> &Step {
        &self.steps[index.min(self.last_index())]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter()
    }
}

// ============================================================================
// Session State
// ============================================================================

/// Per-conversation navigation state, carried between turns as session
/// attributes by the voice platform.
///
/// `current_index` is the step the next `advance` will speak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub current_index: usize,
    pub detail_enabled: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            current_index: 0,
            detail_enabled: true,
        }
    }
}

impl SessionState {
    /// Pull an out-of-range index back onto the last step
    pub fn clamped(self, steps: &StepSequence) -> Self {
        Self {
            current_index: self.current_index.min(steps.last_index()),
            ..self
        }
    }
}
