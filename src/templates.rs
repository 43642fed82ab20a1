//! Text catalog for spoken replies
//!
//! Maps template keys to user-facing text. A built-in English catalog covers
//! every key the skill speaks; an optional JSON file can replace individual
//! entries.

use crate::state_machine::StepSequence;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Keys for the fixed (non-step) replies
pub mod keys {
    pub const WELCOME: &str = "welcome";
    pub const WELCOME_REPROMPT: &str = "welcome_re";
    pub const WELCOME_CARD: &str = "welcome_card";
    pub const NEXT_TAGLINE: &str = "next_tagline";
    pub const LAST_TAGLINE: &str = "last_tagline";
    pub const REGULAR_REPROMPT: &str = "reg_reprompt";
    pub const LAST_REPROMPT: &str = "last_reprompt";
    pub const NO_BACK: &str = "no_back";
    pub const HELP: &str = "help_text";
    pub const STOP_BYE: &str = "stop_bye";
    pub const CANCEL_BYE: &str = "cancel_bye";
}

const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (
        keys::WELCOME,
        "Welcome to Child Care Diapering. I will walk you through each step of changing a diaper. Say next to hear the first step.",
    ),
    (keys::WELCOME_REPROMPT, "Say next to hear the first step, or say help."),
    (
        keys::WELCOME_CARD,
        "Say next to step through changing a diaper. Say detail or summary to hear more or less about each step. Say go back or start over to move around the steps.",
    ),
    ("prepare_text", "Step one. Get ready."),
    (
        "prepare_detail",
        "Before you bring the child to the changing table, gather a clean diaper, wipes, clean clothes if needed, a plastic bag for soiled clothing, and disposable gloves. Cover the changing surface with a disposable liner.",
    ),
    ("clean_text", "Step two. Clean the child's diaper area."),
    (
        "clean_detail",
        "Put on gloves. Place the child on the table and keep one hand on the child. Unfasten the diaper, leave the soiled diaper under the child, and wipe from front to back using a fresh wipe each time.",
    ),
    ("remove_text", "Step three. Remove the trash."),
    (
        "remove_detail",
        "Fold the soiled diaper inward and put it and the used wipes in a covered, hands-free trash can. Bag any soiled clothing. Remove your gloves and use a fresh wipe to clean your hands.",
    ),
    ("replace_text", "Step four. Put on a clean diaper and dress the child."),
    (
        "replace_detail",
        "Slide a clean diaper under the child and fasten it. If the child needs diaper cream, apply it with a tissue or a gloved hand. Dress the child before taking them off the table.",
    ),
    ("wash_child_text", "Step five. Wash the child's hands."),
    (
        "wash_child_detail",
        "Use soap and warm running water. Rub the child's hands together for at least twenty seconds, rinse, and dry with a paper towel. Return the child to a supervised area.",
    ),
    ("clean_up_text", "Step six. Clean and disinfect the diapering area."),
    (
        "clean_up_detail",
        "Throw away the table liner. Clean any visible soil from the changing surface, then spray it with a disinfectant and leave it wet for the time the label requires before wiping or letting it air dry.",
    ),
    ("wash_your_text", "Step seven. Wash your hands."),
    (
        "wash_your_detail",
        "Wash your hands with soap and running water for at least twenty seconds and dry them with a paper towel. Record the diaper change in the child's daily log.",
    ),
    (keys::NEXT_TAGLINE, "Say next when you are ready to continue."),
    (
        keys::LAST_TAGLINE,
        "That was the last step. Say start over to go through the steps again, or say stop.",
    ),
    (
        keys::REGULAR_REPROMPT,
        "Say next for the next step, go back to hear the previous step, or help for more options.",
    ),
    (
        keys::LAST_REPROMPT,
        "You have finished all the steps. Say start over to begin again, or stop to finish.",
    ),
    (
        keys::NO_BACK,
        "You are at the first step, so there is nothing to go back to. Say next to continue.",
    ),
    (
        keys::HELP,
        "I can walk you through changing a diaper one step at a time. Say next to hear the next step, go back to hear the previous step, or start over to begin again. Say detail for a full explanation of each step, or summary to hear only the short version. Say stop when you are done.",
    ),
    (keys::STOP_BYE, "Goodbye, and thank you for keeping things clean."),
    (keys::CANCEL_BYE, "Okay, cancelled. Goodbye."),
];

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Failed to read template file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse template file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Unknown template key: {0}")]
    UnknownKey(String),
    #[error("Missing template key: {0}")]
    MissingKey(String),
}

/// Resolves a template key to literal text
pub trait TextResolver {
    fn text(&self, key: &str) -> &str;
}

/// Template catalog keyed by template name
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: HashMap<String, String>,
}

impl TemplateCatalog {
    /// The built-in English catalog
    pub fn builtin() -> Self {
        Self {
            templates: BUILTIN_TEMPLATES
                .iter()
                .map(|(key, text)| ((*key).to_string(), (*text).to_string()))
                .collect(),
        }
    }

    /// Built-in catalog with entries replaced from a JSON object file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let overrides: HashMap<String, String> = serde_json::from_str(&content)?;
        tracing::info!(
            path = %path.as_ref().display(),
            entries = overrides.len(),
            "Loaded template overrides"
        );
        Self::builtin().with_overrides(overrides)
    }

    /// Replace entries; every key must already exist
    pub fn with_overrides(
        mut self,
        overrides: HashMap<String, String>,
    ) -> Result<Self, TemplateError> {
        for (key, text) in overrides {
            match self.templates.get_mut(&key) {
                Some(slot) => *slot = text,
                None => return Err(TemplateError::UnknownKey(key)),
            }
        }
        Ok(self)
    }

    /// Check that every step of `steps` has both of its templates
    pub fn validate(&self, steps: &StepSequence) -> Result<(), TemplateError> {
        steps
            .iter()
            .flat_map(|step| [step.text_key, step.detail_key])
            .find(|key| !self.templates.contains_key(*key))
            .map_or(Ok(()), |key| Err(TemplateError::MissingKey(key.to_string())))
    }
}

impl TextResolver for TemplateCatalog {
    fn text(&self, key: &str) -> &str {
        if let Some(text) = self.templates.get(key) {
            text.as_str()
        } else {
            tracing::warn!(key, "No template for key");
            ""
        }
    }
}
