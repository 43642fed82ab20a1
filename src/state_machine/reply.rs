//! Replies produced by state transitions
//!
//! A `Reply` names template keys only; rendering against a `TextResolver`
//! turns it into speech.

use crate::templates::TextResolver;

/// Title shown on the launch card
pub const CARD_TITLE: &str = "Child Care Diapering";

/// Simple display card attached to a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub content_key: &'static str,
}

/// Reply to be spoken after a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Template keys spoken in order
    pub prompt: Vec<&'static str>,
    pub reprompt: Option<&'static str>,
    pub card: Option<Card>,
    /// Ends the conversation
    pub end_session: bool,
}

impl Reply {
    /// A reply that keeps the conversation open
    pub fn question(prompt: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            prompt: prompt.into_iter().collect(),
            reprompt: None,
            card: None,
            end_session: false,
        }
    }

    /// A reply that ends the conversation
    pub fn statement(prompt: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            prompt: prompt.into_iter().collect(),
            reprompt: None,
            card: None,
            end_session: true,
        }
    }

    pub fn with_reprompt(mut self, key: &'static str) -> Self {
        self.reprompt = Some(key);
        self
    }

    pub fn with_card(mut self, title: &'static str, content_key: &'static str) -> Self {
        self.card = Some(Card { title, content_key });
        self
    }

    /// Last prompt key, which for step replies is the tagline
    #[allow(dead_code)] // Used by tests
    pub fn tagline(&self) -> Option<&'static str> {
        self.prompt.last().copied()
    }

    pub fn render(&self, resolver: &impl TextResolver) -> RenderedReply {
        RenderedReply {
            prompt: join_texts(self.prompt.iter().map(|key| resolver.text(key))),
            reprompt: self.reprompt.map(|key| resolver.text(key).trim().to_string()),
            card: self.card.map(|card| RenderedCard {
                title: card.title.to_string(),
                content: resolver.text(card.content_key).trim().to_string(),
            }),
            is_terminal: self.end_session,
        }
    }
}

/// Reply text ready for the voice platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReply {
    pub prompt: String,
    pub reprompt: Option<String>,
    pub card: Option<RenderedCard>,
    pub is_terminal: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCard {
    pub title: String,
    pub content: String,
}

fn join_texts<'a>(texts: impl Iterator<Item = &'a str>) -> String {
    texts
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MapResolver(HashMap<&'static str, &'static str>);

    impl TextResolver for MapResolver {
        fn text(&self, key: &str) -> &str {
            self.0.get(key).copied().unwrap_or("")
        }
    }

    fn resolver() -> MapResolver {
        MapResolver(HashMap::from([
            ("a", "First part. "),
            ("b", "  Second part."),
            ("empty", "   "),
            ("re", " Say next. "),
            ("card", "Card body"),
        ]))
    }

    #[test]
    fn test_render_joins_trimmed_parts() {
        let rendered = Reply::question(["a", "empty", "b"]).render(&resolver());
        assert_eq!(rendered.prompt, "First part. Second part.");
        assert!(!rendered.is_terminal);
        assert_eq!(rendered.reprompt, None);
    }

    #[test]
    fn test_render_reprompt_and_card() {
        let rendered = Reply::question(["a"])
            .with_reprompt("re")
            .with_card(CARD_TITLE, "card")
            .render(&resolver());
        assert_eq!(rendered.reprompt.as_deref(), Some("Say next."));
        assert_eq!(
            rendered.card,
            Some(RenderedCard {
                title: "Child Care Diapering".to_string(),
                content: "Card body".to_string(),
            })
        );
    }

    #[test]
    fn test_empty_statement() {
        let rendered = Reply::statement([]).render(&resolver());
        assert_eq!(rendered.prompt, "");
        assert!(rendered.is_terminal);
    }
}
