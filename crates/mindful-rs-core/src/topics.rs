//! Fixed catalog of guided conversation starters.
//!
//! The UI offers these as one-tap openers; the engine only carries the data.

use serde::Serialize;

/// A guided topic with suggested opening prompts.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Topic {
    /// Stable identifier.
    pub id: &'static str,
    /// Display title.
    pub title: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Icon hint for the presentation layer.
    pub icon: &'static str,
    /// Suggested opening messages.
    pub prompts: [&'static str; 3],
}

/// The catalog, in display order.
pub const TOPICS: [Topic; 5] = [
    Topic {
        id: "anxiety",
        title: "Anxiety",
        description: "Explore strategies to manage anxious feelings",
        icon: "Cloud",
        prompts: [
            "I've been feeling anxious lately, especially at work.",
            "My anxiety keeps me up at night, what can I do?",
            "I worry about things I can't control. How can I stop this?",
        ],
    },
    Topic {
        id: "stress",
        title: "Stress Management",
        description: "Techniques for managing daily stress",
        icon: "Cloud",
        prompts: [
            "I'm feeling overwhelmed with work and personal responsibilities.",
            "I need some effective stress management techniques.",
            "How can I reduce stress in my daily routine?",
        ],
    },
    Topic {
        id: "depression",
        title: "Low Mood",
        description: "Support for when you're feeling down",
        icon: "Cloud",
        prompts: [
            "I've been feeling down and unmotivated lately.",
            "What are some ways to boost my mood when feeling depressed?",
            "I don't enjoy things like I used to. What might help?",
        ],
    },
    Topic {
        id: "self-esteem",
        title: "Self-Esteem",
        description: "Building confidence and self-worth",
        icon: "Heart",
        prompts: [
            "I struggle with negative self-talk and low self-esteem.",
            "How can I improve my confidence and self-image?",
            "I'm always comparing myself to others and feeling inadequate.",
        ],
    },
    Topic {
        id: "relationships",
        title: "Relationships",
        description: "Navigate social connections and conflicts",
        icon: "MessageCircle",
        prompts: [
            "I'm having difficulty communicating with my partner.",
            "How can I set better boundaries with family members?",
            "I feel lonely and want to improve my social connections.",
        ],
    },
];

/// Look up a topic by id.
pub fn find_topic(id: &str) -> Option<&'static Topic> {
    TOPICS.iter().find(|topic| topic.id == id)
}
