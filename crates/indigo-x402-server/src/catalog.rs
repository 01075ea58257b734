//! In-memory AI tool catalog and its search filter.

use serde::Serialize;

/// A directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tool {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub url: &'static str,
}

pub static TOOLS: &[Tool] = &[
    Tool {
        id: "1",
        name: "ChatGPT",
        category: "chatbots",
        description: "OpenAI conversational AI",
        url: "https://chat.openai.com",
    },
    Tool {
        id: "2",
        name: "Claude",
        category: "chatbots",
        description: "Anthropic thoughtful AI",
        url: "https://claude.ai",
    },
    Tool {
        id: "3",
        name: "Midjourney",
        category: "image",
        description: "AI image generation",
        url: "https://midjourney.com",
    },
    Tool {
        id: "4",
        name: "Cursor",
        category: "coding",
        description: "AI-powered code editor",
        url: "https://cursor.sh",
    },
    Tool {
        id: "5",
        name: "v0",
        category: "coding",
        description: "AI UI generator by Vercel",
        url: "https://v0.dev",
    },
];

/// Advisory category labels. Not checked against [`TOOLS`].
pub const CATEGORIES: [&str; 7] = [
    "chatbots",
    "coding",
    "image",
    "video",
    "audio",
    "writing",
    "productivity",
];

/// Filter `tools` by a lowercased substring `query` and an optional exact `category`.
///
/// An empty query keeps everything. The query is matched against the
/// lowercased name and description, and against the category as stored.
pub fn search<'a>(tools: &'a [Tool], query: &str, category: Option<&str>) -> Vec<&'a Tool> {
    tools
        .iter()
        .filter(|t| {
            query.is_empty()
                || t.name.to_lowercase().contains(query)
                || t.description.to_lowercase().contains(query)
                || t.category.contains(query)
        })
        .filter(|t| category.map_or(true, |c| t.category == c))
        .collect()
}
