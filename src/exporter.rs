use eyre::{Result, WrapErr};

use crate::importer::{Conversation, Part};

impl Part {
    /// Text is used as is; structured values become 2-space indented JSON with
    /// non-ASCII characters left unescaped.
    pub fn to_fragment(&self) -> Result<String> {
        match self {
            Part::Text(text) => Ok(text.clone()),
            Part::Structured(value) => {
                serde_json::to_string_pretty(value).wrap_err("Failed to serialize message part")
            }
        }
    }
}

/// Flatten every node's parts, in mapping order, into text fragments.
pub fn extract_fragments(conversation: &Conversation) -> Result<Vec<String>> {
    let mut fragments = Vec::new();
    for (node_id, node) in conversation.nodes() {
        let parts = node.parts();
        if parts.is_empty() {
            tracing::debug!(node_id, "node has no content parts");
            continue;
        }
        for part in parts {
            fragments.push(part.to_fragment()?);
        }
    }
    Ok(fragments)
}

/// `# <title>`, a blank line, then the fragments one per line, trimmed.
pub fn render_markdown(title: &str, fragments: &[String]) -> String {
    let markdown = format!("# {}\n\n{}", title, fragments.join("\n"));
    markdown.trim().to_string()
}

/// Extract and render a conversation in one step.
pub fn conversation_markdown(conversation: &Conversation, title: &str) -> Result<String> {
    let fragments = extract_fragments(conversation)?;
    Ok(render_markdown(title, &fragments))
}
