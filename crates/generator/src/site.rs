use regex::Regex;
use tracing::info;

use crate::error::Result;
use crate::openrouter::{ChatMessage, OpenRouterClient};

pub const DEFAULT_MODEL: &str = "openai/gpt-4.1-nano";

const SYSTEM_PROMPT: &str = "Generate runnable HTML/JS web apps (single-page).";

/// One file of the generated site, uploaded verbatim.
#[derive(Debug, Clone)]
pub struct SiteFile {
    pub name: String,
    pub content: String,
}

impl SiteFile {
    fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Produces the fixed four-file set for a round-1 deployment.
pub struct SiteGenerator {
    client: OpenRouterClient,
    model: String,
}

impl SiteGenerator {
    pub fn new(client: OpenRouterClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Generate the site for `brief`: the trimmed page, a readme naming the
    /// task, an MIT license stub, and the `.nojekyll` marker that stops the
    /// Pages pipeline from running Jekyll over the output.
    pub async fn generate_site(&self, brief: &str) -> Result<Vec<SiteFile>> {
        let messages = vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(format!("Create a GitHub Pages app for: {}", brief)),
        ];

        let raw = self.client.chat_completion(messages, &self.model).await?;
        let page = extract_html(&raw);
        info!("Generated page for brief ({} bytes)", page.len());

        Ok(vec![
            SiteFile::new("index.html", page),
            SiteFile::new(
                "README.md",
                format!("# Generated App\n\nTask: {}\n", brief),
            ),
            SiteFile::new("LICENSE", "MIT License\n"),
            SiteFile::new(".nojekyll", ""),
        ])
    }
}

/// Trim conversational wrapping around the generated document.
///
/// Everything before the first `<html` and after the matching `</html>` is
/// dropped. Output with no `<html>` tag at all passes through unchanged and
/// may publish non-markup content; that is accepted, not repaired here.
pub fn extract_html(raw: &str) -> String {
    let open = Regex::new(r"(?s)^.*?<html").expect("Invalid html-open regex pattern");
    let close = Regex::new(r"(?s)</html>.*$").expect("Invalid html-close regex pattern");

    let trimmed = open.replace(raw, "<html");
    let trimmed = close.replace(&trimmed, "</html>");
    trimmed.trim().to_string()
}
