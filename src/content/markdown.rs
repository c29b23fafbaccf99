//! Markdown rendering with syntax highlighting

use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;
use thiserror::Error;

use crate::config::HighlightConfig;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unknown highlight theme `{0}`")]
    UnknownTheme(String),

    #[error("failed to highlight `{lang}` code block: {source}")]
    Highlight {
        lang: String,
        #[source]
        source: syntect::Error,
    },
}

/// Markdown renderer with syntax highlighting
///
/// Grammars come from the extended two-face set, which adds Swift, Kotlin
/// and the other languages syntect's defaults lack.
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme: Theme,
    line_numbers: bool,
}

impl MarkdownRenderer {
    /// Create a renderer with the default theme
    pub fn new() -> Self {
        let mut theme_set = ThemeSet::load_defaults();
        let theme = theme_set
            .themes
            .remove("base16-ocean.dark")
            .unwrap_or_default();
        Self {
            syntax_set: two_face::syntax::extra_newlines(),
            theme,
            line_numbers: false,
        }
    }

    /// Create with custom settings
    pub fn with_options(config: &HighlightConfig) -> Result<Self, RenderError> {
        let mut theme_set = ThemeSet::load_defaults();
        let theme = theme_set
            .themes
            .remove(&config.theme)
            .ok_or_else(|| RenderError::UnknownTheme(config.theme.clone()))?;
        Ok(Self {
            syntax_set: two_face::syntax::extra_newlines(),
            theme,
            line_numbers: config.line_number,
        })
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> Result<String, RenderError> {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_HEADING_ATTRIBUTES
            | Options::ENABLE_GFM;
        let parser = Parser::new_ext(markdown, options);

        let mut events: Vec<Event> = Vec::new();
        // Some(lang) while inside a code block; lang is empty when untagged
        let mut code_block_lang: Option<String> = None;
        let mut code_block_content = String::new();

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    code_block_lang = Some(match kind {
                        CodeBlockKind::Fenced(info) => fence_language(&info).to_string(),
                        CodeBlockKind::Indented => String::new(),
                    });
                    code_block_content.clear();
                }
                Event::End(TagEnd::CodeBlock) => {
                    let lang = code_block_lang.take().unwrap_or_default();
                    let block = self.highlight_code(&code_block_content, &lang)?;
                    events.push(Event::Html(CowStr::from(block)));
                }
                Event::Text(text) if code_block_lang.is_some() => {
                    code_block_content.push_str(&text);
                }
                _ => events.push(event),
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());

        Ok(html_output)
    }

    /// Highlight a code block; untagged blocks are escaped verbatim
    fn highlight_code(&self, code: &str, lang: &str) -> Result<String, RenderError> {
        if lang.is_empty() {
            return Ok(format!("<pre><code>{}</code></pre>\n", html_escape(code)));
        }

        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let highlighted = highlighted_html_for_string(code, &self.syntax_set, syntax, &self.theme)
            .map_err(|source| RenderError::Highlight {
                lang: lang.to_string(),
                source,
            })?;

        if self.line_numbers {
            Ok(add_line_numbers(&highlighted, lang, code.lines().count()))
        } else {
            Ok(format!(
                "<figure class=\"highlight language-{}\">{}</figure>\n",
                html_escape(lang),
                highlighted
            ))
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// First word of a fence info string, e.g. "rust" in "rust,ignore title=x"
fn fence_language(info: &str) -> &str {
    info.split(|c: char| c.is_whitespace() || c == ',')
        .next()
        .unwrap_or_default()
}

/// Add a line-number gutter to highlighted code
fn add_line_numbers(highlighted: &str, lang: &str, line_count: usize) -> String {
    let gutter = (1..=line_count)
        .map(|n| format!(r#"<span class="line-number">{}</span>"#, n))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<figure class="highlight language-{}"><table><tr><td class="gutter"><pre>{}</pre></td><td class="code">{}</td></tr></table></figure>"#,
        html_escape(lang),
        gutter,
        highlighted.trim_end()
    ) + "\n"
}

/// Simple HTML escaping
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
