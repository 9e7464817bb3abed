use crate::error::Result;
use regex::Regex;

/// Redirect magic words recognized out of the box. MediaWiki localizes the
/// `#REDIRECT` keyword per wiki language; extend via [`RedirectDetector::with_tokens`].
pub const DEFAULT_TOKENS: &[&str] = &[
    "redirect",
    "виж",            // bg
    "пренасочване",   // bg
    "weiterleitung",  // de
    "redirection",    // fr
    "redirección",    // es
    "перенаправление", // ru
];

/// Matches page content that starts with a redirect marker, e.g.
/// `#REDIRECT [[Target]]`, case-insensitively and with optional leading
/// whitespace.
pub struct RedirectDetector {
    pattern: Regex,
}

impl RedirectDetector {
    pub fn new() -> Result<Self> {
        Self::with_tokens(DEFAULT_TOKENS.iter().copied())
    }

    pub fn with_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let alternation = tokens
            .into_iter()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(r"(?i)^\s*#(?:{alternation})\s+\[\["))?;
        Ok(Self { pattern })
    }

    pub fn is_redirect(&self, content: &str) -> bool {
        self.pattern.is_match(content)
    }
}
