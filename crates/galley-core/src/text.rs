//! Search-string and sort-key normalization.
//!
//! The frontend does plain substring matching against a single pre-built
//! lowercase string per entity, and compares pre-lowercased sort keys with
//! ordinary string ordering. Both normalizations happen here, once, at
//! build time.

/// Accumulates search tokens into one lowercase, space-joined string.
#[derive(Debug, Default)]
pub struct SearchBuilder {
    parts: Vec<String>,
}

impl SearchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a token. Blank tokens are skipped.
    pub fn push(&mut self, token: &str) -> &mut Self {
        let token = token.trim();
        if !token.is_empty() {
            self.parts.push(token.to_lowercase());
        }
        self
    }

    /// Add an optional token.
    pub fn push_opt(&mut self, token: Option<&str>) -> &mut Self {
        if let Some(t) = token {
            self.push(t);
        }
        self
    }

    pub fn finish(self) -> String {
        self.parts.join(" ")
    }
}

/// Normalize a name for comparator use.
pub fn sort_key(name: &str) -> String {
    name.trim().to_lowercase()
}
