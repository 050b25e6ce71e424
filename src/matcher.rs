//! Regex-based location of legacy update-route blocks.
//!
//! A block is identified by its opening marker
//! `app.put("/api/<segment>/:id"` and runs to the first `});` closing at
//! route indentation. Matching is textual: the target file is never parsed.
//! Everything behind [`BlockMatcher`] could be swapped for a real TypeScript
//! parser without touching the patcher's contract.

use crate::descriptor::ModuleDescriptor;
use regex::Regex;
use std::ops::Range;

/// Locates the update-route blocks for one descriptor.
pub struct BlockMatcher {
    regex: Regex,
}

impl BlockMatcher {
    /// Build the search pattern for a descriptor.
    ///
    /// The path segment is escaped before embedding: segments like
    /// `magic-systems` contain characters with meaning in pattern syntax.
    /// The wildcard is lazy and compiled with dot-matches-newline so the
    /// match extends across arbitrary intervening lines up to the nearest
    /// closing delimiter.
    pub fn for_descriptor(descriptor: &ModuleDescriptor) -> Self {
        let pattern = format!(
            r#"(?s)app\.put\("/api/{}/:id".*?\n  \}}\);"#,
            regex::escape(&descriptor.path_segment)
        );
        let regex = Regex::new(&pattern).expect("pattern assembled from escaped literals");
        Self { regex }
    }

    /// Byte spans of every matching block, in document order.
    ///
    /// Matches are non-overlapping; an empty result is a legal outcome.
    pub fn find_spans(&self, text: &str) -> Vec<Range<usize>> {
        self.regex.find_iter(text).map(|m| m.range()).collect()
    }

    /// Whether the document contains at least one matching block.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}
