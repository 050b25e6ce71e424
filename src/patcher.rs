//! Patch orchestration: fold find-and-replace over the descriptor set.

use crate::descriptor::ModuleDescriptor;
use crate::document::{Document, DocumentError};
use crate::matcher::BlockMatcher;
use crate::template;
use std::fmt;
use std::path::Path;

/// Result of patching one descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "PatchOutcome should be checked and reported"]
pub enum PatchOutcome {
    /// At least one legacy block was rewritten.
    Patched { blocks: usize },
    /// Matches existed but every one already carried the rendered fragment.
    AlreadyPatched { blocks: usize },
    /// The search pattern matched nothing; the document is untouched.
    /// This is a legal outcome, reported as a warning, never an error.
    NoMatch,
}

impl fmt::Display for PatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchOutcome::Patched { blocks } => {
                if *blocks == 1 {
                    write!(f, "patched 1 block")
                } else {
                    write!(f, "patched {} blocks", blocks)
                }
            }
            PatchOutcome::AlreadyPatched { .. } => write!(f, "already patched"),
            PatchOutcome::NoMatch => write!(f, "no matching update route"),
        }
    }
}

/// Outcome for one descriptor, paired with the descriptor for reporting.
#[derive(Debug, Clone)]
pub struct DescriptorReport {
    pub descriptor: ModuleDescriptor,
    pub outcome: PatchOutcome,
}

/// Per-descriptor outcomes for a whole run, in processing order.
#[derive(Debug, Clone)]
pub struct PatchReport {
    pub entries: Vec<DescriptorReport>,
}

impl PatchReport {
    pub fn patched(&self) -> usize {
        self.count(|o| matches!(o, PatchOutcome::Patched { .. }))
    }

    pub fn already_patched(&self) -> usize {
        self.count(|o| matches!(o, PatchOutcome::AlreadyPatched { .. }))
    }

    pub fn no_match(&self) -> usize {
        self.count(|o| matches!(o, PatchOutcome::NoMatch))
    }

    fn count(&self, predicate: impl Fn(&PatchOutcome) -> bool) -> usize {
        self.entries
            .iter()
            .filter(|entry| predicate(&entry.outcome))
            .count()
    }
}

/// Replace every block matching `descriptor` with its rendered fragment.
///
/// All matches are replaced, not just the first: a duplicate legacy block
/// surviving a run would be a silent defect. Replacing all stays idempotent
/// because the rendered fragment matches its own search pattern, so a later
/// run maps each fragment onto itself.
pub fn find_and_replace(
    text: &str,
    descriptor: &ModuleDescriptor,
    template: &str,
) -> (String, PatchOutcome) {
    let matcher = BlockMatcher::for_descriptor(descriptor);
    let spans = matcher.find_spans(text);

    if spans.is_empty() {
        return (text.to_string(), PatchOutcome::NoMatch);
    }

    let fragment = template::render(template, descriptor);

    let mut patched = String::with_capacity(text.len());
    let mut cursor = 0;
    let mut rewritten = 0;

    for span in &spans {
        patched.push_str(&text[cursor..span.start]);
        if &text[span.clone()] != fragment {
            rewritten += 1;
        }
        patched.push_str(&fragment);
        cursor = span.end;
    }
    patched.push_str(&text[cursor..]);

    let outcome = if rewritten > 0 {
        PatchOutcome::Patched { blocks: rewritten }
    } else {
        PatchOutcome::AlreadyPatched {
            blocks: spans.len(),
        }
    };

    (patched, outcome)
}

/// Fold [`find_and_replace`] over all descriptors, mutating the document
/// in memory. Each descriptor's output text feeds the next.
pub fn patch_document(
    document: &mut Document,
    descriptors: &[ModuleDescriptor],
    template: &str,
) -> PatchReport {
    let mut entries = Vec::with_capacity(descriptors.len());

    for descriptor in descriptors {
        let (text, outcome) = find_and_replace(document.text(), descriptor, template);
        document.set_text(text);
        entries.push(DescriptorReport {
            descriptor: descriptor.clone(),
            outcome,
        });
    }

    PatchReport { entries }
}

/// Load the file, patch all descriptors, and write the result back.
///
/// Any I/O failure aborts the whole run; there is no partial-success state.
/// The save is atomic, so an interrupted run leaves the original file intact.
pub fn run(
    path: impl AsRef<Path>,
    descriptors: &[ModuleDescriptor],
    template: &str,
) -> Result<PatchReport, DocumentError> {
    let mut document = Document::load(path)?;
    let report = patch_document(&mut document, descriptors, template);
    document.save()?;
    Ok(report)
}
