//! Structured fix descriptions.
//!
//! A [`LintFix`] describes edits without applying them; the host's fix
//! machinery owns text patching. Fixes compose: a composite group applies
//! all of its edits together, an alternatives group offers each child as a
//! mutually exclusive choice.

use serde::{Deserialize, Serialize};
use throwguard_core::types::TextRange;

/// Which part of the range a replacement acts on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ReplaceTarget {
    /// Replace the entire range.
    All,
    /// Insert at the beginning of the range.
    Beginning,
    /// Insert after the end of the range.
    End,
    /// Replace the given literal text within the range.
    Text(String),
    /// Replace a pattern match (or its first group).
    Pattern(String),
    /// Select a pattern without replacing; an empty group just places the caret.
    Select(String),
}

impl ReplaceTarget {
    /// Application order among edits that start at the same offset.
    fn apply_rank(&self) -> u8 {
        match self {
            ReplaceTarget::End => 0,
            ReplaceTarget::Beginning => 2,
            _ => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaceOptions {
    pub shorten_names: bool,
    pub reformat: bool,
    /// Safe to apply without user confirmation.
    pub robot: bool,
    /// Safe to apply alongside other fixes in a batch.
    pub independent: bool,
}

impl ReplaceOptions {
    /// Options for an edit tooling may apply unattended.
    pub fn auto_fix() -> Self {
        Self {
            robot: true,
            independent: true,
            ..Self::default()
        }
    }

    pub fn reformat(mut self) -> Self {
        self.reformat = true;
        self
    }

    pub fn shorten_names(mut self) -> Self {
        self.shorten_names = true;
        self
    }
}

/// A single replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaceFix {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub family: Option<String>,
    pub target: ReplaceTarget,
    pub replacement: Option<String>,
    pub range: Option<TextRange>,
    pub options: ReplaceOptions,
}

impl ReplaceFix {
    pub fn new(target: ReplaceTarget) -> Self {
        Self {
            name: None,
            family: None,
            target,
            replacement: None,
            range: None,
            options: ReplaceOptions::default(),
        }
    }

    pub fn with(mut self, text: impl Into<String>) -> Self {
        self.replacement = Some(text.into());
        self
    }

    pub fn range(mut self, range: TextRange) -> Self {
        self.range = Some(range);
        self
    }

    pub fn options(mut self, options: ReplaceOptions) -> Self {
        self.options = options;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The concrete edit for position-based targets. Pattern and text
    /// targets need the source text and are left to the host.
    pub fn edit(&self) -> Option<TextEdit> {
        let range = self.range?;
        let text = self.replacement.clone().unwrap_or_default();
        let at = match self.target {
            ReplaceTarget::All => range,
            ReplaceTarget::Beginning => TextRange::new(range.start, range.start),
            ReplaceTarget::End => TextRange::new(range.end, range.end),
            ReplaceTarget::Text(_) | ReplaceTarget::Pattern(_) | ReplaceTarget::Select(_) => {
                return None
            }
        };
        Some(TextEdit { range: at, text })
    }
}

/// A resolved edit: replace `range` with `text` (empty range = insertion).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    pub range: TextRange,
    pub text: String,
}

/// A named set of fixes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixGroup {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub family: Option<String>,
    pub fixes: Vec<LintFix>,
}

impl FixGroup {
    /// All replacements in this group, depth first.
    pub fn replacements(&self) -> Vec<&ReplaceFix> {
        let mut out = Vec::new();
        for fix in &self.fixes {
            fix.collect_replacements(&mut out);
        }
        out
    }

    /// The range every replacement in the group targets, if they agree.
    pub fn bracketed_range(&self) -> Option<TextRange> {
        let replacements = self.replacements();
        let first = replacements.first()?.range?;
        replacements
            .iter()
            .all(|r| r.range == Some(first))
            .then_some(first)
    }

    /// Concrete edits ordered from the end of the file backwards, so a host
    /// can apply them one after another without shifting offsets.
    ///
    /// Edits starting at the same offset apply End first and Beginning last,
    /// which keeps a wrapper around an empty range in the right order.
    pub fn edits(&self) -> Vec<TextEdit> {
        let mut edits: Vec<(u8, TextEdit)> = self
            .replacements()
            .iter()
            .filter_map(|r| r.edit().map(|e| (r.target.apply_rank(), e)))
            .collect();
        edits.sort_by(|(rank_a, a), (rank_b, b)| {
            b.range.start.cmp(&a.range.start).then(rank_a.cmp(rank_b))
        });
        edits.into_iter().map(|(_, e)| e).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LintFix {
    Replace(ReplaceFix),
    /// Applied atomically.
    Composite(FixGroup),
    /// Mutually exclusive choices.
    Alternatives(FixGroup),
}

impl LintFix {
    /// Build an alternatives fix.
    pub fn alternatives(block: impl FnOnce(&mut GroupBuilder)) -> LintFix {
        let mut builder = GroupBuilder::default();
        block(&mut builder);
        LintFix::Alternatives(builder.finish())
    }

    /// Build a composite fix.
    pub fn composite(name: &str, block: impl FnOnce(&mut GroupBuilder)) -> LintFix {
        let mut builder = GroupBuilder::default();
        builder.name = Some(name.to_string());
        block(&mut builder);
        LintFix::Composite(builder.finish())
    }

    /// The choices of an alternatives fix, or the fix itself otherwise.
    pub fn choices(&self) -> Vec<&LintFix> {
        match self {
            LintFix::Alternatives(group) => group.fixes.iter().collect(),
            other => vec![other],
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            LintFix::Replace(r) => r.name.as_deref(),
            LintFix::Composite(g) | LintFix::Alternatives(g) => g.name.as_deref(),
        }
    }

    fn collect_replacements<'a>(&'a self, out: &mut Vec<&'a ReplaceFix>) {
        match self {
            LintFix::Replace(r) => out.push(r),
            LintFix::Composite(g) | LintFix::Alternatives(g) => {
                for fix in &g.fixes {
                    fix.collect_replacements(out);
                }
            }
        }
    }
}

/// Collects child fixes for a group under construction.
#[derive(Debug, Default)]
pub struct GroupBuilder {
    name: Option<String>,
    family: Option<String>,
    fixes: Vec<LintFix>,
}

impl GroupBuilder {
    /// Shared family name, so a host can apply every fix of the family at once.
    pub fn family(&mut self, family: &str) -> &mut Self {
        self.family = Some(family.to_string());
        self
    }

    /// Add a nested composite group.
    pub fn composite(&mut self, name: &str, block: impl FnOnce(&mut GroupBuilder)) -> &mut Self {
        self.fixes.push(LintFix::composite(name, block));
        self
    }

    pub fn replace(&mut self, fix: ReplaceFix) -> &mut Self {
        self.fixes.push(LintFix::Replace(fix));
        self
    }

    fn finish(self) -> FixGroup {
        FixGroup {
            name: self.name,
            family: self.family,
            fixes: self.fixes,
        }
    }
}
