use html5ever::LocalName;
use markup5ever::local_name;
use smallvec::SmallVec;

use crate::scan;

/// Start tags that only parse correctly in the "in table" insertion mode.
/// Note that `table` itself is absent: a `<table>` tag parses fine in the
/// generic contexts.
const TABLE_TAGS: &[&str] = &[
    "thead", "tbody", "tfoot", "tr", "td", "th", "colgroup", "col", "caption",
];

/// Start tags that belong to the document skeleton and need an `html`
/// context node.
const HTML_TAGS: &[&str] = &["head", "body"];

/// How a fragment parser must be invoked for a given input: as a full
/// document, or as a fragment under the named context element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Context {
    /// The input looks like a full HTML5 document.
    Document,
    /// The input looks like a fragment that must be parsed with the named
    /// context node.
    Fragment(LocalName),
}

impl Context {
    /// Returns the context node name for a fragment, or `None` for a full
    /// document.
    pub fn name(&self) -> Option<&str> {
        match self {
            Context::Document => None,
            Context::Fragment(name) => Some(&**name),
        }
    }

    /// Returns whether the input should be parsed as a full document.
    #[inline]
    pub fn is_document(&self) -> bool {
        matches!(self, Context::Document)
    }
}

/// Context used for fragments that match no specific insertion-mode rule.
///
/// Most content parses the same way under either policy; they differ in how
/// unrecognized input is wrapped. The `template` context is the neutral one
/// the HTML5 spec provides for exactly this purpose and is the default.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ContextPolicy {
    /// Parse unrecognized fragments in a `template` context.
    #[default]
    Template,
    /// Parse unrecognized fragments in a generic `body` context.
    Body,
}

impl ContextPolicy {
    /// Returns the context node name this policy falls back to.
    pub fn fallback_context(&self) -> LocalName {
        match self {
            ContextPolicy::Template => local_name!("template"),
            ContextPolicy::Body => local_name!("body"),
        }
    }
}

/// A prefix pattern a classification rule matches against.
#[derive(Debug, Clone)]
enum Pattern {
    /// A `<!doctype html>` declaration.
    Doctype,
    /// A start tag whose name is in the given set.
    StartTag(&'static [&'static str]),
}

impl Pattern {
    fn matches(&self, input: &str) -> bool {
        match self {
            Pattern::Doctype => scan::has_doctype(input),
            Pattern::StartTag(names) => scan::leading_start_tag(input)
                .map_or(false, |name| {
                    names.iter().any(|n| name.eq_ignore_ascii_case(n))
                }),
        }
    }
}

/// Classifies inputs by their syntactic prefix.
///
/// The rule list is built once from a [`ContextPolicy`] and evaluated in
/// order; the first matching rule wins, so the specific contexts outrank the
/// fallback. Classification is total: every input, including the empty
/// string, maps to exactly one [`Context`].
///
/// # Example
/// ```
/// use html5_inference::{Classifier, ContextPolicy};
///
/// let classifier = Classifier::new(ContextPolicy::Body);
/// assert_eq!(classifier.classify("<div>hello</div>").name(), Some("body"));
/// assert_eq!(classifier.classify("<td>hello</td>").name(), Some("table"));
/// ```
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: SmallVec<[(Pattern, Context); 4]>,
    fallback: Context,
}

impl Classifier {
    /// Builds the ordered rule list for the given policy.
    pub fn new(policy: ContextPolicy) -> Self {
        let mut rules = SmallVec::new();
        rules.push((Pattern::Doctype, Context::Document));
        rules.push((Pattern::StartTag(&["html"]), Context::Document));
        rules.push((
            Pattern::StartTag(TABLE_TAGS),
            Context::Fragment(local_name!("table")),
        ));
        rules.push((
            Pattern::StartTag(HTML_TAGS),
            Context::Fragment(local_name!("html")),
        ));
        Self {
            rules,
            fallback: Context::Fragment(policy.fallback_context()),
        }
    }

    /// Classifies the given input. Leading ASCII whitespace is skipped and
    /// matching is case-insensitive.
    pub fn classify(&self, input: &str) -> Context {
        let input = scan::skip_whitespace(input);
        self.rules
            .iter()
            .find(|(pattern, _)| pattern.matches(input))
            .map(|(_, context)| context.clone())
            .unwrap_or_else(|| self.fallback.clone())
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(ContextPolicy::default())
    }
}
