use core::fmt;

use html5ever::LocalName;
use smallvec::SmallVec;

use crate::scan;

/// Wrapper chains the fragment parser is known to synthesize, keyed by the
/// input's leading tag. Each path runs from the synthesized root down to the
/// nodes the caller actually wrote.
const PLUCK_RULES: &[(&[&str], &[&str])] = &[
    // a bare cell gets wrapped in <tbody><tr>
    (&["td", "th"], &["tbody", "tr", "*"]),
    // a bare row gets wrapped in <tbody>
    (&["tr"], &["tbody", "*"]),
    // a bare column gets wrapped in <colgroup>
    (&["col"], &["colgroup", "*"]),
    // head and body fragments grow an implied sibling; keep only the
    // element that was written
    (&["head"], &["head"]),
    (&["body"], &["body"]),
];

/// One navigation step of a [`PluckPath`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluckStep {
    /// Select child elements with the given tag name.
    Tag(LocalName),
    /// Select all children, the `*` wildcard.
    All,
}

/// A selection path that navigates past the wrapper elements the fragment
/// parser synthesizes for a given input shape.
///
/// Paths are made of child steps only; each step is either a literal tag
/// name or the wildcard `*`. The path for a bare table cell displays as
/// `tbody/tr/*`: descend through the synthesized `<tbody><tr>` chain, then
/// take all of its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluckPath {
    steps: SmallVec<[PluckStep; 3]>,
}

impl PluckPath {
    fn from_steps(spec: &[&str]) -> Self {
        let steps = spec
            .iter()
            .map(|step| match *step {
                "*" => PluckStep::All,
                name => PluckStep::Tag(LocalName::from(name)),
            })
            .collect();
        Self { steps }
    }

    /// Returns the steps of this path in navigation order.
    pub fn steps(&self) -> &[PluckStep] {
        &self.steps
    }
}

impl fmt::Display for PluckPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            match step {
                PluckStep::Tag(name) => f.write_str(name)?,
                PluckStep::All => f.write_str("*")?,
            }
        }
        Ok(())
    }
}

/// Resolves the pluck path for the given input, or `None` when the fragment
/// parser synthesizes no wrapper for its shape. A static function of the
/// input prefix; the parser output is never consulted.
pub(crate) fn resolve(input: &str) -> Option<PluckPath> {
    let input = scan::skip_whitespace(input);
    let name = scan::leading_start_tag(input)?;
    PLUCK_RULES
        .iter()
        .find(|(tags, _)| tags.iter().any(|t| name.eq_ignore_ascii_case(t)))
        .map(|(_, path)| PluckPath::from_steps(path))
}
