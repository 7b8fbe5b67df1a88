#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

mod context;
mod driver;
mod options;
mod output;
mod pluck;
mod scan;
mod select;
#[cfg(test)]
mod tests;

pub use context::{Classifier, Context, ContextPolicy};
pub use options::ParseOptions;
pub use output::ParseOutput;
pub use pluck::{PluckPath, PluckStep};

/// Guesses how the given input must be parsed: as a full document, or as a
/// fragment under a specific context node.
///
/// The decision is made from the input's first tag, after skipping leading
/// whitespace and ignoring case. Every input maps to exactly one decision;
/// this function cannot fail. Uses the default [`ContextPolicy`]; build a
/// [`Classifier`] directly to pick another fallback.
///
/// # Example
/// ```
/// use html5_inference::{classify, Context};
///
/// assert_eq!(classify("<!doctype html><html></html>"), Context::Document);
/// assert_eq!(classify("<td>foo</td>").name(), Some("table"));
/// assert_eq!(classify("<body>foo</body>").name(), Some("html"));
/// assert_eq!(classify("just some text").name(), Some("template"));
/// ```
pub fn classify(input: &str) -> Context {
    Classifier::new(ContextPolicy::default()).classify(input)
}

/// Returns the selection path that strips the wrapper elements the fragment
/// parser is known to synthesize for this input's shape, or `None` when no
/// wrapper is synthesized.
///
/// # Example
/// ```
/// assert_eq!(html5_inference::pluck_path("<td>foo</td>").unwrap().to_string(), "tbody/tr/*");
/// assert_eq!(html5_inference::pluck_path("<tr><td>x</td></tr>").unwrap().to_string(), "tbody/*");
/// assert!(html5_inference::pluck_path("<div>foo</div>").is_none());
/// ```
pub fn pluck_path(input: &str) -> Option<PluckPath> {
    pluck::resolve(input)
}

/// Parses the given input string
///
/// This is the "entry point" and function you will call to parse HTML of
/// unknown shape. Based on the start of the input, the string is parsed
/// either as a full document or as a fragment with the inferred context
/// node, and fragment output is narrowed past any parser-synthesized
/// wrapper elements (unless disabled via
/// [`ParseOptions::keep_wrappers`]).
///
/// # Example
/// ```
/// let output = html5_inference::parse("<td>foo</td>", Default::default());
/// assert_eq!(output.to_html(), "<td>foo</td>");
///
/// let output = html5_inference::parse("<!doctype html><html></html>", Default::default());
/// assert!(output.is_document());
/// ```
pub fn parse(input: &str, options: ParseOptions) -> ParseOutput {
    driver::parse_with(input, options)
}
