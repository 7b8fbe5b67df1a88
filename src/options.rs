use crate::context::ContextPolicy;

/// Options for [`parse`](crate::parse)
///
/// By default the fragment output is narrowed ("plucked") so that wrapper
/// elements synthesized by the parser are stripped and the returned nodes
/// line up with the input markup.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    pluck: bool,
    policy: ContextPolicy,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            pluck: true,
            policy: ContextPolicy::default(),
        }
    }
}

impl ParseOptions {
    /// Creates a new [ParseOptions] with the default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Disables plucking, so fragment output keeps whatever wrapper
    /// elements the parser synthesized.
    ///
    /// # Example
    /// ```
    /// let options = html5_inference::ParseOptions::new().keep_wrappers();
    /// let output = html5_inference::parse("<td>foo</td>", options);
    /// assert_eq!(output.to_html(), "<tbody><tr><td>foo</td></tr></tbody>");
    /// ```
    pub fn keep_wrappers(mut self) -> Self {
        self.pluck = false;
        self
    }

    /// Returns whether fragment output will be narrowed past synthesized
    /// wrappers.
    #[inline]
    pub fn is_plucking(&self) -> bool {
        self.pluck
    }

    /// Sets the classification policy for fragments that match no specific
    /// insertion-mode rule.
    pub fn set_policy(mut self, policy: ContextPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the classification policy.
    #[inline]
    pub fn policy(&self) -> ContextPolicy {
        self.policy
    }
}
