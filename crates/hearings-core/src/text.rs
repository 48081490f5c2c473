//! Case-insensitive text matching helpers.

/// Needle pre-lowercased once, for testing many haystacks against the same
/// term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LowercaseTerm(String);

impl LowercaseTerm {
    pub fn new(term: &str) -> Self {
        Self(term.to_lowercase())
    }

    /// Test a haystack that is not yet lowercased.
    #[inline]
    pub fn found_in(&self, haystack: &str) -> bool {
        self.0.is_empty() || haystack.to_lowercase().contains(&self.0)
    }

    /// Test a haystack that is already lowercased.
    #[inline]
    pub fn found_in_lowercase(&self, lowercase_haystack: &str) -> bool {
        lowercase_haystack.contains(&self.0)
    }
}
