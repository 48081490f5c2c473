//! Keyword search criteria.
//!
//! Up to three keywords combined with a selectable operator:
//!
//! - `None`: only the first keyword is tested
//! - `And`: every keyword slot must be satisfied
//! - `Or`: at least one keyword slot must be satisfied
//!
//! An empty slot is satisfied by every record. Under `Or` this means a single
//! empty slot accepts everything, so `Or` only rejects records when all three
//! keywords are set. With no keywords present the keyword search is inactive
//! for every operator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::defaults::MAX_KEYWORDS;
use crate::error::Error;

/// Operator combining the keywords of a keyword search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum KeywordOperator {
    /// Only the first keyword is evaluated.
    #[default]
    None,
    /// All present keywords must match.
    #[serde(rename = "AND")]
    And,
    /// Any present keyword must match.
    #[serde(rename = "OR")]
    Or,
}

impl KeywordOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

impl fmt::Display for KeywordOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeywordOperator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(Self::None),
            "and" => Ok(Self::And),
            "or" => Ok(Self::Or),
            other => Err(Error::InvalidInput(format!(
                "unknown keyword operator '{}', expected none, and, or",
                other
            ))),
        }
    }
}

/// Keyword search criteria.
///
/// # Example
///
/// ```
/// use hearings_core::{KeywordCriteria, KeywordOperator};
///
/// let keywords = KeywordCriteria::new()
///     .with_keyword1("pipeline")
///     .with_keyword2("appeal")
///     .with_operator(KeywordOperator::Or);
///
/// assert_eq!(keywords.present_keywords().count(), 2);
/// // keyword3 is empty, so the OR is satisfied by every record
/// assert!(!keywords.is_active());
/// assert!(keywords.with_keyword3("pooling").is_active());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCriteria {
    #[serde(default)]
    pub keyword1: String,
    #[serde(default)]
    pub keyword2: String,
    #[serde(default)]
    pub keyword3: String,
    #[serde(default)]
    pub operator: KeywordOperator,
}

impl KeywordCriteria {
    /// Create inactive criteria.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build criteria from a list of keywords. Fails when more than
    /// [`MAX_KEYWORDS`] keywords are given.
    pub fn from_keywords<I, S>(keywords: I, operator: KeywordOperator) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keywords: Vec<String> = keywords.into_iter().map(Into::into).collect();
        if keywords.len() > MAX_KEYWORDS {
            return Err(Error::InvalidInput(format!(
                "at most {} keywords are supported, got {}",
                MAX_KEYWORDS,
                keywords.len()
            )));
        }
        let mut slots = keywords.into_iter();
        Ok(Self {
            keyword1: slots.next().unwrap_or_default(),
            keyword2: slots.next().unwrap_or_default(),
            keyword3: slots.next().unwrap_or_default(),
            operator,
        })
    }

    pub fn with_keyword1(mut self, keyword: impl Into<String>) -> Self {
        self.keyword1 = keyword.into();
        self
    }

    pub fn with_keyword2(mut self, keyword: impl Into<String>) -> Self {
        self.keyword2 = keyword.into();
        self
    }

    pub fn with_keyword3(mut self, keyword: impl Into<String>) -> Self {
        self.keyword3 = keyword.into();
        self
    }

    pub fn with_operator(mut self, operator: KeywordOperator) -> Self {
        self.operator = operator;
        self
    }

    /// The three keyword slots in order, empty ones mapped to `None`.
    pub fn slots(&self) -> [Option<&str>; MAX_KEYWORDS] {
        [
            non_empty(&self.keyword1),
            non_empty(&self.keyword2),
            non_empty(&self.keyword3),
        ]
    }

    /// Present keywords in slot order.
    pub fn present_keywords(&self) -> impl Iterator<Item = &str> {
        self.slots().into_iter().flatten()
    }

    /// Keywords the current operator evaluates. Under `Or` these are the
    /// present keywords; empty slots still count as satisfied there.
    pub fn effective_keywords(&self) -> Vec<&str> {
        match self.operator {
            KeywordOperator::None => non_empty(&self.keyword1).into_iter().collect(),
            KeywordOperator::And | KeywordOperator::Or => self.present_keywords().collect(),
        }
    }

    /// Whether the keyword predicate can reject anything.
    pub fn is_active(&self) -> bool {
        match self.operator {
            KeywordOperator::None | KeywordOperator::And => !self.effective_keywords().is_empty(),
            KeywordOperator::Or => self.slots().iter().all(Option::is_some),
        }
    }

    /// Reset to inactive, matching the keyword panel's reset action.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_inactive() {
        let keywords = KeywordCriteria::new();
        assert_eq!(keywords.operator, KeywordOperator::None);
        assert!(!keywords.is_active());
    }

    #[test]
    fn test_none_operator_only_uses_first_keyword() {
        let keywords = KeywordCriteria::new().with_keyword2("appeal");
        assert!(!keywords.is_active());

        let keywords = keywords.with_keyword1("pipeline");
        assert_eq!(keywords.effective_keywords(), vec!["pipeline"]);
    }

    #[test]
    fn test_and_or_use_all_present_keywords() {
        let keywords = KeywordCriteria::new()
            .with_keyword2("appeal")
            .with_keyword3("pooling")
            .with_operator(KeywordOperator::And);
        assert_eq!(keywords.effective_keywords(), vec!["appeal", "pooling"]);
        assert!(keywords.is_active());
    }

    #[test]
    fn test_or_is_active_only_with_every_slot_set() {
        let keywords = KeywordCriteria::new()
            .with_keyword1("pipeline")
            .with_operator(KeywordOperator::Or);
        assert!(!keywords.is_active());
        assert_eq!(keywords.effective_keywords(), vec!["pipeline"]);

        let keywords = keywords.with_keyword2("appeal").with_keyword3("pooling");
        assert!(keywords.is_active());
    }

    #[test]
    fn test_whitespace_keyword_is_present() {
        let keywords = KeywordCriteria::new().with_keyword1(" ");
        assert_eq!(keywords.slots(), [Some(" "), None, None]);
        assert!(keywords.is_active());
    }

    #[test]
    fn test_and_with_no_keywords_is_inactive() {
        let keywords = KeywordCriteria::new().with_operator(KeywordOperator::And);
        assert!(!keywords.is_active());
    }

    #[test]
    fn test_from_keywords() {
        let keywords =
            KeywordCriteria::from_keywords(["pipeline", "appeal"], KeywordOperator::Or).unwrap();
        assert_eq!(keywords.keyword1, "pipeline");
        assert_eq!(keywords.keyword2, "appeal");
        assert_eq!(keywords.keyword3, "");
    }

    #[test]
    fn test_from_keywords_rejects_four() {
        let err = KeywordCriteria::from_keywords(["a", "b", "c", "d"], KeywordOperator::And)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_operator_parse() {
        assert_eq!("AND".parse::<KeywordOperator>().unwrap(), KeywordOperator::And);
        assert_eq!("or".parse::<KeywordOperator>().unwrap(), KeywordOperator::Or);
        assert_eq!("None".parse::<KeywordOperator>().unwrap(), KeywordOperator::None);
        assert!("xor".parse::<KeywordOperator>().is_err());
    }

    #[test]
    fn test_operator_serde_labels() {
        let keywords: KeywordCriteria = serde_json::from_str(
            r#"{"keyword1": "pipeline", "keyword2": "", "keyword3": "", "operator": "AND"}"#,
        )
        .unwrap();
        assert_eq!(keywords.operator, KeywordOperator::And);
        assert_eq!(
            serde_json::to_string(&KeywordOperator::None).unwrap(),
            "\"None\""
        );
    }

    #[test]
    fn test_reset() {
        let mut keywords = KeywordCriteria::new()
            .with_keyword1("pipeline")
            .with_operator(KeywordOperator::Or);
        keywords.reset();
        assert_eq!(keywords, KeywordCriteria::default());
    }
}
