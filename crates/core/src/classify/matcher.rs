//! Series detection.

use regex_lite::Regex;

use super::types::{ClassifyError, MediaKind};
use crate::config::ClassifyConfig;

/// Decides between movie and series from a normalized file name.
///
/// A name is a series when it contains one of the indicator tokens or matches
/// one of the extra patterns. Matching is case-sensitive; indicators are
/// lowercased once here because normalized names are already lowercase.
#[derive(Debug, Clone)]
pub struct SeriesMatcher {
    indicators: Vec<String>,
    patterns: Vec<Regex>,
}

impl Default for SeriesMatcher {
    fn default() -> Self {
        Self {
            indicators: vec!["season".to_string(), "episode".to_string()],
            patterns: Vec::new(),
        }
    }
}

impl SeriesMatcher {
    /// Builds a matcher from indicator tokens and regular expressions.
    pub fn new<I, P>(indicators: I, patterns: P) -> Result<Self, ClassifyError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        let indicators = indicators
            .into_iter()
            .map(|i| i.as_ref().to_lowercase())
            .filter(|i| !i.is_empty())
            .collect();

        let patterns = patterns
            .into_iter()
            .map(|p| {
                let p = p.as_ref();
                Regex::new(p).map_err(|e| ClassifyError::InvalidPattern {
                    pattern: p.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            indicators,
            patterns,
        })
    }

    /// Builds a matcher from the `[classify]` section.
    pub fn from_config(config: &ClassifyConfig) -> Result<Self, ClassifyError> {
        Self::new(&config.series_indicators, &config.series_patterns)
    }

    /// Returns the first indicator or pattern that matches, if any.
    pub fn matched_by(&self, file_name: &str) -> Option<&str> {
        if let Some(indicator) = self
            .indicators
            .iter()
            .find(|indicator| file_name.contains(indicator.as_str()))
        {
            return Some(indicator.as_str());
        }
        self.patterns
            .iter()
            .find(|re| re.is_match(file_name))
            .map(|re| re.as_str())
    }

    pub fn classify(&self, file_name: &str) -> MediaKind {
        if self.matched_by(file_name).is_some() {
            MediaKind::Series
        } else {
            MediaKind::Movie
        }
    }
}
