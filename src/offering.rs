//! Offered installment terms
//!
//! The list of term lengths a showroom offers is owned by whoever builds the
//! quote configuration. The calculator does not consult it.

use serde::{Deserialize, Serialize};

use crate::error::{QuoteError, Result};

/// Terms offered by default, in months
pub const DEFAULT_TERMS: [i32; 5] = [3, 6, 12, 18, 24];

/// Ordered, validated list of offered term lengths.
///
/// Terms are positive and strictly ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<i32>", into = "Vec<i32>")]
pub struct TermOffering {
    terms: Vec<i32>,
}

impl TermOffering {
    /// Build an offering, rejecting empty, non-positive or unordered lists
    pub fn new(terms: Vec<i32>) -> Result<Self> {
        if terms.is_empty() {
            return Err(QuoteError::EmptyOffering);
        }

        if let Some(&months) = terms.iter().find(|&&m| m <= 0) {
            return Err(QuoteError::InvalidTerm { months });
        }

        if let Some(pair) = terms.windows(2).find(|w| w[0] >= w[1]) {
            return Err(QuoteError::UnorderedTerms {
                previous: pair[0],
                next: pair[1],
            });
        }

        Ok(Self { terms })
    }

    pub fn terms(&self) -> &[i32] {
        &self.terms
    }

    pub fn contains(&self, months: i32) -> bool {
        self.terms.binary_search(&months).is_ok()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.terms.iter().copied()
    }
}

impl Default for TermOffering {
    fn default() -> Self {
        Self {
            terms: DEFAULT_TERMS.to_vec(),
        }
    }
}

impl TryFrom<Vec<i32>> for TermOffering {
    type Error = QuoteError;

    fn try_from(terms: Vec<i32>) -> Result<Self> {
        Self::new(terms)
    }
}

impl From<TermOffering> for Vec<i32> {
    fn from(offering: TermOffering) -> Self {
        offering.terms
    }
}
