//! The closed set of calendar frequencies a panel can be built at.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MixfreqError;

/// Sampling frequency, ordered from finest to coarsest.
///
/// `Daily < Weekly < Monthly < Quarterly < Annual`, so "strictly coarser"
/// is plain `>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// One observation per calendar day.
    Daily,
    /// One observation per week, anchored on Friday.
    Weekly,
    /// One observation per month, anchored on the first day.
    Monthly,
    /// One observation per quarter, anchored on the first day of the quarter.
    Quarterly,
    /// One observation per year, anchored on January 1st.
    Annual,
}

impl Frequency {
    /// Every frequency, finest first.
    pub const ALL: [Self; 5] = [
        Self::Daily,
        Self::Weekly,
        Self::Monthly,
        Self::Quarterly,
        Self::Annual,
    ];

    /// Lowercase canonical name, as used in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Annual => "annual",
        }
    }

    /// Returns true if `self` has a strictly longer period than `other`.
    #[must_use]
    pub fn is_coarser_than(self, other: Self) -> bool {
        self > other
    }

    /// Parse the native frequency label reported by a series source.
    ///
    /// Sources append qualifiers after a comma (`"Weekly, Ending Friday"`,
    /// `"Daily, Close"`); only the text before the first comma is significant.
    ///
    /// # Errors
    /// Returns `UnknownFrequency` when the significant part does not name one of
    /// the five supported frequencies.
    pub fn from_native_label(label: &str) -> Result<Self, MixfreqError> {
        let head = label.split(',').next().unwrap_or_default();
        head.parse().map_err(|_| MixfreqError::UnknownFrequency {
            label: label.to_string(),
        })
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = MixfreqError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| MixfreqError::UnknownFrequency {
                label: s.to_string(),
            })
    }
}
