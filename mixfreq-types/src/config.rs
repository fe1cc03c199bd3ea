//! Panel configuration (which series go in which frequency bucket) and
//! runtime knobs for the orchestrator.

use std::fmt;
use std::time::Duration;

use chrono::NaiveDate;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::MixfreqError;
use crate::frequency::Frequency;

/// Date format accepted for start dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Series identifiers and start date requested for one target frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyRequest {
    /// Target frequency.
    pub frequency: Frequency,
    /// Configured start date (not yet normalized to the frequency's calendar).
    pub start: NaiveDate,
    /// Identifiers in configured order, trimmed and de-duplicated.
    pub series: Vec<String>,
}

/// Validated panel configuration.
///
/// Requests keep the order in which their frequency first appeared in the
/// configuration. Each frequency appears at most once.
///
/// Deserializing a serialized `PanelConfig` re-runs the same validation as
/// [`from_sections`](Self::from_sections).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SerializedPanelConfig")]
pub struct PanelConfig {
    requests: Vec<FrequencyRequest>,
    ignored_sections: Vec<String>,
}

impl PanelConfig {
    /// Start building a configuration programmatically.
    #[must_use]
    pub fn builder() -> PanelConfigBuilder {
        PanelConfigBuilder::default()
    }

    /// Build a configuration from `(frequency name, identifiers)` sections and
    /// start-date strings.
    ///
    /// Rules:
    /// - Section names are matched case-insensitively; unknown names are kept in
    ///   [`ignored_sections`](Self::ignored_sections) and otherwise skipped.
    /// - Sections naming the same frequency are concatenated in order.
    /// - Identifiers are trimmed; empty ones are dropped; repeats within a
    ///   frequency keep the first occurrence.
    /// - Start dates are assigned positionally to recognized frequencies; the
    ///   last date is reused when fewer dates than frequencies are supplied.
    ///
    /// # Errors
    /// Returns `Config` if no section names a supported frequency, no start date
    /// is given, or a start date is not a `YYYY-MM-DD` date.
    pub fn from_sections<I, K, L, S>(sections: I, start_dates: &[&str]) -> Result<Self, MixfreqError>
    where
        I: IntoIterator<Item = (K, L)>,
        K: Into<String>,
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sections = sections
            .into_iter()
            .map(|(k, ids)| (k.into(), ids.into_iter().map(Into::into).collect()))
            .collect();
        let dates = start_dates.iter().map(|s| (*s).to_string()).collect();
        Self::assemble(sections, dates)
    }

    /// Parse a JSON configuration of the form
    /// `{"series": {"monthly": ["A", "B"]}, "start_dates": ["2000-01-01"]}`.
    ///
    /// Identifier lists may also be given as one comma-separated string, and
    /// `start_dates` as a single date string.
    ///
    /// # Errors
    /// Returns `Config` for malformed JSON, a missing `series` mapping, or any
    /// failure listed in [`from_sections`](Self::from_sections).
    pub fn from_json_str(s: &str) -> Result<Self, MixfreqError> {
        let raw: RawPanelConfig =
            serde_json::from_str(s).map_err(|e| MixfreqError::config(e.to_string()))?;
        let dates = start_dates_from_value(raw.start_dates)?;
        let sections = raw
            .series
            .0
            .into_iter()
            .map(|(k, ids)| (k, ids.into_ids()))
            .collect();
        Self::assemble(sections, dates)
    }

    fn assemble(
        sections: Vec<(String, Vec<String>)>,
        start_dates: Vec<String>,
    ) -> Result<Self, MixfreqError> {
        let mut grouped: Vec<(Frequency, Vec<String>)> = Vec::new();
        let mut ignored_sections = Vec::new();
        for (name, ids) in sections {
            let Ok(freq) = name.parse::<Frequency>() else {
                ignored_sections.push(name);
                continue;
            };
            let at = if let Some(i) = grouped.iter().position(|(f, _)| *f == freq) {
                i
            } else {
                grouped.push((freq, Vec::new()));
                grouped.len() - 1
            };
            let slot = &mut grouped[at].1;
            for id in ids {
                let id = id.trim();
                if !id.is_empty() && !slot.iter().any(|s| s == id) {
                    slot.push(id.to_string());
                }
            }
        }

        if grouped.is_empty() {
            return Err(MixfreqError::config(format!(
                "no recognized frequency section (expected one of: {})",
                Frequency::ALL.map(Frequency::as_str).join(", ")
            )));
        }

        let starts = start_dates
            .iter()
            .map(|s| {
                NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
                    .map_err(|e| MixfreqError::config(format!("invalid start date '{s}': {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let Some(&last) = starts.last() else {
            return Err(MixfreqError::config("no start date given"));
        };

        let requests = grouped
            .into_iter()
            .enumerate()
            .map(|(i, (frequency, series))| FrequencyRequest {
                frequency,
                start: starts.get(i).copied().unwrap_or(last),
                series,
            })
            .collect();

        Ok(Self {
            requests,
            ignored_sections,
        })
    }

    /// Requests in configuration order.
    #[must_use]
    pub fn requests(&self) -> &[FrequencyRequest] {
        &self.requests
    }

    /// Request for a given frequency, if configured.
    #[must_use]
    pub fn request(&self, frequency: Frequency) -> Option<&FrequencyRequest> {
        self.requests.iter().find(|r| r.frequency == frequency)
    }

    /// Section names that did not name a supported frequency.
    #[must_use]
    pub fn ignored_sections(&self) -> &[String] {
        &self.ignored_sections
    }
}

#[derive(Deserialize)]
struct SerializedPanelConfig {
    requests: Vec<FrequencyRequest>,
    #[serde(default)]
    ignored_sections: Vec<String>,
}

impl TryFrom<SerializedPanelConfig> for PanelConfig {
    type Error = MixfreqError;

    fn try_from(raw: SerializedPanelConfig) -> Result<Self, Self::Error> {
        if let Some(dup) = raw
            .requests
            .iter()
            .enumerate()
            .find(|(i, r)| raw.requests[..*i].iter().any(|p| p.frequency == r.frequency))
            .map(|(_, r)| r.frequency)
        {
            return Err(MixfreqError::config(format!("frequency {dup} requested twice")));
        }
        let start_dates = raw
            .requests
            .iter()
            .map(|r| r.start.format(DATE_FORMAT).to_string())
            .collect();
        let sections = raw
            .requests
            .into_iter()
            .map(|r| (r.frequency.as_str().to_string(), r.series))
            .collect();
        let mut config = Self::assemble(sections, start_dates)?;
        config.ignored_sections = raw.ignored_sections;
        Ok(config)
    }
}

/// Programmatic builder for [`PanelConfig`].
#[derive(Debug, Clone, Default)]
pub struct PanelConfigBuilder {
    sections: Vec<(String, Vec<String>)>,
    start_dates: Vec<String>,
}

impl PanelConfigBuilder {
    /// Add a section by name. Unknown names are ignored at build time.
    #[must_use]
    pub fn section<I, S>(mut self, name: impl Into<String>, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sections
            .push((name.into(), ids.into_iter().map(Into::into).collect()));
        self
    }

    /// Add identifiers for a frequency.
    #[must_use]
    pub fn frequency<I, S>(self, frequency: Frequency, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.section(frequency.as_str(), ids)
    }

    /// Append a start date (`YYYY-MM-DD`).
    #[must_use]
    pub fn start_date(mut self, date: impl Into<String>) -> Self {
        self.start_dates.push(date.into());
        self
    }

    /// Validate and build.
    ///
    /// # Errors
    /// See [`PanelConfig::from_sections`].
    pub fn build(self) -> Result<PanelConfig, MixfreqError> {
        PanelConfig::assemble(self.sections, self.start_dates)
    }
}

#[derive(Deserialize)]
struct RawPanelConfig {
    series: OrderedSections,
    #[serde(default)]
    start_dates: serde_json::Value,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdList {
    Many(Vec<Option<String>>),
    One(String),
}

impl IdList {
    fn into_ids(self) -> Vec<String> {
        match self {
            Self::Many(ids) => ids.into_iter().flatten().collect(),
            Self::One(s) => s.split(',').map(str::to_string).collect(),
        }
    }
}

/// JSON object whose key order is preserved.
struct OrderedSections(Vec<(String, IdList)>);

impl<'de> Deserialize<'de> for OrderedSections {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SectionsVisitor;

        impl<'de> Visitor<'de> for SectionsVisitor {
            type Value = OrderedSections;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping from frequency name to series identifiers")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut out = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((k, v)) = map.next_entry::<String, IdList>()? {
                    out.push((k, v));
                }
                Ok(OrderedSections(out))
            }
        }

        deserializer.deserialize_map(SectionsVisitor)
    }
}

fn start_dates_from_value(v: serde_json::Value) -> Result<Vec<String>, MixfreqError> {
    use serde_json::Value;
    let malformed =
        || MixfreqError::config("start_dates must be a date string or a list of date strings");
    match v {
        Value::String(s) => Ok(vec![s]),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                _ => Err(malformed()),
            })
            .collect(),
        Value::Null => Ok(Vec::new()),
        _ => Err(malformed()),
    }
}

/// Runtime configuration for the `Mixfreq` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MixfreqConfig {
    /// Years added to "today" to obtain the end of every calendar grid.
    pub horizon_years: u32,
    /// Delay before the single retry of a failed source connection.
    pub connect_retry_delay: Duration,
    /// Optional timeout applied to each series fetch.
    pub fetch_timeout: Option<Duration>,
    /// Maximum number of series fetched and reduced concurrently within one frequency.
    pub max_concurrency: usize,
}

impl Default for MixfreqConfig {
    fn default() -> Self {
        Self {
            horizon_years: 4,
            connect_retry_delay: Duration::from_secs(1),
            fetch_timeout: None,
            max_concurrency: 4,
        }
    }
}
