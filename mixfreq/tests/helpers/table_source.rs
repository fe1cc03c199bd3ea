#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use mixfreq::{MixfreqError, RawSeries, SeriesSource};
use tokio::sync::Mutex;
use tokio::time::{Duration, sleep};

/// Simple in-memory source used by integration tests.
///
/// Serves fixed series by identifier, optionally after a per-identifier
/// delay, and records the order in which fetches complete.
pub struct TableSource {
    pub name: &'static str,
    pub series: HashMap<String, RawSeries>,
    pub delays_ms: HashMap<String, u64>,
    pub completed: Arc<Mutex<Vec<String>>>,
}

impl TableSource {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            series: HashMap::new(),
            delays_ms: HashMap::new(),
            completed: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with(mut self, series: RawSeries) -> Self {
        self.series.insert(series.id.clone(), series);
        self
    }

    pub fn with_delay(mut self, id: &str, ms: u64) -> Self {
        self.delays_ms.insert(id.to_string(), ms);
        self
    }
}

#[async_trait]
impl SeriesSource for TableSource {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn fetch(
        &self,
        id: &str,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> Result<RawSeries, MixfreqError> {
        if let Some(ms) = self.delays_ms.get(id) {
            sleep(Duration::from_millis(*ms)).await;
        }
        self.completed.lock().await.push(id.to_string());
        self.series
            .get(id)
            .cloned()
            .ok_or_else(|| MixfreqError::not_found(format!("series {id}")))
    }
}
