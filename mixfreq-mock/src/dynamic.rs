use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Mutex;

use mixfreq_core::{MixfreqError, RawSeries, SeriesSource};

/// Instruction for how a fetch should behave for a given identifier.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(MixfreqError),
    /// Hang indefinitely (simulate a stalled request).
    Hang,
}

/// One logged `fetch` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Requested identifier.
    pub id: String,
    /// Requested first date.
    pub start: NaiveDate,
    /// Requested last date.
    pub end: NaiveDate,
}

#[derive(Default)]
struct InternalState {
    fetch_rules: HashMap<String, MockBehavior<RawSeries>>,
    fetch_requests: Vec<FetchRequest>,
    connect_failures: VecDeque<MixfreqError>,
    connect_attempts: usize,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `fetch` calls for a specific identifier.
    pub async fn set_fetch_behavior(&self, id: &str, behavior: MockBehavior<RawSeries>) {
        let mut guard = self.state.lock().await;
        guard.fetch_rules.insert(id.to_string(), behavior);
    }

    /// Make the next `connect` call fail with `error`.
    ///
    /// Queued failures are consumed in order; once the queue is empty `connect`
    /// succeeds.
    pub async fn fail_next_connect(&self, error: MixfreqError) {
        let mut guard = self.state.lock().await;
        guard.connect_failures.push_back(error);
    }

    /// Number of `connect` calls observed so far.
    pub async fn connect_attempts(&self) -> usize {
        self.state.lock().await.connect_attempts
    }

    /// Return a copy of the fetch log, in call order.
    pub async fn get_fetch_requests(&self) -> Vec<FetchRequest> {
        let guard = self.state.lock().await;
        guard.fetch_requests.clone()
    }

    /// Clear all configured behaviors and request logs.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.fetch_rules.clear();
        guard.fetch_requests.clear();
        guard.connect_failures.clear();
        guard.connect_attempts = 0;
    }
}

/// A source that defers all behavior to an external controller.
///
/// Identifiers without a configured behavior fail with `NotFound`.
pub struct DynamicMockSource {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockSource {
    /// Create a new dynamic mock source and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn SeriesSource>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn SeriesSource>, controller)
    }
}

#[async_trait]
impl SeriesSource for DynamicMockSource {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    async fn connect(&self) -> Result<(), MixfreqError> {
        let mut guard = self.state.lock().await;
        guard.connect_attempts += 1;
        guard.connect_failures.pop_front().map_or(Ok(()), Err)
    }

    async fn fetch(
        &self,
        id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<RawSeries, MixfreqError> {
        // Log and snapshot the behavior without holding the lock across await points
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.fetch_requests.push(FetchRequest {
                id: id.to_string(),
                start,
                end,
            });
            guard.fetch_rules.get(id).cloned()
        };

        match behavior {
            Some(MockBehavior::Return(series)) => Ok(series),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => std::future::pending().await,
            None => Err(MixfreqError::not_found(format!("series {id}"))),
        }
    }
}
