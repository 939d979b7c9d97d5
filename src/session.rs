//! Application state for one page: the saved history, the picture being
//! previewed, and what the UI is currently doing.
//!
//! User actions arrive as [`SessionAction`] values. Failures are kept as the
//! visible error instead of escaping to the caller.

use tracing::{info, warn};

use crate::apod::{ApodPayload, ImageRecord};
use crate::error::{ApodError, AppError};
use crate::history::{HistoryCommand, HistoryStore, KeyValueStore};

/// Where the fetch/preview cycle currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle,
    Fetching { date: String },
    Previewing(ImageRecord),
    Failed(String),
}

/// Identifies one fetch; only the latest ticket may fill the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    /// Save whatever is pending when the action runs.
    SavePending,
    Discard,
    Remove { id: u64 },
    ClearAll,
}

/// Millisecond timestamps, bumped when two land on the same millisecond.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// Never hand out an id at or below `last`.
    pub fn starting_after(last: u64) -> Self {
        Self { last }
    }

    pub fn next_at(&mut self, now_millis: u64) -> u64 {
        let id = now_millis.max(self.last + 1);
        self.last = id;
        id
    }

    pub fn next(&mut self) -> u64 {
        self.next_at(now_millis())
    }
}

#[cfg(target_arch = "wasm32")]
fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_millis() -> u64 {
    chrono::Utc::now().timestamp_millis().max(0) as u64
}

#[derive(Debug)]
pub struct Session<S> {
    history: HistoryStore<S>,
    phase: Phase,
    ids: IdGenerator,
    fetch_seq: u64,
    error: Option<String>,
}

impl<S: KeyValueStore> Session<S> {
    pub fn open(storage: S) -> Self {
        let history = HistoryStore::open(storage);
        info!("Loaded {} saved pictures", history.len());
        let newest = history.records().iter().map(|r| r.id).max().unwrap_or(0);
        Self {
            history,
            phase: Phase::Idle,
            ids: IdGenerator::starting_after(newest),
            fetch_seq: 0,
            error: None,
        }
    }

    pub fn history(&self) -> &[ImageRecord] {
        self.history.records()
    }

    pub fn store(&self) -> &HistoryStore<S> {
        &self.history
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn pending(&self) -> Option<&ImageRecord> {
        match &self.phase {
            Phase::Previewing(record) => Some(record),
            _ => None,
        }
    }

    pub fn is_fetching(&self) -> bool {
        matches!(self.phase, Phase::Fetching { .. })
    }

    /// Last failure worth showing, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Record a failure raised outside the session, e.g. date validation.
    pub fn report(&mut self, err: AppError) {
        warn!("{}", err);
        self.error = Some(err.to_string());
    }

    /// Start a fetch. Any preview on screen is dropped.
    pub fn begin_fetch(&mut self, date: &str) -> FetchTicket {
        self.fetch_seq += 1;
        self.error = None;
        self.phase = Phase::Fetching {
            date: date.to_string(),
        };
        info!("Fetching picture for {}", date);
        FetchTicket(self.fetch_seq)
    }

    /// Complete a fetch. Results for superseded tickets are dropped.
    pub fn finish_fetch(&mut self, ticket: FetchTicket, result: Result<ApodPayload, ApodError>) {
        if ticket.0 != self.fetch_seq {
            info!("Ignoring superseded fetch #{}", ticket.0);
            return;
        }

        let record = result.and_then(|payload| ImageRecord::from_payload(payload, self.ids.next()));
        match record {
            Ok(record) => {
                info!("Previewing '{}' ({})", record.title, record.date);
                self.phase = Phase::Previewing(record);
            }
            Err(e) => {
                warn!("Fetch failed: {}", e);
                self.error = Some(e.to_string());
                self.phase = Phase::Failed(e.to_string());
            }
        }
    }

    pub fn apply(&mut self, action: SessionAction) -> Result<(), AppError> {
        match action {
            SessionAction::SavePending => {
                let record = self.pending().cloned().ok_or(AppError::NothingPending)?;
                self.history.dispatch(HistoryCommand::Save { record })?;
                self.phase = Phase::Idle;
            }
            SessionAction::Discard => {
                if matches!(self.phase, Phase::Previewing(_) | Phase::Failed(_)) {
                    self.phase = Phase::Idle;
                }
            }
            SessionAction::Remove { id } => {
                self.history.dispatch(HistoryCommand::Remove { id })?;
            }
            SessionAction::ClearAll => {
                self.history.dispatch(HistoryCommand::Clear)?;
            }
        }
        self.error = None;
        Ok(())
    }

    /// Run `action`, keeping any failure as the visible error.
    pub fn dispatch(&mut self, action: SessionAction) {
        if let Err(e) = self.apply(action) {
            self.report(e);
        }
    }
}
