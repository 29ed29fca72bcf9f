//! State machine behind the remote-data hook.
//!
//! The hook itself lives in the frontend crate; this module holds the
//! target-independent parts so they can be tested natively.

use thiserror::Error;

/// Failure of a remote data request. Aborted requests are not errors and never
/// reach this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub error: Option<FetchError>,
    pub loading: bool,
}

impl<T> Default for FetchState<T> {
    /// A hook starts loading immediately, so the initial state is `loading`.
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            loading: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchAction<T> {
    Start,
    Success(T),
    Failure(FetchError),
}

pub fn fetch_reducer<T>(_state: FetchState<T>, action: FetchAction<T>) -> FetchState<T> {
    match action {
        FetchAction::Start => FetchState {
            data: None,
            error: None,
            loading: true,
        },
        FetchAction::Success(data) => FetchState {
            data: Some(data),
            error: None,
            loading: false,
        },
        FetchAction::Failure(error) => FetchState {
            data: None,
            error: Some(error),
            loading: false,
        },
    }
}

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Last-request-wins bookkeeping.
///
/// Every `begin` supersedes all previously issued tickets; only the ticket of
/// the most recent request may publish its result.
#[derive(Debug, Default)]
pub struct RequestTracker {
    generation: u64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> RequestTicket {
        self.generation += 1;
        RequestTicket(self.generation)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Invalidates the in-flight ticket without issuing a new one (unmount).
    pub fn cancel(&mut self) {
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reducer_transitions() {
        let state = FetchState::<u32>::default();
        assert!(state.loading);

        let state = fetch_reducer(state, FetchAction::Success(7));
        assert_eq!(state.data, Some(7));
        assert!(!state.loading);

        let state = fetch_reducer(state, FetchAction::Start);
        assert_eq!(state.data, None);
        assert!(state.loading);

        let error = FetchError::Http {
            status: 404,
            status_text: "Not Found".into(),
        };
        let state = fetch_reducer(state, FetchAction::Failure(error.clone()));
        assert_eq!(state.error, Some(error));
        assert_eq!(state.data, None);
        assert!(!state.loading);
    }

    #[test]
    fn test_error_messages() {
        let error = FetchError::Http {
            status: 500,
            status_text: "Internal Server Error".into(),
        };
        assert_eq!(error.to_string(), "HTTP 500: Internal Server Error");
        assert_eq!(
            FetchError::Network("offline".into()).to_string(),
            "Network error: offline"
        );
    }

    #[test]
    fn test_last_request_wins() {
        let mut tracker = RequestTracker::new();
        let first = tracker.begin();
        assert!(tracker.is_current(first));

        let second = tracker.begin();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));

        tracker.cancel();
        assert!(!tracker.is_current(second));
    }
}
