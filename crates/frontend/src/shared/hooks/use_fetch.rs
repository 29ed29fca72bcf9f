//! Remote JSON data bound to a reactive URL.

use contracts::shared::fetch_state::{
    fetch_reducer, FetchAction, FetchError, FetchState, RequestTracker,
};
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use web_sys::{AbortController, AbortSignal};

pub struct UseFetch<T: Send + Sync + 'static> {
    pub data: Signal<Option<T>>,
    pub error: Signal<Option<FetchError>>,
    pub loading: Signal<bool>,
    /// Re-issues the request for the current URL.
    pub refetch: Callback<()>,
}

enum RequestOutcome<T> {
    Loaded(T),
    Aborted,
    Failed(FetchError),
}

fn classify_error(err: gloo_net::Error) -> Option<FetchError> {
    match err {
        gloo_net::Error::JsError(js) if js.name == "AbortError" => None,
        gloo_net::Error::JsError(js) => Some(FetchError::Network(js.message)),
        gloo_net::Error::SerdeError(e) => Some(FetchError::Decode(e.to_string())),
        gloo_net::Error::GlooError(msg) => Some(FetchError::Network(msg)),
    }
}

async fn request_json<T: DeserializeOwned>(
    url: &str,
    signal: Option<&AbortSignal>,
) -> RequestOutcome<T> {
    let response = match Request::get(url).abort_signal(signal).send().await {
        Ok(response) => response,
        Err(err) => {
            return match classify_error(err) {
                Some(error) => RequestOutcome::Failed(error),
                None => RequestOutcome::Aborted,
            }
        }
    };

    if !response.ok() {
        return RequestOutcome::Failed(FetchError::Http {
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    match response.json::<T>().await {
        Ok(data) => RequestOutcome::Loaded(data),
        Err(err) => match classify_error(err) {
            Some(error) => RequestOutcome::Failed(error),
            None => RequestOutcome::Aborted,
        },
    }
}

/// Fetches `url` as JSON whenever it changes.
///
/// A new request aborts the one in flight, and only the most recent request
/// may publish its result. The pending request is aborted when the owner is
/// disposed.
pub fn use_fetch<T>(url: Signal<String>) -> UseFetch<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    let state = RwSignal::new(FetchState::<T>::default());
    let trigger = RwSignal::new(0u32);
    let tracker = StoredValue::new(RequestTracker::new());
    let controller = StoredValue::new_local(None::<AbortController>);

    let abort_pending = move || {
        controller.try_update_value(|slot| {
            if let Some(pending) = slot.take() {
                pending.abort();
            }
        });
    };

    Effect::new(move |_| {
        let url = url.get();
        trigger.track();

        abort_pending();
        let Some(ticket) = tracker.try_update_value(|t| t.begin()) else {
            return;
        };
        state.update(|s| *s = fetch_reducer(std::mem::take(s), FetchAction::Start));

        let abort = AbortController::new().ok();
        let signal = abort.as_ref().map(|c| c.signal());
        controller.set_value(abort);

        spawn_local(async move {
            let outcome = request_json::<T>(&url, signal.as_ref()).await;
            let is_current = tracker
                .try_with_value(|t| t.is_current(ticket))
                .unwrap_or(false);
            if !is_current {
                return;
            }
            let action = match outcome {
                RequestOutcome::Loaded(data) => FetchAction::Success(data),
                RequestOutcome::Failed(error) => {
                    log::error!("request to {} failed: {}", url, error);
                    FetchAction::Failure(error)
                }
                RequestOutcome::Aborted => return,
            };
            state.try_update(|s| *s = fetch_reducer(std::mem::take(s), action));
        });
    });

    on_cleanup(move || {
        tracker.try_update_value(|t| t.cancel());
        abort_pending();
    });

    UseFetch {
        data: Signal::derive(move || state.with(|s| s.data.clone())),
        error: Signal::derive(move || state.with(|s| s.error.clone())),
        loading: Signal::derive(move || state.with(|s| s.loading)),
        refetch: Callback::new(move |_| trigger.update(|n| *n = n.wrapping_add(1))),
    }
}
