//! Reactive value persisted in `localStorage` as JSON.

use anyhow::{anyhow, Context};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::Storage;

/// An empty stored string counts as absent.
pub fn decode_stored<T: DeserializeOwned>(raw: Option<&str>) -> anyhow::Result<Option<T>> {
    match raw {
        None | Some("") => Ok(None),
        Some(raw) => serde_json::from_str(raw)
            .map(Some)
            .context("stored value does not match the expected shape"),
    }
}

pub fn encode_stored<T: Serialize>(value: &T) -> anyhow::Result<String> {
    serde_json::to_string(value).context("value cannot be serialized")
}

fn storage() -> anyhow::Result<Storage> {
    web_sys::window()
        .context("no window")?
        .local_storage()
        .map_err(|_| anyhow!("localStorage access denied"))?
        .context("localStorage is unavailable")
}

fn read_item<T: DeserializeOwned>(key: &str) -> anyhow::Result<Option<T>> {
    let raw = storage()?
        .get_item(key)
        .map_err(|_| anyhow!("failed to read key '{}'", key))?;
    decode_stored(raw.as_deref()).with_context(|| format!("key '{}'", key))
}

fn write_item<T: Serialize>(key: &str, value: &T) -> anyhow::Result<()> {
    let encoded = encode_stored(value)?;
    storage()?
        .set_item(key, &encoded)
        .map_err(|_| anyhow!("failed to write key '{}'", key))
}

/// Signal pair whose value starts from `localStorage[key]` (or `initial`) and
/// is written back on every change.
pub fn use_local_storage<T>(key: &str, initial: T) -> (ReadSignal<T>, WriteSignal<T>)
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    let key = key.to_string();
    let stored = read_item::<T>(&key).unwrap_or_else(|err| {
        log::error!("localStorage read failed: {:#}", err);
        None
    });
    let (value, set_value) = signal(stored.unwrap_or(initial));

    Effect::new(move |_| {
        if let Err(err) = value.with(|v| write_item(&key, v)) {
            log::error!("localStorage write failed: {:#}", err);
        }
    });

    (value, set_value)
}
