//! `use_fetch`: the fetch → store → report → clear-loading cycle every list
//! screen needs, written once.

use crate::shared::api_utils::ApiError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

pub struct Fetched<T: Send + Sync + 'static> {
    pub data: RwSignal<Option<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    refetch: Callback<()>,
}

impl<T: Send + Sync + 'static> Clone for Fetched<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Fetched<T> {}

impl<T: Send + Sync + 'static> Fetched<T> {
    pub fn refetch(&self) {
        self.refetch.run(());
    }

    pub fn refetch_callback(&self) -> Callback<()> {
        self.refetch
    }
}

impl<T: Clone + Default + Send + Sync + 'static> Fetched<T> {
    /// Loaded value, or the empty default before the first response.
    pub fn data_or_default(&self) -> Signal<T> {
        let data = self.data;
        Signal::derive(move || data.get().unwrap_or_default())
    }
}

/// Starts `fetcher` immediately and again on every `refetch`.
pub fn use_fetch<T, F, Fut>(fetcher: F) -> Fetched<T>
where
    T: Send + Sync + 'static,
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let data = RwSignal::new(None::<T>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let refetch = Callback::new(move |_: ()| {
        let request = fetcher();
        loading.set(true);
        spawn_local(async move {
            // Requests are not cancelled on unmount, so the signals may be gone.
            match request.await {
                Ok(value) => {
                    let _ = data.try_set(Some(value));
                    let _ = error.try_set(None);
                }
                Err(e) => {
                    log::error!("Fetch failed: {}", e);
                    let _ = error.try_set(Some(e.to_string()));
                }
            }
            let _ = loading.try_set(false);
        });
    });
    refetch.run(());

    Fetched {
        data,
        loading,
        error,
        refetch,
    }
}
