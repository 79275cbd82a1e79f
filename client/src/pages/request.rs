//! Browser-side request driver shared by the list pages.

use std::future::Future;

use crate::net::api::ApiError;

/// Await `request` on the browser event loop and pass the outcome to
/// `apply`, with errors already reduced to banner text.
///
/// No-op during server rendering; lists are fetched after hydration.
pub(crate) fn spawn_request<V, F, A>(request: F, apply: A)
where
    V: 'static,
    F: Future<Output = Result<V, ApiError>> + 'static,
    A: FnOnce(Result<V, String>) + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = request.await.map_err(|e| {
            leptos::logging::warn!("api request failed: {e}");
            e.user_message()
        });
        apply(result);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (request, apply);
    }
}
