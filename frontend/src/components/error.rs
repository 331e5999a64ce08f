use crate::api::ApiError;
use leptos::*;

/// Inline banner for a failed operation. `fallback` is shown when the error
/// carries nothing more specific.
#[component]
pub fn InlineErrorMessage(
    error: Signal<Option<ApiError>>,
    #[prop(optional, into)] fallback: Option<String>,
) -> impl IntoView {
    let fallback = store_value(fallback.unwrap_or_else(|| "Operation failed".to_string()));
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2" role="alert">
                <div class="font-bold">
                    {move || {
                        error
                            .get()
                            .map(|e| fallback.with_value(|text| e.describe(text)))
                            .unwrap_or_default()
                    }}
                </div>
                {move || error.get().and_then(|e| {
                    (!e.is_client_side()).then(|| view! {
                        <div class="text-xs opacity-75">{"Code: "}{e.code()}</div>
                    })
                })}
            </div>
        </Show>
    }
}
