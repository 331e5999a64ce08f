use leptos::*;

/// Single counter tile in a dashboard summary row.
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<usize>,
    #[prop(optional, into)] accent: Option<String>,
) -> impl IntoView {
    let accent = accent.unwrap_or_else(|| "text-fg".to_string());
    view! {
        <div class="bg-surface-elevated overflow-hidden shadow rounded-lg">
            <div class="px-4 py-5 sm:p-6">
                <dt class="text-sm font-medium text-fg-muted">{label}</dt>
                <dd class=format!("mt-1 text-3xl font-semibold {}", accent)>{move || value.get()}</dd>
            </div>
        </div>
    }
}
