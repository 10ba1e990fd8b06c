use leptos::*;

#[component]
pub fn FieldErrorMessage(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <p class="mt-1 text-sm text-status-error-text">
                {move || error.get().unwrap_or_default()}
            </p>
        </Show>
    }
}
