use leptos::*;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::SolarInputPanel;

#[component]
pub fn SolarInputPage() -> impl IntoView {
    view! { <SolarInputPanel /> }
}
