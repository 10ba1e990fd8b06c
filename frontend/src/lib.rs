use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

mod api;
pub mod config;
mod pages;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod test_support;

use pages::solar_input::SolarInputPage;

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(api::ApiClient::new());
    view! {
        <Title text="Solar Planner"/>
        <Router>
            <Routes>
                <Route path="/" view=SolarInputPage/>
            </Routes>
        </Router>
    }
}

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}
