use crate::api::CostAnalysisRequest;
use leptos::*;
use serde_json::Value;

/// Summary view shown after submit. The analysis payload is carried along
/// for the upcoming comparison view; today only its absence is surfaced.
#[component]
pub fn CostAnalysisPanel(request: CostAnalysisRequest, analysis: Option<Value>) -> impl IntoView {
    let analysis_missing = analysis.is_none();

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                        "Solar System Summary"
                    </h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        "Site details used for the equipment estimate."
                    </p>
                </div>

                <dl class="rounded-md border border-border bg-surface-elevated p-6 space-y-4">
                    <div>
                        <dt class="text-sm font-medium text-fg-muted">"Location"</dt>
                        <dd class="text-lg font-semibold text-fg">
                            {format!("{}, {}", request.latitude, request.longitude)}
                        </dd>
                    </div>
                    <div>
                        <dt class="text-sm font-medium text-fg-muted">
                            "Tower Energy Consumption Per Day"
                        </dt>
                        <dd class="text-lg font-semibold text-fg">
                            {format!("{} kWh", request.energy_consumption)}
                        </dd>
                    </div>
                </dl>

                <Show when=move || analysis_missing fallback=|| ()>
                    <div class="rounded-md bg-status-warning-bg border border-status-warning-border p-4 text-sm text-status-warning-text">
                        "The cost analysis service did not return any data. The summary above reflects your inputs only."
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    fn request() -> CostAnalysisRequest {
        CostAnalysisRequest {
            latitude: "35.6".to_string(),
            longitude: "139.7".to_string(),
            energy_consumption: "42.5".to_string(),
        }
    }

    #[test]
    fn summary_shows_submitted_values() {
        let html = render_to_string(|| {
            view! { <CostAnalysisPanel request=request() analysis=Some(json!({}))/> }
        });
        assert!(html.contains("35.6, 139.7"));
        assert!(html.contains("42.5 kWh"));
        assert!(!html.contains("did not return any data"));
    }

    #[test]
    fn missing_payload_renders_unavailable_notice() {
        let html = render_to_string(|| {
            view! { <CostAnalysisPanel request=request() analysis=None/> }
        });
        assert!(html.contains("did not return any data"));
    }
}
