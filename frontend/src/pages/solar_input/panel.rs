use super::components::form::SolarInputForm;
use super::view_model::{use_solar_input_view_model, Phase};
use crate::pages::cost_analysis::CostAnalysisPanel;
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn SolarInputPanel() -> impl IntoView {
    let vm = use_solar_input_view_model();
    let form = vm.form;
    let errors = vm.errors;
    let phase = vm.phase;
    let analysis = vm.analysis;
    let pending = vm.submit_action.pending();

    let submit_vm = vm.clone();
    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        submit_vm.submit();
    });

    move || match phase.get() {
        Phase::Analysis => view! {
            <CostAnalysisPanel request=form.snapshot() analysis=analysis.get()/>
        }
        .into_view(),
        Phase::Input => view! {
            <SolarInputForm
                form=form
                errors=errors
                pending=pending
                on_submit=on_submit
            />
        }
        .into_view(),
    }
}
