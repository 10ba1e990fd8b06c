use super::repository::CostAnalysisRepository;
use super::utils::{validate_site_form, FieldErrors};
use crate::api::{ApiClient, ApiError, CostAnalysisRequest};
use leptos::*;
use serde_json::Value;
use std::rc::Rc;

/// Which of the two views the page renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Input,
    Analysis,
}

#[derive(Clone, Copy)]
pub struct SolarInputFormState {
    pub latitude: RwSignal<String>,
    pub longitude: RwSignal<String>,
    pub energy_consumption: RwSignal<String>,
}

impl SolarInputFormState {
    fn new() -> Self {
        Self {
            latitude: create_rw_signal(String::new()),
            longitude: create_rw_signal(String::new()),
            energy_consumption: create_rw_signal(String::new()),
        }
    }

    pub fn snapshot(&self) -> CostAnalysisRequest {
        CostAnalysisRequest {
            latitude: self.latitude.get(),
            longitude: self.longitude.get(),
            energy_consumption: self.energy_consumption.get(),
        }
    }
}

#[derive(Clone)]
pub struct SolarInputViewModel {
    pub form: SolarInputFormState,
    pub errors: RwSignal<FieldErrors>,
    pub phase: RwSignal<Phase>,
    pub analysis: RwSignal<Option<Value>>,
    pub submit_action: Action<CostAnalysisRequest, Result<Value, ApiError>>,
}

pub fn use_solar_input_view_model() -> SolarInputViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = CostAnalysisRepository::new_with_client(Rc::new(api));

    let form = SolarInputFormState::new();
    let errors = create_rw_signal(FieldErrors::default());
    let phase = create_rw_signal(Phase::Input);
    let analysis = create_rw_signal(None::<Value>);

    let submit_action = create_action(move |request: &CostAnalysisRequest| {
        let repository = repository.clone();
        let request = request.clone();
        async move { repository.fetch_analysis(&request).await }
    });

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            apply_submit_result(result, analysis, phase);
        }
    });

    SolarInputViewModel {
        form,
        errors,
        phase,
        analysis,
        submit_action,
    }
}

impl SolarInputViewModel {
    pub fn submit(&self) {
        if self.submit_action.pending().get_untracked() {
            return;
        }
        let request = self.form.snapshot();
        let validation = validate_site_form(&request);
        if !validation.is_empty() {
            self.errors.set(validation);
            return;
        }
        self.errors.set(FieldErrors::default());
        self.submit_action.dispatch(request);
    }
}

// The summary view is shown on success AND on failure; a failed analysis
// request only costs the payload, never the navigation.
fn apply_submit_result(
    result: Result<Value, ApiError>,
    analysis: RwSignal<Option<Value>>,
    phase: RwSignal<Phase>,
) {
    match result {
        Ok(payload) => analysis.set(Some(payload)),
        Err(err) => {
            log::warn!("cost analysis request failed: {}", err);
            analysis.set(None);
        }
    }
    phase.set(Phase::Analysis);
}
