use crate::api::CostAnalysisRequest;

/// One message per form field; empty means the form may be submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub energy_consumption: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.latitude.is_none() && self.longitude.is_none() && self.energy_consumption.is_none()
    }
}

pub fn validate_site_form(request: &CostAnalysisRequest) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if request.latitude.trim().is_empty() {
        errors.latitude = Some("Latitude is required".to_string());
    }
    if request.longitude.trim().is_empty() {
        errors.longitude = Some("Longitude is required".to_string());
    }
    if request.energy_consumption.trim().is_empty() {
        errors.energy_consumption = Some("Energy consumption is required".to_string());
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_request() -> CostAnalysisRequest {
        CostAnalysisRequest {
            latitude: "35.6".to_string(),
            longitude: "139.7".to_string(),
            energy_consumption: "42.5".to_string(),
        }
    }

    #[test]
    fn filled_form_passes_validation() {
        let errors = validate_site_form(&filled_request());
        assert!(errors.is_empty());
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = validate_site_form(&CostAnalysisRequest::default());
        assert_eq!(errors.latitude.as_deref(), Some("Latitude is required"));
        assert_eq!(errors.longitude.as_deref(), Some("Longitude is required"));
        assert_eq!(
            errors.energy_consumption.as_deref(),
            Some("Energy consumption is required")
        );
    }

    #[test]
    fn whitespace_only_fields_are_rejected() {
        let mut request = filled_request();
        request.energy_consumption = "   ".to_string();
        let errors = validate_site_form(&request);
        assert!(errors.latitude.is_none());
        assert!(errors.longitude.is_none());
        assert!(errors.energy_consumption.is_some());
    }
}
