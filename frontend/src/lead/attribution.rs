use serde::Serialize;

use crate::config;

/// Campaign tracking values forwarded with every lead.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Attribution {
    pub utm_source: Option<String>,
    pub utm_medium: Option<String>,
    pub utm_campaign: Option<String>,
    pub agent: Option<String>,
    pub assigned_user_id: Option<String>,
}

/// Query parameters a landing page cares about, as read from the address bar.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LandingQuery {
    pub utm_source: Option<String>,
    pub utm_medium: Option<String>,
    pub utm_campaign: Option<String>,
    pub agent: Option<String>,
    pub assigned_user: Option<String>,
    pub form: Option<String>,
    pub form_only: Option<String>,
}

impl LandingQuery {
    pub fn attribution(&self) -> Attribution {
        Attribution {
            utm_source: non_empty(&self.utm_source),
            utm_medium: non_empty(&self.utm_medium),
            utm_campaign: non_empty(&self.utm_campaign),
            agent: non_empty(&self.agent),
            assigned_user_id: non_empty(&self.assigned_user),
        }
    }

    pub fn form_only(&self) -> bool {
        self.form_only.as_deref() == Some("true")
    }

    pub fn form_id(&self) -> String {
        non_empty(&self.form).unwrap_or_else(|| config::DEFAULT_FORM_ID.to_string())
    }
}

impl Attribution {
    /// Pairs forwarded to the embedded evaluation form, in a stable order.
    pub fn campaign_params(&self) -> Vec<(&'static str, &str)> {
        [
            ("utm_source", &self.utm_source),
            ("utm_medium", &self.utm_medium),
            ("utm_campaign", &self.utm_campaign),
            ("agent", &self.agent),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|value| (key, value)))
        .collect()
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|value| !value.is_empty()).cloned()
}
