use nutripilot_core::domain::analysis::samples::SampleLabel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SampleView {
    pub id: String,
    pub name: String,
    pub text: String,
}

impl From<&SampleLabel> for SampleView {
    fn from(sample: &SampleLabel) -> Self {
        Self {
            id: sample.id.to_string(),
            name: sample.name.to_string(),
            text: sample.text.to_string(),
        }
    }
}
