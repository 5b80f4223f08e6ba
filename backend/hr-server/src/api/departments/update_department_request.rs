use serde::Deserialize;

/// Partial update: an absent field leaves the stored value unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateDepartmentRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}
