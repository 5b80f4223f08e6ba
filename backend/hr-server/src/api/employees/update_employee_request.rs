use serde::Deserialize;

/// Partial update with explicit presence: an absent field leaves the stored
/// value unchanged, while a present falsy value (salary 0, empty string) is
/// still applied.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    /// Updates the linked user, not the employee row.
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub marital_status: Option<String>,

    #[serde(default)]
    pub designation: Option<String>,

    /// Department id as string.
    #[serde(default)]
    pub department: Option<String>,

    #[serde(default)]
    pub salary: Option<f64>,
}
