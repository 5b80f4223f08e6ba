use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateDepartmentRequest {
    /// Department name (required)
    pub name: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
}
