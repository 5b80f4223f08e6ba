use serde::Serialize;

/// Redacted view returned on creation: identifiers only, never the hash.
#[derive(Debug, Serialize)]
pub struct NewEmployeeDto {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct CreateEmployeeResponse {
    pub success: bool,
    pub message: String,
    pub employee: NewEmployeeDto,
}
