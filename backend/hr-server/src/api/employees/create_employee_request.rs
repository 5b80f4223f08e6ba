use crate::api::error::ApiError;
use crate::api::uploads::UploadedImage;

use axum::extract::Multipart;

/// Fields of the multipart creation form. Attribute values arrive as text
/// parts and stay raw strings here; the handler parses the typed ones.
#[derive(Debug, Default)]
pub struct CreateEmployeeRequest {
    pub name: String,
    pub email: String,
    pub employee_id: String,
    pub password: String,
    pub dob: Option<String>,
    pub gender: Option<String>,
    pub marital_status: Option<String>,
    pub designation: Option<String>,
    pub department: Option<String>,
    pub salary: Option<String>,
    pub role: Option<String>,
}

impl CreateEmployeeRequest {
    /// Drain a multipart form into the request fields plus the optional
    /// single image part named `image`.
    pub async fn from_multipart(
        mut multipart: Multipart,
    ) -> Result<(Self, Option<UploadedImage>), ApiError> {
        let mut request = Self::default();
        let mut image = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::validation(format!("Invalid multipart payload: {}", e)))?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            if name == "image" {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::validation(format!("Failed to read image: {}", e)))?;
                image = Some(UploadedImage {
                    file_name,
                    content_type,
                    bytes,
                });
                continue;
            }

            let value = field
                .text()
                .await
                .map_err(|e| ApiError::validation(format!("Invalid form field: {}", e)))?;

            match name.as_str() {
                "name" => request.name = value,
                "email" => request.email = value,
                "employeeId" => request.employee_id = value,
                "password" => request.password = value,
                "dob" => request.dob = non_empty(value),
                "gender" => request.gender = non_empty(value),
                "maritalStatus" => request.marital_status = non_empty(value),
                "designation" => request.designation = non_empty(value),
                "department" => request.department = non_empty(value),
                "salary" => request.salary = non_empty(value),
                "role" => request.role = non_empty(value),
                _ => {} // unknown parts are ignored
            }
        }

        Ok((request, image))
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.is_empty()
            || self.email.is_empty()
            || self.password.is_empty()
            || self.employee_id.is_empty()
        {
            return Err(ApiError::validation("Missing required fields"));
        }
        Ok(())
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
