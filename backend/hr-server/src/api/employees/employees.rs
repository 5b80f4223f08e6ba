//! Employee registry REST API handlers.

use crate::api::employees::create_employee_request::CreateEmployeeRequest;
use crate::api::employees::create_employee_response::{CreateEmployeeResponse, NewEmployeeDto};
use crate::api::employees::employee_list_response::EmployeeListResponse;
use crate::api::employees::employee_response::EmployeeResponse;
use crate::api::employees::update_employee_request::UpdateEmployeeRequest;
use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::auth_user::AuthUser;
use crate::api::resolve::resolve_employee_profile;
use crate::api::uploads;
use crate::state::AppState;

use hr_core::{Employee, Role, User};
use hr_db::{DbError, EmployeeRepository, UserRepository};

use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
};
use chrono::{NaiveDate, Utc};
use hr_auth::hash_password;
use uuid::Uuid;

/// POST /api/employee/add
///
/// Multipart creation form with an optional `image` part. The sequence is:
/// upload validation, field validation, email uniqueness check, password
/// hash, then a single transaction inserting the user and the employee. A
/// stored image is deleted again if anything after it fails.
pub async fn add_employee(
    State(state): State<AppState>,
    multipart: Multipart,
) -> ApiResult<(StatusCode, Json<CreateEmployeeResponse>)> {
    let (request, image) = CreateEmployeeRequest::from_multipart(multipart).await?;

    // Upload validation first: a rejected file short-circuits before any
    // side effect, database or disk.
    let image = match image {
        Some(img) => Some((uploads::validate(&img)?, img)),
        None => None,
    };

    request.validate()?;

    let users = UserRepository::new(state.pool.clone());
    if users.find_by_email(&request.email).await?.is_some() {
        return Err(ApiError::conflict("User already registered"));
    }

    let dob = request
        .dob
        .as_deref()
        .map(str::parse::<NaiveDate>)
        .transpose()
        .map_err(|_| ApiError::validation("Invalid date of birth"))?;
    let department_id = request
        .department
        .as_deref()
        .map(Uuid::parse_str)
        .transpose()?;
    let salary = request
        .salary
        .as_deref()
        .map(str::parse::<f64>)
        .transpose()
        .map_err(|_| ApiError::validation("Invalid salary"))?;
    let role = match request.role.as_deref() {
        None => Role::Employee,
        Some(value) => value
            .parse()
            .map_err(|_| ApiError::validation("Invalid role"))?,
    };

    // Argon2 is CPU-bound; keep it off the request loop.
    let password = request.password.clone();
    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| ApiError::internal(format!("Hashing task failed: {}", e)))??;

    let stored = match &image {
        Some((extension, img)) => Some(uploads::store(&state.uploads_dir, img, extension).await?),
        None => None,
    };

    let user = User::new(request.name, request.email, password_hash, role)
        .with_profile_image(stored.as_ref().map(|s| s.public_path.clone()));

    let mut employee = Employee::new(user.id, request.employee_id);
    employee.dob = dob;
    employee.gender = request.gender;
    employee.marital_status = request.marital_status;
    employee.designation = request.designation;
    employee.department_id = department_id;
    employee.salary = salary.unwrap_or(0.0);

    if let Err(e) = persist_new_employee(&state, &user, &employee).await {
        if let Some(ref stored) = stored {
            uploads::remove(stored).await;
        }
        return Err(e);
    }

    Ok((
        StatusCode::CREATED,
        Json(CreateEmployeeResponse {
            success: true,
            message: "Employee created successfully".to_string(),
            employee: NewEmployeeDto {
                id: employee.id.to_string(),
                name: user.name,
                email: user.email,
            },
        }),
    ))
}

/// User and employee land together or not at all. The racing-duplicate case
/// surfaces here as a UNIQUE violation on users.email.
async fn persist_new_employee(
    state: &AppState,
    user: &User,
    employee: &Employee,
) -> ApiResult<()> {
    let mut tx = state.pool.begin().await.map_err(DbError::from)?;
    UserRepository::insert_tx(&mut tx, user).await?;
    EmployeeRepository::insert_tx(&mut tx, employee).await?;
    tx.commit().await.map_err(DbError::from)?;
    Ok(())
}

/// GET /api/employee/
pub async fn list_employees(
    State(state): State<AppState>,
    _user: AuthUser,
) -> ApiResult<Json<EmployeeListResponse>> {
    let profiles = EmployeeRepository::new(state.pool.clone())
        .list_profiles()
        .await?;

    Ok(Json(EmployeeListResponse {
        success: true,
        count: profiles.len(),
        employees: profiles.into_iter().map(Into::into).collect(),
    }))
}

/// GET /api/employee/{id}
///
/// The id is polymorphic: employee id first, then linked user id.
pub async fn get_employee(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<EmployeeResponse>> {
    let profile = resolve_employee_profile(&state.pool, &id).await?;

    Ok(Json(EmployeeResponse {
        success: true,
        employee: profile.into(),
    }))
}

/// PUT /api/employee/{id}
///
/// Partial update. `name` belongs to the linked user; everything else to the
/// employee row. Both writes share one transaction.
pub async fn update_employee(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<String>,
    Json(request): Json<UpdateEmployeeRequest>,
) -> ApiResult<Json<EmployeeResponse>> {
    let employee_id = Uuid::parse_str(&id)?;
    let employees = EmployeeRepository::new(state.pool.clone());
    let users = UserRepository::new(state.pool.clone());

    let mut employee = employees
        .find_by_id(employee_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Employee not found"))?;
    let user = users
        .find_by_id(employee.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    // Presence, not truthiness, decides what changes: salary 0 is an update.
    if let Some(marital_status) = request.marital_status {
        employee.marital_status = Some(marital_status);
    }
    if let Some(designation) = request.designation {
        employee.designation = Some(designation);
    }
    if let Some(department) = request.department {
        employee.department_id = Some(Uuid::parse_str(&department)?);
    }
    if let Some(salary) = request.salary {
        employee.salary = salary;
    }
    employee.updated_at = Utc::now();

    let mut tx = state.pool.begin().await.map_err(DbError::from)?;
    if let Some(ref name) = request.name {
        UserRepository::update_name_tx(&mut tx, user.id, name, employee.updated_at.timestamp())
            .await?;
    }
    EmployeeRepository::update_tx(&mut tx, &employee).await?;
    tx.commit().await.map_err(DbError::from)?;

    let profile = employees
        .profile_by_employee_id(employee.id)
        .await?
        .ok_or_else(|| ApiError::not_found("Employee not found"))?;

    Ok(Json(EmployeeResponse {
        success: true,
        employee: profile.into(),
    }))
}

/// GET /api/employee/department/{id}
pub async fn list_employees_by_department(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<EmployeeListResponse>> {
    let department_id = Uuid::parse_str(&id)?;

    let profiles = EmployeeRepository::new(state.pool.clone())
        .list_profiles_by_department(department_id)
        .await?;

    Ok(Json(EmployeeListResponse {
        success: true,
        count: profiles.len(),
        employees: profiles.into_iter().map(Into::into).collect(),
    }))
}
