use crate::api::uploads::MAX_IMAGE_BYTES;
use crate::api::{auth, dashboard, departments, employees, leaves, salaries, settings};
use crate::health;
use crate::state::AppState;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post, put},
};
use log::warn;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;

/// Multipart overhead on top of the image ceiling.
const UPLOAD_BODY_LIMIT: usize = MAX_IMAGE_BYTES + 1024 * 1024;

/// Build the application router with all endpoints
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let uploads_dir = state.uploads_dir.clone();

    Router::new()
        // Health check endpoint
        .route("/health", get(health::health_check))
        // API route groups
        .nest("/api/auth", auth_routes())
        .nest("/api/employee/", employee_routes())
        .nest("/api/department/", department_routes())
        .nest("/api/leave/", leave_routes())
        .nest("/api/salary", salary_routes())
        .nest("/api/setting", setting_routes())
        .nest("/api/dashboard", dashboard_routes())
        // Stored profile images
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        // Add shared state
        .with_state(state)
        // CORS middleware
        .layer(cors)
}

/// CORS layer from the configured origin list; an empty list allows any
/// origin.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::auth::login))
        .route("/verify", get(auth::auth::verify))
}

fn employee_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/add",
            post(employees::employees::add_employee)
                .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .route("/", get(employees::employees::list_employees))
        .route(
            "/department/{id}",
            get(employees::employees::list_employees_by_department),
        )
        .route(
            "/{id}",
            get(employees::employees::get_employee).put(employees::employees::update_employee),
        )
}

fn department_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(departments::departments::add_department))
        .route("/", get(departments::departments::list_departments))
        .route(
            "/{id}",
            get(departments::departments::get_department)
                .put(departments::departments::update_department)
                .delete(departments::departments::delete_department),
        )
}

fn leave_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(leaves::leaves::add_leave))
        .route("/", get(leaves::leaves::list_leaves))
        .route("/detail/{id}", get(leaves::leaves::leave_detail))
        .route(
            "/{id}",
            get(leaves::leaves::employee_leaves).put(leaves::leaves::update_leave_status),
        )
}

fn salary_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(salaries::salaries::add_salary))
        .route("/{id}", get(salaries::salaries::salary_history))
}

fn setting_routes() -> Router<AppState> {
    Router::new().route("/change-password", put(settings::settings::change_password))
}

fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/summary", get(dashboard::dashboard::dashboard_summary))
}
