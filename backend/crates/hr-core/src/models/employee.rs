//! Employee entity - HR attributes layered over a user.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// HR record for one person. `user_id` is a non-owning 1:1 reference to the
/// user created alongside it; `employee_id` is the externally assigned badge
/// code and carries no uniqueness guarantee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    pub user_id: Uuid,
    pub employee_id: String,
    pub dob: Option<NaiveDate>,
    pub gender: Option<String>,
    pub marital_status: Option<String>,
    pub designation: Option<String>,
    pub department_id: Option<Uuid>,
    pub salary: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    pub fn new(user_id: Uuid, employee_id: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            employee_id,
            dob: None,
            gender: None,
            marital_status: None,
            designation: None,
            department_id: None,
            salary: 0.0,
            created_at: now,
            updated_at: now,
        }
    }
}
