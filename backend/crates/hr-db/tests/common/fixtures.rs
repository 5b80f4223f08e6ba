use hr_core::{Department, Employee, Role, User};
use hr_db::{DepartmentRepository, EmployeeRepository, UserRepository};

use sqlx::SqlitePool;

/// Stored hash contents are irrelevant to repository tests.
pub const STUB_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c3R1YnNhbHQ$c3R1Ymhhc2g";

pub async fn seed_user(pool: &SqlitePool, name: &str, email: &str) -> User {
    let user = User::new(
        name.to_string(),
        email.to_string(),
        STUB_HASH.to_string(),
        Role::Employee,
    );

    UserRepository::new(pool.clone())
        .create(&user)
        .await
        .expect("Failed to seed user");

    user
}

pub async fn seed_department(pool: &SqlitePool, name: &str) -> Department {
    let department = Department::new(name.to_string(), None);

    DepartmentRepository::new(pool.clone())
        .create(&department)
        .await
        .expect("Failed to seed department");

    department
}

/// Creates a user and its employee row the way the registry does: both
/// inserts in one transaction.
pub async fn seed_employee(pool: &SqlitePool, name: &str, email: &str, badge: &str) -> Employee {
    let user = User::new(
        name.to_string(),
        email.to_string(),
        STUB_HASH.to_string(),
        Role::Employee,
    );
    let employee = Employee::new(user.id, badge.to_string());

    let mut tx = pool.begin().await.expect("Failed to begin transaction");
    UserRepository::insert_tx(&mut tx, &user)
        .await
        .expect("Failed to seed user");
    EmployeeRepository::insert_tx(&mut tx, &employee)
        .await
        .expect("Failed to seed employee");
    tx.commit().await.expect("Failed to commit seed");

    employee
}
