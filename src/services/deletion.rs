use sqlx::{PgConnection, PgPool};

use crate::{
    db::{departments, employee_roles, employee_shifts, roles, shifts, UnitOfWork},
    AppError, AppResult,
};

pub const DEPARTMENT_IN_USE: &str =
    "Cannot delete department with active employees. Please reassign or archive employees first.";
pub const ROLE_IN_USE: &str =
    "Cannot delete role. It is assigned to employees. Please remove role assignments first.";
pub const SHIFT_IN_USE: &str =
    "Cannot delete shift. It is assigned to employees. Please reassign employees first.";

/// Deletes a department unless active employees still belong to it.
///
/// The department row is locked before counting, so no employee can be moved
/// into it between the check and the delete. Archived employees keep their
/// history; their `department_id` is cleared by the foreign key.
pub async fn delete_department(pool: &PgPool, department_id: i32) -> AppResult<()> {
    let mut uow = UnitOfWork::begin(pool, "delete_department").await?;
    remove_department(uow.conn(), department_id).await?;
    uow.commit().await?;

    tracing::info!(department_id, "Department deleted");
    Ok(())
}

/// Checks and deletes inside the caller's transaction. The department row
/// stays locked until that transaction ends.
async fn remove_department(conn: &mut PgConnection, department_id: i32) -> AppResult<()> {
    if !departments::lock(&mut *conn, department_id).await? {
        return Err(AppError::NotFound("Department not found".to_string()));
    }

    let active = departments::count_active_employees(&mut *conn, department_id).await?;
    if active > 0 {
        tracing::warn!(department_id, active, "Blocked delete of staffed department");
        return Err(AppError::BadRequest(DEPARTMENT_IN_USE.to_string()));
    }

    departments::delete(conn, department_id).await?;
    Ok(())
}

pub async fn delete_role(pool: &PgPool, role_id: i32) -> AppResult<()> {
    let mut uow = UnitOfWork::begin(pool, "delete_role").await?;

    if !roles::lock(uow.conn(), role_id).await? {
        return Err(AppError::NotFound("Role not found".to_string()));
    }

    let assigned = employee_roles::count_for_role(uow.conn(), role_id).await?;
    if assigned > 0 {
        tracing::warn!(role_id, assigned, "Blocked delete of assigned role");
        return Err(AppError::BadRequest(ROLE_IN_USE.to_string()));
    }

    roles::delete(uow.conn(), role_id).await?;
    uow.commit().await?;

    tracing::info!(role_id, "Role deleted");
    Ok(())
}

pub async fn delete_shift(pool: &PgPool, shift_id: i32) -> AppResult<()> {
    let mut uow = UnitOfWork::begin(pool, "delete_shift").await?;

    if !shifts::lock(uow.conn(), shift_id).await? {
        return Err(AppError::NotFound("Shift not found".to_string()));
    }

    let assigned = employee_shifts::count_for_shift(uow.conn(), shift_id).await?;
    if assigned > 0 {
        tracing::warn!(shift_id, assigned, "Blocked delete of assigned shift");
        return Err(AppError::BadRequest(SHIFT_IN_USE.to_string()));
    }

    shifts::delete(uow.conn(), shift_id).await?;
    uow.commit().await?;

    tracing::info!(shift_id, "Shift deleted");
    Ok(())
}
