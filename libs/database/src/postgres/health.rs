use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};

use crate::common::error::{DatabaseError, DatabaseResult};

/// Verify the database connection is alive by issuing a trivial query
pub async fn check_health(db: &DatabaseConnection) -> DatabaseResult<()> {
    db.execute_raw(Statement::from_string(
        db.get_database_backend(),
        "SELECT 1",
    ))
    .await
    .map_err(|e| DatabaseError::HealthCheckFailed(e.to_string()))?;

    Ok(())
}
