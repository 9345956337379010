//! One-shot PostgreSQL reachability probe.

use crate::error::Result;
use sqlx::{Connection, PgConnection};

/// Open a single connection, run a trivial query, and close it.
///
/// Confirms reachability only; no session outlives the call. The driver
/// error is preserved so a bad URL reads differently from a dead server.
pub async fn ping(database_url: &str) -> Result<()> {
    let mut conn = PgConnection::connect(database_url).await?;
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&mut conn)
        .await?;
    conn.close().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LaunchError;

    #[tokio::test]
    async fn test_ping_rejects_malformed_url() {
        let result = ping("not-a-database-url").await;
        assert!(matches!(result, Err(LaunchError::Postgres(_))));
    }
}
