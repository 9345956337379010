pub mod neo4j;
pub mod postgres;

use crate::config::Settings;
use crate::error::Result;

/// Probe both backing services for reachability.
///
/// A single best-effort attempt per service, in order: no retry, no backoff.
/// The first failure is returned and ends the launch.
pub async fn check_services(settings: &Settings) -> Result<()> {
    log::info!("Checking service connectivity...");

    postgres::ping(&settings.database_url).await?;
    log::info!("✓ PostgreSQL connection successful");

    neo4j::ping(
        &settings.neo4j_uri,
        &settings.neo4j_user,
        &settings.neo4j_password,
    )
    .await?;
    log::info!("✓ Neo4j connection successful");

    Ok(())
}
