//! One-shot Neo4j reachability probe.

use crate::error::Result;
use neo4rs::{query, Graph};

/// Verify the Bolt endpoint answers a trivial query.
///
/// `Graph::new` connects lazily, so executing `RETURN 1` and draining a row
/// is what actually forces the handshake.
pub async fn ping(uri: &str, user: &str, password: &str) -> Result<()> {
    let graph = Graph::new(uri, user, password).await?;
    let mut rows = graph.execute(query("RETURN 1")).await?;
    let _ = rows.next().await?;
    Ok(())
}
