//! Runs the relay against newline-delimited JSON submissions on stdin.
//!
//! Usage:
//!
//! ```text
//! DATABASE_URL=postgres://... POSTRELAY_DEST_CHANNEL_ID=-100123 postrelay < submissions.jsonl
//! ```
//!
//! Each line must be a serialized `Submission`, for example:
//!
//! ```json
//! {"message_id": 7, "chat_id": 42, "sender": {"uid": 42, "handle": "alice"},
//!  "kind": "link", "url": "https://example.com"}
//! ```
//!
//! The example is wrapped; on stdin each submission occupies one line.
//!
//! Forwards and replies are written to the log through `LoggingChannel`.
//! Forwarded copies are numbered from the start-up time in milliseconds, so a
//! restarted relay does not reuse post identifiers.

use chrono::Utc;
use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use postrelay::config::RelayConfig;
use postrelay::post::adapters::postgres::PostgresPostStore;
use postrelay::relay::{adapters::LoggingChannel, domain::Submission, services::RelayService};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    postrelay::telemetry::init_tracing()?;
    let config = RelayConfig::from_env()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        destination = config.destination().chat_id(),
        pool_size = config.pool_size(),
        "starting postrelay"
    );

    let manager = ConnectionManager::<PgConnection>::new(config.database_url());
    let pool = Pool::builder().max_size(config.pool_size()).build(manager)?;
    let relay = RelayService::new(
        Arc::new(PostgresPostStore::new(pool)),
        Arc::new(LoggingChannel::starting_at(Utc::now().timestamp_millis())),
        config.destination().clone(),
    )
    .with_source(config.source());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<Submission>(&line) {
            Ok(submission) => {
                if let Err(err) = relay.handle(submission).await {
                    warn!(error = %err, "submission not relayed");
                }
            }
            Err(err) => warn!(error = %err, "skipping malformed submission"),
        }
    }

    info!("input closed, shutting down");
    Ok(())
}
