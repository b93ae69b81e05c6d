mod cli_tests;
mod config_tests;
mod database_tests;

use std::time::Duration;

/// Waits long enough for the next time-ordered id to land in a later
/// millisecond bucket, keeping creation order observable.
pub async fn tick() {
    tokio::time::sleep(Duration::from_millis(2)).await;
}
