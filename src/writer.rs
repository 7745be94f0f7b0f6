use chrono::Utc;
use tracing::info;

use crate::dynamodb::{DynamoDb, DynamoError};
use crate::record::{UserRecord, USERS_TABLE};

/// Writes the demo user into the `Users` table and returns what was written.
///
/// PutItem replaces an existing item with the same `UserId`, so running this again
/// overwrites the previous record instead of failing.
pub async fn write_demo_user(ddb: &DynamoDb) -> Result<UserRecord, DynamoError> {
    let record = UserRecord::demo(Utc::now());
    info!("Writing user '{}' to '{USERS_TABLE}'", record.user_id);
    ddb.put_item(USERS_TABLE, record.to_item()).await?;
    Ok(record)
}
