//! Seeds a demo user into the DynamoDB `Users` table, against DynamoDB Local or AWS.

pub mod config;
pub mod dynamodb;
pub mod logging;
pub mod record;
pub mod writer;
