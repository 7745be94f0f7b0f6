//! # DynamoDB Module
//!
//! Client construction and item writes for Amazon DynamoDB or DynamoDB Local.
//!
//! ## Components
//!
//! - `DynamoDb`: the client wrapper and its factory.
//! - `LocalEndpoint`: endpoint resolver that pins the client to an emulator URI.
//! - `Item`: a DynamoDB item as attribute names mapped to values.
//! - `DynamoError` / `ConfigError`: construction and write failures.
//!
//! ## Usage
//!
//! Set `DYNAMODB_ENDPOINT` to target DynamoDB Local, e.g. `http://localhost:8000`.
//! Without it the client is built from the standard AWS environment:
//!
//! - `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY` (optionally `AWS_SESSION_TOKEN`),
//!   or a shared profile, or instance metadata.
//! - `AWS_REGION`, or a region from the profile.
//!
//! ## Example
//!
//! ```rust,no_run
//! use users_seed::config::Settings;
//! use users_seed::dynamodb::{DynamoDb, Item};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ddb = DynamoDb::connect(&Settings::from_env()).await?;
//!
//!     let item = Item::new()
//!         .set_string("UserId", "123")
//!         .set_string("DisplayName", "John Doe");
//!     ddb.put_item("Users", item).await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod endpoint;
mod error;
mod item;

pub use client::{DynamoDb, LOCAL_REGION};
pub use endpoint::LocalEndpoint;
pub use error::{ConfigError, DynamoError};
pub use item::Item;
