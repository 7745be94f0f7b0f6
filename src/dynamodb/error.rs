use aws_sdk_dynamodb::{error::SdkError, operation::put_item::PutItemError};
use thiserror::Error;

/// Errors raised while building a client or writing an item.
#[derive(Debug, Error)]
pub enum DynamoError {
    /// The client could not be configured.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// DynamoDB rejected the PutItem request, or the request never reached it.
    #[error("failed to put item into '{table}'")]
    Write {
        table: String,
        #[source]
        source: Box<SdkError<PutItemError>>,
    },
}

/// Reasons the client factory refuses to produce a client.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid endpoint override '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("no AWS region resolved. Set AWS_REGION or configure a profile")]
    MissingRegion,

    #[error("no AWS credentials resolved")]
    MissingCredentials(#[source] Box<dyn std::error::Error + Send + Sync>),
}
