use aws_config::{Region, SdkConfig};
use aws_sdk_dynamodb::{
    config::{Credentials, ProvideCredentials},
    Client,
};
use tracing::{error, info};

use crate::config::Settings;
use crate::dynamodb::{ConfigError, DynamoError, Item, LocalEndpoint};

/// Region used for DynamoDB Local. The emulator accepts any region.
pub const LOCAL_REGION: &str = "ap-northeast-1";

const LOCAL_ACCESS_KEY_ID: &str = "dummy";
const LOCAL_SECRET_ACCESS_KEY: &str = "dummy";
const LOCAL_CREDENTIALS_PROVIDER: &str = "LocalDynamoDB";

/// DynamoDB client wrapper.
///
/// Built through [`DynamoDb::connect`], which picks one of two construction paths:
///
/// - **Local**: an endpoint override is set. The client talks to that URI only, in a
///   fixed region, with placeholder credentials that DynamoDB Local accepts without
///   checking. These credentials are never used without the override.
/// - **Ambient**: no override. Region and credentials come from the standard AWS
///   discovery chain (environment, shared config files, instance metadata) and requests
///   go to the regional DynamoDB endpoint.
///
/// Construction makes no DynamoDB request; the first call that reaches the service is
/// [`DynamoDb::put_item`].
#[derive(Debug, Clone)]
pub struct DynamoDb {
    client: Client,
    endpoint: Option<LocalEndpoint>,
}

impl DynamoDb {
    /// Builds a client for the given settings.
    pub async fn connect(settings: &Settings) -> Result<Self, DynamoError> {
        match settings.endpoint.as_deref() {
            Some(endpoint) => Self::local(endpoint).await,
            None => Self::ambient().await,
        }
    }

    /// Builds a client bound to a local emulator at `endpoint`.
    ///
    /// The URI is validated before any AWS configuration is loaded.
    pub async fn local(endpoint: &str) -> Result<Self, DynamoError> {
        let endpoint = LocalEndpoint::parse(endpoint)?;

        let sdk_config = aws_config::from_env()
            .region(Region::new(LOCAL_REGION))
            .credentials_provider(Credentials::new(
                LOCAL_ACCESS_KEY_ID,
                LOCAL_SECRET_ACCESS_KEY,
                None,
                None,
                LOCAL_CREDENTIALS_PROVIDER,
            ))
            .load()
            .await;

        let config = aws_sdk_dynamodb::config::Builder::from(&sdk_config)
            .endpoint_resolver(endpoint.clone())
            .build();

        info!("Using local DynamoDB at {}", endpoint.url());
        Ok(Self {
            client: Client::from_conf(config),
            endpoint: Some(endpoint),
        })
    }

    /// Builds a client from the ambient AWS configuration.
    pub async fn ambient() -> Result<Self, DynamoError> {
        let sdk_config = aws_config::load_from_env().await;
        Self::from_ambient_config(&sdk_config).await
    }

    /// Builds a client from an already loaded configuration, requiring that it carries a
    /// region and a credentials provider that yields credentials.
    pub async fn from_ambient_config(sdk_config: &SdkConfig) -> Result<Self, DynamoError> {
        let region = sdk_config.region().ok_or(ConfigError::MissingRegion)?;

        let provider = sdk_config.credentials_provider().ok_or_else(|| {
            ConfigError::MissingCredentials("no credentials provider configured".into())
        })?;
        provider.provide_credentials().await.map_err(|e| {
            error!("Credential resolution failed: {e}");
            ConfigError::MissingCredentials(Box::new(e))
        })?;

        info!("Using AWS DynamoDB in region {region}");
        Ok(Self {
            client: Client::new(sdk_config),
            endpoint: None,
        })
    }

    /// The endpoint override, if this client targets a local emulator.
    pub fn endpoint(&self) -> Option<&LocalEndpoint> {
        self.endpoint.as_ref()
    }

    /// The underlying SDK client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Puts an item into a table, replacing any item with the same key.
    pub async fn put_item(&self, table_name: &str, item: Item) -> Result<(), DynamoError> {
        self.client
            .put_item()
            .table_name(table_name)
            .set_item(Some(item.attributes))
            .send()
            .await
            .map_err(|e| DynamoError::Write {
                table: table_name.to_string(),
                source: Box::new(e),
            })?;

        info!("Item added to '{table_name}'");
        Ok(())
    }
}
