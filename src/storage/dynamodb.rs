//! DynamoDB implementation of OrderTable

use crate::config::StreamConfig;
use crate::core::{Attribute, OrderItem, OrderRecord, OrderTable, WriteError};
use async_trait::async_trait;
use aws_config::retry::RetryConfig;
use aws_sdk_dynamodb::Client as DynamoDBClient;
use aws_sdk_dynamodb::config::Region;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;

/// DynamoDB order table
///
/// The client is built once and reused for every write.
#[derive(Clone)]
pub struct DynamoDBOrderTable {
    client: DynamoDBClient,
    table_name: String,
}

impl DynamoDBOrderTable {
    pub fn new(client: DynamoDBClient, table_name: String) -> Self {
        Self { client, table_name }
    }

    /// Build the client from the configured profile and region
    ///
    /// Credentials come from the SDK's provider chain for that profile.
    /// SDK retries are disabled, each `put_order` is a single `PutItem`.
    pub async fn from_config(config: &StreamConfig) -> Self {
        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .profile_name(&config.profile)
            .region(Region::new(config.region.clone()))
            .retry_config(RetryConfig::disabled())
            .load()
            .await;

        Self::new(DynamoDBClient::new(&sdk_config), config.table_name.clone())
    }
}

fn to_attribute_value(attribute: Attribute) -> AttributeValue {
    match attribute {
        Attribute::S(s) => AttributeValue::S(s),
        Attribute::N(n) => AttributeValue::N(n),
    }
}

/// Map an item onto the SDK's attribute values
pub(crate) fn to_item(item: OrderItem) -> HashMap<String, AttributeValue> {
    item.into_iter()
        .map(|(name, value)| (name, to_attribute_value(value)))
        .collect()
}

#[async_trait]
impl OrderTable for DynamoDBOrderTable {
    async fn put_order(&self, record: &OrderRecord) -> Result<(), WriteError> {
        let item = to_item(record.attributes());

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| WriteError::new(&record.order_id, DisplayErrorContext(&e).to_string()))?;

        Ok(())
    }

    fn describe(&self) -> String {
        format!("dynamodb:{}", self.table_name)
    }
}
