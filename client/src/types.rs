//! Wire types for the slice of the Sui fullnode JSON-RPC API this client
//! consumes. Field names follow the RPC's camelCase conventions; u64 values
//! arrive as JSON strings.

use serde::{Deserialize, Serialize};

/// Query half of `suix_getOwnedObjects`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectResponseQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<ObjectFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<ObjectDataOptions>,
}

#[derive(Debug, Clone, Serialize)]
pub enum ObjectFilter {
    StructType(String),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectDataOptions {
    pub show_content: bool,
}

/// One page of an owned-objects query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectsPage {
    pub data: Vec<ObjectResponse>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_next_page: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObjectResponse {
    #[serde(default)]
    pub data: Option<ObjectData>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectData {
    pub object_id: String,
    #[serde(default)]
    pub content: Option<ObjectContent>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectContent {
    pub data_type: String,
    #[serde(rename = "type")]
    pub type_: String,
    /// Raw move-object fields; parsed per object type by the caller.
    pub fields: serde_json::Value,
}
