use crate::{
    adapter::ObjectStore,
    error::QueryError,
    types::{ObjectDataOptions, ObjectFilter, ObjectResponse, ObjectResponseQuery, ObjectsPage},
};
use async_trait::async_trait;
use jsonrpsee::{
    http_client::{HttpClient, HttpClientBuilder},
    proc_macros::rpc,
    types::ErrorObjectOwned,
};
use url::Url;

/// The slice of the Sui fullnode indexer API this client consumes.
#[rpc(client, namespace = "suix")]
pub trait IndexerApi {
    #[method(name = "getOwnedObjects")]
    async fn get_owned_objects(
        &self,
        address: String,
        query: ObjectResponseQuery,
        cursor: Option<String>,
        limit: Option<usize>,
    ) -> Result<ObjectsPage, ErrorObjectOwned>;
}

/// [`ObjectStore`] backed by a fullnode's JSON-RPC endpoint.
pub struct FullNode {
    client: HttpClient,
}

impl FullNode {
    pub fn new(url: Url) -> Result<Self, QueryError> {
        let client = HttpClientBuilder::default()
            .build(url)
            .map_err(|err| QueryError(err.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ObjectStore for FullNode {
    async fn owned_objects(
        &self,
        owner: &str,
        struct_type: &str,
    ) -> Result<Vec<ObjectResponse>, QueryError> {
        let query = ObjectResponseQuery {
            filter: Some(ObjectFilter::StructType(struct_type.to_string())),
            options: Some(ObjectDataOptions { show_content: true }),
        };
        let mut objects = Vec::new();
        let mut cursor = None;
        loop {
            let page = self
                .client
                .get_owned_objects(owner.to_string(), query.clone(), cursor.take(), None)
                .await
                .map_err(|err| QueryError(err.to_string()))?;
            objects.extend(page.data);
            if !page.has_next_page {
                return Ok(objects);
            }
            cursor = page.next_cursor;
        }
    }
}
