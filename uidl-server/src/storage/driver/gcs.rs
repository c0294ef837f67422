use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder, StatusCode};

use crate::storage::paths::object_name;
use crate::storage::{Category, ObjectStore, StoreError, check_key};

/// Google Cloud Storage backend speaking the JSON API.
///
/// Objects are stored as `<category>/<key>.json` inside `bucket`. The
/// endpoint can point at an emulator such as fake-gcs-server. Credentials
/// are a pre-issued bearer token; obtaining and refreshing it is left to
/// the deployment.
pub struct GcsStorage {
    client: Client,
    endpoint: String,
    bucket: String,
    token: Option<String>,
}

impl GcsStorage {
    pub fn new(endpoint: &str, bucket: &str, token: Option<String>) -> Result<Self, StoreError> {
        let client = Client::builder()
            .user_agent(concat!("uidl-server/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(GcsStorage {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            bucket: bucket.to_string(),
            token,
        })
    }

    fn upload_url(&self) -> String {
        format!("{}/upload/storage/v1/b/{}/o", self.endpoint, self.bucket)
    }

    fn download_url(&self, object: &str) -> String {
        // Keys are restricted to [A-Za-z0-9._-], so the separator is the
        // only character that needs escaping.
        format!(
            "{}/storage/v1/b/{}/o/{}",
            self.endpoint,
            self.bucket,
            object.replace('/', "%2F")
        )
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

async fn unexpected(response: reqwest::Response) -> StoreError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    StoreError::UnexpectedStatus { status, body }
}

#[async_trait::async_trait]
impl ObjectStore for GcsStorage {
    async fn write(&self, content: &str, key: &str, category: Category) -> Result<(), StoreError> {
        check_key(key)?;
        let object = object_name(key, category);

        let response = self
            .authorized(self.client.post(self.upload_url()))
            .query(&[("uploadType", "media"), ("name", object.as_str())])
            .header(CONTENT_TYPE, "application/json")
            .body(content.to_string())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(unexpected(response).await);
        }
        tracing::debug!(bucket = %self.bucket, %object, "uploaded object");
        Ok(())
    }

    async fn read(&self, key: &str, category: Category) -> Result<Option<String>, StoreError> {
        check_key(key)?;
        let object = object_name(key, category);

        let response = self
            .authorized(self.client.get(self.download_url(&object)))
            .query(&[("alt", "media")])
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let content = response.text().await?;
                Ok(Some(content).filter(|content| !content.is_empty()))
            }
            _ => Err(unexpected(response).await),
        }
    }
}
