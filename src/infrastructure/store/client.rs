//! Store Client
//!
//! The four remote operations against the object collection endpoint.
//! Every operation is exactly one network round trip and returns an
//! explicit [`StoreResult`]; recovery policy (what to show, whether to
//! keep local state) is the controller's decision, not the client's.
//! There is no batching, no caching, no retry and no client-imposed
//! timeout; requests are bounded only by the transport defaults.

use crate::domain::Task;
use crate::error::{StoreError, StoreResult};
use crate::infrastructure::store::object::{tasks_from_objects, ObjectPayload, StoredObject};
use serde::de::DeserializeOwned;

/// The task persistence seam.
///
/// [`RemoteStore`] is the production implementation; tests drive the
/// controller with an in-memory fake.
#[allow(async_fn_in_trait)]
pub trait TaskStore {
    /// Retrieve all of this application's tasks, in store order.
    async fn fetch_all(&self) -> StoreResult<Vec<Task>>;

    /// Create a new, not-yet-completed task. The store assigns the id.
    async fn create(&self, name: &str) -> StoreResult<Task>;

    /// Full-replacement update of a task's name and completed flag.
    ///
    /// Both fields are resent on every call; the caller must supply the
    /// unchanged one explicitly to avoid clobbering it.
    async fn update(&self, id: &str, name: &str, completed: bool) -> StoreResult<Task>;

    /// Delete the task with the given id. The response body is ignored.
    async fn remove(&self, id: &str) -> StoreResult<()>;
}

/// HTTP client for the shared object-storage REST API.
#[derive(Debug, Clone)]
pub struct RemoteStore {
    http: reqwest::Client,
    base_url: String,
    owner: String,
}

impl RemoteStore {
    /// Create a client for the collection at `base_url`, scoped to the
    /// given owner tag.
    pub fn new(base_url: impl Into<String>, owner: impl Into<String>) -> StoreResult<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            owner: owner.into(),
        })
    }

    /// The owner tag used to scope visibility in the shared collection.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    fn object_url(&self, id: &str) -> String {
        format!("{}/{id}", self.base_url)
    }

    /// Check the status and decode the body, mapping failures onto the
    /// store error taxonomy.
    async fn parse<T: DeserializeOwned>(
        operation: &'static str,
        response: reqwest::Response,
    ) -> StoreResult<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                operation,
                status: status.as_u16(),
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| StoreError::Parse {
            operation,
            reason: e.to_string(),
        })
    }
}

impl TaskStore for RemoteStore {
    async fn fetch_all(&self) -> StoreResult<Vec<Task>> {
        tracing::debug!(url = %self.base_url, "Fetching task list");
        let response = self.http.get(&self.base_url).send().await?;
        let objects: Vec<StoredObject> = Self::parse("list", response).await?;
        let tasks = tasks_from_objects(objects, &self.owner);
        tracing::debug!(count = tasks.len(), "Task list fetched");
        Ok(tasks)
    }

    async fn create(&self, name: &str) -> StoreResult<Task> {
        tracing::debug!(name, "Creating task");
        let payload = ObjectPayload::new(name, false, &self.owner);
        let response = self.http.post(&self.base_url).json(&payload).send().await?;
        let object: StoredObject = Self::parse("create", response).await?;
        Ok(object.into_task())
    }

    async fn update(&self, id: &str, name: &str, completed: bool) -> StoreResult<Task> {
        tracing::debug!(id, name, completed, "Updating task");
        let payload = ObjectPayload::new(name, completed, &self.owner);
        let response = self
            .http
            .put(self.object_url(id))
            .json(&payload)
            .send()
            .await?;
        let object: StoredObject = Self::parse("update", response).await?;
        Ok(object.into_task())
    }

    async fn remove(&self, id: &str) -> StoreResult<()> {
        tracing::debug!(id, "Deleting task");
        let response = self.http.delete(self.object_url(id)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                operation: "delete",
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}
