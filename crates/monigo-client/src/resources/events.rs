//! Event ingestion and replay endpoints.

use chrono::{DateTime, Utc};
use monigo_core::{EventReplayJob, IngestResponse, ReplayJobId};

use super::required;
use crate::client::MonigoClient;
use crate::error::ClientError;
use crate::transport::{ApiRequest, RequestOptions};
use crate::types::{IngestRequest, StartReplayRequest};

const INGEST_PATH: &str = "/v1/ingest";
const REPLAY_PATH: &str = "/v1/events/replay";

/// Send usage events and replay historical ones.
#[derive(Debug, Clone, Copy)]
pub struct Events<'a> {
    client: &'a MonigoClient,
}

impl<'a> Events<'a> {
    pub(crate) fn new(client: &'a MonigoClient) -> Self {
        Self { client }
    }

    /// Ingest a batch of usage events.
    ///
    /// Events are processed asynchronously; the response lists which
    /// idempotency keys were accepted and which were already known. Requires
    /// an API key with the `ingest` scope.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error;
    /// [`is_quota_exceeded`](crate::is_quota_exceeded) matches when the
    /// organisation's event quota is exhausted.
    pub async fn ingest(&self, request: &IngestRequest) -> Result<IngestResponse, ClientError> {
        self.ingest_with_options(request, RequestOptions::default())
            .await
    }

    /// [`ingest`](Self::ingest) with per-call overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn ingest_with_options(
        &self,
        request: &IngestRequest,
        options: RequestOptions,
    ) -> Result<IngestResponse, ClientError> {
        tracing::debug!(events = request.events.len(), "Ingesting usage events");
        let request = ApiRequest::post(INGEST_PATH)
            .json(request)?
            .with_options(options);
        required(self.client.execute(request).await?, INGEST_PATH)
    }

    /// Start replaying raw events in `[from, to]` through the current pipeline.
    ///
    /// Returns the job immediately; poll [`get_replay`](Self::get_replay) for
    /// progress. `event_name` limits the replay to one event type.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn start_replay(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        event_name: Option<&str>,
    ) -> Result<EventReplayJob, ClientError> {
        self.start_replay_with_options(from, to, event_name, RequestOptions::default())
            .await
    }

    /// [`start_replay`](Self::start_replay) with per-call overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn start_replay_with_options(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        event_name: Option<&str>,
        options: RequestOptions,
    ) -> Result<EventReplayJob, ClientError> {
        let body = StartReplayRequest {
            from,
            to,
            event_name: event_name.map(str::to_string),
        };
        let request = ApiRequest::post(REPLAY_PATH)
            .json(&body)?
            .with_options(options);
        self.client.execute_enveloped(request, "job").await
    }

    /// Fetch the current state of a replay job.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get_replay(&self, job_id: &ReplayJobId) -> Result<EventReplayJob, ClientError> {
        let path = format!("{REPLAY_PATH}/{}", job_id.path_segment()?);
        self.client
            .execute_enveloped(ApiRequest::get(path), "job")
            .await
    }
}
