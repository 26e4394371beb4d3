use async_trait::async_trait;
use reqwest::Client;
use shared::{
    error::{ApiError, ErrorCode},
    protocol::{GenerationRequest, GenerationResult, ShipGenerationRequest},
};
use tracing::{debug, info, warn};
use url::Url;

pub mod error;
pub mod export;
pub mod session;

pub use error::GenerateError;
pub use export::format_clipboard_text;
pub use session::GenerationSession;

const GENERATE_PATH: &str = "api/generate/";
const GENERATE_SHIP_PATH: &str = "api/generate-ship/";

pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate headcanons";
pub const NETWORK_FAILURE_MESSAGE: &str = "Network error. Please try again.";

#[derive(Debug, Clone)]
pub struct Endpoints {
    pub generate: Url,
    pub generate_ship: Url,
}

impl Endpoints {
    pub fn from_server_url(server_url: &str) -> Result<Self, GenerateError> {
        let invalid = |source| GenerateError::InvalidBaseUrl {
            url: server_url.to_string(),
            source,
        };
        let mut base = Url::parse(server_url.trim()).map_err(invalid)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            generate: base.join(GENERATE_PATH).map_err(invalid)?,
            generate_ship: base.join(GENERATE_SHIP_PATH).map_err(invalid)?,
        })
    }
}

/// Raw reply of a generation endpoint together with its HTTP status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReply {
    pub status: u16,
    pub result: GenerationResult,
}

impl GenerationReply {
    pub fn api_error(&self) -> Option<ApiError> {
        if self.result.success {
            return None;
        }
        let message = self
            .result
            .error
            .as_deref()
            .map(str::trim)
            .filter(|message| !message.is_empty())
            .unwrap_or(GENERIC_FAILURE_MESSAGE);
        Some(
            ApiError::new(ErrorCode::from_status(self.status), message)
                .with_retry_after(self.result.retry_after),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Generated {
        character: String,
        headcanons: Vec<String>,
    },
    Rejected(ApiError),
    TransportFailed(String),
}

impl GenerationOutcome {
    pub fn resolve(
        request: &GenerationRequest,
        reply: Result<GenerationReply, GenerateError>,
    ) -> Self {
        let reply = match reply {
            Ok(reply) => reply,
            Err(err) => return Self::TransportFailed(err.to_string()),
        };

        if let Some(api_error) = reply.api_error() {
            return Self::Rejected(api_error);
        }

        match reply.result.headcanons {
            Some(headcanons) => Self::Generated {
                character: reply
                    .result
                    .character
                    .filter(|character| !character.is_empty())
                    .unwrap_or_else(|| request.character.clone()),
                headcanons,
            },
            None => Self::TransportFailed(format!(
                "HTTP {} success response is missing headcanons",
                reply.status
            )),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Generated { .. })
    }

    /// Text shown in place of results when the attempt failed.
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Generated { .. } => None,
            Self::Rejected(err) => Some(&err.message),
            Self::TransportFailed(_) => Some(NETWORK_FAILURE_MESSAGE),
        }
    }
}

#[async_trait]
pub trait GenerationService: Send + Sync {
    async fn generate(&self, request: &GenerationRequest)
        -> Result<GenerationReply, GenerateError>;
}

pub struct GenerationClient {
    http: Client,
    endpoints: Endpoints,
}

impl GenerationClient {
    pub fn new(server_url: &str) -> Result<Self, GenerateError> {
        Ok(Self {
            http: Client::new(),
            endpoints: Endpoints::from_server_url(server_url)?,
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub async fn generate_ship(
        &self,
        request: &ShipGenerationRequest,
    ) -> Result<GenerationReply, GenerateError> {
        info!(
            character1 = %request.character1,
            character2 = %request.character2,
            tone = %request.tone,
            "requesting ship headcanons"
        );
        self.post_json(&self.endpoints.generate_ship, request).await
    }

    async fn post_json<T: serde::Serialize + ?Sized>(
        &self,
        endpoint: &Url,
        body: &T,
    ) -> Result<GenerationReply, GenerateError> {
        let response = self
            .http
            .post(endpoint.clone())
            .json(body)
            .send()
            .await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        let result = serde_json::from_slice::<GenerationResult>(&bytes)
            .map_err(|source| GenerateError::MalformedResponse { status, source })?;
        if !result.success {
            warn!(
                status,
                retry_after = ?result.retry_after,
                "generation endpoint reported failure: {}",
                result.error.as_deref().unwrap_or("<no message>")
            );
        }
        debug!(status, endpoint = %endpoint, "generation endpoint replied");
        Ok(GenerationReply { status, result })
    }
}

#[async_trait]
impl GenerationService for GenerationClient {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationReply, GenerateError> {
        info!(
            character = %request.character,
            fandom = %request.fandom,
            tone = %request.tone,
            "requesting headcanons"
        );
        self.post_json(&self.endpoints.generate, request).await
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
