//! HTTP access to the central booking manager.

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client};
use shared::{domain::BookingId, protocol::CancelBookingResponse};
use url::Url;

use crate::{config::ClientSettings, error::ServiceError};

/// A response that made it back from the booking service, whatever its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelReply {
    pub status_code: u16,
    pub body: CancelBookingResponse,
}

impl CancelReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

#[async_trait]
pub trait BookingService: Send + Sync {
    async fn cancel_booking(&self, booking_id: &BookingId) -> Result<CancelReply, ServiceError>;
}

pub struct HttpBookingService {
    http: Client,
    base_url: Url,
}

impl HttpBookingService {
    pub fn new(settings: &ClientSettings) -> Result<Self, ServiceError> {
        let base_url = Url::parse(&settings.base_url)
            .map_err(|_| ServiceError::InvalidBaseUrl(settings.base_url.clone()))?;
        if base_url.cannot_be_a_base() {
            return Err(ServiceError::InvalidBaseUrl(settings.base_url.clone()));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = settings.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ServiceError::ClientBuild)?;

        Ok(Self { http, base_url })
    }

    /// `{base}/cancel_booking/{id}` with the id encoded as a single path segment.
    pub fn cancel_url(&self, booking_id: &BookingId) -> Result<Url, ServiceError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ServiceError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push("cancel_booking")
            .push(booking_id.as_str());
        Ok(url)
    }
}

#[async_trait]
impl BookingService for HttpBookingService {
    async fn cancel_booking(&self, booking_id: &BookingId) -> Result<CancelReply, ServiceError> {
        let url = self.cancel_url(booking_id)?;
        tracing::debug!(booking_id = %booking_id, %url, "sending cancellation request");

        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;
        let status_code = response.status().as_u16();
        let bytes = response.bytes().await?;
        let body: CancelBookingResponse = serde_json::from_slice(&bytes)?;

        Ok(CancelReply { status_code, body })
    }
}
