//! Document delivery seam
//!
//! This module defines the `DocumentSink` trait that upload workers send
//! documents through, and the HTTP implementation used in production. The
//! trait seam is what allows tests to substitute recording or fault-injecting
//! sinks without any network involvement.

use crate::types::{ExportError, ItemDocument};
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// Destination for transformed documents
///
/// Implementations must be safe to share across workers; each worker calls
/// `send` strictly sequentially for its own partition, but many workers call
/// concurrently.
#[async_trait]
pub trait DocumentSink: Send + Sync {
    /// Deliver one document
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the document was handed to the destination
    /// * `Err(ExportError)` if the send failed; the caller records the
    ///   failure and continues with the next document
    async fn send(&self, document: &ItemDocument) -> Result<(), ExportError>;
}

/// HTTP sink: one POST per document to a fixed endpoint
///
/// The request body is the JSON-serialized document. The response is
/// discarded without inspecting the status code or body, and no timeout is
/// configured beyond the client's defaults.
#[derive(Debug, Clone)]
pub struct HttpSink {
    client: Client,
    url: Url,
}

impl HttpSink {
    /// Create a new HttpSink targeting the given endpoint
    pub fn new(url: Url) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }

    /// The endpoint this sink posts to
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl DocumentSink for HttpSink {
    async fn send(&self, document: &ItemDocument) -> Result<(), ExportError> {
        // The response is dropped unread; delivery is fire-and-forget.
        self.client
            .post(self.url.clone())
            .json(document)
            .send()
            .await?;

        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DocumentMeta;

    fn sample_document(mid: i64) -> ItemDocument {
        ItemDocument::new(
            "dummy#1".to_string(),
            format!("ITM{}", mid),
            mid,
            "Widget".to_string(),
            DocumentMeta::Thumbnail {
                thumbnail: "t.png".to_string(),
            },
        )
    }

    #[test]
    fn test_http_sink_keeps_configured_url() {
        let url = Url::parse("https://robin-api.oneprice.co.kr/items").unwrap();
        let sink = HttpSink::new(url.clone());
        assert_eq!(sink.url(), &url);
    }

    #[tokio::test]
    async fn test_recording_sink_preserves_order() {
        let sink = fakes::RecordingSink::new();
        for mid in [3, 1, 2] {
            sink.send(&sample_document(mid)).await.unwrap();
        }
        assert_eq!(sink.sent(), vec![3, 1, 2]);
    }

    #[tokio::test]
    async fn test_failing_sink_fails_only_chosen_mids() {
        let sink = fakes::FailingSink::new(vec![2]);

        assert!(sink.send(&sample_document(1)).await.is_ok());
        assert!(sink.send(&sample_document(2)).await.is_err());
        assert!(sink.send(&sample_document(3)).await.is_ok());
        assert_eq!(sink.sent(), vec![1, 3]);
    }
}
