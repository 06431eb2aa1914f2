//! Client for the backend explore API.

use alloy_primitives::Address;
use tictactoe_core::protocol::{GameDetailsResponse, GameMetadata, details_path};

use crate::error::ClientError;
use crate::transport::HttpTransport;

pub struct ExploreApi<H> {
    http: H,
    base_url: String,
}

impl<H: HttpTransport> ExploreApi<H> {
    /// `base_url` is prepended to every path; pass `""` for same-origin.
    pub fn new(http: H, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn details_url(&self, chain_id: u64, game: &Address) -> String {
        format!("{}{}", self.base_url, details_path(chain_id, game))
    }

    /// Fetch the indexed metadata of one game.
    pub async fn fetch_game(
        &self,
        chain_id: u64,
        game: &Address,
    ) -> Result<GameMetadata, ClientError> {
        let url = self.details_url(chain_id, game);
        tracing::debug!(%url, "fetching game details");
        let body = self.http.get(&url).await?;
        let resp: GameDetailsResponse = serde_json::from_str(&body)?;
        Ok(resp.game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeHttp;
    use crate::transport::TransportError;

    #[test]
    fn fetches_and_parses() {
        let http = FakeHttp::ok(crate::testing::details_body());
        let api = ExploreApi::new(http.clone(), "https://api.example/");
        let game = Address::repeat_byte(0x11);

        let meta = tokio_test::block_on(api.fetch_game(5, &game)).unwrap();
        assert_eq!(meta.address, game);
        assert_eq!(
            http.requests(),
            vec![format!("https://api.example/api/explore/5/details/{}", game.to_checksum(None))]
        );
    }

    #[test]
    fn surfaces_http_failure_text() {
        let api = ExploreApi::new(FakeHttp::failing(TransportError::Status { status: 404 }), "");
        let err = tokio_test::block_on(api.fetch_game(1, &Address::ZERO)).unwrap_err();
        assert_eq!(err.to_string(), "Request failed with status code 404");
    }

    #[test]
    fn malformed_body_is_decode_error() {
        let api = ExploreApi::new(FakeHttp::ok("{\"nope\":1}"), "");
        let err = tokio_test::block_on(api.fetch_game(1, &Address::ZERO)).unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }
}
