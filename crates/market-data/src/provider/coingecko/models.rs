use serde::Deserialize;

/// One row of the `/coins/markets` listing. Only the fields we read are mapped.
#[derive(Debug, Deserialize)]
pub(super) struct CoinMarketDto {
    pub id: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Error body CoinGecko returns on some failures.
#[derive(Debug, Deserialize)]
pub(super) struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub status: Option<ErrorStatus>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ErrorStatus {
    #[serde(default)]
    pub error_message: Option<String>,
}

impl ErrorResponse {
    pub fn message(self) -> Option<String> {
        self.error
            .or_else(|| self.status.and_then(|status| status.error_message))
    }
}
