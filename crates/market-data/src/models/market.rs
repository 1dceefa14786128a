use serde::{Deserialize, Serialize};

/// Market metadata for one asset, as reported by a provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketInfo {
    /// Provider asset identifier (e.g., "bitcoin")
    pub external_id: String,

    /// URL of the asset's icon, when the provider has one
    pub icon_url: Option<String>,
}

impl MarketInfo {
    /// Returns the icon URL if it is present and non-blank.
    pub fn usable_icon_url(&self) -> Option<&str> {
        self.icon_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usable_icon_url() {
        let info = MarketInfo {
            external_id: "bitcoin".to_string(),
            icon_url: Some("https://assets.coingecko.com/bitcoin.png".to_string()),
        };
        assert_eq!(
            info.usable_icon_url(),
            Some("https://assets.coingecko.com/bitcoin.png")
        );

        let blank = MarketInfo {
            external_id: "bitcoin".to_string(),
            icon_url: Some("  ".to_string()),
        };
        assert_eq!(blank.usable_icon_url(), None);

        let missing = MarketInfo {
            external_id: "bitcoin".to_string(),
            icon_url: None,
        };
        assert_eq!(missing.usable_icon_url(), None);
    }
}
