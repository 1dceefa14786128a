//! Asset domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::errors::ValidationError;
use crate::Error;

/// A tracked cryptocurrency.
///
/// `external_id` is the identifier the market data provider knows the asset
/// by (e.g. "bitcoin"). Assets are never deleted; only `icon_url` changes
/// after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub external_id: String,
    pub name: String,
    pub symbol: String,
    pub icon_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for creating a new asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAsset {
    pub external_id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub icon_url: Option<String>,
}

impl NewAsset {
    /// Validates the new asset data
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("externalId", &self.external_id),
            ("name", &self.name),
            ("symbol", &self.symbol),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(Error::Validation(ValidationError::MissingField(
                    field.to_string(),
                )));
            }
        }

        if self.external_id.trim().contains(',') {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "externalId cannot contain ','".to_string(),
            )));
        }

        Ok(())
    }

    /// Validates and returns the canonical form: trimmed fields, lower-case
    /// `external_id`, blank icon dropped.
    pub fn normalized(self) -> Result<Self> {
        self.validate()?;

        Ok(Self {
            external_id: self.external_id.trim().to_lowercase(),
            name: self.name.trim().to_string(),
            symbol: self.symbol.trim().to_string(),
            icon_url: self
                .icon_url
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty()),
        })
    }
}
