//! Runtime settings for the engine.

use config::{Config as Cfg, File};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::EngineError;
use crate::models::{DocumentKind, TaxPolicy};

/// Engine settings, loadable from a `configuration` file and `APP__`-prefixed
/// environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Fixed tax rate applied to every purchase order line.
    #[serde(default = "default_purchase_order_tax_percent")]
    pub purchase_order_tax_percent: Decimal,

    /// Connection string for the Postgres-backed sequence store, if used.
    #[serde(default)]
    pub database_url: Option<String>,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_purchase_order_tax_percent() -> Decimal {
    Decimal::from(18)
}

fn default_max_connections() -> u32 {
    5
}

fn default_min_connections() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            purchase_order_tax_percent: default_purchase_order_tax_percent(),
            database_url: None,
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self, EngineError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()
            .map_err(|e| EngineError::Config(anyhow::Error::new(e)))?;

        config
            .try_deserialize()
            .map_err(|e| EngineError::Config(anyhow::Error::new(e)))
    }

    /// Tax policy for a document kind: purchase orders carry the configured
    /// fixed rate, quotes take free-entry tax per line.
    pub fn tax_policy(&self, kind: DocumentKind) -> TaxPolicy {
        match kind {
            DocumentKind::PurchaseOrder => TaxPolicy::Fixed(self.purchase_order_tax_percent),
            DocumentKind::Quote => TaxPolicy::PerLine,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn defaults_match_the_purchase_order_rate() {
        let settings = Settings::default();
        assert_eq!(settings.purchase_order_tax_percent, dec!(18));
        assert_eq!(
            settings.tax_policy(DocumentKind::PurchaseOrder),
            TaxPolicy::Fixed(dec!(18))
        );
        assert_eq!(settings.tax_policy(DocumentKind::Quote), TaxPolicy::PerLine);
    }
}
