use std::sync::Arc;

use crate::error::CatalogResult;
use crate::fallback::FallbackData;
use crate::pg::PgStore;
use crate::rest::RestStore;
use crate::service::Catalog;
use crate::store::CatalogStore;

/// Which catalog store to use, resolved from the environment.
///
/// | Env Var             | Meaning                                   |
/// |---------------------|-------------------------------------------|
/// | `SUPABASE_URL`      | hosted REST endpoint (needs the key too)  |
/// | `SUPABASE_ANON_KEY` | access key sent with every REST request   |
/// | `DATABASE_URL`      | direct Postgres, used if REST is not set  |
///
/// Empty values count as unset. With nothing set the catalog runs
/// unconfigured and serves fallback data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    Rest { url: String, api_key: String },
    Postgres { database_url: String },
    Unconfigured,
}

impl StoreConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        match (var("SUPABASE_URL"), var("SUPABASE_ANON_KEY")) {
            (Some(url), Some(api_key)) => return Self::Rest { url, api_key },
            (Some(_), None) | (None, Some(_)) => {
                tracing::warn!("Only one of SUPABASE_URL / SUPABASE_ANON_KEY is set, ignoring both");
            }
            (None, None) => {}
        }

        match var("DATABASE_URL") {
            Some(database_url) => Self::Postgres { database_url },
            None => Self::Unconfigured,
        }
    }

    /// Backend name, safe to log (no credentials).
    pub fn backend(&self) -> &'static str {
        match self {
            Self::Rest { .. } => "rest",
            Self::Postgres { .. } => "postgres",
            Self::Unconfigured => "unconfigured",
        }
    }

    /// Connect the configured store, if any.
    pub async fn connect(&self) -> CatalogResult<Option<Arc<dyn CatalogStore>>> {
        let store: Arc<dyn CatalogStore> = match self {
            Self::Rest { url, api_key } => Arc::new(RestStore::new(url, api_key)?),
            Self::Postgres { database_url } => Arc::new(PgStore::connect(database_url).await?),
            Self::Unconfigured => return Ok(None),
        };
        Ok(Some(store))
    }

    /// Build a [`Catalog`], degrading to an unconfigured one if the store
    /// cannot be set up. Startup never fails on store problems.
    pub async fn build_catalog(&self, fallback: FallbackData) -> Catalog {
        match self.connect().await {
            Ok(Some(store)) => {
                tracing::info!(backend = store.backend(), "Catalog store connected");
                Catalog::new(Some(store), fallback)
            }
            Ok(None) => {
                tracing::warn!("No catalog store configured, serving fallback data");
                Catalog::unconfigured(fallback)
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to set up catalog store, serving fallback data");
                Catalog::unconfigured(fallback)
            }
        }
    }
}
