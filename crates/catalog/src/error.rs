/// Failure talking to the catalog store.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// No store endpoint or credentials were configured.
    #[error("Catalog store is not configured")]
    Unconfigured,

    /// The slug cannot identify a game (empty or a template placeholder).
    #[error("Invalid slug: {0:?}")]
    InvalidSlug(String),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Applying migrations to a directly connected database failed.
    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// The REST store could not be reached or returned an undecodable body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The REST store answered with a non-success status.
    #[error("Store responded with {status}: {body}")]
    Status { status: u16, body: String },
}

pub type CatalogResult<T> = Result<T, CatalogError>;
