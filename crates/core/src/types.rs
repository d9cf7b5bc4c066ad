/// Artwork primary keys are PostgreSQL UUIDs assigned by the database.
pub type ArtworkId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
