/// Product ids are PostgreSQL BIGSERIAL surrogate keys, never reassigned.
pub type DbId = i64;

/// `created_at` / `updated_at` are stored as TIMESTAMPTZ and read back in UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
