use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("store error: {0}")]
    Store(#[from] redis::RedisError),

    #[error("set not acknowledged for key {key}")]
    SetRejected { key: String },

    #[error("key {key} missing on read back")]
    MissingKey { key: String },

    #[error("value mismatch for key {key}: expected {expected}, got {actual}")]
    ValueMismatch {
        key: String,
        expected: String,
        actual: String,
    },

    #[error("delete removed {removed} entries for key {key}, expected exactly 1")]
    DeleteMiscount { key: String, removed: usize },
}
