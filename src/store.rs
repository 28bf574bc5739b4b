use redis::AsyncCommands;
use redis::aio::MultiplexedConnection;

use crate::error::BenchError;

/// The operations the benchmark drives against the store under test.
///
/// The runner only sees this trait, so tests run against an in-memory fake
/// instead of a live store.
#[allow(async_fn_in_trait)]
pub trait StoreClient {
    async fn set(&mut self, key: &str, value: &str) -> Result<bool, BenchError>;
    async fn get(&mut self, key: &str) -> Result<Option<String>, BenchError>;
    async fn delete(&mut self, key: &str) -> Result<usize, BenchError>;
}

impl<T: StoreClient> StoreClient for &mut T {
    async fn set(&mut self, key: &str, value: &str) -> Result<bool, BenchError> {
        (**self).set(key, value).await
    }

    async fn get(&mut self, key: &str) -> Result<Option<String>, BenchError> {
        (**self).get(key).await
    }

    async fn delete(&mut self, key: &str) -> Result<usize, BenchError> {
        (**self).delete(key).await
    }
}

/// Store client backed by a single multiplexed Redis connection.
pub struct RedisStore {
    connection: MultiplexedConnection,
}

impl RedisStore {
    /// Connects to the store and selects the given logical database index.
    pub async fn connect(host: &str, port: u16, db: i64) -> Result<Self, BenchError> {
        let url = format!("redis://{host}:{port}/{db}");
        let client = redis::Client::open(url.as_str())?;
        let connection = client.get_multiplexed_async_connection().await?;
        Ok(Self { connection })
    }
}

impl StoreClient for RedisStore {
    async fn set(&mut self, key: &str, value: &str) -> Result<bool, BenchError> {
        let stored: bool = self.connection.set(key, value).await?;
        Ok(stored)
    }

    async fn get(&mut self, key: &str) -> Result<Option<String>, BenchError> {
        let value: Option<String> = self.connection.get(key).await?;
        Ok(value)
    }

    async fn delete(&mut self, key: &str) -> Result<usize, BenchError> {
        let removed: usize = self.connection.del(key).await?;
        Ok(removed)
    }
}
