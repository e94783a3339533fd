use rand::Rng;
use resilient_cache::CacheError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Payload cached by the benchmarks.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchUser {
    pub id: u64,
    pub name: String,
    pub email: String,
}

impl BenchUser {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            name: format!("User {}", id),
            email: format!("user{}@example.com", id),
        }
    }
}

/// Simulated origin with fixed latency.
#[derive(Clone)]
pub struct FakeDatabase {
    data: Arc<HashMap<String, BenchUser>>,
    latency: Duration,
}

impl FakeDatabase {
    pub fn new(num_users: usize, latency_ms: u64) -> Self {
        let data = (0..num_users)
            .map(|i| (format!("user:{}", i), BenchUser::new(i as u64)))
            .collect();

        Self {
            data: Arc::new(data),
            latency: Duration::from_millis(latency_ms),
        }
    }

    pub async fn load(&self, key: &str) -> Result<BenchUser, CacheError> {
        tokio::time::sleep(self.latency).await;
        self.data
            .get(key)
            .cloned()
            .ok_or_else(|| CacheError::Origin(format!("no user {}", key)))
    }
}

/// Generate keys for different workload patterns.
pub struct KeyGenerator {
    num_keys: usize,
}

impl KeyGenerator {
    pub fn new(num_keys: usize) -> Self {
        Self { num_keys }
    }

    pub fn sequential(&self) -> Vec<String> {
        (0..self.num_keys).map(|i| format!("user:{}", i)).collect()
    }

    /// `hit_ratio` of the keys come from the first fifth of the key space.
    pub fn mixed(&self, count: usize, hit_ratio: f64) -> Vec<String> {
        let mut rng = rand::thread_rng();
        let hot_key_count = (self.num_keys / 5).max(1);

        (0..count)
            .map(|_| {
                if rng.gen_bool(hit_ratio) {
                    format!("user:{}", rng.gen_range(0..hot_key_count))
                } else {
                    format!("user:{}", rng.gen_range(hot_key_count..self.num_keys))
                }
            })
            .collect()
    }
}
