//! Weather service with a single-slot report cache

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use tokio::sync::Mutex;

use shared::models::{ForecastResponse, WeatherReport, WeatherSeed};

/// Number of forecast days returned when the caller does not ask for more
pub const DEFAULT_FORECAST_DAYS: usize = 5;

/// How long a fetched report stays valid
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60 * 60);

const CURRENT_DELAY: Duration = Duration::from_millis(400);
const FORECAST_DELAY: Duration = Duration::from_millis(300);

/// Weather reports built from seed data, cached in a single slot
#[derive(Clone)]
pub struct WeatherService {
    seed: Arc<WeatherSeed>,
    cache: Arc<Mutex<Option<CachedReport>>>,
    ttl: Duration,
    simulate_latency: bool,
}

struct CachedReport {
    fetched_at: Instant,
    report: WeatherReport,
}

impl WeatherService {
    pub fn new(seed: WeatherSeed, simulate_latency: bool) -> Self {
        Self::with_ttl(seed, DEFAULT_CACHE_TTL, simulate_latency)
    }

    pub fn with_ttl(seed: WeatherSeed, ttl: Duration, simulate_latency: bool) -> Self {
        Self {
            seed: Arc::new(seed),
            cache: Arc::new(Mutex::new(None)),
            ttl,
            simulate_latency,
        }
    }

    async fn simulate(&self, delay: Duration) {
        if self.simulate_latency {
            tokio::time::sleep(delay).await;
        }
    }

    /// Current conditions plus forecast.
    ///
    /// A report fetched less than the TTL ago comes back unchanged,
    /// `last_updated` included. The cache slot is keyed by time alone, not
    /// by `location`: a different location requested inside the window gets
    /// the cached report for the previous one.
    pub async fn current(&self, location: &str) -> WeatherReport {
        self.simulate(CURRENT_DELAY).await;

        let mut cache = self.cache.lock().await;
        if let Some(cached) = cache.as_ref() {
            if cached.fetched_at.elapsed() < self.ttl {
                return cached.report.clone();
            }
        }

        let report = WeatherReport {
            location: location.to_string(),
            current: self.seed.current.clone(),
            forecast: self.seed.forecast.clone(),
            last_updated: Utc::now(),
        };
        *cache = Some(CachedReport {
            fetched_at: Instant::now(),
            report: report.clone(),
        });
        report
    }

    /// The first `days` entries of the seed forecast. Reads past the cache;
    /// the result never depends on what `current` has stored.
    pub async fn forecast(&self, location: &str, days: usize) -> ForecastResponse {
        self.simulate(FORECAST_DELAY).await;

        let take = days.min(self.seed.forecast.len());
        ForecastResponse {
            location: location.to_string(),
            forecast: self.seed.forecast[..take].to_vec(),
        }
    }
}
