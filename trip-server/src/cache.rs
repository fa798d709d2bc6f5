//! Caching layer for planned routes.
//!
//! Traffic is sampled per link when a route is planned, so identical
//! queries can return different itineraries. Caching the plan per
//! (departure, destination, priority, time bucket) keeps the sampled
//! conditions stable for a few minutes while bounding cache cardinality.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::domain::{Itinerary, Priority, RouteQuery};
use crate::network::TransportNetwork;
use crate::planner::{PlanError, Planner, PlannerConfig, RandomTraffic, TravelConditions};

/// Cache key for plans: (departure, destination, priority, time bucket).
/// City names are normalized to lowercase; the bucket is minutes from
/// midnight divided by the bucket size.
type PlanKey = (String, String, Priority, u16);

/// Configuration for the plan cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,

    /// Time bucket size in minutes.
    pub bucket_mins: u16,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60),
            max_capacity: 1000,
            bucket_mins: 5,
        }
    }
}

/// Planner with a moka-backed plan cache in front.
pub struct CachedPlanner {
    network: Arc<TransportNetwork>,
    config: PlannerConfig,
    traffic: RandomTraffic,
    plans: MokaCache<PlanKey, Arc<Itinerary>>,
    bucket_mins: u16,
}

impl CachedPlanner {
    /// Create a new cached planner.
    pub fn new(
        network: Arc<TransportNetwork>,
        config: PlannerConfig,
        cache_config: &CacheConfig,
    ) -> Self {
        let plans = MokaCache::builder()
            .time_to_live(cache_config.ttl)
            .max_capacity(cache_config.max_capacity)
            .build();

        Self {
            network,
            config,
            traffic: RandomTraffic,
            plans,
            bucket_mins: cache_config.bucket_mins.max(1),
        }
    }

    /// Compute the time bucket for minutes from midnight.
    fn time_bucket(&self, current_mins: u16) -> u16 {
        current_mins / self.bucket_mins
    }

    /// Plan a route, reusing a cached itinerary for the current bucket.
    ///
    /// Errors are never cached; only successful plans are stored.
    pub async fn plan(
        &self,
        query: &RouteQuery,
        conditions: &TravelConditions,
        current_mins: u16,
    ) -> Result<Arc<Itinerary>, PlanError> {
        let key = (
            query.departure.normalized(),
            query.destination.normalized(),
            query.priority,
            self.time_bucket(current_mins),
        );

        if let Some(hit) = self.plans.get(&key).await {
            debug!(
                from = %query.departure,
                to = %query.destination,
                priority = %query.priority,
                "plan cache hit"
            );
            return Ok(hit);
        }

        let planner = Planner::new(&self.network, &self.config, &self.traffic);
        let itinerary = Arc::new(planner.plan(query, conditions)?);

        self.plans.insert(key, itinerary.clone()).await;
        Ok(itinerary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CityName, ComfortClass};
    use crate::network::fully_connected_with;

    const WEEKDAY: TravelConditions = TravelConditions {
        weekend: false,
        rush_hour: false,
    };

    fn cached_planner() -> CachedPlanner {
        let network = fully_connected_with(
            &["Delhi", "Mumbai", "Chennai"],
            |_, _| ComfortClass::Economy,
        )
        .unwrap();
        CachedPlanner::new(
            Arc::new(network),
            PlannerConfig::default(),
            &CacheConfig::default(),
        )
    }

    fn query(from: &str, to: &str) -> RouteQuery {
        RouteQuery::new(
            CityName::parse(from).unwrap(),
            CityName::parse(to).unwrap(),
            Priority::Time,
        )
    }

    #[test]
    fn bucket_size() {
        let planner = cached_planner();

        assert_eq!(planner.time_bucket(0), 0);
        assert_eq!(planner.time_bucket(4), 0);
        assert_eq!(planner.time_bucket(5), 1);
        assert_eq!(planner.time_bucket(720), 144);
    }

    #[tokio::test]
    async fn same_bucket_reuses_plan() {
        let planner = cached_planner();

        let first = planner.plan(&query("Delhi", "Mumbai"), &WEEKDAY, 100).await.unwrap();
        let second = planner.plan(&query("Delhi", "Mumbai"), &WEEKDAY, 102).await.unwrap();

        // Same Arc, not merely an equal itinerary
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn lookup_normalizes_city_case() {
        let planner = cached_planner();

        let first = planner.plan(&query("Delhi", "Mumbai"), &WEEKDAY, 100).await.unwrap();
        let second = planner.plan(&query("delhi", "MUMBAI"), &WEEKDAY, 100).await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn different_priority_is_a_different_entry() {
        let planner = cached_planner();

        let timed = planner.plan(&query("Delhi", "Mumbai"), &WEEKDAY, 100).await.unwrap();

        let mut cost_query = query("Delhi", "Mumbai");
        cost_query.priority = Priority::Cost;
        let costed = planner.plan(&cost_query, &WEEKDAY, 100).await.unwrap();

        assert!(!Arc::ptr_eq(&timed, &costed));
    }

    #[tokio::test]
    async fn errors_are_not_cached() {
        let planner = cached_planner();
        let bad = query("Delhi", "Pune");

        let result = planner.plan(&bad, &WEEKDAY, 100).await;
        assert!(matches!(result, Err(PlanError::UnknownCity(_))));

        // A later valid plan for the same bucket still works
        let result = planner.plan(&query("Delhi", "Mumbai"), &WEEKDAY, 100).await;
        assert!(result.is_ok());
    }
}
