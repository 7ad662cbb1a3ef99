//! # Estimation Engine
//!
//! Orchestrates one estimate request end to end.
//!
//! Per request: classify traffic once, compute the route once (routing is
//! provider-independent, so the route call is hoisted out of the provider
//! loop), price every configured provider against the shared route, rank,
//! and return. Re-fetching the route per provider would waste external-API
//! quota and latency; the single shared computation is an invariant, not
//! an optimization.

use crate::application::error::{EstimationError, EstimationResult};
use crate::application::services::pricing::compute_fare;
use crate::application::services::ranking_strategy::{LowestFareStrategy, RankingStrategy};
use crate::application::services::routing::RoutePlanner;
use crate::domain::entities::{EstimateResponse, ProviderEstimate, ProviderTable};
use crate::domain::value_objects::{Coordinate, TrafficReading};
use chrono::Local;
use std::sync::Arc;

/// Engine producing ranked per-provider fare estimates.
#[derive(Debug)]
pub struct EstimationEngine {
    providers: ProviderTable,
    planner: RoutePlanner,
    ranking: Arc<dyn RankingStrategy>,
}

impl EstimationEngine {
    /// Creates a new estimation engine.
    #[must_use]
    pub fn new(
        providers: ProviderTable,
        planner: RoutePlanner,
        ranking: Arc<dyn RankingStrategy>,
    ) -> Self {
        Self {
            providers,
            planner,
            ranking,
        }
    }

    /// Creates an engine with the default lowest-fare ranking.
    #[must_use]
    pub fn with_defaults(providers: ProviderTable, planner: RoutePlanner) -> Self {
        Self::new(providers, planner, Arc::new(LowestFareStrategy::new()))
    }

    /// Produces ranked estimates for a trip, classifying traffic from the
    /// current local time.
    ///
    /// # Errors
    ///
    /// Returns `EstimationError::NoProvidersConfigured` when the provider
    /// table is empty.
    pub async fn estimate(
        &self,
        pickup: &Coordinate,
        destination: &Coordinate,
    ) -> EstimationResult<EstimateResponse> {
        let traffic = TrafficReading::at(Local::now());
        self.estimate_with_traffic(pickup, destination, traffic)
            .await
    }

    /// Produces ranked estimates under an explicit traffic reading.
    ///
    /// # Errors
    ///
    /// Returns `EstimationError::NoProvidersConfigured` when the provider
    /// table is empty.
    pub async fn estimate_with_traffic(
        &self,
        pickup: &Coordinate,
        destination: &Coordinate,
        traffic: TrafficReading,
    ) -> EstimationResult<EstimateResponse> {
        if self.providers.is_empty() {
            return Err(EstimationError::NoProvidersConfigured);
        }

        // One route per request, shared by every provider below.
        let route = self.planner.route(pickup, destination, traffic).await;

        tracing::debug!(
            distance_km = route.distance_km(),
            duration_min = route.duration_min(),
            traffic = %traffic,
            providers = self.providers.len(),
            "pricing trip"
        );

        let options: Vec<ProviderEstimate> = self
            .providers
            .iter()
            .map(|provider| {
                let price = compute_fare(
                    provider,
                    route.distance_km(),
                    route.duration_min(),
                    traffic.multiplier(),
                );
                ProviderEstimate::new(
                    provider.key(),
                    route.distance_km(),
                    route.duration_min(),
                    traffic.level(),
                    price,
                    provider.deeplink(),
                )
            })
            .collect();

        let best = self.ranking.best(&options)?;

        Ok(EstimateResponse::new(best.provider(), options))
    }

    /// Returns the provider table.
    #[must_use]
    pub fn providers(&self) -> &ProviderTable {
        &self.providers
    }
}
