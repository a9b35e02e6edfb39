use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, instrument, warn};
use uuid::Uuid;
use wayfarer_catalog::{builtin_catalog, load_catalog_json, DEFAULT_CATALOG_SEED};
use wayfarer_core::{
    recommend_destinations, Activity, ActivityConstraints, Catalog, InterestCategory, Itinerary,
    ItineraryPlanner, PlannerConfig, RankedDestination, SeededRandom, TransportationMode,
    UserPreferences,
};
use wayfarer_observability::{MetricsSnapshot, PlannerMetrics};

/// Where the service takes its reference data from.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogSource {
    Builtin { seed: u64 },
    JsonFile(std::path::PathBuf),
}

impl Default for CatalogSource {
    fn default() -> Self {
        Self::Builtin {
            seed: DEFAULT_CATALOG_SEED,
        }
    }
}

impl CatalogSource {
    pub fn load(&self) -> Result<Arc<dyn Catalog>> {
        match self {
            Self::Builtin { seed } => Ok(Arc::new(builtin_catalog(*seed))),
            Self::JsonFile(path) => {
                let catalog = load_catalog_json(path)
                    .with_context(|| format!("failed loading catalog from {}", path.display()))?;
                Ok(Arc::new(catalog))
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DestinationSummary {
    pub id: u32,
    pub name: String,
    pub region: String,
    pub cost_level: u8,
    pub currency: String,
}

#[derive(Clone)]
pub struct PlannerService {
    catalog: Arc<dyn Catalog>,
    config: PlannerConfig,
    metrics: Arc<PlannerMetrics>,
}

impl PlannerService {
    pub fn new(
        catalog: Arc<dyn Catalog>,
        config: PlannerConfig,
        metrics: Arc<PlannerMetrics>,
    ) -> Result<Self> {
        config.validate().context("invalid planner configuration")?;
        Ok(Self {
            catalog,
            config,
            metrics,
        })
    }

    pub fn from_source(source: &CatalogSource, config: PlannerConfig) -> Result<Self> {
        Self::new(source.load()?, config, PlannerMetrics::shared())
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Seeded requests replay exactly; unseeded ones draw from entropy.
    #[instrument(
        skip(self, prefs),
        fields(request_id = %Uuid::new_v4(), destination = %prefs.destination)
    )]
    pub fn plan(&self, prefs: &UserPreferences, seed: Option<u64>) -> Result<Itinerary> {
        let started = Instant::now();
        self.metrics.inc_request();

        let mut rng = match seed {
            Some(seed) => SeededRandom::seeded(seed),
            None => SeededRandom::from_entropy(),
        };

        let planner = ItineraryPlanner::new(self.catalog.as_ref(), &self.config);
        let outcome = planner.generate_itinerary(prefs, &mut rng);
        self.metrics.observe_latency(started.elapsed());

        let itinerary = match outcome {
            Ok(itinerary) => itinerary,
            Err(err) => {
                self.metrics.inc_failure();
                warn!(code = err.code(), error = %err, "itinerary request rejected");
                return Err(err).context("failed generating itinerary");
            }
        };

        self.metrics.inc_itinerary();
        if itinerary.budget_floor_applied {
            self.metrics.inc_budget_floor();
        }
        if itinerary.is_over_budget() {
            self.metrics.inc_over_budget();
            warn!(
                overspend = -itinerary.remaining_budget(),
                "planned costs exceed the stated budget"
            );
        }

        info!(
            days = itinerary.duration(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "itinerary request completed"
        );
        Ok(itinerary)
    }

    pub fn destinations(&self) -> Vec<DestinationSummary> {
        self.catalog
            .destinations()
            .iter()
            .map(|destination| DestinationSummary {
                id: destination.id,
                name: destination.name.clone(),
                region: destination.region.clone(),
                cost_level: destination.cost_level,
                currency: destination.currency.clone(),
            })
            .collect()
    }

    pub fn suggest_destinations(
        &self,
        interests: &[InterestCategory],
        daily_budget: f64,
        limit: usize,
    ) -> Vec<RankedDestination> {
        let mut ranked = recommend_destinations(self.catalog.as_ref(), interests, daily_budget);
        ranked.truncate(limit);
        ranked
    }

    pub fn activities(
        &self,
        destination: &str,
        interests: &[InterestCategory],
        constraints: &ActivityConstraints,
    ) -> Result<Vec<Activity>> {
        let destination = self.catalog.destination_by_name(destination)?;
        let recommender = ItineraryPlanner::new(self.catalog.as_ref(), &self.config).recommender();
        Ok(recommender.activities_matching(destination.id, interests, constraints))
    }

    pub fn transportation_modes(&self) -> Vec<TransportationMode> {
        self.catalog.transportation_modes().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use wayfarer_core::{AccommodationType, TimeOfDay};

    use super::*;

    fn service() -> PlannerService {
        PlannerService::from_source(&CatalogSource::default(), PlannerConfig::default()).unwrap()
    }

    fn prefs(destination: &str, budget: f64) -> UserPreferences {
        UserPreferences {
            origin: "New York".to_string(),
            destination: destination.to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 6, 5).unwrap(),
            budget,
            transportation: None,
            accommodation: Some(AccommodationType::Hotel),
            activities: vec![InterestCategory::Sightseeing, InterestCategory::FoodCulinary],
            notes: String::new(),
        }
    }

    #[test]
    fn plan_counts_success_and_failure() {
        let service = service();
        service.plan(&prefs("Rome, Italy", 3000.0), Some(5)).unwrap();
        assert!(service.plan(&prefs("Atlantis", 3000.0), Some(5)).is_err());

        let metrics = service.metrics();
        assert_eq!(metrics.requests_total, 2);
        assert_eq!(metrics.itineraries_total, 1);
        assert_eq!(metrics.failures_total, 1);
    }

    #[test]
    fn seeded_plans_repeat() {
        let service = service();
        let request = prefs("Tokyo, Japan", 4000.0);
        assert_eq!(
            service.plan(&request, Some(11)).unwrap(),
            service.plan(&request, Some(11)).unwrap()
        );
    }

    #[test]
    fn suggestions_respect_limit() {
        let suggestions =
            service().suggest_destinations(&[InterestCategory::RelaxationWellness], 120.0, 3);
        assert_eq!(suggestions.len(), 3);
        assert!(suggestions[0].similarity >= suggestions[2].similarity);
    }

    #[test]
    fn activities_filter_by_period() {
        let constraints = ActivityConstraints {
            time_of_day: Some(TimeOfDay::Evening),
            ..ActivityConstraints::default()
        };
        let activities = service()
            .activities("Paris, France", &[InterestCategory::FoodCulinary], &constraints)
            .unwrap();
        assert!(!activities.is_empty());
        assert!(activities.iter().all(|activity| activity.evening_suitable));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = PlannerConfig {
            candidates_per_slot: 0,
            ..PlannerConfig::default()
        };
        assert!(PlannerService::from_source(&CatalogSource::default(), config).is_err());
    }
}
