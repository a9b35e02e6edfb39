use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::config::PlannerConfig;
use crate::error::Result;
use crate::models::{BudgetBreakdown, Itinerary, UserPreferences};
use crate::overview::compose_overview;
use crate::random::RandomSource;
use crate::recommender::Recommender;

/// Drives the recommender across the whole trip and settles the budget.
#[derive(Clone, Copy)]
pub struct ItineraryPlanner<'a> {
    catalog: &'a dyn Catalog,
    config: &'a PlannerConfig,
}

impl<'a> ItineraryPlanner<'a> {
    pub fn new(catalog: &'a dyn Catalog, config: &'a PlannerConfig) -> Self {
        Self { catalog, config }
    }

    pub fn recommender(&self) -> Recommender<'a> {
        Recommender::new(self.catalog, self.config)
    }

    /// Either a complete itinerary or an error; nothing partial is returned.
    pub fn generate_itinerary(
        &self,
        prefs: &UserPreferences,
        rng: &mut dyn RandomSource,
    ) -> Result<Itinerary> {
        let duration = prefs.validate()?;
        let destination = self.catalog.destination_by_name(&prefs.destination)?;
        let recommender = self.recommender();

        let transportation = recommender.recommend_transportation(prefs, rng)?;
        let accommodation = recommender.recommend_accommodation(prefs, destination.id)?;

        let mut remaining = prefs.budget - transportation.cost - accommodation.total_cost;
        let budget_floor_applied = remaining < 0.0;
        if budget_floor_applied {
            debug!(
                shortfall = -remaining,
                "transport and lodging exceed the budget, reserving the activity floor"
            );
            remaining = prefs.budget * self.config.remaining_floor_share;
        }

        let daily_activity_budget = remaining / f64::from(duration);
        let mut daily_plans = Vec::with_capacity(duration as usize);
        for day in 1..=duration {
            daily_plans.push(recommender.recommend_daily_plan(
                prefs,
                destination.id,
                day,
                daily_activity_budget,
                rng,
            )?);
        }

        let activities_cost = daily_plans.iter().map(|plan| plan.total_cost).sum::<f64>();
        let budget_breakdown = BudgetBreakdown {
            transportation: transportation.cost,
            accommodation: accommodation.total_cost,
            activities: activities_cost,
            food: remaining * self.config.food_share,
            miscellaneous: remaining * self.config.miscellaneous_share,
        };

        let overview = compose_overview(
            prefs,
            destination,
            &transportation,
            &accommodation,
            &daily_plans,
            rng,
        );

        let itinerary = Itinerary {
            destination: destination.clone(),
            transportation,
            accommodation,
            daily_plans,
            overview,
            budget_breakdown,
            budget: prefs.budget,
            budget_floor_applied,
        };

        info!(
            destination = %itinerary.destination.name,
            days = duration,
            transport = %itinerary.transportation.mode,
            accommodation = %itinerary.accommodation.accommodation.name,
            planned_total = itinerary.budget_breakdown.total(),
            over_budget = itinerary.is_over_budget(),
            "itinerary generated"
        );

        Ok(itinerary)
    }
}

/// Plans with the default ratios.
pub fn generate_itinerary(
    catalog: &dyn Catalog,
    prefs: &UserPreferences,
    rng: &mut dyn RandomSource,
) -> Result<Itinerary> {
    let config = PlannerConfig::default();
    ItineraryPlanner::new(catalog, &config).generate_itinerary(prefs, rng)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::catalog::fixtures::*;
    use crate::catalog::InMemoryCatalog;
    use crate::error::PlannerError;
    use crate::models::{AccommodationType, InterestCategory};
    use crate::random::SeededRandom;

    fn catalog() -> InMemoryCatalog {
        use InterestCategory::*;
        InMemoryCatalog::new(
            vec![destination(1, "Paris, France")],
            vec![
                activity(1, 1, CulturalHistorical, "Visit a museum", 30.0, 0.9, DAYTIME),
                activity(2, 1, FoodCulinary, "Taste the local cuisine", 45.0, 0.95, LATE),
                activity(3, 1, Sightseeing, "River cruise", 15.0, 0.85, [true, true, true]),
            ],
            vec![
                accommodation(1, "Budget Hotel", AccommodationType::Hotel, 90.0, 3.5),
                accommodation(1, "Mid Hotel", AccommodationType::Hotel, 180.0, 4.2),
            ],
            standard_modes(),
        )
    }

    fn prefs(days: i64, budget: f64) -> UserPreferences {
        let start = NaiveDate::from_ymd_opt(2026, 9, 10).unwrap();
        UserPreferences {
            origin: "New York".to_string(),
            destination: "Paris, France".to_string(),
            start_date: start,
            end_date: start + chrono::Duration::days(days),
            budget,
            transportation: Some("Plane".to_string()),
            accommodation: Some(AccommodationType::Hotel),
            activities: vec![InterestCategory::CulturalHistorical, InterestCategory::FoodCulinary],
            notes: String::new(),
        }
    }

    #[test]
    fn one_plan_per_day_and_activities_reconcile() {
        let catalog = catalog();
        let itinerary =
            generate_itinerary(&catalog, &prefs(7, 2000.0), &mut SeededRandom::seeded(1)).unwrap();

        assert_eq!(itinerary.daily_plans.len(), 7);
        let days = itinerary.daily_plans.iter().map(|plan| plan.day).collect::<Vec<_>>();
        assert_eq!(days, (1..=7).collect::<Vec<_>>());
        let summed = itinerary
            .daily_plans
            .iter()
            .map(|plan| plan.total_cost)
            .sum::<f64>();
        assert_eq!(itinerary.budget_breakdown.activities, summed);
    }

    #[test]
    fn one_day_trip_gets_the_welcome_title() {
        let catalog = catalog();
        let itinerary =
            generate_itinerary(&catalog, &prefs(1, 800.0), &mut SeededRandom::seeded(2)).unwrap();

        assert_eq!(itinerary.daily_plans.len(), 1);
        assert_eq!(itinerary.daily_plans[0].day, 1);
        assert_eq!(itinerary.daily_plans[0].title, "Welcome to Paris, France");
        let stay = &itinerary.accommodation;
        assert_eq!(stay.total_cost, stay.accommodation.cost_per_night);
    }

    #[test]
    fn unknown_destination_produces_no_itinerary() {
        let catalog = catalog();
        let mut request = prefs(3, 1000.0);
        request.destination = "Atlantis".to_string();

        let err = generate_itinerary(&catalog, &request, &mut SeededRandom::seeded(1)).unwrap_err();
        assert_eq!(err, PlannerError::DestinationNotFound("Atlantis".to_string()));
    }

    #[test]
    fn zero_day_trip_is_invalid() {
        let catalog = catalog();
        let err = generate_itinerary(&catalog, &prefs(0, 1000.0), &mut SeededRandom::seeded(1))
            .unwrap_err();
        assert!(matches!(err, PlannerError::InvalidPreferences(_)));
    }

    #[test]
    fn tiny_budget_applies_floor() {
        let catalog = catalog();
        let itinerary =
            generate_itinerary(&catalog, &prefs(5, 100.0), &mut SeededRandom::seeded(3)).unwrap();

        assert!(itinerary.budget_floor_applied);
        let remaining = 100.0 * 0.2;
        assert_eq!(itinerary.budget_breakdown.food, remaining * 0.4);
        assert_eq!(itinerary.budget_breakdown.miscellaneous, remaining * 0.1);
        assert!(itinerary.is_over_budget());
    }

    #[test]
    fn food_and_misc_come_from_remaining_budget() {
        let catalog = catalog();
        let itinerary =
            generate_itinerary(&catalog, &prefs(4, 5000.0), &mut SeededRandom::seeded(4)).unwrap();

        assert!(!itinerary.budget_floor_applied);
        let remaining = 5000.0 - itinerary.transportation.cost - itinerary.accommodation.total_cost;
        assert_eq!(itinerary.budget_breakdown.food, remaining * 0.4);
        assert_eq!(itinerary.budget_breakdown.miscellaneous, remaining * 0.1);
    }

    #[test]
    fn same_seed_same_itinerary() {
        let catalog = catalog();
        let request = prefs(6, 2500.0);
        let first = generate_itinerary(&catalog, &request, &mut SeededRandom::seeded(99)).unwrap();
        let second = generate_itinerary(&catalog, &request, &mut SeededRandom::seeded(99)).unwrap();
        assert_eq!(first, second);
    }
}
