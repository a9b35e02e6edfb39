use chrono::NaiveDate;
use wayfarer_catalog::{builtin_catalog, DEFAULT_CATALOG_SEED};
use wayfarer_core::{
    generate_itinerary, AccommodationType, Catalog, InterestCategory, PlannerError, SeededRandom,
    UserPreferences,
};
use wayfarer_service::{CatalogSource, PlannerService};

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, month, day).unwrap()
}

fn paris_week() -> UserPreferences {
    UserPreferences {
        origin: "New York".to_string(),
        destination: "Paris, France".to_string(),
        start_date: date(5, 1),
        end_date: date(5, 8),
        budget: 2000.0,
        transportation: Some("Plane".to_string()),
        accommodation: Some(AccommodationType::Hotel),
        activities: vec![
            InterestCategory::CulturalHistorical,
            InterestCategory::FoodCulinary,
        ],
        notes: String::new(),
    }
}

fn service() -> PlannerService {
    PlannerService::from_source(&CatalogSource::default(), Default::default()).unwrap()
}

#[test]
fn paris_week_by_plane_in_a_hotel() {
    let catalog = builtin_catalog(DEFAULT_CATALOG_SEED);
    let itinerary =
        generate_itinerary(&catalog, &paris_week(), &mut SeededRandom::seeded(2026)).unwrap();

    assert_eq!(itinerary.destination.name, "Paris, France");
    assert_eq!(itinerary.daily_plans.len(), 7);
    for (idx, plan) in itinerary.daily_plans.iter().enumerate() {
        assert_eq!(plan.day as usize, idx + 1);
    }
    assert_eq!(itinerary.daily_plans[0].title, "Welcome to Paris, France");
    assert_eq!(itinerary.daily_plans[6].title, "Final Day in Paris, France");

    let transport = &itinerary.transportation;
    assert_eq!(transport.mode, "Plane");
    assert!((500..=5000).contains(&transport.distance_km));
    assert!((transport.cost - f64::from(transport.distance_km) * 0.15).abs() < 1e-9);

    let stay = &itinerary.accommodation;
    assert_eq!(stay.accommodation.kind, AccommodationType::Hotel);
    assert!(!stay.synthetic);
    assert_eq!(stay.total_cost, stay.accommodation.cost_per_night * 7.0);

    let activities = itinerary
        .daily_plans
        .iter()
        .map(|plan| plan.total_cost)
        .sum::<f64>();
    assert_eq!(itinerary.budget_breakdown.activities, activities);
}

#[test]
fn unknown_destination_is_reported_through_the_service() {
    let mut request = paris_week();
    request.destination = "Atlantis".to_string();

    let err = service().plan(&request, Some(1)).unwrap_err();
    assert_eq!(
        err.downcast_ref::<PlannerError>(),
        Some(&PlannerError::DestinationNotFound("Atlantis".to_string()))
    );
}

#[test]
fn unknown_explicit_mode_is_not_found() {
    let mut request = paris_week();
    request.transportation = Some("Hovercraft".to_string());

    let catalog = builtin_catalog(DEFAULT_CATALOG_SEED);
    let err = generate_itinerary(&catalog, &request, &mut SeededRandom::seeded(1)).unwrap_err();
    assert_eq!(
        err,
        PlannerError::TransportationModeNotFound("Hovercraft".to_string())
    );
}

#[test]
fn tiny_budget_keeps_daily_plans_affordable() {
    let mut request = paris_week();
    request.budget = 100.0;
    request.end_date = date(5, 6);

    let itinerary = service().plan(&request, Some(3)).unwrap();
    assert!(itinerary.budget_floor_applied);
    assert!(itinerary.is_over_budget());

    let daily_budget = 100.0 * 0.2 / 5.0;
    for plan in &itinerary.daily_plans {
        assert!(plan.total_cost >= 0.0);
        assert!(plan.total_cost <= daily_budget + 1e-9);
    }
    assert_eq!(itinerary.budget_breakdown.food, 100.0 * 0.2 * 0.4);
}

#[test]
fn seeded_requests_are_reproducible() {
    let service = service();
    let first = service.plan(&paris_week(), Some(77)).unwrap();
    let second = service.plan(&paris_week(), Some(77)).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn every_destination_plans_with_open_preferences() {
    let catalog = builtin_catalog(DEFAULT_CATALOG_SEED);
    for (seed, name) in catalog.destination_names().into_iter().enumerate() {
        let request = UserPreferences {
            destination: name.to_string(),
            transportation: None,
            accommodation: None,
            activities: InterestCategory::ALL.to_vec(),
            ..paris_week()
        };

        let itinerary =
            generate_itinerary(&catalog, &request, &mut SeededRandom::seeded(seed as u64))
                .unwrap();
        assert_eq!(itinerary.destination.name, name);
        assert_eq!(itinerary.daily_plans.len(), 7);
        assert!(itinerary.overview.contains(name));
        assert_eq!(itinerary.daily_plans[6].title, format!("Final Day in {name}"));
    }
}

#[test]
fn planning_leaves_the_catalog_untouched() {
    let catalog = builtin_catalog(DEFAULT_CATALOG_SEED);
    let before = catalog.clone();

    for seed in 0..5 {
        generate_itinerary(&catalog, &paris_week(), &mut SeededRandom::seeded(seed)).unwrap();
    }
    assert_eq!(catalog, before);
}

#[test]
fn metrics_follow_requests() {
    let service = service();
    service.plan(&paris_week(), Some(1)).unwrap();

    let mut broke = paris_week();
    broke.budget = 50.0;
    service.plan(&broke, Some(1)).unwrap();

    let mut invalid = paris_week();
    invalid.end_date = invalid.start_date;
    assert!(service.plan(&invalid, Some(1)).is_err());

    let metrics = service.metrics();
    assert_eq!(metrics.requests_total, 3);
    assert_eq!(metrics.itineraries_total, 2);
    assert_eq!(metrics.failures_total, 1);
    assert_eq!(metrics.budget_floor_total, 1);
    assert!(metrics.over_budget_total >= 1);
}
