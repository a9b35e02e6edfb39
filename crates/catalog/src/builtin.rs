use tracing::debug;
use wayfarer_core::random::{choose, uniform};
use wayfarer_core::{
    Accommodation, AccommodationType, Activity, Destination, InMemoryCatalog, InterestCategory,
    RandomSource, SeededRandom, TransportationMode,
};

use crate::destinations::{destinations, strings};

/// Seed used when the caller does not pick one.
pub const DEFAULT_CATALOG_SEED: u64 = 42;

struct ActivityTemplate {
    category: InterestCategory,
    count: u32,
    name: &'static str,
    description: &'static str,
    durations: &'static [f64],
    /// Inclusive base price range, multiplied by the destination cost level.
    base_cost: (u32, u32),
    cost_divisor: f64,
    morning: bool,
    afternoon: bool,
    /// `None` flips a coin per activity.
    evening: Option<bool>,
    popularity: (f64, f64),
}

const TEMPLATES: [ActivityTemplate; 7] = [
    ActivityTemplate {
        category: InterestCategory::CulturalHistorical,
        count: 3,
        name: "Museum/Cultural Site Visit in {name}",
        description: "Visit a prominent museum or cultural landmark in {name}.",
        durations: &[2.0, 3.0, 4.0],
        base_cost: (10, 40),
        cost_divisor: 1.0,
        morning: true,
        afternoon: true,
        evening: Some(false),
        popularity: (0.7, 0.95),
    },
    ActivityTemplate {
        category: InterestCategory::OutdoorAdventure,
        count: 3,
        name: "Outdoor Adventure in {name}",
        description:
            "Enjoy the natural surroundings in {name} with hiking, walking tours, or outdoor sports.",
        durations: &[3.0, 4.0, 5.0],
        base_cost: (20, 100),
        cost_divisor: 2.0,
        morning: true,
        afternoon: true,
        evening: Some(false),
        popularity: (0.6, 0.9),
    },
    ActivityTemplate {
        category: InterestCategory::FoodCulinary,
        count: 2,
        name: "Culinary Experience in {name}",
        description: "Taste the local cuisine or join a food tour in {name}.",
        durations: &[2.0, 3.0],
        base_cost: (30, 80),
        cost_divisor: 2.0,
        morning: false,
        afternoon: true,
        evening: Some(true),
        popularity: (0.8, 0.95),
    },
    ActivityTemplate {
        category: InterestCategory::RelaxationWellness,
        count: 2,
        name: "Relaxation Activity in {name}",
        description: "Unwind with spa treatments, beach time, or wellness activities in {name}.",
        durations: &[2.0, 3.0, 4.0],
        base_cost: (40, 120),
        cost_divisor: 2.0,
        morning: true,
        afternoon: true,
        evening: Some(true),
        popularity: (0.7, 0.9),
    },
    ActivityTemplate {
        category: InterestCategory::Shopping,
        count: 1,
        name: "Shopping Experience in {name}",
        description: "Explore local markets, boutiques, or shopping districts in {name}.",
        durations: &[2.0, 3.0, 4.0],
        base_cost: (0, 50),
        cost_divisor: 1.0,
        morning: false,
        afternoon: true,
        evening: Some(true),
        popularity: (0.6, 0.85),
    },
    ActivityTemplate {
        category: InterestCategory::Entertainment,
        count: 2,
        name: "Entertainment in {name}",
        description: "Enjoy shows, performances, or nightlife in {name}.",
        durations: &[2.0, 3.0, 4.0],
        base_cost: (30, 100),
        cost_divisor: 2.0,
        morning: false,
        afternoon: false,
        evening: Some(true),
        popularity: (0.7, 0.9),
    },
    ActivityTemplate {
        category: InterestCategory::Sightseeing,
        count: 3,
        name: "Sightseeing in {name}",
        description: "Visit popular landmarks and attractions in {name}.",
        durations: &[2.0, 3.0, 4.0, 5.0],
        base_cost: (10, 50),
        cost_divisor: 2.0,
        morning: true,
        afternoon: true,
        evening: None,
        popularity: (0.8, 0.95),
    },
];

/// The reference dataset. Prices, ratings and popularity are sampled from
/// `seed`, so the same seed always yields the same catalog.
pub fn builtin_catalog(seed: u64) -> InMemoryCatalog {
    let mut rng = SeededRandom::seeded(seed);
    let destinations = destinations();

    let mut activities = generated_activities(&destinations, &mut rng);
    let next_id = activities.len() as u32 + 1;
    activities.extend(signature_activities(next_id));

    let accommodations = destinations
        .iter()
        .flat_map(|destination| accommodations_for(destination, &mut rng))
        .collect::<Vec<_>>();

    debug!(
        seed,
        destinations = destinations.len(),
        activities = activities.len(),
        accommodations = accommodations.len(),
        "built-in catalog assembled"
    );

    InMemoryCatalog::new(destinations, activities, accommodations, transportation_modes())
}

pub fn transportation_modes() -> Vec<TransportationMode> {
    vec![
        mode("Plane", 0.15, 900.0, 3, 1, 300.0, 20_000.0),
        mode("Train", 0.10, 200.0, 4, 4, 50.0, 1_000.0),
        mode("Bus", 0.05, 80.0, 2, 3, 10.0, 800.0),
        mode("Car", 0.20, 100.0, 4, 2, 5.0, 1_000.0),
        mode("Ferry", 0.08, 40.0, 3, 3, 10.0, 500.0),
    ]
}

fn generated_activities(destinations: &[Destination], rng: &mut dyn RandomSource) -> Vec<Activity> {
    let mut activities = Vec::new();
    let mut next_id = 1;

    for destination in destinations {
        let level = f64::from(destination.cost_level);
        for template in &TEMPLATES {
            for _ in 0..template.count {
                let duration_hours = choose(rng, template.durations).copied().unwrap_or(2.0);
                let base = rng.int_inclusive(template.base_cost.0, template.base_cost.1);
                let evening_suitable = match template.evening {
                    Some(flag) => flag,
                    None => rng.unit() < 0.5,
                };
                let popularity = uniform(rng, template.popularity.0, template.popularity.1);

                activities.push(Activity {
                    id: next_id,
                    destination_id: destination.id,
                    name: template.name.replace("{name}", &destination.name),
                    category: template.category,
                    description: template.description.replace("{name}", &destination.name),
                    duration_hours,
                    cost: f64::from(base) * level / template.cost_divisor,
                    morning_suitable: template.morning,
                    afternoon_suitable: template.afternoon,
                    evening_suitable,
                    popularity: round_to(popularity, 2),
                });
                next_id += 1;
            }
        }
    }

    activities
}

struct Signature {
    destination_id: u32,
    name: &'static str,
    category: InterestCategory,
    description: &'static str,
    duration_hours: f64,
    cost: f64,
    /// Morning, afternoon, evening.
    periods: [bool; 3],
    popularity: f64,
}

const SIGNATURES: [Signature; 6] = [
    Signature {
        destination_id: 1,
        name: "Eiffel Tower Visit",
        category: InterestCategory::Sightseeing,
        description:
            "Visit the iconic symbol of Paris with options to go to the top for panoramic views.",
        duration_hours: 3.0,
        cost: 25.0,
        periods: [true, true, true],
        popularity: 0.95,
    },
    Signature {
        destination_id: 1,
        name: "Louvre Museum Tour",
        category: InterestCategory::CulturalHistorical,
        description: "Explore one of the world's largest art museums, home to the Mona Lisa.",
        duration_hours: 4.0,
        cost: 15.0,
        periods: [true, true, false],
        popularity: 0.9,
    },
    Signature {
        destination_id: 1,
        name: "Seine River Cruise",
        category: InterestCategory::Sightseeing,
        description: "See Paris from the water on a scenic boat tour along the Seine River.",
        duration_hours: 1.5,
        cost: 15.0,
        periods: [true, true, true],
        popularity: 0.85,
    },
    Signature {
        destination_id: 2,
        name: "Tsukiji Outer Market Tour",
        category: InterestCategory::FoodCulinary,
        description: "Explore the famous seafood market and enjoy fresh sushi for breakfast.",
        duration_hours: 3.0,
        cost: 40.0,
        periods: [true, false, false],
        popularity: 0.85,
    },
    Signature {
        destination_id: 2,
        name: "Shibuya Crossing Experience",
        category: InterestCategory::Sightseeing,
        description:
            "Witness the busiest pedestrian crossing in the world and explore the Shibuya district.",
        duration_hours: 2.0,
        cost: 0.0,
        periods: [true, true, true],
        popularity: 0.9,
    },
    Signature {
        destination_id: 2,
        name: "Robot Restaurant Show",
        category: InterestCategory::Entertainment,
        description:
            "Experience a uniquely Japanese spectacle of lights, music, and robots in Shinjuku.",
        duration_hours: 2.0,
        cost: 80.0,
        periods: [false, false, true],
        popularity: 0.8,
    },
];

fn signature_activities(first_id: u32) -> Vec<Activity> {
    SIGNATURES
        .iter()
        .zip(first_id..)
        .map(|(signature, id)| Activity {
            id,
            destination_id: signature.destination_id,
            name: signature.name.to_string(),
            category: signature.category,
            description: signature.description.to_string(),
            duration_hours: signature.duration_hours,
            cost: signature.cost,
            morning_suitable: signature.periods[0],
            afternoon_suitable: signature.periods[1],
            evening_suitable: signature.periods[2],
            popularity: signature.popularity,
        })
        .collect()
}

struct StayTier {
    label: &'static str,
    kind: AccommodationType,
    /// Nightly price at cost level 1.
    base_price: f64,
    rating: (f64, f64),
    location: (f64, f64),
    amenities: &'static [&'static str],
    suitable_for: &'static [&'static str],
}

const STAY_TIERS: [StayTier; 6] = [
    StayTier {
        label: "Budget Hotel",
        kind: AccommodationType::Hotel,
        base_price: 30.0,
        rating: (3.0, 4.0),
        location: (3.0, 4.0),
        amenities: &["WiFi", "Air Conditioning"],
        suitable_for: &["Solo", "Couple", "Friends"],
    },
    StayTier {
        label: "Hostel",
        kind: AccommodationType::Hostel,
        base_price: 20.0,
        rating: (3.0, 4.0),
        location: (3.5, 4.5),
        amenities: &["WiFi", "Shared Kitchen", "Lounge"],
        suitable_for: &["Solo", "Friends"],
    },
    StayTier {
        label: "Mid-range Hotel",
        kind: AccommodationType::Hotel,
        base_price: 60.0,
        rating: (3.5, 4.5),
        location: (3.5, 4.5),
        amenities: &["WiFi", "Air Conditioning", "Restaurant", "Room Service"],
        suitable_for: &["Solo", "Couple", "Family", "Friends"],
    },
    StayTier {
        label: "Airbnb Apartment",
        kind: AccommodationType::Airbnb,
        base_price: 50.0,
        rating: (3.8, 4.8),
        location: (3.5, 4.5),
        amenities: &["WiFi", "Kitchen", "Washer", "Air Conditioning"],
        suitable_for: &["Solo", "Couple", "Family", "Friends"],
    },
    StayTier {
        label: "Luxury Hotel",
        kind: AccommodationType::Hotel,
        base_price: 150.0,
        rating: (4.0, 4.9),
        location: (4.0, 5.0),
        amenities: &[
            "WiFi",
            "Air Conditioning",
            "Pool",
            "Spa",
            "Gym",
            "Restaurant",
            "Room Service",
        ],
        suitable_for: &["Solo", "Couple", "Family"],
    },
    StayTier {
        label: "Resort",
        kind: AccommodationType::Resort,
        base_price: 200.0,
        rating: (4.2, 5.0),
        location: (4.5, 5.0),
        amenities: &[
            "WiFi",
            "Air Conditioning",
            "Pool",
            "Spa",
            "Gym",
            "Multiple Restaurants",
            "Private Beach/Garden",
        ],
        suitable_for: &["Couple", "Family"],
    },
];

fn accommodations_for(destination: &Destination, rng: &mut dyn RandomSource) -> Vec<Accommodation> {
    let level = f64::from(destination.cost_level);

    STAY_TIERS
        .iter()
        .map(|tier| {
            let rating = round_to(uniform(rng, tier.rating.0, tier.rating.1), 1);
            let location_quality = round_to(uniform(rng, tier.location.0, tier.location.1), 1);
            Accommodation {
                destination_id: destination.id,
                name: format!("{} in {}", tier.label, destination.name),
                kind: tier.kind,
                cost_per_night: (tier.base_price * level).trunc(),
                rating,
                amenities: strings(tier.amenities),
                suitable_for: strings(tier.suitable_for),
                location_quality,
            }
        })
        .collect()
}

fn mode(
    name: &str,
    cost_per_km: f64,
    speed_km_h: f64,
    comfort_level: u8,
    eco_friendliness: u8,
    suitable_distance_min_km: f64,
    suitable_distance_max_km: f64,
) -> TransportationMode {
    TransportationMode {
        mode: name.to_string(),
        cost_per_km,
        speed_km_h,
        comfort_level,
        eco_friendliness,
        suitable_distance_min_km,
        suitable_distance_max_km,
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use wayfarer_core::Catalog;

    use super::*;

    #[test]
    fn ten_destinations_with_full_listings() {
        let catalog = builtin_catalog(DEFAULT_CATALOG_SEED);
        assert_eq!(catalog.destinations().len(), 10);
        for destination in catalog.destinations() {
            assert!(catalog.activities_for(destination.id).len() >= 16);
            assert_eq!(catalog.accommodations_for(destination.id).len(), 6);
        }
        assert_eq!(catalog.transportation_modes().len(), 5);
    }

    #[test]
    fn paris_and_tokyo_have_signature_activities() {
        let catalog = builtin_catalog(DEFAULT_CATALOG_SEED);
        let paris = catalog.activities_for(1);
        assert!(paris.iter().any(|activity| activity.name == "Eiffel Tower Visit"));
        let tokyo = catalog.activities_for(2);
        assert!(tokyo.iter().any(|activity| activity.name == "Robot Restaurant Show"));
    }

    #[test]
    fn activity_ids_are_unique() {
        let catalog = builtin_catalog(DEFAULT_CATALOG_SEED);
        let mut ids = catalog
            .activities()
            .iter()
            .map(|activity| activity.id)
            .collect::<Vec<_>>();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn sampled_values_respect_template_ranges() {
        let catalog = builtin_catalog(7);
        for activity in catalog.activities() {
            assert!((0.0..=1.0).contains(&activity.popularity));
            assert!(activity.cost >= 0.0);
        }
        for stay in catalog.accommodations() {
            assert!((3.0..=5.0).contains(&stay.rating));
        }
    }

    #[test]
    fn same_seed_same_catalog() {
        assert_eq!(builtin_catalog(5), builtin_catalog(5));
    }

    #[test]
    fn prices_scale_with_cost_level() {
        let catalog = builtin_catalog(DEFAULT_CATALOG_SEED);
        let tokyo_hostel = catalog
            .accommodations_for_type(2, Some(AccommodationType::Hostel))
            .into_iter()
            .next()
            .unwrap();
        assert_eq!(tokyo_hostel.cost_per_night, 80.0);
        assert_eq!(tokyo_hostel.name, "Hostel in Tokyo, Japan");
    }
}
