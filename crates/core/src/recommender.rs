use std::cmp::Ordering;

use tracing::debug;

use crate::catalog::Catalog;
use crate::config::PlannerConfig;
use crate::error::{PlannerError, Result};
use crate::models::{
    Accommodation, AccommodationSelection, AccommodationType, Activity, ActivityConstraints,
    DailyPlan, Destination, InterestCategory, PlanSlot, TimeOfDay, TransportationSelection,
    UserPreferences, ANY,
};
use crate::random::{choose, RandomSource};

/// Selection policies for transport, lodging and activities over a borrowed catalog.
#[derive(Clone, Copy)]
pub struct Recommender<'a> {
    catalog: &'a dyn Catalog,
    config: &'a PlannerConfig,
}

impl<'a> Recommender<'a> {
    pub fn new(catalog: &'a dyn Catalog, config: &'a PlannerConfig) -> Self {
        Self { catalog, config }
    }

    /// Distances are sampled rather than computed; there is no geocoding behind this.
    pub fn recommend_transportation(
        &self,
        prefs: &UserPreferences,
        rng: &mut dyn RandomSource,
    ) -> Result<TransportationSelection> {
        debug!(requested = prefs.transportation_label(), "recommending transportation");
        let (transport, distance_km) = match prefs.requested_transportation() {
            Some(requested) => {
                let transport = self.catalog.transportation_by_mode(requested, rng)?;
                let distance_km = fixed_mode_distance(&transport.mode, rng);
                (transport, distance_km)
            }
            None => {
                let long_haul = rng.unit() < self.config.long_haul_probability;
                let distance_km = if long_haul {
                    rng.int_inclusive(1000, 8000)
                } else {
                    rng.int_inclusive(50, 800)
                };
                let preferred = mode_for_distance(distance_km, rng);
                let transport = match self.catalog.transportation_by_mode(preferred, rng) {
                    Ok(transport) => transport,
                    Err(PlannerError::TransportationModeNotFound(_)) => {
                        debug!(preferred, "distance-tier mode missing, sampling any mode");
                        self.catalog.transportation_by_mode(ANY, rng)?
                    }
                    Err(err) => return Err(err),
                };
                (transport, distance_km)
            }
        };

        let distance = f64::from(distance_km);
        Ok(TransportationSelection {
            mode: transport.mode.clone(),
            distance_km,
            cost: distance * transport.cost_per_km,
            travel_time_hours: distance / transport.speed_km_h,
            details: format!(
                "From {} to {} via {}",
                prefs.origin, prefs.destination, transport.mode
            ),
        })
    }

    pub fn recommend_accommodation(
        &self,
        prefs: &UserPreferences,
        destination_id: u32,
    ) -> Result<AccommodationSelection> {
        let nights = prefs.duration()?;

        let mut options = self
            .catalog
            .accommodations_for_type(destination_id, prefs.accommodation);
        if options.is_empty() && prefs.accommodation.is_some() {
            debug!(
                destination_id,
                wanted = prefs.accommodation_label(),
                "no accommodation of the preferred type, widening to all types"
            );
            options = self.catalog.accommodations_for(destination_id);
        }

        let Some(cheapest) = options.iter().copied().min_by(|a, b| by_price(a, b)) else {
            debug!(destination_id, "no accommodation listed, using a generic stay");
            return Ok(AccommodationSelection::synthetic(
                destination_id,
                prefs.accommodation.unwrap_or(AccommodationType::Hotel),
                nights,
            ));
        };

        let nightly_allowance = prefs.budget / f64::from(nights) * self.config.accommodation_share;
        let best_affordable = options
            .iter()
            .copied()
            .filter(|option| option.cost_per_night <= nightly_allowance)
            .min_by(|a, b| by_rating_then_price(a, b));

        let within_budget = best_affordable.is_some();
        if !within_budget {
            debug!(
                destination_id,
                nightly_allowance, "nothing fits the nightly allowance, taking the cheapest"
            );
        }
        let selected = best_affordable.unwrap_or(cheapest);

        Ok(AccommodationSelection {
            accommodation: selected.clone(),
            total_cost: selected.cost_per_night * f64::from(nights),
            within_budget,
            synthetic: false,
        })
    }

    /// Ranked by popularity (descending) then cost (ascending); remaining ties keep catalog order.
    pub fn recommend_activities(
        &self,
        prefs: &UserPreferences,
        destination_id: u32,
        constraints: &ActivityConstraints,
    ) -> Vec<Activity> {
        self.activities_matching(destination_id, &prefs.activities, constraints)
    }

    pub fn activities_matching(
        &self,
        destination_id: u32,
        interests: &[InterestCategory],
        constraints: &ActivityConstraints,
    ) -> Vec<Activity> {
        let all = self.catalog.activities_for(destination_id);

        let mut pool = if interests.is_empty() {
            all
        } else {
            let preferred = all
                .iter()
                .copied()
                .filter(|activity| interests.contains(&activity.category))
                .collect::<Vec<_>>();
            if preferred.is_empty() {
                debug!(destination_id, "no activity matches the interests, using all");
                all
            } else {
                preferred
            }
        };

        if let Some(period) = constraints.time_of_day {
            pool.retain(|activity| activity.suits(period));
        }

        if let Some(max_cost) = constraints.max_cost {
            pool.retain(|activity| activity.cost <= max_cost);
        }

        pool.sort_by(|a, b| by_popularity_then_cost(a, b));
        pool.into_iter()
            .take(constraints.max_results)
            .cloned()
            .collect()
    }

    pub fn recommend_daily_plan(
        &self,
        prefs: &UserPreferences,
        destination_id: u32,
        day: u32,
        daily_budget: f64,
        rng: &mut dyn RandomSource,
    ) -> Result<DailyPlan> {
        let duration = prefs.duration()?;
        let destination = self.catalog.destination_by_id(destination_id)?;

        let morning_budget = daily_budget * self.config.morning_share;
        let afternoon_budget = daily_budget * self.config.afternoon_share;
        let evening_budget = daily_budget * self.config.evening_share;

        let name = destination.name.as_str();
        let morning = self
            .pick_slot(prefs, destination_id, TimeOfDay::Morning, morning_budget, rng)
            .unwrap_or_else(|| {
                PlanSlot::filler(
                    format!("Explore the area near your accommodation in {name}."),
                    0.0,
                )
            });
        let afternoon = self
            .pick_slot(prefs, destination_id, TimeOfDay::Afternoon, afternoon_budget, rng)
            .unwrap_or_else(|| {
                PlanSlot::filler(
                    format!("Enjoy local sights and culture in {name}."),
                    morning_budget / 2.0,
                )
            });
        let evening = self
            .pick_slot(prefs, destination_id, TimeOfDay::Evening, evening_budget, rng)
            .unwrap_or_else(|| {
                PlanSlot::filler(
                    format!("Dine at a local restaurant and experience {name}'s nightlife."),
                    evening_budget / 2.0,
                )
            });

        let total_cost = morning.cost + afternoon.cost + evening.cost;
        let title = day_title(destination, day, duration, [&morning, &afternoon, &evening], rng);

        Ok(DailyPlan {
            day,
            title,
            morning,
            afternoon,
            evening,
            total_cost,
        })
    }

    fn pick_slot(
        &self,
        prefs: &UserPreferences,
        destination_id: u32,
        period: TimeOfDay,
        budget: f64,
        rng: &mut dyn RandomSource,
    ) -> Option<PlanSlot> {
        let candidates = self.recommend_activities(
            prefs,
            destination_id,
            &ActivityConstraints {
                time_of_day: Some(period),
                max_cost: Some(budget),
                max_results: self.config.candidates_per_slot,
            },
        );

        let picked = choose(rng, &candidates).map(PlanSlot::from_activity);
        if picked.is_none() {
            debug!(
                destination_id,
                period = period.as_str(),
                budget,
                "no activity fits, using filler"
            );
        }
        picked
    }
}

fn fixed_mode_distance(mode: &str, rng: &mut dyn RandomSource) -> u32 {
    match mode {
        "Plane" => rng.int_inclusive(500, 5000),
        "Train" | "Bus" | "Car" => rng.int_inclusive(50, 800),
        _ => rng.int_inclusive(50, 2000),
    }
}

fn mode_for_distance(distance_km: u32, rng: &mut dyn RandomSource) -> &'static str {
    const MID_RANGE: [&str; 3] = ["Plane", "Train", "Car"];
    const SHORT_RANGE: [&str; 3] = ["Train", "Bus", "Car"];

    if distance_km > 1000 {
        "Plane"
    } else if distance_km > 300 {
        MID_RANGE[rng.index(MID_RANGE.len())]
    } else {
        SHORT_RANGE[rng.index(SHORT_RANGE.len())]
    }
}

fn day_title(
    destination: &Destination,
    day: u32,
    duration: u32,
    [morning, afternoon, evening]: [&PlanSlot; 3],
    rng: &mut dyn RandomSource,
) -> String {
    let name = &destination.name;
    if day == 1 {
        return format!("Welcome to {name}");
    }
    if day == duration {
        return format!("Final Day in {name}");
    }

    let mut keywords = Vec::new();
    if mentions_any(&morning.description, &["cultural", "museum"]) {
        keywords.push("Cultural");
    }
    if mentions_any(&afternoon.description, &["outdoor", "nature"]) {
        keywords.push("Outdoor");
    }
    if mentions_any(&evening.description, &["food", "cuisine"]) {
        keywords.push("Culinary");
    }

    match choose(rng, &keywords) {
        Some(keyword) => format!("Day of {keyword} Exploration in {name}"),
        None => format!("Exploring {name} - Day {day}"),
    }
}

fn mentions_any(text: &str, needles: &[&str]) -> bool {
    let lower = text.to_lowercase();
    needles.iter().any(|needle| lower.contains(needle))
}

fn by_price(a: &Accommodation, b: &Accommodation) -> Ordering {
    a.cost_per_night.total_cmp(&b.cost_per_night)
}

fn by_rating_then_price(a: &Accommodation, b: &Accommodation) -> Ordering {
    b.rating
        .total_cmp(&a.rating)
        .then_with(|| by_price(a, b))
}

fn by_popularity_then_cost(a: &Activity, b: &Activity) -> Ordering {
    b.popularity
        .total_cmp(&a.popularity)
        .then_with(|| a.cost.total_cmp(&b.cost))
}
