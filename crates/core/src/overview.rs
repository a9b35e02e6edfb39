use crate::models::{
    AccommodationSelection, DailyPlan, Destination, TransportationSelection, UserPreferences,
};
use crate::random::{choose, RandomSource};

const DATE_FORMAT: &str = "%B %d, %Y";

/// Free-form trip summary. Nothing downstream parses it.
pub fn compose_overview(
    prefs: &UserPreferences,
    destination: &Destination,
    transportation: &TransportationSelection,
    accommodation: &AccommodationSelection,
    daily_plans: &[DailyPlan],
    rng: &mut dyn RandomSource,
) -> String {
    let days = daily_plans.len();
    let name = &destination.name;

    let openings = [
        format!("Get ready for an amazing {days}-day adventure in {name}!"),
        format!("Your {days}-day journey to beautiful {name} awaits!"),
        format!("Prepare for an unforgettable {days}-day experience in {name}!"),
    ];
    let opening = choose(rng, &openings).cloned().unwrap_or_default();

    let descriptions = daily_plans
        .iter()
        .flat_map(|plan| plan.slots().map(|(_, slot)| slot.description.as_str()))
        .collect::<Vec<_>>();
    let highlights = if descriptions.is_empty() {
        format!("You'll have plenty of time to explore the best of {name}.")
    } else {
        let picked = rng
            .distinct_indices(descriptions.len(), 3)
            .into_iter()
            .map(|idx| descriptions[idx])
            .collect::<Vec<_>>();
        format!("Some highlights of your trip include: {}", picked.join("; "))
    };

    let stay = &accommodation.accommodation;
    format!(
        "{opening}\n\n\
         From {start} to {end}, you'll be exploring {name}. \
         You'll travel from {origin} to {name} by {mode}. \
         During your stay, you'll be enjoying the comfort of a {kind} accommodation at {stay_name}.\n\n\
         {highlights}\n\n\
         About {name}: {about}",
        start = prefs.start_date.format(DATE_FORMAT),
        end = prefs.end_date.format(DATE_FORMAT),
        origin = prefs.origin,
        mode = transportation.mode.to_lowercase(),
        kind = stay.kind.label().to_lowercase(),
        stay_name = stay.name,
        about = destination.description,
    )
}
