use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// Wildcard accepted wherever a transportation mode or accommodation type is expected.
pub const ANY: &str = "Any";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InterestCategory {
    #[serde(rename = "Cultural & Historical")]
    CulturalHistorical,
    #[serde(rename = "Outdoor & Adventure")]
    OutdoorAdventure,
    #[serde(rename = "Food & Culinary")]
    FoodCulinary,
    #[serde(rename = "Relaxation & Wellness")]
    RelaxationWellness,
    #[serde(rename = "Shopping")]
    Shopping,
    #[serde(rename = "Entertainment")]
    Entertainment,
    #[serde(rename = "Sightseeing")]
    Sightseeing,
}

impl InterestCategory {
    /// Ordered the same way as the affinity columns of a destination feature vector.
    pub const ALL: [Self; 7] = [
        Self::CulturalHistorical,
        Self::OutdoorAdventure,
        Self::FoodCulinary,
        Self::RelaxationWellness,
        Self::Shopping,
        Self::Entertainment,
        Self::Sightseeing,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::CulturalHistorical => "Cultural & Historical",
            Self::OutdoorAdventure => "Outdoor & Adventure",
            Self::FoodCulinary => "Food & Culinary",
            Self::RelaxationWellness => "Relaxation & Wellness",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::Sightseeing => "Sightseeing",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "cultural & historical" | "cultural" | "historical" | "culture" => {
                Some(Self::CulturalHistorical)
            }
            "outdoor & adventure" | "outdoor" | "adventure" => Some(Self::OutdoorAdventure),
            "food & culinary" | "food" | "culinary" => Some(Self::FoodCulinary),
            "relaxation & wellness" | "relaxation" | "wellness" => Some(Self::RelaxationWellness),
            "shopping" => Some(Self::Shopping),
            "entertainment" | "nightlife" => Some(Self::Entertainment),
            "sightseeing" => Some(Self::Sightseeing),
            _ => None,
        }
    }

    pub fn feature_index(self) -> usize {
        match self {
            Self::CulturalHistorical => 0,
            Self::OutdoorAdventure => 1,
            Self::FoodCulinary => 2,
            Self::RelaxationWellness => 3,
            Self::Shopping => 4,
            Self::Entertainment => 5,
            Self::Sightseeing => 6,
        }
    }
}

impl fmt::Display for InterestCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    pub const ALL: [Self; 3] = [Self::Morning, Self::Afternoon, Self::Evening];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccommodationType {
    Hotel,
    Hostel,
    Airbnb,
    Resort,
}

impl AccommodationType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Hotel => "Hotel",
            Self::Hostel => "Hostel",
            Self::Airbnb => "Airbnb",
            Self::Resort => "Resort",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "hotel" => Some(Self::Hotel),
            "hostel" => Some(Self::Hostel),
            "airbnb" | "apartment" => Some(Self::Airbnb),
            "resort" => Some(Self::Resort),
            _ => None,
        }
    }
}

impl fmt::Display for AccommodationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: u32,
    pub name: String,
    pub region: String,
    /// 1 (budget) to 5 (luxury).
    pub cost_level: u8,
    /// Interest affinities in [0, 1], indexed by [`InterestCategory::feature_index`].
    pub affinities: [f64; 7],
    pub climate: String,
    pub best_seasons: Vec<String>,
    pub avg_daily_cost: f64,
    pub languages: Vec<String>,
    pub currency: String,
    pub description: String,
    pub local_transportation: Vec<String>,
    pub popular_attractions: Vec<String>,
}

impl Destination {
    /// Seven affinities followed by the cost level normalised to [0, 1].
    pub fn feature_vector(&self) -> [f64; 8] {
        let mut features = [0.0; 8];
        features[..7].copy_from_slice(&self.affinities);
        features[7] = f64::from(self.cost_level) / 5.0;
        features
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u32,
    pub destination_id: u32,
    pub name: String,
    pub category: InterestCategory,
    pub description: String,
    pub duration_hours: f64,
    pub cost: f64,
    pub morning_suitable: bool,
    pub afternoon_suitable: bool,
    pub evening_suitable: bool,
    pub popularity: f64,
}

impl Activity {
    pub fn suits(&self, period: TimeOfDay) -> bool {
        match period {
            TimeOfDay::Morning => self.morning_suitable,
            TimeOfDay::Afternoon => self.afternoon_suitable,
            TimeOfDay::Evening => self.evening_suitable,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accommodation {
    pub destination_id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AccommodationType,
    pub cost_per_night: f64,
    pub rating: f64,
    pub amenities: Vec<String>,
    pub suitable_for: Vec<String>,
    pub location_quality: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportationMode {
    pub mode: String,
    pub cost_per_km: f64,
    pub speed_km_h: f64,
    pub comfort_level: u8,
    pub eco_friendliness: u8,
    pub suitable_distance_min_km: f64,
    pub suitable_distance_max_km: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub origin: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: f64,
    /// `None` means "Any".
    pub transportation: Option<String>,
    /// `None` means "Any".
    pub accommodation: Option<AccommodationType>,
    pub activities: Vec<InterestCategory>,
    #[serde(default)]
    pub notes: String,
}

impl UserPreferences {
    /// Trip length in days, rejecting anything shorter than one day.
    pub fn duration(&self) -> Result<u32> {
        let days = (self.end_date - self.start_date).num_days();
        if days < 1 {
            return Err(PlannerError::InvalidPreferences(format!(
                "trip must last at least one day (start {}, end {})",
                self.start_date, self.end_date
            )));
        }
        u32::try_from(days).map_err(|_| {
            PlannerError::InvalidPreferences(format!("trip of {days} days is too long"))
        })
    }

    /// Checks every field the planner divides by or filters on and returns the duration.
    pub fn validate(&self) -> Result<u32> {
        let duration = self.duration()?;

        if !self.budget.is_finite() || self.budget <= 0.0 {
            return Err(PlannerError::InvalidPreferences(format!(
                "budget must be positive, got {}",
                self.budget
            )));
        }

        if self.activities.is_empty() {
            return Err(PlannerError::InvalidPreferences(
                "at least one interest category is required".to_string(),
            ));
        }

        if self.destination.trim().is_empty() {
            return Err(PlannerError::InvalidPreferences(
                "destination is required".to_string(),
            ));
        }

        Ok(duration)
    }

    /// The explicitly requested mode. Both `None` and "Any" leave the choice to the planner.
    pub fn requested_transportation(&self) -> Option<&str> {
        self.transportation
            .as_deref()
            .map(str::trim)
            .filter(|mode| !mode.eq_ignore_ascii_case(ANY))
    }

    pub fn transportation_label(&self) -> &str {
        self.requested_transportation().unwrap_or(ANY)
    }

    pub fn accommodation_label(&self) -> &'static str {
        self.accommodation.map(AccommodationType::label).unwrap_or(ANY)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportationSelection {
    pub mode: String,
    pub distance_km: u32,
    pub cost: f64,
    pub travel_time_hours: f64,
    pub details: String,
}

/// A copy of the chosen catalog entry, annotated with the cost of the whole stay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccommodationSelection {
    #[serde(flatten)]
    pub accommodation: Accommodation,
    pub total_cost: f64,
    /// False when nothing fit the nightly allowance and the cheapest entry was taken.
    pub within_budget: bool,
    /// True when the destination had no accommodations at all.
    pub synthetic: bool,
}

impl AccommodationSelection {
    pub fn synthetic(destination_id: u32, kind: AccommodationType, nights: u32) -> Self {
        let cost_per_night = 100.0;
        Self {
            accommodation: Accommodation {
                destination_id,
                name: "Local Accommodation".to_string(),
                kind,
                cost_per_night,
                rating: 4.0,
                amenities: vec!["WiFi".to_string(), "Breakfast".to_string()],
                suitable_for: Vec::new(),
                location_quality: 0.0,
            },
            total_cost: cost_per_night * f64::from(nights),
            within_budget: true,
            synthetic: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSlot {
    pub description: String,
    pub cost: f64,
    /// `None` for filler slots that do not come from the catalog.
    pub activity_id: Option<u32>,
}

impl PlanSlot {
    pub fn from_activity(activity: &Activity) -> Self {
        Self {
            description: activity.description.clone(),
            cost: activity.cost,
            activity_id: Some(activity.id),
        }
    }

    pub fn filler(description: String, cost: f64) -> Self {
        Self {
            description,
            cost,
            activity_id: None,
        }
    }

    pub fn is_filler(&self) -> bool {
        self.activity_id.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPlan {
    pub day: u32,
    pub title: String,
    pub morning: PlanSlot,
    pub afternoon: PlanSlot,
    pub evening: PlanSlot,
    pub total_cost: f64,
}

impl DailyPlan {
    pub fn slots(&self) -> [(TimeOfDay, &PlanSlot); 3] {
        [
            (TimeOfDay::Morning, &self.morning),
            (TimeOfDay::Afternoon, &self.afternoon),
            (TimeOfDay::Evening, &self.evening),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetBreakdown {
    pub transportation: f64,
    pub accommodation: f64,
    pub activities: f64,
    pub food: f64,
    pub miscellaneous: f64,
}

impl BudgetBreakdown {
    pub fn total(&self) -> f64 {
        self.transportation + self.accommodation + self.activities + self.food + self.miscellaneous
    }

    pub fn categories(&self) -> [(&'static str, f64); 5] {
        [
            ("Transportation", self.transportation),
            ("Accommodation", self.accommodation),
            ("Activities", self.activities),
            ("Food", self.food),
            ("Miscellaneous", self.miscellaneous),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub destination: Destination,
    pub transportation: TransportationSelection,
    pub accommodation: AccommodationSelection,
    pub daily_plans: Vec<DailyPlan>,
    pub overview: String,
    pub budget_breakdown: BudgetBreakdown,
    pub budget: f64,
    /// Transport and lodging overspent, so activities ran on the floor allowance.
    pub budget_floor_applied: bool,
}

impl Itinerary {
    pub fn duration(&self) -> usize {
        self.daily_plans.len()
    }

    /// Budget left after every category; negative when the plan overspends.
    pub fn remaining_budget(&self) -> f64 {
        self.budget - self.budget_breakdown.total()
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining_budget() < 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedDestination {
    pub destination: Destination,
    pub similarity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityConstraints {
    pub time_of_day: Option<TimeOfDay>,
    pub max_cost: Option<f64>,
    pub max_results: usize,
}

impl Default for ActivityConstraints {
    fn default() -> Self {
        Self {
            time_of_day: None,
            max_cost: None,
            max_results: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs(start: (i32, u32, u32), end: (i32, u32, u32)) -> UserPreferences {
        UserPreferences {
            origin: "New York".to_string(),
            destination: "Paris, France".to_string(),
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
            budget: 2000.0,
            transportation: None,
            accommodation: None,
            activities: vec![InterestCategory::Sightseeing],
            notes: String::new(),
        }
    }

    #[test]
    fn duration_counts_nights_between_dates() {
        assert_eq!(prefs((2026, 5, 1), (2026, 5, 8)).duration().unwrap(), 7);
    }

    #[test]
    fn same_day_trip_is_rejected() {
        let err = prefs((2026, 5, 1), (2026, 5, 1)).validate().unwrap_err();
        assert!(matches!(err, PlannerError::InvalidPreferences(_)));
    }

    #[test]
    fn empty_interests_are_rejected() {
        let mut p = prefs((2026, 5, 1), (2026, 5, 3));
        p.activities.clear();
        assert!(matches!(
            p.validate(),
            Err(PlannerError::InvalidPreferences(_))
        ));
    }

    #[test]
    fn non_positive_budget_is_rejected() {
        let mut p = prefs((2026, 5, 1), (2026, 5, 3));
        p.budget = 0.0;
        assert!(p.validate().is_err());
        p.budget = f64::NAN;
        assert!(p.validate().is_err());
    }

    #[test]
    fn category_parsing_accepts_labels_and_short_names() {
        assert_eq!(
            InterestCategory::parse("Food & Culinary"),
            Some(InterestCategory::FoodCulinary)
        );
        assert_eq!(
            InterestCategory::parse(" outdoor "),
            Some(InterestCategory::OutdoorAdventure)
        );
        assert_eq!(InterestCategory::parse("skiing"), None);
    }

    #[test]
    fn feature_vector_appends_normalised_cost_level() {
        let destination = Destination {
            id: 1,
            name: "Test".to_string(),
            region: "Nowhere".to_string(),
            cost_level: 4,
            affinities: [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7],
            climate: String::new(),
            best_seasons: Vec::new(),
            avg_daily_cost: 100.0,
            languages: Vec::new(),
            currency: "USD".to_string(),
            description: String::new(),
            local_transportation: Vec::new(),
            popular_attractions: Vec::new(),
        };
        let features = destination.feature_vector();
        assert_eq!(features[6], 0.7);
        assert!((features[7] - 0.8).abs() < 1e-12);
        assert_eq!(features[InterestCategory::FoodCulinary.feature_index()], 0.3);
    }
}
