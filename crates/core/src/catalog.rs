use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::models::{
    Accommodation, AccommodationType, Activity, Destination, InterestCategory, TransportationMode,
    ANY,
};
use crate::random::{choose, RandomSource};

/// Read-only queries the planner runs against the reference dataset.
///
/// Implementations hand out borrowed records; callers copy what they keep so
/// catalog entries are never annotated in place.
pub trait Catalog: Send + Sync {
    fn destinations(&self) -> &[Destination];
    fn activities(&self) -> &[Activity];
    fn accommodations(&self) -> &[Accommodation];
    fn transportation_modes(&self) -> &[TransportationMode];

    fn destination_names(&self) -> Vec<&str> {
        self.destinations()
            .iter()
            .map(|destination| destination.name.as_str())
            .collect()
    }

    fn destination_by_name(&self, name: &str) -> Result<&Destination> {
        let wanted = name.trim();
        self.destinations()
            .iter()
            .find(|destination| destination.name.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PlannerError::DestinationNotFound(wanted.to_string()))
    }

    fn destination_by_id(&self, id: u32) -> Result<&Destination> {
        self.destinations()
            .iter()
            .find(|destination| destination.id == id)
            .ok_or(PlannerError::DestinationIdNotFound(id))
    }

    fn activities_for(&self, destination_id: u32) -> Vec<&Activity> {
        self.activities()
            .iter()
            .filter(|activity| activity.destination_id == destination_id)
            .collect()
    }

    fn activities_for_category(
        &self,
        destination_id: u32,
        category: InterestCategory,
    ) -> Vec<&Activity> {
        self.activities()
            .iter()
            .filter(|activity| {
                activity.destination_id == destination_id && activity.category == category
            })
            .collect()
    }

    fn accommodations_for(&self, destination_id: u32) -> Vec<&Accommodation> {
        self.accommodations()
            .iter()
            .filter(|accommodation| accommodation.destination_id == destination_id)
            .collect()
    }

    /// `None` stands for "Any" and matches the unfiltered query.
    fn accommodations_for_type(
        &self,
        destination_id: u32,
        kind: Option<AccommodationType>,
    ) -> Vec<&Accommodation> {
        match kind {
            None => self.accommodations_for(destination_id),
            Some(kind) => self
                .accommodations()
                .iter()
                .filter(|accommodation| {
                    accommodation.destination_id == destination_id && accommodation.kind == kind
                })
                .collect(),
        }
    }

    /// Looks a mode up by name; `"Any"` picks one uniformly at random.
    fn transportation_by_mode(
        &self,
        mode: &str,
        rng: &mut dyn RandomSource,
    ) -> Result<&TransportationMode> {
        let modes = self.transportation_modes();
        if modes.is_empty() {
            return Err(PlannerError::NoTransportationModes);
        }

        let wanted = mode.trim();
        if wanted.eq_ignore_ascii_case(ANY) {
            return choose(rng, modes).ok_or(PlannerError::NoTransportationModes);
        }

        modes
            .iter()
            .find(|candidate| candidate.mode.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PlannerError::TransportationModeNotFound(wanted.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InMemoryCatalog {
    destinations: Vec<Destination>,
    activities: Vec<Activity>,
    accommodations: Vec<Accommodation>,
    transportation: Vec<TransportationMode>,
}

impl InMemoryCatalog {
    pub fn new(
        destinations: Vec<Destination>,
        activities: Vec<Activity>,
        accommodations: Vec<Accommodation>,
        transportation: Vec<TransportationMode>,
    ) -> Self {
        Self {
            destinations,
            activities,
            accommodations,
            transportation,
        }
    }
}

impl Catalog for InMemoryCatalog {
    fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    fn activities(&self) -> &[Activity] {
        &self.activities
    }

    fn accommodations(&self) -> &[Accommodation] {
        &self.accommodations
    }

    fn transportation_modes(&self) -> &[TransportationMode] {
        &self.transportation
    }
}
