use wayfarer_core::Destination;

struct Entry {
    id: u32,
    name: &'static str,
    region: &'static str,
    cost_level: u8,
    affinities: [f64; 7],
    climate: &'static str,
    best_seasons: &'static [&'static str],
    avg_daily_cost: f64,
    languages: &'static [&'static str],
    currency: &'static str,
    description: &'static str,
    local_transportation: &'static [&'static str],
    popular_attractions: &'static [&'static str],
}

// affinities: cultural, outdoor, culinary, relaxation, shopping, entertainment, sightseeing
const ENTRIES: [Entry; 10] = [
    Entry {
        id: 1,
        name: "Paris, France",
        region: "Europe",
        cost_level: 3,
        affinities: [0.9, 0.4, 0.8, 0.5, 0.9, 0.8, 0.9],
        climate: "temperate",
        best_seasons: &["spring", "fall"],
        avg_daily_cost: 150.0,
        languages: &["French", "English"],
        currency: "EUR",
        description: "The City of Light, known for its art, fashion, gastronomy, and culture.",
        local_transportation: &["Metro", "Bus", "Taxi", "Bicycle"],
        popular_attractions: &[
            "Eiffel Tower",
            "Louvre Museum",
            "Notre-Dame Cathedral",
            "Arc de Triomphe",
            "Montmartre",
            "Seine River",
        ],
    },
    Entry {
        id: 2,
        name: "Tokyo, Japan",
        region: "Asia",
        cost_level: 4,
        affinities: [0.8, 0.3, 0.9, 0.4, 0.8, 0.9, 0.8],
        climate: "temperate",
        best_seasons: &["spring", "fall"],
        avg_daily_cost: 120.0,
        languages: &["Japanese", "English (limited)"],
        currency: "JPY",
        description: "A vibrant mix of traditional and ultramodern culture.",
        local_transportation: &["Metro", "JR Lines", "Bus", "Taxi"],
        popular_attractions: &[
            "Tokyo Tower",
            "Shibuya Crossing",
            "Meiji Shrine",
            "Senso-ji Temple",
            "Imperial Palace",
            "Akihabara",
        ],
    },
    Entry {
        id: 3,
        name: "New York, USA",
        region: "North America",
        cost_level: 4,
        affinities: [0.9, 0.5, 0.9, 0.3, 0.9, 0.9, 0.8],
        climate: "temperate",
        best_seasons: &["spring", "fall"],
        avg_daily_cost: 200.0,
        languages: &["English"],
        currency: "USD",
        description: "The city that never sleeps, a global center for finance, culture, and entertainment.",
        local_transportation: &["Subway", "Bus", "Taxi", "Uber/Lyft"],
        popular_attractions: &[
            "Times Square",
            "Statue of Liberty",
            "Central Park",
            "Empire State Building",
            "Broadway",
            "Brooklyn Bridge",
        ],
    },
    Entry {
        id: 4,
        name: "Rome, Italy",
        region: "Europe",
        cost_level: 3,
        affinities: [1.0, 0.6, 0.9, 0.5, 0.7, 0.6, 0.9],
        climate: "mediterranean",
        best_seasons: &["spring", "fall"],
        avg_daily_cost: 120.0,
        languages: &["Italian", "English (limited)"],
        currency: "EUR",
        description: "The Eternal City with ancient ruins, art, and cuisine.",
        local_transportation: &["Metro", "Bus", "Taxi", "Tram"],
        popular_attractions: &[
            "Colosseum",
            "Roman Forum",
            "Vatican City",
            "Trevi Fountain",
            "Pantheon",
            "Spanish Steps",
        ],
    },
    Entry {
        id: 5,
        name: "Bali, Indonesia",
        region: "Asia",
        cost_level: 2,
        affinities: [0.7, 0.9, 0.7, 1.0, 0.5, 0.6, 0.7],
        climate: "tropical",
        best_seasons: &["dry season (Apr-Oct)"],
        avg_daily_cost: 60.0,
        languages: &["Indonesian", "English"],
        currency: "IDR",
        description: "Island paradise with beaches, temples, and lush landscapes.",
        local_transportation: &["Scooter rental", "Taxi", "Private driver"],
        popular_attractions: &[
            "Ubud Monkey Forest",
            "Tanah Lot Temple",
            "Uluwatu Temple",
            "Kuta Beach",
            "Rice Terraces",
            "Mount Batur",
        ],
    },
    Entry {
        id: 6,
        name: "Barcelona, Spain",
        region: "Europe",
        cost_level: 3,
        affinities: [0.8, 0.7, 0.9, 0.7, 0.8, 0.7, 0.8],
        climate: "mediterranean",
        best_seasons: &["spring", "early summer", "fall"],
        avg_daily_cost: 110.0,
        languages: &["Spanish", "Catalan", "English"],
        currency: "EUR",
        description: "Vibrant city with stunning architecture, beaches, and cuisine.",
        local_transportation: &["Metro", "Bus", "Taxi", "Bicycle"],
        popular_attractions: &[
            "Sagrada Familia",
            "Park Güell",
            "La Rambla",
            "Gothic Quarter",
            "Casa Batlló",
            "Barceloneta Beach",
        ],
    },
    Entry {
        id: 7,
        name: "Bangkok, Thailand",
        region: "Asia",
        cost_level: 2,
        affinities: [0.8, 0.5, 0.9, 0.5, 0.8, 0.7, 0.7],
        climate: "tropical",
        best_seasons: &["cool season (Nov-Feb)"],
        avg_daily_cost: 50.0,
        languages: &["Thai", "English (limited)"],
        currency: "THB",
        description: "Bustling city with temples, markets, and vibrant street life.",
        local_transportation: &["BTS Skytrain", "MRT Subway", "Taxi", "Tuk-tuk", "Boat"],
        popular_attractions: &[
            "Grand Palace",
            "Wat Arun",
            "Chatuchak Market",
            "Khao San Road",
            "Jim Thompson House",
            "Chao Phraya River",
        ],
    },
    Entry {
        id: 8,
        name: "Cape Town, South Africa",
        region: "Africa",
        cost_level: 2,
        affinities: [0.7, 0.9, 0.7, 0.6, 0.6, 0.6, 0.8],
        climate: "mediterranean",
        best_seasons: &["spring", "summer (Oct-Apr)"],
        avg_daily_cost: 80.0,
        languages: &["English", "Afrikaans", "Xhosa"],
        currency: "ZAR",
        description: "Stunning coastal city with mountains, beaches, and wildlife.",
        local_transportation: &["MyCiti Bus", "Taxi", "Uber", "Car rental"],
        popular_attractions: &[
            "Table Mountain",
            "Robben Island",
            "Cape of Good Hope",
            "V&A Waterfront",
            "Kirstenbosch Gardens",
            "Boulders Beach",
        ],
    },
    Entry {
        id: 9,
        name: "Sydney, Australia",
        region: "Oceania",
        cost_level: 4,
        affinities: [0.7, 0.9, 0.8, 0.7, 0.7, 0.7, 0.8],
        climate: "temperate",
        best_seasons: &["spring", "fall"],
        avg_daily_cost: 150.0,
        languages: &["English"],
        currency: "AUD",
        description: "Harbor city with iconic landmarks, beaches, and outdoor lifestyle.",
        local_transportation: &["Train", "Bus", "Ferry", "Light Rail", "Taxi"],
        popular_attractions: &[
            "Sydney Opera House",
            "Sydney Harbour Bridge",
            "Bondi Beach",
            "Darling Harbour",
            "Royal Botanic Garden",
            "Taronga Zoo",
        ],
    },
    Entry {
        id: 10,
        name: "Rio de Janeiro, Brazil",
        region: "South America",
        cost_level: 2,
        affinities: [0.7, 0.9, 0.7, 0.8, 0.6, 0.8, 0.8],
        climate: "tropical",
        best_seasons: &["winter (May-Oct)"],
        avg_daily_cost: 70.0,
        languages: &["Portuguese", "English (limited)"],
        currency: "BRL",
        description: "Vibrant city with stunning beaches, mountains, and culture.",
        local_transportation: &["Metro", "Bus", "Taxi", "Uber"],
        popular_attractions: &[
            "Christ the Redeemer",
            "Sugarloaf Mountain",
            "Copacabana Beach",
            "Ipanema Beach",
            "Tijuca Forest",
            "Lapa Steps",
        ],
    },
];

pub(crate) fn destinations() -> Vec<Destination> {
    ENTRIES.iter().map(to_destination).collect()
}

fn to_destination(entry: &Entry) -> Destination {
    Destination {
        id: entry.id,
        name: entry.name.to_string(),
        region: entry.region.to_string(),
        cost_level: entry.cost_level,
        affinities: entry.affinities,
        climate: entry.climate.to_string(),
        best_seasons: strings(entry.best_seasons),
        avg_daily_cost: entry.avg_daily_cost,
        languages: strings(entry.languages),
        currency: entry.currency.to_string(),
        description: entry.description.to_string(),
        local_transportation: strings(entry.local_transportation),
        popular_attractions: strings(entry.popular_attractions),
    }
}

pub(crate) fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
