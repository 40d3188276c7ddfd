//! Compiled-in continent → country → city table.

/// A country and the cities events can be listed under.
#[derive(Debug)]
pub struct Country {
    pub name: &'static str,
    pub cities: &'static [&'static str],
}

/// A continent and its countries, in display order.
#[derive(Debug)]
pub struct Continent {
    pub name: &'static str,
    pub countries: &'static [Country],
}

pub static CONTINENTS: &[Continent] = &[
    Continent {
        name: "Africa",
        countries: &[
            Country {
                name: "Egypt",
                cities: &["Cairo", "Alexandria", "Dahab"],
            },
            Country {
                name: "Kenya",
                cities: &["Nairobi", "Mombasa"],
            },
            Country {
                name: "Morocco",
                cities: &["Marrakech", "Essaouira", "Casablanca"],
            },
            Country {
                name: "Nigeria",
                cities: &["Lagos", "Abuja"],
            },
            Country {
                name: "South Africa",
                cities: &["Cape Town", "Johannesburg", "Durban"],
            },
        ],
    },
    Continent {
        name: "Asia",
        countries: &[
            Country {
                name: "India",
                cities: &["Goa", "Mumbai", "New Delhi", "Bangalore"],
            },
            Country {
                name: "Indonesia",
                cities: &["Bali", "Jakarta"],
            },
            Country {
                name: "Japan",
                cities: &["Tokyo", "Osaka", "Kyoto"],
            },
            Country {
                name: "South Korea",
                cities: &["Seoul", "Busan"],
            },
            Country {
                name: "Thailand",
                cities: &["Bangkok", "Chiang Mai", "Koh Phangan"],
            },
            Country {
                name: "Vietnam",
                cities: &["Ho Chi Minh City", "Hanoi"],
            },
        ],
    },
    Continent {
        name: "Europe",
        countries: &[
            Country {
                name: "Belgium",
                cities: &["Brussels", "Antwerp", "Boom"],
            },
            Country {
                name: "Croatia",
                cities: &["Zagreb", "Split", "Tisno"],
            },
            Country {
                name: "France",
                cities: &["Paris", "Lyon", "Marseille"],
            },
            Country {
                name: "Germany",
                cities: &["Berlin", "Hamburg", "Munich", "Cologne", "Leipzig"],
            },
            Country {
                name: "Hungary",
                cities: &["Budapest"],
            },
            Country {
                name: "Netherlands",
                cities: &["Amsterdam", "Rotterdam", "Utrecht"],
            },
            Country {
                name: "Portugal",
                cities: &["Lisbon", "Porto", "Idanha-a-Nova"],
            },
            Country {
                name: "Spain",
                cities: &["Barcelona", "Madrid", "Ibiza", "Valencia"],
            },
            Country {
                name: "United Kingdom",
                cities: &["London", "Manchester", "Glasgow", "Bristol"],
            },
        ],
    },
    Continent {
        name: "North America",
        countries: &[
            Country {
                name: "Canada",
                cities: &["Montreal", "Toronto", "Vancouver"],
            },
            Country {
                name: "Mexico",
                cities: &["Mexico City", "Tulum", "Guadalajara"],
            },
            Country {
                name: "United States",
                cities: &[
                    "New York",
                    "Los Angeles",
                    "Chicago",
                    "Detroit",
                    "Miami",
                    "Black Rock City",
                ],
            },
        ],
    },
    Continent {
        name: "Oceania",
        countries: &[
            Country {
                name: "Australia",
                cities: &["Sydney", "Melbourne", "Brisbane", "Perth"],
            },
            Country {
                name: "New Zealand",
                cities: &["Auckland", "Wellington"],
            },
        ],
    },
    Continent {
        name: "South America",
        countries: &[
            Country {
                name: "Argentina",
                cities: &["Buenos Aires", "Córdoba"],
            },
            Country {
                name: "Brazil",
                cities: &["São Paulo", "Rio de Janeiro", "Florianópolis"],
            },
            Country {
                name: "Chile",
                cities: &["Santiago", "Valparaíso"],
            },
            Country {
                name: "Colombia",
                cities: &["Bogotá", "Medellín"],
            },
        ],
    },
];
