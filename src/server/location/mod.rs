//! Hierarchical location lookup (continent → country → city).
//!
//! Locations come from a static table compiled into the binary. Lookups accept any
//! letter case and always hand back the canonical spelling from the table, so values
//! stored on events and used in filters compare with plain equality.
//!
//! `LocationSelection` models the three cascading dropdowns of the event forms and
//! filters: changing a parent level clears every level below it.

pub mod table;

use thiserror::Error;

use self::table::{Continent, Country, CONTINENTS};

/// Reasons a continent/country/city triple is rejected.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LocationError {
    #[error("Unknown continent '{0}'")]
    UnknownContinent(String),

    #[error("Country '{country}' is not part of {continent}")]
    CountryNotInContinent { continent: String, country: String },

    #[error("City '{city}' is not part of {country}")]
    CityNotInCountry { country: String, city: String },
}

/// Canonical location as stored on an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedLocation {
    pub continent: &'static str,
    pub country: &'static str,
    pub city: Option<&'static str>,
}

fn matches(canonical: &str, input: &str) -> bool {
    canonical.to_lowercase() == input.trim().to_lowercase()
}

fn find_continent(name: &str) -> Option<&'static Continent> {
    CONTINENTS.iter().find(|c| matches(c.name, name))
}

fn find_country(continent: &'static Continent, name: &str) -> Option<&'static Country> {
    continent.countries.iter().find(|c| matches(c.name, name))
}

fn find_city(country: &'static Country, name: &str) -> Option<&'static str> {
    country.cities.iter().copied().find(|c| matches(c, name))
}

/// The full table, in display order.
pub fn all() -> &'static [Continent] {
    CONTINENTS
}

/// All continent names in table order.
pub fn continents() -> Vec<&'static str> {
    CONTINENTS.iter().map(|c| c.name).collect()
}

/// Country names of a continent; empty when the continent is unknown.
pub fn countries(continent: &str) -> Vec<&'static str> {
    find_continent(continent)
        .map(|c| c.countries.iter().map(|co| co.name).collect())
        .unwrap_or_default()
}

/// City names of a country within a continent; empty when the pair is unknown.
pub fn cities(continent: &str, country: &str) -> Vec<&'static str> {
    find_continent(continent)
        .and_then(|c| find_country(c, country))
        .map(|co| co.cities.to_vec())
        .unwrap_or_default()
}

/// Finds the continent a country belongs to.
pub fn find_continent_of_country(country: &str) -> Option<&'static str> {
    CONTINENTS
        .iter()
        .find(|c| find_country(c, country).is_some())
        .map(|c| c.name)
}

/// Checks a location triple against the table and returns its canonical spelling.
///
/// A blank city is treated as absent.
pub fn validate_location(
    continent: &str,
    country: &str,
    city: Option<&str>,
) -> Result<ValidatedLocation, LocationError> {
    let found_continent = find_continent(continent)
        .ok_or_else(|| LocationError::UnknownContinent(continent.trim().to_string()))?;

    let found_country =
        find_country(found_continent, country).ok_or_else(|| LocationError::CountryNotInContinent {
            continent: found_continent.name.to_string(),
            country: country.trim().to_string(),
        })?;

    let city = match city.map(str::trim).filter(|c| !c.is_empty()) {
        Some(name) => Some(find_city(found_country, name).ok_or_else(|| {
            LocationError::CityNotInCountry {
                country: found_country.name.to_string(),
                city: name.to_string(),
            }
        })?),
        None => None,
    };

    Ok(ValidatedLocation {
        continent: found_continent.name,
        country: found_country.name,
        city,
    })
}

/// State of the three cascading location dropdowns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationSelection {
    pub continent: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
}

impl LocationSelection {
    pub fn new(continent: Option<String>, country: Option<String>, city: Option<String>) -> Self {
        Self {
            continent,
            country,
            city,
        }
    }

    /// Selects a continent; a different value clears country and city.
    pub fn set_continent(&mut self, continent: Option<String>) {
        if self.continent != continent {
            self.country = None;
            self.city = None;
        }
        self.continent = continent;
    }

    /// Selects a country; a different value clears the city.
    pub fn set_country(&mut self, country: Option<String>) {
        if self.country != country {
            self.city = None;
        }
        self.country = country;
    }

    pub fn set_city(&mut self, city: Option<String>) {
        self.city = city;
    }

    /// Applies the cascading reset to an arbitrary triple.
    ///
    /// Blank values count as unset. Known names are replaced with their canonical
    /// spelling. A level that does not belong to its selected parent is dropped along
    /// with every level below it. A country given without a continent infers the
    /// continent. Unknown top-level values are kept so a filter on them matches nothing.
    pub fn normalized(&self) -> LocationSelection {
        let clean = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        let continent = clean(&self.continent);
        let country = clean(&self.country);
        let city = clean(&self.city);

        let continent = match (continent, &country) {
            (Some(c), _) => Some(c),
            (None, Some(co)) => find_continent_of_country(co).map(str::to_string),
            (None, None) => None,
        };

        let Some(continent) = continent else {
            // Country unknown and no continent: nothing to check against.
            return LocationSelection {
                continent: None,
                country,
                city,
            };
        };

        let Some(found_continent) = find_continent(&continent) else {
            return LocationSelection {
                continent: Some(continent),
                country: None,
                city: None,
            };
        };

        let Some(found_country) = country.as_deref().and_then(|co| find_country(found_continent, co))
        else {
            return LocationSelection {
                continent: Some(found_continent.name.to_string()),
                country: None,
                city: None,
            };
        };

        LocationSelection {
            continent: Some(found_continent.name.to_string()),
            country: Some(found_country.name.to_string()),
            city: city
                .as_deref()
                .and_then(|c| find_city(found_country, c))
                .map(str::to_string),
        }
    }
}
