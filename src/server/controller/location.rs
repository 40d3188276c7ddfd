use axum::{extract::Path, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        location::{ContinentDto, CountryDto},
    },
    server::{
        error::AppError,
        location::{self, table::Continent},
    },
};

/// Tag for grouping location endpoints in OpenAPI documentation
pub static LOCATION_TAG: &str = "location";

fn continent_dto(continent: &Continent) -> ContinentDto {
    ContinentDto {
        name: continent.name.to_string(),
        countries: continent
            .countries
            .iter()
            .map(|country| CountryDto {
                name: country.name.to_string(),
                cities: country.cities.iter().map(|c| c.to_string()).collect(),
            })
            .collect(),
    }
}

fn owned(names: Vec<&'static str>) -> Vec<String> {
    names.into_iter().map(str::to_string).collect()
}

/// Get the whole continent → country → city tree.
#[utoipa::path(
    get,
    path = "/api/locations",
    tag = LOCATION_TAG,
    responses(
        (status = 200, description = "Location tree", body = Vec<ContinentDto>)
    ),
)]
pub async fn get_locations() -> impl IntoResponse {
    let tree: Vec<ContinentDto> = location::all().iter().map(continent_dto).collect();

    (StatusCode::OK, Json(tree))
}

#[utoipa::path(
    get,
    path = "/api/locations/continents",
    tag = LOCATION_TAG,
    responses(
        (status = 200, description = "Continent names", body = Vec<String>)
    ),
)]
pub async fn get_continents() -> impl IntoResponse {
    (StatusCode::OK, Json(owned(location::continents())))
}

/// Get the countries of a continent.
///
/// # Returns
/// - `200 OK` - Country names in display order
/// - `404 Not Found` - Unknown continent
#[utoipa::path(
    get,
    path = "/api/locations/continents/{continent}/countries",
    tag = LOCATION_TAG,
    params(
        ("continent" = String, Path, description = "Continent name, any letter case")
    ),
    responses(
        (status = 200, description = "Country names", body = Vec<String>),
        (status = 404, description = "Unknown continent", body = ErrorDto)
    ),
)]
pub async fn get_countries(Path(continent): Path<String>) -> Result<impl IntoResponse, AppError> {
    let countries = location::countries(&continent);
    if countries.is_empty() {
        return Err(AppError::NotFound(format!(
            "Unknown continent '{}'",
            continent
        )));
    }

    Ok((StatusCode::OK, Json(owned(countries))))
}

/// Get the cities of a country within a continent.
///
/// # Returns
/// - `200 OK` - City names in display order
/// - `404 Not Found` - Unknown continent, or country not on that continent
#[utoipa::path(
    get,
    path = "/api/locations/continents/{continent}/countries/{country}/cities",
    tag = LOCATION_TAG,
    params(
        ("continent" = String, Path, description = "Continent name, any letter case"),
        ("country" = String, Path, description = "Country name, any letter case")
    ),
    responses(
        (status = 200, description = "City names", body = Vec<String>),
        (status = 404, description = "Unknown continent or country", body = ErrorDto)
    ),
)]
pub async fn get_cities(
    Path((continent, country)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    location::validate_location(&continent, &country, None)
        .map_err(|e| AppError::NotFound(e.to_string()))?;

    Ok((
        StatusCode::OK,
        Json(owned(location::cities(&continent, &country))),
    ))
}
