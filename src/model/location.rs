use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CountryDto {
    pub name: String,
    pub cities: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ContinentDto {
    pub name: String,
    pub countries: Vec<CountryDto>,
}
