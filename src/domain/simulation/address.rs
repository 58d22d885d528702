//! Simulated reverse geocoding for card delivery.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::domain::foundation::ValidationError;

pub const PROVINCIAS: [&str; 7] = [
    "San José",
    "Alajuela",
    "Cartago",
    "Heredia",
    "Guanacaste",
    "Puntarenas",
    "Limón",
];

const CANTON_SUFFIXES: [&str; 5] = ["Centro", "Norte", "Sur", "Este", "Oeste"];

const DISTRITOS: [&str; 4] = ["Primero", "Segundo", "Tercero", "Cuarto"];

pub const ESTIMATED_DELIVERY: &str = "24-48 horas";

/// A validated GPS position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Latitude must lie in [-90, 90] and longitude in [-180, 180].
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ValidationError::out_of_range("latitude", -90.0, 90.0, latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ValidationError::out_of_range(
                "longitude",
                -180.0,
                180.0,
                longitude,
            ));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressComponents {
    pub provincia: &'static str,
    pub canton: String,
    pub distrito: String,
    pub codigo_postal: u32,
    pub direccion_exacta: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddressValidation {
    pub address_validated: bool,
    pub coordinates: Coordinates,
    pub address_components: AddressComponents,
    pub delivery_feasible: bool,
    pub estimated_delivery: &'static str,
}

/// Invents a Costa Rican address for the given position.
pub fn resolve_address<R: Rng>(coordinates: Coordinates, rng: &mut R) -> AddressValidation {
    // The pools are non-empty constants so `choose` always yields.
    let provincia = *PROVINCIAS.choose(rng).unwrap_or(&PROVINCIAS[0]);
    let suffix = CANTON_SUFFIXES.choose(rng).unwrap_or(&CANTON_SUFFIXES[0]);
    let distrito = DISTRITOS.choose(rng).unwrap_or(&DISTRITOS[0]);

    let canton = format!("{} {}", provincia, suffix);
    let distrito = format!("Distrito {}", distrito);
    let direccion_exacta = format!("{}, {}, {}", provincia, canton, distrito);

    AddressValidation {
        address_validated: true,
        coordinates,
        address_components: AddressComponents {
            provincia,
            canton,
            distrito,
            codigo_postal: rng.gen_range(10_000..=99_999),
            direccion_exacta,
        },
        delivery_feasible: true,
        estimated_delivery: ESTIMATED_DELIVERY,
    }
}
