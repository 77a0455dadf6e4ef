use crate::chemistry::{
    MASS_CO,
    MASS_CO2,
    MASS_NH3,
    MASS_WATER,
};
use crate::errors::{
    PepFragError,
    Result,
};
use serde::{
    Deserialize,
    Serialize,
};
use std::fmt::Display;

/// A neutral loss considered when generating fragment ions.
///
/// Named losses are resolved against [`named_loss_mass`] when the
/// fragments are generated, custom ones carry their own mass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NeutralLoss {
    Named(String),
    Custom { name: String, mass: f64 },
}

impl NeutralLoss {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn custom(name: impl Into<String>, mass: f64) -> Self {
        Self::Custom {
            name: name.into(),
            mass,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::Custom { name, .. } => name,
        }
    }

    pub fn mass(&self) -> Result<f64> {
        match self {
            Self::Named(name) => named_loss_mass(name),
            Self::Custom { mass, .. } => Ok(*mass),
        }
    }
}

impl Display for NeutralLoss {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{}", name),
            Self::Custom { name, mass } => write!(f, "{}={}", name, mass),
        }
    }
}

/// Mass of one of the neutral losses the engine knows by name.
pub fn named_loss_mass(name: &str) -> Result<f64> {
    let mass = match name {
        "H2O" => MASS_WATER,
        "NH3" => MASS_NH3,
        "CO" => MASS_CO,
        "CO2" => MASS_CO2,
        "H3PO4" => 97.9768950,
        "HPO3" => 79.9663304,
        "CH4SO" => 63.9982859,
        _ => {
            return Err(PepFragError::UnknownNeutralLoss {
                name: name.to_string(),
            });
        }
    };
    Ok(mass)
}
