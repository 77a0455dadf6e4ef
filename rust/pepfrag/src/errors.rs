use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub enum PepFragError {
    UnknownModification { name: String },
    UnknownNeutralLoss { name: String },
    UnknownIonType { name: String },
    UnknownResidue { residue: char, position: usize },
    InvalidCharge { charge: i32 },
    SiteOutOfRange { site: usize, len: usize },
    InvalidUnimod { reason: String },
}

impl Display for PepFragError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownModification { name } => write!(f, "Unknown modification: '{}'", name),
            Self::UnknownNeutralLoss { name } => write!(f, "Unknown neutral loss: '{}'", name),
            Self::UnknownIonType { name } => write!(f, "Unknown ion type: '{}'", name),
            Self::UnknownResidue { residue, position } => {
                write!(f, "Unknown residue '{}' at position {}", residue, position)
            }
            Self::InvalidCharge { charge } => {
                write!(f, "Invalid charge {}, expected a positive charge", charge)
            }
            Self::SiteOutOfRange { site, len } => write!(
                f,
                "Modification site {} is outside of a sequence of length {}",
                site, len
            ),
            Self::InvalidUnimod { reason } => write!(f, "Invalid Unimod database: {}", reason),
        }
    }
}

impl std::error::Error for PepFragError {}

impl PepFragError {
    /// Errors raised when the fragmentation request names an ion type
    /// or a neutral loss the engine does not know about.
    pub fn is_fragmentation_key_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownIonType { .. } | Self::UnknownNeutralLoss { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PepFragError>;
