use crate::errors::PepFragError;
use std::fmt::Display;
use std::str::FromStr;

/// Which terminus of the peptide a fragment series keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IonSeriesTerminality {
    NTerm,
    CTerm,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IonType {
    Precursor,
    Imm,
    B,
    A,
    C,
    Y,
    Z,
}

impl IonType {
    pub const ALL: [IonType; 7] = [
        IonType::Precursor,
        IonType::Imm,
        IonType::B,
        IonType::A,
        IonType::C,
        IonType::Y,
        IonType::Z,
    ];

    /// Lowercase identifier of the ion type, as used for command line flags
    /// and selection keys.
    pub fn name(&self) -> &'static str {
        match self {
            IonType::Precursor => "precursor",
            IonType::Imm => "imm",
            IonType::B => "b",
            IonType::A => "a",
            IonType::C => "c",
            IonType::Y => "y",
            IonType::Z => "z",
        }
    }

    /// Identifiers of every ion type the engine can generate.
    ///
    /// This is the vocabulary callers should expose to users, e.g. as
    /// command line flags.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|x| x.name()).collect()
    }

    pub fn terminality(&self) -> IonSeriesTerminality {
        match self {
            IonType::B | IonType::A | IonType::C => IonSeriesTerminality::NTerm,
            IonType::Y | IonType::Z => IonSeriesTerminality::CTerm,
            IonType::Precursor | IonType::Imm => IonSeriesTerminality::None,
        }
    }
}

impl Display for IonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for IonType {
    type Err = PepFragError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|x| x.name() == s)
            .copied()
            .ok_or_else(|| PepFragError::UnknownIonType {
                name: s.to_string(),
            })
    }
}
