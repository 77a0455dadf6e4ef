use crate::chemistry::residue_mass;
use crate::errors::{
    PepFragError,
    Result,
};
use crate::fragment::series::{
    LadderStep,
    MassLadder,
    backbone_ions,
    immonium_ions,
    precursor_ions,
};
use crate::fragment::{
    Fragment,
    IonType,
    IonTypeSelection,
    default_selection,
};
use serde::Serialize;
use std::fmt::Display;
use std::str::FromStr;
use tracing::debug;

/// Where on the peptide a modification sits.
///
/// Residue indices are zero-based and refer to the bare sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteLabel {
    NTerm,
    CTerm,
    Residue(usize),
}

impl Display for SiteLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteLabel::NTerm => write!(f, "nterm"),
            SiteLabel::CTerm => write!(f, "cterm"),
            SiteLabel::Residue(x) => write!(f, "{}", x),
        }
    }
}

impl Serialize for SiteLabel {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            SiteLabel::Residue(x) => serializer.serialize_u64(*x as u64),
            SiteLabel::NTerm | SiteLabel::CTerm => serializer.serialize_str(&self.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModSite {
    pub mass: f64,
    pub site: SiteLabel,
    pub name: String,
}

impl ModSite {
    pub fn new(mass: f64, site: SiteLabel, name: impl Into<String>) -> Self {
        Self {
            mass,
            site,
            name: name.into(),
        }
    }
}

/// A peptide ready to be fragmented.
#[derive(Debug, Clone)]
pub struct Peptide {
    sequence: String,
    charge: i32,
    modifications: Vec<ModSite>,
    radical: bool,
    ladder: MassLadder,
}

impl Peptide {
    /// Builds a peptide from its bare sequence and modification sites.
    ///
    /// Fails if the sequence contains something other than a known
    /// residue, if the charge is not positive or if a residue site points
    /// outside of the sequence.
    pub fn new(
        sequence: impl Into<String>,
        charge: i32,
        modifications: Vec<ModSite>,
        radical: bool,
    ) -> Result<Self> {
        let sequence = sequence.into();
        if charge < 1 {
            return Err(PepFragError::InvalidCharge { charge });
        }

        let mut residues = sequence
            .chars()
            .enumerate()
            .map(|(position, code)| match residue_mass(code) {
                Some(mass) => Ok(LadderStep {
                    code,
                    mass,
                    mod_names: Vec::new(),
                }),
                None => Err(PepFragError::UnknownResidue {
                    residue: code,
                    position,
                }),
            })
            .collect::<Result<Vec<_>>>()?;

        let mut nterm = 0.0;
        let mut cterm = 0.0;
        for modification in modifications.iter() {
            match modification.site {
                SiteLabel::NTerm => nterm += modification.mass,
                SiteLabel::CTerm => cterm += modification.mass,
                SiteLabel::Residue(site) => {
                    let len = residues.len();
                    let step = residues
                        .get_mut(site)
                        .ok_or(PepFragError::SiteOutOfRange { site, len })?;
                    step.mass += modification.mass;
                    step.mod_names.push(modification.name.clone());
                }
            }
        }

        Ok(Self {
            sequence,
            charge,
            modifications,
            radical,
            ladder: MassLadder {
                residues,
                nterm,
                cterm,
            },
        })
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    pub fn charge(&self) -> i32 {
        self.charge
    }

    pub fn modifications(&self) -> &[ModSite] {
        &self.modifications
    }

    pub fn radical(&self) -> bool {
        self.radical
    }

    /// Neutral monoisotopic mass, modifications included.
    pub fn mass(&self) -> f64 {
        self.ladder.neutral_mass()
    }

    /// Generates the fragment ions of the peptide.
    ///
    /// When `ion_types` is `None` the engine default selection is used
    /// (see [`default_selection`]). Fragments come out grouped by ion type
    /// in the order of the selection.
    pub fn fragment(&self, ion_types: Option<&IonTypeSelection>) -> Result<Vec<Fragment>> {
        let default;
        let selection = match ion_types {
            Some(x) => x,
            None => {
                default = default_selection();
                &default
            }
        };

        let max_fragment_charge = (self.charge - 1).max(1);
        let mut out = Vec::new();
        for (key, losses) in selection.iter() {
            let ion_type = IonType::from_str(key)?;
            let ions = match ion_type {
                IonType::Precursor => {
                    precursor_ions(&self.ladder, self.charge, self.radical, losses)?
                }
                IonType::Imm => immonium_ions(&self.ladder, losses)?,
                IonType::B | IonType::A | IonType::C | IonType::Y | IonType::Z => {
                    backbone_ions(&self.ladder, ion_type, max_fragment_charge, losses)?
                }
            };
            debug!("Generated {} {} ions", ions.len(), ion_type);
            out.extend(ions);
        }
        Ok(out)
    }
}
