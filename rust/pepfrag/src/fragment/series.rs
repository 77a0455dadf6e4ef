use super::{
    Fragment,
    IonSeriesTerminality,
    IonType,
    NeutralLoss,
};
use crate::chemistry::{
    MASS_CO,
    MASS_NH3,
    MASS_PROTON,
    MASS_WATER,
    calculate_mz,
    calculate_radical_mz,
};
use crate::errors::Result;

/// Per-residue masses of a peptide with the modifications already
/// folded into the residue (or terminus) they sit on.
#[derive(Debug, Clone)]
pub(crate) struct MassLadder {
    pub residues: Vec<LadderStep>,
    pub nterm: f64,
    pub cterm: f64,
}

#[derive(Debug, Clone)]
pub(crate) struct LadderStep {
    pub code: char,
    pub mass: f64,
    pub mod_names: Vec<String>,
}

impl MassLadder {
    pub fn neutral_mass(&self) -> f64 {
        self.residues.iter().map(|x| x.mass).sum::<f64>() + self.nterm + self.cterm + MASS_WATER
    }
}

fn resolve_losses(losses: &[NeutralLoss]) -> Result<Vec<(&str, f64)>> {
    losses
        .iter()
        .map(|x| Ok((x.name(), x.mass()?)))
        .collect()
}

fn push_with_losses(
    out: &mut Vec<Fragment>,
    neutral_mass: f64,
    label: String,
    losses: &[(&str, f64)],
    to_mz: impl Fn(f64) -> f64,
) {
    out.push(Fragment {
        mass: to_mz(neutral_mass),
        label: label.clone(),
    });
    out.extend(losses.iter().map(|(loss_name, loss_mass)| Fragment {
        mass: to_mz(neutral_mass - loss_mass),
        label: format!("{}-{}", label, loss_name),
    }));
}

fn charge_suffix(charge: i32) -> String {
    match charge {
        1 => "+".to_string(),
        c => format!("{}+", c),
    }
}

pub(crate) fn precursor_ions(
    ladder: &MassLadder,
    charge: i32,
    radical: bool,
    losses: &[NeutralLoss],
) -> Result<Vec<Fragment>> {
    let losses = resolve_losses(losses)?;
    let mut out = Vec::with_capacity(losses.len() + 1);
    let neutral_mass = ladder.neutral_mass();
    if radical {
        let label = format!("[M]•{}", charge_suffix(charge));
        push_with_losses(&mut out, neutral_mass, label, &losses, |m| {
            calculate_radical_mz(m, charge)
        });
    } else {
        let label = match charge {
            1 => "[M+H]".to_string(),
            c => format!("[M+{}H]", c),
        };
        push_with_losses(&mut out, neutral_mass, label, &losses, |m| {
            calculate_mz(m, charge)
        });
    }
    Ok(out)
}

pub(crate) fn immonium_ions(ladder: &MassLadder, losses: &[NeutralLoss]) -> Result<Vec<Fragment>> {
    let losses = resolve_losses(losses)?;
    let mut out: Vec<Fragment> = Vec::new();
    let mut seen: Vec<String> = Vec::new();
    for step in ladder.residues.iter() {
        let label = if step.mod_names.is_empty() {
            format!("imm({})", step.code)
        } else {
            format!("imm({}[{}])", step.code, step.mod_names.join(","))
        };
        if seen.contains(&label) {
            continue;
        }
        seen.push(label.clone());
        // Immonium ions are reported as singly charged m/z directly.
        let neutral_mass = step.mass - MASS_CO;
        push_with_losses(&mut out, neutral_mass, label, &losses, |m| m + MASS_PROTON);
    }
    Ok(out)
}

/// Backbone fragment series (a/b/c from the N-terminus, y/z from the
/// C-terminus) for every cleavage site and every charge up to
/// `max_charge`.
pub(crate) fn backbone_ions(
    ladder: &MassLadder,
    ion_type: IonType,
    max_charge: i32,
    losses: &[NeutralLoss],
) -> Result<Vec<Fragment>> {
    let losses = resolve_losses(losses)?;
    let len = ladder.residues.len();
    if len < 2 {
        return Ok(Vec::new());
    }

    let offset = match ion_type {
        IonType::B | IonType::Y => 0.0,
        IonType::A => -MASS_CO,
        IonType::C => MASS_NH3,
        IonType::Z => -MASS_NH3,
        IonType::Precursor | IonType::Imm => return Ok(Vec::new()),
    };

    // Prefix sums from the side of the terminus the series keeps.
    let neutral_masses: Vec<f64> = match ion_type.terminality() {
        IonSeriesTerminality::NTerm => ladder.residues[..len - 1]
            .iter()
            .scan(ladder.nterm, |acc, x| {
                *acc += x.mass;
                Some(*acc + offset)
            })
            .collect(),
        IonSeriesTerminality::CTerm => ladder.residues[1..]
            .iter()
            .rev()
            .scan(ladder.cterm + MASS_WATER, |acc, x| {
                *acc += x.mass;
                Some(*acc + offset)
            })
            .collect(),
        IonSeriesTerminality::None => Vec::new(),
    };

    let mut out = Vec::with_capacity(neutral_masses.len() * max_charge as usize * (losses.len() + 1));
    for charge in 1..=max_charge {
        for (i, neutral_mass) in neutral_masses.iter().enumerate() {
            let label = format!("{}{}[{}]", ion_type, i + 1, charge_suffix(charge));
            push_with_losses(&mut out, *neutral_mass, label, &losses, |m| {
                calculate_mz(m, charge)
            });
        }
    }
    Ok(out)
}
