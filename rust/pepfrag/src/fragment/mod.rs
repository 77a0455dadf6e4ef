mod ion_type;
mod neutral_loss;
pub(crate) mod series;

use indexmap::IndexMap;
use serde::Serialize;

pub use ion_type::{
    IonSeriesTerminality,
    IonType,
};
pub use neutral_loss::{
    NeutralLoss,
    named_loss_mass,
};

/// Ion types to generate, keyed by ion type identifier, each with the
/// neutral losses to consider for that series.
///
/// Keys are plain identifiers so that callers need no compiled-in
/// knowledge of [`IonType`]; they are resolved when fragmenting.
pub type IonTypeSelection = IndexMap<String, Vec<NeutralLoss>>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fragment {
    pub mass: f64,
    pub label: String,
}

impl From<Fragment> for (f64, String) {
    fn from(x: Fragment) -> Self {
        (x.mass, x.label)
    }
}

/// Selection used when the caller does not ask for specific ion types.
pub fn default_selection() -> IonTypeSelection {
    let named = |names: &[&str]| -> Vec<NeutralLoss> {
        names.iter().map(|x| NeutralLoss::named(*x)).collect()
    };
    let mut out = IonTypeSelection::new();
    out.insert(
        IonType::Precursor.to_string(),
        named(&["H2O", "NH3", "CO2"]),
    );
    out.insert(IonType::Imm.to_string(), Vec::new());
    out.insert(IonType::B.to_string(), named(&["H2O", "NH3", "CO"]));
    out.insert(IonType::Y.to_string(), named(&["NH3", "H2O"]));
    out
}
