pub mod chemistry;
pub mod errors;
pub mod fragment;
pub mod peptide;
pub mod ptmdb;

pub use errors::{
    PepFragError,
    Result,
};
pub use fragment::{
    Fragment,
    IonType,
    IonTypeSelection,
    NeutralLoss,
};
pub use peptide::{
    ModSite,
    Peptide,
    SiteLabel,
};
pub use ptmdb::{
    ModificationMassLookup,
    UnimodDb,
};
