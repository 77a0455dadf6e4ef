use std::io::Write;
use tracing::{
    debug,
    info,
    instrument,
    warn,
};

use crate::cli::Cli;
use crate::config::Config;
use crate::errors::CliError;
use crate::render::write_fragments;
use crate::sequence::assemble_peptide;

/// Parses the peptide given on the command line, fragments it and writes
/// the fragment table to `out`.
#[instrument(skip_all, fields(sequence = %args.sequence, charge = args.charge))]
pub fn main_fragment<W: Write>(args: Cli, out: &mut W) -> Result<(), CliError> {
    let mut config = match args.config {
        Some(ref path) => {
            info!("Loading configuration from {}", path.display());
            Config::from_path(path)?
        }
        None => Config::default(),
    };
    if args.unimod.is_some() {
        config.unimod = args.unimod;
    }
    debug!("Using configuration: {:#?}", config);
    let ptmdb = config.mass_db()?;

    let spec = assemble_peptide(
        &args.sequence,
        args.cterm.as_deref(),
        args.charge,
        args.radical,
        &ptmdb,
    )?;
    info!(
        "Parsed {} with {} modification(s)",
        spec.sequence,
        spec.modifications.len()
    );
    let peptide = spec.into_peptide()?;

    if args.ion_types.is_none() {
        debug!("No ion types requested, using the engine defaults");
    }
    let fragments = peptide
        .fragment(args.ion_types.as_ref())
        .inspect_err(|e| {
            if e.is_fragmentation_key_error() {
                warn!("Fragmentation request rejected: {}", e);
            }
        })?;
    info!("Generated {} fragments", fragments.len());

    write_fragments(out, &fragments, config.decimals)?;
    Ok(())
}
