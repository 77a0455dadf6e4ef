use clap::error::ErrorKind;
use clap::{
    Arg,
    ArgAction,
    ArgMatches,
    Command,
    CommandFactory,
    FromArgMatches,
    Parser,
};
use pepfrag::IonTypeSelection;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::ion_types::IonTypeOptionsBuilder;

#[derive(Parser, Debug)]
#[command(author, version, about = "Peptide fragmentation.", long_about = None)]
pub struct Cli {
    /// Peptide sequence, including modifications (e.g. [Acetyl]PEPM[Oxidation]K)
    pub sequence: String,

    /// Charge state of the peptide
    pub charge: i32,

    /// C-terminal modification
    #[arg(long)]
    pub cterm: Option<String>,

    /// Whether the precursor is a radical cation
    #[arg(short, long)]
    pub radical: bool,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to a Unimod XML export (unimod.xml), replaces the built-in
    /// modification table
    #[arg(long)]
    pub unimod: Option<PathBuf>,

    /// Ion types requested through the per-ion-type flags, `None` when
    /// no such flag was given.
    #[arg(skip)]
    pub ion_types: Option<IonTypeSelection>,
}

/// Builds the command line, adding one `--<ion type>` flag for every
/// identifier in `ion_types`.
pub fn build_command(ion_types: &[&str]) -> Command {
    ion_types.iter().fold(Cli::command(), |cmd, ion_type| {
        cmd.arg(
            Arg::new(ion_type.to_string())
                .long(ion_type.to_string())
                .num_args(0..)
                .action(ArgAction::Append)
                // Gives value-less occurrences a position on the command line.
                .default_missing_value("")
                .value_name("LOSS[=MASS]")
                .help(format!(
                    "Generate {} ions, with the given neutral losses",
                    ion_type
                )),
        )
    })
}

/// Occurrences of the ion type flags, in command line order.
fn ion_type_occurrences<'a>(
    matches: &ArgMatches,
    ion_types: &[&'a str],
) -> Vec<(&'a str, Vec<String>)> {
    let mut out: Vec<(usize, &'a str, Vec<String>)> = Vec::new();
    for ion_type in ion_types {
        let (Some(occurrences), Some(mut indices)) = (
            matches.get_occurrences::<String>(ion_type),
            matches.indices_of(ion_type),
        ) else {
            continue;
        };
        for occurrence in occurrences {
            let values: Vec<String> = occurrence.cloned().collect();
            let first = indices.next().unwrap_or(usize::MAX);
            indices
                .by_ref()
                .take(values.len().saturating_sub(1))
                .for_each(drop);
            out.push((first, *ion_type, values));
        }
    }
    out.sort_by_key(|(index, _, _)| *index);
    out.into_iter()
        .map(|(_, ion_type, values)| (ion_type, values))
        .collect()
}

/// Parses the command line, decoding the ion type flags into
/// [`Cli::ion_types`].
pub fn parse_args_from<I, T>(args: I, ion_types: &[&str]) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut command = build_command(ion_types);
    let matches = command.try_get_matches_from_mut(args)?;
    let mut cli = Cli::from_arg_matches(&matches)?;

    let mut builder = IonTypeOptionsBuilder::default();
    for (ion_type, values) in ion_type_occurrences(&matches, ion_types) {
        builder
            .record(ion_type, &values)
            .map_err(|e| command.error(ErrorKind::ValueValidation, e))?;
    }
    cli.ion_types = builder.build();
    Ok(cli)
}
