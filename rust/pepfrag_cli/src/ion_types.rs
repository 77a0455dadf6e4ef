use crate::errors::NeutralLossFormatError;
use pepfrag::{
    IonTypeSelection,
    NeutralLoss,
};

/// Decodes a single neutral loss given on the command line.
///
/// `NAME` is a loss the engine knows by name, `NAME=MASS` a custom loss.
pub fn decode_neutral_loss(raw: &str) -> Result<NeutralLoss, NeutralLossFormatError> {
    let parts: Vec<&str> = raw.split('=').collect();
    match parts.as_slice() {
        [name] => Ok(NeutralLoss::named(*name)),
        [name, mass] => {
            let mass = mass
                .parse::<f64>()
                .map_err(|source| NeutralLossFormatError::InvalidMass {
                    value: raw.to_string(),
                    source,
                })?;
            Ok(NeutralLoss::custom(*name, mass))
        }
        _ => Err(NeutralLossFormatError::Malformed {
            value: raw.to_string(),
        }),
    }
}

/// Accumulates the ion type flags of a command line into an
/// [`IonTypeSelection`].
///
/// `build` returns `None` when no flag was ever recorded, which is not the
/// same as an empty selection: the first means "let the engine decide".
#[derive(Debug, Default)]
pub struct IonTypeOptionsBuilder {
    options: Option<IonTypeSelection>,
}

impl IonTypeOptionsBuilder {
    /// Records one occurrence of the flag for `ion_type`.
    ///
    /// Empty values are ignored. An occurrence without values enables the
    /// ion type with no neutral losses, dropping losses recorded by
    /// earlier occurrences; otherwise the losses are appended.
    pub fn record<S: AsRef<str>>(
        &mut self,
        ion_type: &str,
        values: &[S],
    ) -> Result<(), NeutralLossFormatError> {
        let losses = values
            .iter()
            .map(|x| x.as_ref())
            .filter(|x| !x.is_empty())
            .map(decode_neutral_loss)
            .collect::<Result<Vec<_>, _>>()?;

        let options = self.options.get_or_insert_with(IonTypeSelection::new);
        if losses.is_empty() {
            options.insert(ion_type.to_string(), Vec::new());
        } else {
            options
                .entry(ion_type.to_string())
                .or_default()
                .extend(losses);
        }
        Ok(())
    }

    pub fn build(self) -> Option<IonTypeSelection> {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_named() {
        assert_eq!(decode_neutral_loss("NH3").unwrap(), NeutralLoss::named("NH3"));
    }

    #[test]
    fn test_decode_custom() {
        assert_eq!(
            decode_neutral_loss("TEST=12.01").unwrap(),
            NeutralLoss::custom("TEST", 12.01)
        );
    }

    #[test]
    fn test_decode_too_many_delimiters() {
        assert_eq!(
            decode_neutral_loss("A=B=1.0").unwrap_err(),
            NeutralLossFormatError::Malformed {
                value: "A=B=1.0".to_string()
            }
        );
    }

    #[test]
    fn test_decode_bad_mass() {
        let err = decode_neutral_loss("TEST=abc").unwrap_err();
        assert!(matches!(err, NeutralLossFormatError::InvalidMass { .. }));
    }

    #[test]
    fn test_no_flags_is_none() {
        assert!(IonTypeOptionsBuilder::default().build().is_none());
    }

    #[test]
    fn test_accumulates_in_flag_order() {
        let mut builder = IonTypeOptionsBuilder::default();
        builder.record("b", &["NH3"]).unwrap();
        builder.record("y", &["TEST=12.01", "CO"]).unwrap();
        builder.record::<&str>("precursor", &[]).unwrap();
        let options = builder.build().unwrap();

        let keys: Vec<&str> = options.keys().map(|x| x.as_str()).collect();
        assert_eq!(keys, vec!["b", "y", "precursor"]);
        assert_eq!(options["b"], vec![NeutralLoss::named("NH3")]);
        assert_eq!(
            options["y"],
            vec![NeutralLoss::custom("TEST", 12.01), NeutralLoss::named("CO")]
        );
        assert!(options["precursor"].is_empty());
    }

    #[test]
    fn test_repeated_flags_append() {
        let mut builder = IonTypeOptionsBuilder::default();
        builder.record("b", &["NH3"]).unwrap();
        builder.record("y", &["H2O"]).unwrap();
        builder.record("b", &["H2O"]).unwrap();
        let options = builder.build().unwrap();
        assert_eq!(
            options["b"],
            vec![NeutralLoss::named("NH3"), NeutralLoss::named("H2O")]
        );
        let keys: Vec<&str> = options.keys().map(|x| x.as_str()).collect();
        assert_eq!(keys, vec!["b", "y"]);
    }

    #[test]
    fn test_empty_occurrence_resets_losses() {
        let mut builder = IonTypeOptionsBuilder::default();
        builder.record("b", &["NH3"]).unwrap();
        builder.record("b", &[""]).unwrap();
        assert!(builder.build().unwrap()["b"].is_empty());
    }

    #[test]
    fn test_malformed_value_fails_record() {
        let mut builder = IonTypeOptionsBuilder::default();
        assert!(builder.record("b", &["NH3", "A=B=1.0"]).is_err());
    }
}
