use pepfrag::{
    ModSite,
    ModificationMassLookup,
    Peptide,
    SiteLabel,
};
use regex::{
    CaptureMatches,
    Regex,
};
use std::sync::LazyLock;

static MOD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(\w+)\]").expect("Modification pattern should compile"));

/// A bracketed modification name found in an annotated sequence.
///
/// `start` and `end` are the byte offsets of the whole `[name]` token,
/// end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModToken<'a> {
    pub name: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Iterator over the modification tokens of an annotated sequence,
/// left to right and never overlapping.
pub struct ModTokens<'a> {
    inner: CaptureMatches<'static, 'a>,
}

impl<'a> Iterator for ModTokens<'a> {
    type Item = ModToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = self.inner.next()?;
        let whole = caps.get(0)?;
        let name = caps.get(1)?;
        Some(ModToken {
            name: name.as_str(),
            start: whole.start(),
            end: whole.end(),
        })
    }
}

/// Scans `annotated` for `[name]` tokens.
///
/// Anything that does not match (unbalanced or empty brackets, names with
/// characters other than letters, digits and underscores) is left alone and
/// ends up as part of the sequence.
pub fn scan_mod_tokens(annotated: &str) -> ModTokens<'_> {
    ModTokens {
        inner: MOD_PATTERN.captures_iter(annotated),
    }
}

/// Splits an annotated sequence into the bare sequence and its modification
/// sites.
///
/// Sites are reported in the order they appear. The first annotation is
/// N-terminal wherever it sits, every other one refers to the (zero-based)
/// index of the residue that follows it in the bare sequence.
///
/// ```text
/// [iTRAQ8plex]ACP[Oxidation]LKY[Nitro]MR
///   -> ACPLKYMR, [nterm iTRAQ8plex, 3 Oxidation, 6 Nitro]
/// ```
pub fn parse_sequence(
    annotated: &str,
    ptmdb: &impl ModificationMassLookup,
) -> pepfrag::Result<(String, Vec<ModSite>)> {
    let mut mods = Vec::new();
    let mut sequence = String::with_capacity(annotated.len());
    // Residues copied into `sequence` so far, counted in chars.
    let mut num_residues = 0;
    let mut offset = 0;

    for token in scan_mod_tokens(annotated) {
        let literal = &annotated[offset..token.start];
        let site = if offset == 0 {
            SiteLabel::NTerm
        } else {
            SiteLabel::Residue(num_residues + literal.chars().count())
        };
        mods.push(ModSite::new(ptmdb.get_mass(token.name)?, site, token.name));

        sequence.push_str(literal);
        num_residues += literal.chars().count();
        offset = token.end;
    }

    sequence.push_str(&annotated[offset..]);
    Ok((sequence, mods))
}

/// Everything needed to build the peptide handed to the fragmentation engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPeptideSpec {
    pub sequence: String,
    pub modifications: Vec<ModSite>,
    pub charge: i32,
    pub radical: bool,
}

impl ParsedPeptideSpec {
    pub fn into_peptide(self) -> pepfrag::Result<Peptide> {
        Peptide::new(self.sequence, self.charge, self.modifications, self.radical)
    }
}

/// Parses the annotated sequence and appends the C-terminal modification,
/// if any, as the last site.
pub fn assemble_peptide(
    annotated: &str,
    cterm_mod: Option<&str>,
    charge: i32,
    radical: bool,
    ptmdb: &impl ModificationMassLookup,
) -> pepfrag::Result<ParsedPeptideSpec> {
    let (sequence, mut modifications) = parse_sequence(annotated, ptmdb)?;

    if let Some(name) = cterm_mod.filter(|x| !x.is_empty()) {
        modifications.push(ModSite::new(ptmdb.get_mass(name)?, SiteLabel::CTerm, name));
    }

    Ok(ParsedPeptideSpec {
        sequence,
        modifications,
        charge,
        radical,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pepfrag::{
        PepFragError,
        UnimodDb,
    };
    use std::collections::HashMap;

    struct FixedMasses(HashMap<&'static str, f64>);

    impl ModificationMassLookup for FixedMasses {
        fn get_mass(&self, name: &str) -> pepfrag::Result<f64> {
            self.0
                .get(name)
                .copied()
                .ok_or_else(|| PepFragError::UnknownModification {
                    name: name.to_string(),
                })
        }
    }

    fn fixed() -> FixedMasses {
        FixedMasses(HashMap::from([
            ("A", 1.0),
            ("B", 2.0),
            ("C", 3.0),
            ("iTRAQ8plex", 304.205360),
            ("Oxidation", 15.994915),
            ("Nitro", 44.985078),
        ]))
    }

    #[test]
    fn test_scan_mod_tokens() {
        let tokens: Vec<ModToken> = scan_mod_tokens("[A]PE[B_2]P").collect();
        assert_eq!(
            tokens,
            vec![
                ModToken {
                    name: "A",
                    start: 0,
                    end: 3
                },
                ModToken {
                    name: "B_2",
                    start: 5,
                    end: 10
                },
            ]
        );
    }

    #[test]
    fn test_scan_ignores_malformed_brackets() {
        for seq in ["PE[]P", "PE[A-B]P", "PE[AP", "PEA]P", "PE[[A]]P"] {
            let tokens: Vec<ModToken> = scan_mod_tokens(seq).collect();
            if seq == "PE[[A]]P" {
                // Only the inner, well formed token is recognized.
                assert_eq!(tokens.len(), 1);
                assert_eq!(tokens[0].name, "A");
                assert_eq!(tokens[0].start, 3);
            } else {
                assert!(tokens.is_empty(), "{} should have no tokens", seq);
            }
        }
    }

    #[test]
    fn test_scan_is_restartable() {
        let seq = "[A]PEP[B]TIDE";
        let first: Vec<ModToken> = scan_mod_tokens(seq).collect();
        let second: Vec<ModToken> = scan_mod_tokens(seq).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_modifications() {
        let db = fixed();
        for seq in ["ACPLK", "", "PEPTIDE"] {
            let (bare, mods) = parse_sequence(seq, &db).unwrap();
            assert_eq!(bare, seq);
            assert!(mods.is_empty());
        }
    }

    #[test]
    fn test_parse_is_idempotent_on_bare_sequences() {
        let db = fixed();
        let (bare, _) = parse_sequence("[A]AC[B]PLK", &db).unwrap();
        let (again, mods) = parse_sequence(&bare, &db).unwrap();
        assert_eq!(again, bare);
        assert!(mods.is_empty());
    }

    #[test]
    fn test_nterm_and_internal_modifications() {
        let db = fixed();
        let (bare, mods) = parse_sequence("[iTRAQ8plex]ACP[Oxidation]LKY[Nitro]MR", &db).unwrap();
        assert_eq!(bare, "ACPLKYMR");
        assert_eq!(
            mods,
            vec![
                ModSite::new(304.205360, SiteLabel::NTerm, "iTRAQ8plex"),
                ModSite::new(15.994915, SiteLabel::Residue(3), "Oxidation"),
                ModSite::new(44.985078, SiteLabel::Residue(6), "Nitro"),
            ]
        );
    }

    #[test]
    fn test_same_example_with_unimod() {
        let db = UnimodDb::default();
        let (bare, mods) = parse_sequence("[iTRAQ8plex]ACP[Oxidation]LKY[Nitro]MR", &db).unwrap();
        assert_eq!(bare, "ACPLKYMR");
        let sites: Vec<SiteLabel> = mods.iter().map(|x| x.site).collect();
        assert_eq!(
            sites,
            vec![
                SiteLabel::NTerm,
                SiteLabel::Residue(3),
                SiteLabel::Residue(6)
            ]
        );
    }

    #[test]
    fn test_only_first_token_is_nterm() {
        let db = fixed();
        let (bare, mods) = parse_sequence("[A][B]CDE", &db).unwrap();
        assert_eq!(bare, "CDE");
        assert_eq!(mods[0].site, SiteLabel::NTerm);
        assert_eq!(mods[1].site, SiteLabel::Residue(0));
    }

    #[test]
    fn test_first_token_is_nterm_even_after_residues() {
        let db = fixed();
        let (bare, mods) = parse_sequence("AC[A]K", &db).unwrap();
        assert_eq!(bare, "ACK");
        assert_eq!(mods, vec![ModSite::new(1.0, SiteLabel::NTerm, "A")]);

        let (bare, mods) = parse_sequence("AC[A]KL[B]M", &db).unwrap();
        assert_eq!(bare, "ACKLM");
        assert_eq!(
            mods,
            vec![
                ModSite::new(1.0, SiteLabel::NTerm, "A"),
                ModSite::new(2.0, SiteLabel::Residue(4), "B"),
            ]
        );

        let (_, mods) = parse_sequence("AC[Oxidation]K", &UnimodDb::default()).unwrap();
        assert_eq!(mods[0].site, SiteLabel::NTerm);
    }

    #[test]
    fn test_adjacent_and_trailing_tokens() {
        let db = fixed();
        let (bare, mods) = parse_sequence("PE[A][B]PT[C]", &db).unwrap();
        assert_eq!(bare, "PEPT");
        let sites: Vec<SiteLabel> = mods.iter().map(|x| x.site).collect();
        assert_eq!(
            sites,
            vec![
                SiteLabel::Residue(2),
                SiteLabel::Residue(2),
                SiteLabel::Residue(4)
            ]
        );
    }

    #[test]
    fn test_stray_closing_bracket_is_kept() {
        let db = fixed();
        let (bare, mods) = parse_sequence("[iTRAQ8plex]]TLPMW", &db).unwrap();
        assert_eq!(bare, "]TLPMW");
        assert_eq!(mods.len(), 1);
        assert_eq!(mods[0].site, SiteLabel::NTerm);
    }

    #[test]
    fn test_unknown_modification_propagates() {
        let db = fixed();
        let err = parse_sequence("PE[Nope]P", &db).unwrap_err();
        assert_eq!(
            err,
            PepFragError::UnknownModification {
                name: "Nope".to_string()
            }
        );
    }

    #[test]
    fn test_assemble_appends_cterm_last() {
        let db = fixed();
        let spec = assemble_peptide("[A]PE[B]PTIDE", Some("C"), 2, false, &db).unwrap();
        assert_eq!(spec.sequence, "PEPTIDE");
        assert_eq!(spec.charge, 2);
        assert!(!spec.radical);
        assert_eq!(spec.modifications.len(), 3);
        assert_eq!(
            spec.modifications.last().unwrap(),
            &ModSite::new(3.0, SiteLabel::CTerm, "C")
        );

        let spec = assemble_peptide("PEPTIDE", Some("C"), 1, true, &db).unwrap();
        assert_eq!(
            spec.modifications,
            vec![ModSite::new(3.0, SiteLabel::CTerm, "C")]
        );
    }

    #[test]
    fn test_assemble_without_cterm() {
        let db = fixed();
        let none = assemble_peptide("PE[B]P", None, 2, false, &db).unwrap();
        let empty = assemble_peptide("PE[B]P", Some(""), 2, false, &db).unwrap();
        assert_eq!(none, empty);
        assert!(
            none.modifications
                .iter()
                .all(|x| x.site != SiteLabel::CTerm)
        );
    }

    #[test]
    fn test_assemble_unknown_cterm() {
        let db = fixed();
        let err = assemble_peptide("PEPTIDE", Some("Nope"), 2, false, &db).unwrap_err();
        assert_eq!(
            err,
            PepFragError::UnknownModification {
                name: "Nope".to_string()
            }
        );
    }

    #[test]
    fn test_into_peptide() {
        let db = UnimodDb::default();
        let spec = assemble_peptide("[Acetyl]PEPM[Oxidation]K", Some("Amidated"), 2, false, &db)
            .unwrap();
        let peptide = spec.into_peptide().unwrap();
        assert_eq!(peptide.sequence(), "PEPMK");
        assert_eq!(peptide.modifications().len(), 3);
    }
}
