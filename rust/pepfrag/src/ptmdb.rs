use crate::errors::{
    PepFragError,
    Result,
};
use roxmltree::{
    Document,
    Node,
    ParsingOptions,
};
use std::collections::HashMap;
use tracing::debug;

/// Anything able to turn a modification name into a mass delta.
pub trait ModificationMassLookup {
    fn get_mass(&self, name: &str) -> Result<f64>;
}

/// In-memory table of Unimod modifications, keyed by their PSI-MS name.
///
/// The default table only holds common modifications. The complete
/// database is loaded from the `unimod.xml` file distributed by Unimod,
/// see [`UnimodDb::from_xml`].
///
/// Lookups are case-sensitive, `Oxidation` is known but `oxidation` is not.
///
/// Example:
/// ```
/// use pepfrag::{ModificationMassLookup, UnimodDb};
///
/// let db = UnimodDb::default();
/// assert_eq!(db.get_mass("Oxidation").unwrap(), 15.994915);
/// assert!(db.get_mass("NotAModification").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct UnimodDb {
    masses: HashMap<String, f64>,
}

impl Default for UnimodDb {
    fn default() -> Self {
        let masses = unimod_modification_masses()
            .into_iter()
            .map(|(name, mass)| (name.to_string(), mass))
            .collect();
        Self { masses }
    }
}

impl UnimodDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the table from the contents of a Unimod XML export.
    ///
    /// Every `mod` element contributes its `title` and the `mono_mass` of
    /// its `delta`. Element namespaces are ignored.
    ///
    /// Example:
    /// ```
    /// use pepfrag::{ModificationMassLookup, UnimodDb};
    ///
    /// let xml = r#"<unimod><modifications>
    ///   <mod title="Ethyl" record_id="280"><delta mono_mass="28.0313"/></mod>
    /// </modifications></unimod>"#;
    /// let db = UnimodDb::from_xml(xml).unwrap();
    /// assert_eq!(db.get_mass("Ethyl").unwrap(), 28.0313);
    /// assert!(db.get_mass("Oxidation").is_err());
    /// ```
    pub fn from_xml(xml: &str) -> Result<Self> {
        let document = Document::parse_with_options(
            xml,
            ParsingOptions {
                allow_dtd: true,
                ..Default::default()
            },
        )
        .map_err(|e| invalid_unimod(e.to_string()))?;

        let masses = document
            .descendants()
            .filter(|node| node.has_tag_name("mod"))
            .map(|node| parse_mod(&node))
            .collect::<Result<HashMap<String, f64>>>()?;

        if masses.is_empty() {
            return Err(invalid_unimod("no modifications found".to_string()));
        }
        debug!("Loaded {} Unimod modifications", masses.len());
        Ok(Self { masses })
    }

    /// Adds entries to the table, replacing existing ones with the same name.
    pub fn with_modifications<N: Into<String>>(
        mut self,
        modifications: impl IntoIterator<Item = (N, f64)>,
    ) -> Self {
        for (name, mass) in modifications {
            let name = name.into();
            if let Some(old) = self.masses.insert(name.clone(), mass) {
                debug!("Overriding mass of {} ({} -> {})", name, old, mass);
            }
        }
        self
    }

    pub fn len(&self) -> usize {
        self.masses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }
}

impl ModificationMassLookup for UnimodDb {
    fn get_mass(&self, name: &str) -> Result<f64> {
        self.masses
            .get(name)
            .copied()
            .ok_or_else(|| PepFragError::UnknownModification {
                name: name.to_string(),
            })
    }
}

impl<T: ModificationMassLookup + ?Sized> ModificationMassLookup for &T {
    fn get_mass(&self, name: &str) -> Result<f64> {
        (**self).get_mass(name)
    }
}

fn invalid_unimod(reason: String) -> PepFragError {
    PepFragError::InvalidUnimod { reason }
}

fn parse_mod(node: &Node) -> Result<(String, f64)> {
    let title = node
        .attribute("title")
        .ok_or_else(|| invalid_unimod("modification without a title".to_string()))?;
    let mono_mass = node
        .children()
        .find(|child| child.has_tag_name("delta"))
        .and_then(|delta| delta.attribute("mono_mass"))
        .ok_or_else(|| invalid_unimod(format!("no mass for {}", title)))?;
    let mass = mono_mass
        .parse::<f64>()
        .map_err(|e| invalid_unimod(format!("mass of {} ({}): {}", title, mono_mass, e)))?;
    Ok((title.to_string(), mass))
}

// Monoisotopic mass deltas.
fn unimod_modification_masses() -> Vec<(&'static str, f64)> {
    vec![
        ("Acetyl", 42.010565),
        ("Amidated", -0.984016),
        ("Biotin", 226.077598),
        ("Butyryl", 70.041865),
        ("Carbamidomethyl", 57.021464),
        ("Carbamyl", 43.005814),
        ("Carboxymethyl", 58.005479),
        ("Crotonyl", 68.026215),
        ("Cysteinyl", 119.004099),
        ("Deamidated", 0.984016),
        ("Dehydrated", -18.010565),
        ("Dimethyl", 28.031300),
        ("Dioxidation", 31.989829),
        ("Formyl", 27.994915),
        ("GlyGly", 114.042927),
        ("Hex", 162.052824),
        ("HexNAc", 203.079373),
        ("Malonyl", 86.000394),
        ("Methyl", 14.015650),
        ("Nitro", 44.985078),
        ("Nitrosyl", 28.990164),
        ("Oxidation", 15.994915),
        ("Phospho", 79.966331),
        ("Propionyl", 56.026215),
        ("Succinyl", 100.016044),
        ("Sulfo", 79.956815),
        ("TMT6plex", 229.162932),
        ("TMTpro", 304.207146),
        ("Trimethyl", 42.046950),
        ("Trioxidation", 47.984744),
        ("iTRAQ4plex", 144.102063),
        ("iTRAQ8plex", 304.205360),
    ]
}
