// Monoisotopic masses, in daltons.
pub const MASS_PROTON: f64 = 1.007276466621;
pub const MASS_ELECTRON: f64 = 0.00054857990946;
pub const MASS_WATER: f64 = 18.0105646863;
pub const MASS_NH3: f64 = 17.0265491015;
pub const MASS_CO: f64 = 27.9949146221;
pub const MASS_CO2: f64 = 43.9898292442;

/// Monoisotopic residue mass of a one-letter amino acid code.
///
/// Returns `None` for anything that is not one of the 20 standard
/// residues, selenocysteine (U) or pyrrolysine (O).
///
/// Example:
/// ```
/// use pepfrag::chemistry::residue_mass;
///
/// assert_eq!(residue_mass('G'), Some(57.02146372));
/// assert_eq!(residue_mass('B'), None);
/// ```
pub fn residue_mass(residue: char) -> Option<f64> {
    let mass = match residue {
        'G' => 57.02146372,
        'A' => 71.03711379,
        'S' => 87.03202841,
        'P' => 97.05276385,
        'V' => 99.06841391,
        'T' => 101.04767847,
        'C' => 103.00918478,
        'L' => 113.08406398,
        'I' => 113.08406398,
        'N' => 114.04292744,
        'D' => 115.02694303,
        'Q' => 128.05857751,
        'K' => 128.09496302,
        'E' => 129.04259309,
        'M' => 131.04048491,
        'H' => 137.05891186,
        'F' => 147.06841391,
        'U' => 150.95363559,
        'R' => 156.10111103,
        'Y' => 163.06332853,
        'W' => 186.07931295,
        'O' => 237.14772686,
        _ => return None,
    };
    Some(mass)
}

/// Calculate the m/z of an ion carrying `charge` protons.
///
/// Example:
/// ```
/// use pepfrag::chemistry::calculate_mz;
///
/// let mz = calculate_mz(1000.0, 2);
/// assert_eq!(mz, 501.007276466621);
/// ```
pub fn calculate_mz(neutral_mass: f64, charge: i32) -> f64 {
    (neutral_mass + charge as f64 * MASS_PROTON) / charge as f64
}

/// m/z of a radical cation that lost `charge` electrons instead of
/// gaining protons.
pub fn calculate_radical_mz(neutral_mass: f64, charge: i32) -> f64 {
    (neutral_mass - charge as f64 * MASS_ELECTRON) / charge as f64
}
