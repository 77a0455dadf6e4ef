use pepfrag::Fragment;
use std::io::{
    self,
    Write,
};

/// Writes the fragments as an `Ion: m/z` table, in the order given.
pub fn write_fragments<W: Write>(
    out: &mut W,
    fragments: &[Fragment],
    decimals: usize,
) -> io::Result<()> {
    writeln!(out, "Ion: m/z")?;
    for fragment in fragments {
        writeln!(out, "{}: {:.*}", fragment.label, decimals, fragment.mass)?;
    }
    Ok(())
}
