//! The TRC preamble contract.
//!
//! The first 5 lines of a TRC file are a fixed preamble. Line index 2 (0-based)
//! names the markers: a constant 12-character label (`Frame#\tTime\t`), then
//! the marker names separated by a 3-tab delimiter (one empty column each for
//! the Y and Z sub-headers), then 3 trailing delimiter characters. Numeric
//! sample rows start at line 5.
//!
//! These offsets are a format contract, not a heuristic; everything is
//! validated before slicing so a deviating file fails with a format error
//! instead of producing silently malformed names.

use anyhow::Result;

use crate::MarkerName;

/// Lines 0-4 are preamble; sample data starts at line 5.
pub const PREAMBLE_LINES: usize = 5;

const NAME_LINE: usize = 2;
// Length of the "Frame#\tTime\t" label preceding the first marker name.
const NAME_PREFIX_LEN: usize = 12;
const NAME_SUFFIX_LEN: usize = 3;
const NAME_DELIMITER: &str = "\t\t\t";

pub fn parse_marker_names(contents: &str) -> Result<Vec<MarkerName>> {
    let num_lines = contents.lines().take(PREAMBLE_LINES + 1).count();
    if num_lines < PREAMBLE_LINES + 1 {
        bail!(
            "TRC file has {} lines; expected a {}-line preamble followed by sample rows",
            num_lines,
            PREAMBLE_LINES
        );
    }
    // Guaranteed by the count above
    let line = contents.lines().nth(NAME_LINE).unwrap();

    if line.len() < NAME_PREFIX_LEN + NAME_SUFFIX_LEN {
        bail!(
            "marker name header (line {}) has {} characters; expected at least {}",
            NAME_LINE,
            line.len(),
            NAME_PREFIX_LEN + NAME_SUFFIX_LEN
        );
    }
    let names = match line.get(NAME_PREFIX_LEN..line.len() - NAME_SUFFIX_LEN) {
        Some(x) => x,
        None => bail!(
            "marker name header (line {}) isn't sliceable at the fixed label offsets; non-ASCII label?",
            NAME_LINE
        ),
    };

    let mut result = Vec::new();
    for name in names.split(NAME_DELIMITER) {
        if name.is_empty() || name.contains('\t') {
            bail!(
                "marker name header (line {}) contains an empty name; malformed delimiters in {:?}",
                NAME_LINE,
                line
            );
        }
        result.push(MarkerName::new(name));
    }
    Ok(result)
}
