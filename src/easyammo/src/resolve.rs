//! Penetration to background colour resolution

use crate::color::{interpolate, Color, ColorError};
use crate::config::{PenetrationTable, RangeEntry, ThresholdEntry};

/// Resolve the background colour for a penetration value
///
/// Threshold tables return the colour of the first entry whose
/// `min_penetration` is at or below `penetration`. Range tables use the first
/// range containing `penetration`; with `can_interpolate` the colour is a
/// gradient between the entry's endpoints, otherwise the start colour is used
/// as long as it is a vanilla name. Black when nothing matches.
pub fn resolve_color(
    penetration: i64,
    table: &PenetrationTable,
    can_interpolate: bool,
) -> Result<Color, ColorError> {
    match table {
        PenetrationTable::Thresholds(entries) => Ok(find_threshold(penetration, entries)
            .map_or(Color::BLACK, |entry| entry.background_color.into())),
        PenetrationTable::Ranges(entries) => match find_range(penetration, entries) {
            Some(entry) => range_color(penetration, entry, can_interpolate),
            None => Ok(Color::BLACK),
        },
    }
}

/// First threshold entry at or below `penetration`
pub fn find_threshold(penetration: i64, entries: &[ThresholdEntry]) -> Option<&ThresholdEntry> {
    entries.iter().find(|e| e.min_penetration <= penetration)
}

/// First range entry containing `penetration`
pub fn find_range(penetration: i64, entries: &[RangeEntry]) -> Option<&RangeEntry> {
    entries.iter().find(|e| e.range.contains(penetration))
}

/// Colour for `penetration` within a single range entry
///
/// Does not check that `penetration` lies in the range; the interpolation
/// amount is bounds-checked instead, so a value outside the range (or a range
/// with `max < min`) fails with [`ColorError::InvalidInterpolationAmount`].
pub fn range_color(
    penetration: i64,
    entry: &RangeEntry,
    can_interpolate: bool,
) -> Result<Color, ColorError> {
    let RangeEntry { range, colour } = entry;

    if can_interpolate {
        let amt = if range.max == range.min {
            0.0
        } else {
            // f64 throughout so extreme i64 bounds cannot overflow
            (penetration as f64 - range.min as f64) / (range.max as f64 - range.min as f64)
        };
        return interpolate(&colour.start, &colour.end, amt);
    }

    match &colour.start {
        Color::Hex(hex) => Err(ColorError::HexWithoutConverter(hex.to_string())),
        vanilla => Ok(vanilla.clone()),
    }
}
