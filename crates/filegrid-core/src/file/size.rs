//! Byte-size humanization.

/// Units for [`humanize_size`], indexed by power of 1024.
///
/// There is no TB unit: anything at or above 1024^4 bytes is expressed in GB.
const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

const BASE: u64 = 1024;

/// Formats a byte count as a short human-readable string.
///
/// The unit is the largest power of 1024 not exceeding `bytes`, capped at GB.
/// The value is rounded to two decimal places, halves away from zero, and
/// trailing zeros are dropped.
///
/// # Examples
///
/// ```
/// use filegrid_core::file::humanize_size;
///
/// assert_eq!(humanize_size(0), "0 Bytes");
/// assert_eq!(humanize_size(1536), "1.5 KB");
/// assert_eq!(humanize_size(1_048_576), "1 MB");
/// assert_eq!(humanize_size(1024_u64.pow(4)), "1024 GB");
/// ```
pub fn humanize_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    // Integer log keeps exact powers of 1024 in their own band.
    let unit_index = (bytes.ilog(BASE) as usize).min(UNITS.len() - 1);
    let divisor = BASE.pow(unit_index as u32);

    format!(
        "{} {}",
        format_hundredths(round_hundredths(bytes, divisor)),
        UNITS[unit_index]
    )
}

/// `bytes / divisor` in hundredths, with exact halves rounded up.
///
/// Computed in integers so that ties such as `1.125` are detected exactly.
fn round_hundredths(bytes: u64, divisor: u64) -> u128 {
    let divisor = u128::from(divisor);
    (u128::from(bytes) * 200 + divisor) / (2 * divisor)
}

/// Renders hundredths without trailing zeros (`150` -> `1.5`, `200` -> `2`).
fn format_hundredths(hundredths: u128) -> String {
    let (whole, frac) = (hundredths / 100, hundredths % 100);
    match frac {
        0 => whole.to_string(),
        f if f % 10 == 0 => format!("{whole}.{}", f / 10),
        f => format!("{whole}.{f:02}"),
    }
}
