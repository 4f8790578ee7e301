//! Human-friendly rendering of channel statistics.

use crate::ChannelStats;

const UNITS: [(u64, &str); 3] = [
    (1_000_000_000, "B"),
    (1_000_000, "M"),
    (1_000, "K"),
];

/// Abbreviates a count with a `K`, `M`, or `B` suffix.
///
/// Scaled values keep one decimal place and a trailing `.0` is dropped. Rounding applies to the
/// `f64` quotient, so 1450 is `1.4K` (1.45 is stored as 1.4499…), while exact halves such as
/// 1.25 round up. Unknown counts render as `N/A`.
///
/// ```
/// use channel_stats::format::format_number;
///
/// assert_eq!(format_number(Some(1500)), "1.5K");
/// assert_eq!(format_number(Some(2_000)), "2K");
/// assert_eq!(format_number(None), "N/A");
/// ```
pub fn format_number(n: Option<u64>) -> String {
    let Some(n) = n else {
        return "N/A".to_string();
    };

    for (unit, suffix) in UNITS {
        if n >= unit {
            let scaled = one_decimal(n as f64 / unit as f64);
            let scaled = scaled.strip_suffix(".0").unwrap_or(&scaled);
            return format!("{scaled}{suffix}");
        }
    }

    n.to_string()
}

/// Formats `x` with one decimal, rounding exact halves up.
///
/// `{:.1}` rounds the exact binary value, but sends exact halves to even.
fn one_decimal(x: f64) -> String {
    // exact halves at one decimal are the odd multiples of 0.25
    let quarters = x * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 == 1.0 {
        let tenths = (quarters as u64 * 5 + 1) / 2;
        format!("{}.{}", tenths / 10, tenths % 10)
    } else {
        format!("{x:.1}")
    }
}

/// Renders the results panel for a resolved channel.
pub fn render_stats(stats: &ChannelStats) -> String {
    let created = stats
        .created
        .map(|created| format!("  Created:     {}\n", created.strftime("%Y-%m-%d")))
        .unwrap_or_default();
    format!(
        "{name}\n  Channel ID:  {id}\n{created}  Subscribers: {subscribers}\n  Total Views: {views}\n  Videos:      {videos}\n",
        name = stats.name,
        id = stats.id,
        subscribers = format_number(stats.subscribers),
        views = format_number(stats.total_views),
        videos = format_number(stats.video_count),
    )
}
