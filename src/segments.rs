use std::collections::HashMap;

use crate::angles::{angle_of, arc_width, FULL_CIRCLE};
use crate::error::{Error, Result};
use crate::types::{ArcSegment, Band, BandSpec, TimeOfDay, MINUTES_PER_DAY};

pub const SUNRISE: &str = "sunrise";
pub const SUNSET: &str = "sunset";

pub const CIVIL: BandSpec = BandSpec {
    depression: 6.0,
    band: Band::CivilTwilight,
    dawn: "civil_dawn",
    dusk: "civil_dusk",
};

pub const NAUTICAL: BandSpec = BandSpec {
    depression: 12.0,
    band: Band::NauticalTwilight,
    dawn: "nautical_dawn",
    dusk: "nautical_dusk",
};

pub const ASTRONOMICAL: BandSpec = BandSpec {
    depression: 18.0,
    band: Band::AstronomicalTwilight,
    dawn: "astro_dawn",
    dusk: "astro_dusk",
};

/// The three standard twilight bands in nesting order, innermost first.
pub fn standard_bands() -> [BandSpec; 3] {
    [CIVIL, NAUTICAL, ASTRONOMICAL]
}

fn event_angle(
    events: &HashMap<String, TimeOfDay>,
    label: &str,
    band: Band,
) -> Result<f64> {
    let t = events
        .get(label)
        .ok_or_else(|| Error::missing_event(label, band))?;
    Ok(angle_of(*t))
}

/// Builds the ordered arc segments tiling the 24-hour circle.
///
/// `bands` must be ordered by strictly increasing depression angle
/// (innermost twilight first); the oracle's event times, not this
/// function, determine the actual band widths. Segments are emitted
/// walking clockwise from the outermost dusk: night, morning twilights
/// from the widest band inward, daylight, evening twilights back out.
pub fn build_segments(
    events: &HashMap<String, TimeOfDay>,
    bands: &[BandSpec],
) -> Result<Vec<ArcSegment>> {
    let sunrise = event_angle(events, SUNRISE, Band::Daylight)?;
    let sunset = event_angle(events, SUNSET, Band::Daylight)?;

    let mut dawns = Vec::with_capacity(bands.len());
    let mut dusks = Vec::with_capacity(bands.len());
    for spec in bands {
        dawns.push(event_angle(events, spec.dawn, spec.band)?);
        dusks.push(event_angle(events, spec.dusk, spec.band)?);
    }

    let mut segments = Vec::with_capacity(2 * bands.len() + 2);

    for i in (0..bands.len()).rev() {
        let end = if i == 0 { sunrise } else { dawns[i - 1] };
        segments.push(ArcSegment {
            start: dawns[i],
            width: arc_width(dawns[i], end),
            band: bands[i].band,
        });
    }

    segments.push(ArcSegment {
        start: sunrise,
        width: arc_width(sunrise, sunset),
        band: Band::Daylight,
    });

    for i in 0..bands.len() {
        let start = if i == 0 { sunset } else { dusks[i - 1] };
        segments.push(ArcSegment {
            start,
            width: arc_width(start, dusks[i]),
            band: bands[i].band,
        });
    }

    // Night closes the circle. Taking the remainder instead of another
    // modulo difference keeps the total at exactly 2pi and gives a full
    // night circle when every boundary coincides (polar night); a
    // misordered ring cannot drive the width negative.
    let consumed: f64 = segments.iter().map(|s| s.width).sum();
    let night_start = dusks.last().copied().unwrap_or(sunset);
    let night = ArcSegment {
        start: night_start,
        width: (FULL_CIRCLE - consumed).max(0.0),
        band: Band::Night,
    };
    segments.insert(0, night);

    Ok(segments)
}

/// Minutes from sunrise to sunset, wrapping across midnight.
pub fn day_length_minutes(sunrise: TimeOfDay, sunset: TimeOfDay) -> i32 {
    (sunset.total_minutes() - sunrise.total_minutes()).rem_euclid(MINUTES_PER_DAY)
}
