use std::collections::HashMap;

use chrono::NaiveDate;

use crate::error::Result;
use crate::segments::{SUNRISE, SUNSET};
use crate::types::{BandSpec, SolarEvents, TimeOfDay};

pub const NOON: &str = "noon";

/// External solar-time source, queried once per twilight band.
///
/// Implementations convert to the observer's timezone themselves and
/// report a domain failure (`Error::Oracle`) when the sun never reaches
/// the requested depression on that date/latitude. Results must not be
/// reused across distinct (date, location) pairs.
pub trait SolarOracle {
    fn solar_events(
        &self,
        date: NaiveDate,
        latitude: f64,
        longitude: f64,
        depression: f64,
    ) -> Result<SolarEvents>;
}

/// Gathers the label-to-time mapping `build_segments` consumes.
///
/// Sunrise, sunset, and noon come from the innermost band's answer; each
/// band contributes its dawn and dusk under its own labels. With no bands
/// the oracle is asked once at the horizon for the daylight pair alone.
pub fn collect_events<O: SolarOracle>(
    oracle: &O,
    date: NaiveDate,
    latitude: f64,
    longitude: f64,
    bands: &[BandSpec],
) -> Result<HashMap<String, TimeOfDay>> {
    let mut events = HashMap::with_capacity(2 * bands.len() + 3);

    if bands.is_empty() {
        let answer = oracle.solar_events(date, latitude, longitude, 0.0)?;
        insert_daylight_pair(&mut events, &answer);
        return Ok(events);
    }

    for (i, spec) in bands.iter().enumerate() {
        let answer = oracle.solar_events(date, latitude, longitude, spec.depression)?;
        if i == 0 {
            insert_daylight_pair(&mut events, &answer);
        }
        events.insert(spec.dawn.to_string(), answer.dawn);
        events.insert(spec.dusk.to_string(), answer.dusk);
    }

    Ok(events)
}

fn insert_daylight_pair(events: &mut HashMap<String, TimeOfDay>, answer: &SolarEvents) {
    events.insert(SUNRISE.to_string(), answer.sunrise);
    events.insert(SUNSET.to_string(), answer.sunset);
    if let Some(noon) = answer.noon {
        events.insert(NOON.to_string(), noon);
    }
}
