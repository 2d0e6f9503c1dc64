use std::fmt;

use crate::angles::FULL_CIRCLE;
use crate::error::{Error, Result};

pub const MINUTES_PER_DAY: i32 = 1440;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeOfDay {
    hour: i32,
    minute: i32,
}

impl TimeOfDay {
    pub fn new(hour: i32, minute: i32) -> Result<Self> {
        if !(0..24).contains(&hour) {
            return Err(Error::invalid_range("hour", hour as f64));
        }
        if !(0..60).contains(&minute) {
            return Err(Error::invalid_range("minute", minute as f64));
        }
        Ok(Self { hour, minute })
    }

    pub fn from_minutes(total_minutes: i32) -> Result<Self> {
        if !(0..MINUTES_PER_DAY).contains(&total_minutes) {
            return Err(Error::invalid_range(
                "minutes since midnight",
                total_minutes as f64,
            ));
        }
        Ok(Self {
            hour: total_minutes / 60,
            minute: total_minutes % 60,
        })
    }

    pub fn hour(&self) -> i32 {
        self.hour
    }

    pub fn minute(&self) -> i32 {
        self.minute
    }

    pub fn total_minutes(&self) -> i32 {
        self.hour * 60 + self.minute
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    Night,
    AstronomicalTwilight,
    NauticalTwilight,
    CivilTwilight,
    Daylight,
}

impl Band {
    pub fn name(&self) -> &'static str {
        match self {
            Band::Night => "night",
            Band::AstronomicalTwilight => "astronomical twilight",
            Band::NauticalTwilight => "nautical twilight",
            Band::CivilTwilight => "civil twilight",
            Band::Daylight => "daylight",
        }
    }

    pub fn fill_color(&self) -> &'static str {
        match self {
            Band::Night => "darkblue",
            Band::AstronomicalTwilight => "navy",
            Band::NauticalTwilight => "midnightblue",
            Band::CivilTwilight => "slateblue",
            Band::Daylight => "gold",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandSpec {
    pub depression: f64,
    pub band: Band,
    pub dawn: &'static str,
    pub dusk: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    pub start: f64,
    pub width: f64,
    pub band: Band,
}

impl ArcSegment {
    pub fn end(&self) -> f64 {
        (self.start + self.width).rem_euclid(FULL_CIRCLE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SolarEvents {
    pub sunrise: TimeOfDay,
    pub sunset: TimeOfDay,
    pub noon: Option<TimeOfDay>,
    pub dawn: TimeOfDay,
    pub dusk: TimeOfDay,
}
