pub mod angles;
pub mod dst;
pub mod error;
pub mod oracle;
pub mod segments;
pub mod types;

pub use angles::{angle_of, arc_width, hour_tick_angles, FULL_CIRCLE, HOURS_PER_DAY};

pub use dst::{dst_in_effect, dst_in_effect_today, first_sunday, second_sunday};

pub use error::{Error, Result};

pub use oracle::{collect_events, SolarOracle, NOON};

pub use segments::{
    build_segments, day_length_minutes, standard_bands, ASTRONOMICAL, CIVIL, NAUTICAL,
    SUNRISE, SUNSET,
};

pub use types::{
    ArcSegment, Band, BandSpec, SolarEvents, TimeOfDay, MINUTES_PER_DAY,
};
