//! Response of the astronomy endpoint: sun and moon ephemerides for up to 14 days.

use crate::types::api_date::ApiDate;
use crate::types::measurement::{FieldName, Measurement};
use crate::types::nullable::Nullable;
use crate::types::quantities::datetime::DateTimeValue;
use crate::types::source::Source;
use chrono::{DateTime, Days, FixedOffset, NaiveDate, TimeZone};
use serde::Deserialize;

/// Days past the run date for which the endpoint carries ephemerides.
pub const ASTRONOMY_HORIZON_DAYS: u64 = 14;

/// Sun and moon ephemerides for a coordinate, one entry per day starting at the run date.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AstronomicalInfo {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
    /// IANA zone name, e.g. `"Europe/Berlin"`. Days are split in this zone.
    #[serde(default)]
    pub time_zone: String,
    /// When the ephemerides were computed.
    pub run: DateTime<FixedOffset>,
    #[serde(default)]
    pub next_full_moon: Nullable<DateTime<FixedOffset>>,
    #[serde(default)]
    pub next_new_moon: Nullable<DateTime<FixedOffset>>,
    #[serde(default)]
    pub data: Vec<AstronomicalDay>,
}

/// Ephemerides for one calendar day. Events that do not occur on that day (polar night,
/// a moon that never rises) are absent.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AstronomicalDay {
    pub date: ApiDate,
    pub sunrise: Nullable<DateTime<FixedOffset>>,
    pub sunset: Nullable<DateTime<FixedOffset>>,
    pub transit: Nullable<DateTime<FixedOffset>>,
    pub civil_dawn: Nullable<DateTime<FixedOffset>>,
    pub civil_dusk: Nullable<DateTime<FixedOffset>>,
    pub nautical_dawn: Nullable<DateTime<FixedOffset>>,
    pub nautical_dusk: Nullable<DateTime<FixedOffset>>,
    pub astronomical_dawn: Nullable<DateTime<FixedOffset>>,
    pub astronomical_dusk: Nullable<DateTime<FixedOffset>>,
    pub moon_rise: Nullable<DateTime<FixedOffset>>,
    pub moon_set: Nullable<DateTime<FixedOffset>>,
    /// Illuminated fraction of the moon, in percent.
    pub moon_illumination: Nullable<f64>,
    /// Moon phase index as reported by the API.
    pub moon_phase: Nullable<i32>,
}

/// A daily sun or moon event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AstronomicalEvent {
    Sunrise,
    Sunset,
    Transit,
    CivilDawn,
    CivilDusk,
    NauticalDawn,
    NauticalDusk,
    AstronomicalDawn,
    AstronomicalDusk,
    Moonrise,
    Moonset,
}

impl AstronomicalEvent {
    pub const ALL: [AstronomicalEvent; 11] = [
        AstronomicalEvent::Sunrise,
        AstronomicalEvent::Sunset,
        AstronomicalEvent::Transit,
        AstronomicalEvent::CivilDawn,
        AstronomicalEvent::CivilDusk,
        AstronomicalEvent::NauticalDawn,
        AstronomicalEvent::NauticalDusk,
        AstronomicalEvent::AstronomicalDawn,
        AstronomicalEvent::AstronomicalDusk,
        AstronomicalEvent::Moonrise,
        AstronomicalEvent::Moonset,
    ];

    pub fn field_name(&self) -> FieldName {
        match self {
            AstronomicalEvent::Sunrise => FieldName::Sunrise,
            AstronomicalEvent::Sunset => FieldName::Sunset,
            AstronomicalEvent::Transit => FieldName::Transit,
            AstronomicalEvent::CivilDawn => FieldName::CivilDawn,
            AstronomicalEvent::CivilDusk => FieldName::CivilDusk,
            AstronomicalEvent::NauticalDawn => FieldName::NauticalDawn,
            AstronomicalEvent::NauticalDusk => FieldName::NauticalDusk,
            AstronomicalEvent::AstronomicalDawn => FieldName::AstronomicalDawn,
            AstronomicalEvent::AstronomicalDusk => FieldName::AstronomicalDusk,
            AstronomicalEvent::Moonrise => FieldName::Moonrise,
            AstronomicalEvent::Moonset => FieldName::Moonset,
        }
    }
}

impl AstronomicalDay {
    pub fn event(&self, event: AstronomicalEvent) -> Option<DateTime<FixedOffset>> {
        let value = match event {
            AstronomicalEvent::Sunrise => &self.sunrise,
            AstronomicalEvent::Sunset => &self.sunset,
            AstronomicalEvent::Transit => &self.transit,
            AstronomicalEvent::CivilDawn => &self.civil_dawn,
            AstronomicalEvent::CivilDusk => &self.civil_dusk,
            AstronomicalEvent::NauticalDawn => &self.nautical_dawn,
            AstronomicalEvent::NauticalDusk => &self.nautical_dusk,
            AstronomicalEvent::AstronomicalDawn => &self.astronomical_dawn,
            AstronomicalEvent::AstronomicalDusk => &self.astronomical_dusk,
            AstronomicalEvent::Moonrise => &self.moon_rise,
            AstronomicalEvent::Moonset => &self.moon_set,
        };
        value.value()
    }
}

fn instant_view(field: FieldName, value: Option<DateTime<FixedOffset>>) -> DateTimeValue {
    DateTimeValue(match value {
        Some(t) => Measurement::instant(field, Source::Unknown, t),
        None => Measurement::unavailable(field),
    })
}

impl AstronomicalInfo {
    /// IANA time zone of the location, if the name is recognised.
    pub fn time_zone(&self) -> Option<chrono_tz::Tz> {
        self.time_zone.parse().ok()
    }

    /// Calendar date of `t` in the location's time zone, or in `t`'s own zone when the
    /// location's zone is unknown.
    fn local_date<Tz: TimeZone>(&self, t: &DateTime<Tz>) -> NaiveDate {
        match self.time_zone() {
            Some(tz) => t.with_timezone(&tz).date_naive(),
            None => t.date_naive(),
        }
    }

    fn beyond_horizon(&self, date: NaiveDate) -> bool {
        self.local_date(&self.run)
            .checked_add_days(Days::new(ASTRONOMY_HORIZON_DAYS))
            .is_some_and(|horizon| date > horizon)
    }

    /// The record for `date`. Dates more than 14 days after the run never match.
    pub fn day_by_date(&self, date: NaiveDate) -> Option<&AstronomicalDay> {
        if self.beyond_horizon(date) {
            return None;
        }
        self.data.iter().find(|day| day.date.date() == date)
    }

    /// The record for the local calendar day containing `t`.
    pub fn day_by_time<Tz: TimeZone>(&self, t: &DateTime<Tz>) -> Option<&AstronomicalDay> {
        self.day_by_date(self.local_date(t))
    }

    /// The record for a `YYYY-MM-DD` date string. Unparseable strings never match.
    pub fn day_by_date_string(&self, date: &str) -> Option<&AstronomicalDay> {
        ApiDate::parse(date)
            .ok()
            .and_then(|d| self.day_by_date(d.date()))
    }

    pub fn event_by_time<Tz: TimeZone>(
        &self,
        event: AstronomicalEvent,
        t: &DateTime<Tz>,
    ) -> DateTimeValue {
        instant_view(
            event.field_name(),
            self.day_by_time(t).and_then(|day| day.event(event)),
        )
    }

    /// # Examples
    ///
    /// ```no_run
    /// # use meteologix::{AstronomicalEvent, Meteologix, LatLon, MeteologixError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), MeteologixError> {
    /// let client = Meteologix::new()?;
    /// let info = client.astronomical_info(LatLon(52.5067296, 13.2599306)).await?;
    /// let dusk = info.event_by_date_string(AstronomicalEvent::CivilDusk, "2023-05-28");
    /// println!("civil dusk: {dusk}");
    /// # Ok(())
    /// # }
    /// ```
    pub fn event_by_date_string(&self, event: AstronomicalEvent, date: &str) -> DateTimeValue {
        instant_view(
            event.field_name(),
            self.day_by_date_string(date).and_then(|day| day.event(event)),
        )
    }

    pub fn sunrise_by_time<Tz: TimeZone>(&self, t: &DateTime<Tz>) -> DateTimeValue {
        self.event_by_time(AstronomicalEvent::Sunrise, t)
    }

    pub fn sunrise_by_date_string(&self, date: &str) -> DateTimeValue {
        self.event_by_date_string(AstronomicalEvent::Sunrise, date)
    }

    pub fn sunset_by_time<Tz: TimeZone>(&self, t: &DateTime<Tz>) -> DateTimeValue {
        self.event_by_time(AstronomicalEvent::Sunset, t)
    }

    pub fn sunset_by_date_string(&self, date: &str) -> DateTimeValue {
        self.event_by_date_string(AstronomicalEvent::Sunset, date)
    }

    pub fn transit_by_time<Tz: TimeZone>(&self, t: &DateTime<Tz>) -> DateTimeValue {
        self.event_by_time(AstronomicalEvent::Transit, t)
    }

    pub fn transit_by_date_string(&self, date: &str) -> DateTimeValue {
        self.event_by_date_string(AstronomicalEvent::Transit, date)
    }

    pub fn moonrise_by_time<Tz: TimeZone>(&self, t: &DateTime<Tz>) -> DateTimeValue {
        self.event_by_time(AstronomicalEvent::Moonrise, t)
    }

    pub fn moonset_by_time<Tz: TimeZone>(&self, t: &DateTime<Tz>) -> DateTimeValue {
        self.event_by_time(AstronomicalEvent::Moonset, t)
    }

    /// Moon illumination in percent on the day containing `t`.
    pub fn moon_illumination_by_time<Tz: TimeZone>(&self, t: &DateTime<Tz>) -> Option<f64> {
        self.day_by_time(t).and_then(|day| day.moon_illumination.value())
    }

    pub fn moon_phase_by_time<Tz: TimeZone>(&self, t: &DateTime<Tz>) -> Option<i32> {
        self.day_by_time(t).and_then(|day| day.moon_phase.value())
    }

    pub fn next_full_moon(&self) -> DateTimeValue {
        instant_view(FieldName::NextFullMoon, self.next_full_moon.value())
    }

    pub fn next_new_moon(&self) -> DateTimeValue {
        instant_view(FieldName::NextNewMoon, self.next_new_moon.value())
    }
}
