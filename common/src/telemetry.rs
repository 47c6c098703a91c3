//! Latest-known vehicle telemetry.
//!
//! A [`TelemetryReading`] is what one poll of the vehicle interface returned; any field
//! the interface could not read this time is `None`. The frame loop folds readings into
//! the [`TelemetrySnapshot`] it renders from, between frames, so a frame never sees a
//! half-applied reading.
//!
//! # Field Availability
//!
//! A missing field keeps its previous value in the snapshot. A field that has never been
//! read stays `None` ("unknown"), which the compositor renders as a needle at rest.

use heapless::{String, Vec};

/// Maximum characters of a gear label ("P", "D", "3", ...).
pub const GEAR_LABEL_LEN: usize = 4;

/// Short gear indicator text.
pub type GearLabel = String<GEAR_LABEL_LEN>;

/// Build a gear label, truncating anything longer than [`GEAR_LABEL_LEN`] bytes.
pub fn gear_label(text: &str) -> GearLabel {
    let mut label = GearLabel::new();
    for c in text.chars() {
        if label.push(c).is_err() {
            break;
        }
    }
    label
}

/// One telemetry value of the snapshot.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TelemetryField {
    Speed,
    Rpm,
    FuelLevel,
    EngineTemperature,
    Gear,
}

impl TelemetryField {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Speed => "speed",
            Self::Rpm => "rpm",
            Self::FuelLevel => "fuel_level",
            Self::EngineTemperature => "engine_temperature",
            Self::Gear => "gear",
        }
    }
}

/// Fields a reading did not carry.
pub type MissingFields = Vec<TelemetryField, 5>;

/// Result of one poll of the vehicle interface.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct TelemetryReading {
    /// Vehicle speed, km/h.
    pub speed: Option<f32>,
    /// Engine speed, rpm.
    pub rpm: Option<f32>,
    /// Fuel level, percent.
    pub fuel_level: Option<f32>,
    /// Coolant temperature, °C.
    pub engine_temperature: Option<f32>,
    pub gear: Option<GearLabel>,
}

/// The values the cluster currently displays.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct TelemetrySnapshot {
    pub speed: Option<f32>,
    pub rpm: Option<f32>,
    pub fuel_level: Option<f32>,
    pub engine_temperature: Option<f32>,
    pub gear: Option<GearLabel>,
}

impl TelemetrySnapshot {
    /// Fold a reading in. Available fields overwrite, missing ones keep their old value.
    ///
    /// Returns the fields the reading did not carry.
    pub fn apply(
        &mut self,
        reading: &TelemetryReading,
    ) -> MissingFields {
        let mut missing = MissingFields::new();

        merge(&mut self.speed, reading.speed, TelemetryField::Speed, &mut missing);
        merge(&mut self.rpm, reading.rpm, TelemetryField::Rpm, &mut missing);
        merge(&mut self.fuel_level, reading.fuel_level, TelemetryField::FuelLevel, &mut missing);
        merge(
            &mut self.engine_temperature,
            reading.engine_temperature,
            TelemetryField::EngineTemperature,
            &mut missing,
        );
        merge(&mut self.gear, reading.gear.clone(), TelemetryField::Gear, &mut missing);

        missing
    }
}

fn merge<T>(
    slot: &mut Option<T>,
    incoming: Option<T>,
    field: TelemetryField,
    missing: &mut MissingFields,
) {
    match incoming {
        Some(value) => *slot = Some(value),
        // Capacity covers every field.
        None => {
            missing.push(field).ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_reading() -> TelemetryReading {
        TelemetryReading {
            speed: Some(60.0),
            rpm: Some(3000.0),
            fuel_level: Some(50.0),
            engine_temperature: Some(80.0),
            gear: Some(gear_label("D")),
        }
    }

    #[test]
    fn test_default_snapshot_is_unknown() {
        let snapshot = TelemetrySnapshot::default();
        assert_eq!(snapshot.speed, None);
        assert_eq!(snapshot.gear, None);
    }

    #[test]
    fn test_full_reading_overwrites_everything() {
        let mut snapshot = TelemetrySnapshot::default();
        let missing = snapshot.apply(&full_reading());
        assert!(missing.is_empty());
        assert_eq!(snapshot.speed, Some(60.0));
        assert_eq!(snapshot.rpm, Some(3000.0));
        assert_eq!(snapshot.fuel_level, Some(50.0));
        assert_eq!(snapshot.engine_temperature, Some(80.0));
        assert_eq!(snapshot.gear.as_deref(), Some("D"));
    }

    #[test]
    fn test_missing_fuel_leaves_other_fields_untouched() {
        let mut snapshot = TelemetrySnapshot::default();
        snapshot.apply(&full_reading());

        let reading = TelemetryReading {
            speed: Some(70.0),
            rpm: Some(3200.0),
            fuel_level: None,
            engine_temperature: Some(85.0),
            gear: Some(gear_label("D")),
        };
        let missing = snapshot.apply(&reading);

        assert_eq!(missing.as_slice(), &[TelemetryField::FuelLevel]);
        assert_eq!(snapshot.fuel_level, Some(50.0), "fuel holds its previous value");
        assert_eq!(snapshot.speed, Some(70.0));
        assert_eq!(snapshot.rpm, Some(3200.0));
        assert_eq!(snapshot.engine_temperature, Some(85.0));
        assert_eq!(snapshot.gear.as_deref(), Some("D"));
    }

    #[test]
    fn test_never_observed_field_stays_unknown() {
        let mut snapshot = TelemetrySnapshot::default();
        let missing = snapshot.apply(&TelemetryReading {
            speed: Some(10.0),
            ..TelemetryReading::default()
        });
        assert_eq!(missing.len(), 4);
        assert_eq!(snapshot.rpm, None);
        assert_eq!(snapshot.speed, Some(10.0));
    }

    #[test]
    fn test_gear_label_truncates() {
        assert_eq!(gear_label("N").as_str(), "N");
        assert_eq!(gear_label("PARKED").as_str(), "PARK");
    }

    #[test]
    fn test_field_names() {
        assert_eq!(TelemetryField::FuelLevel.name(), "fuel_level");
        assert_eq!(TelemetryField::Gear.name(), "gear");
    }
}
