//! Meter sample model
//!
//! Meter data arrives in very different wire shapes per version: the 1.2
//! schema carries a bare `{timestamp, value}` record, the 1.5 schema a
//! nested structure with per-reading attributes. Both decode into
//! [`MeterSample`], with absent attributes replaced by the protocol
//! defaults — the domain model carries no optionality the protocol itself
//! treats as "assume default".

use chrono::{DateTime, Utc};

/// One timestamped set of readings from a meter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeterSample {
    pub timestamp: DateTime<Utc>,
    pub readings: Vec<MeterReading>,
}

/// A single measured value with all its attributes resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeterReading {
    pub value: String,
    pub context: ReadingContext,
    pub format: ValueFormat,
    pub measurand: Measurand,
    pub location: Location,
    pub unit: UnitOfMeasure,
}

impl MeterReading {
    /// A reading with every attribute at its protocol default.
    pub fn with_defaults(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            context: ReadingContext::default(),
            format: ValueFormat::default(),
            measurand: Measurand::default(),
            location: Location::default(),
            unit: UnitOfMeasure::default(),
        }
    }
}

/// Circumstance under which a reading was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadingContext {
    InterruptionBegin,
    InterruptionEnd,
    SampleClock,
    #[default]
    SamplePeriodic,
    TransactionBegin,
    TransactionEnd,
}

/// Encoding of the reading's value field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueFormat {
    #[default]
    Raw,
    SignedData,
}

/// Quantity that was measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Measurand {
    EnergyActiveExportRegister,
    #[default]
    EnergyActiveImportRegister,
    EnergyReactiveExportRegister,
    EnergyReactiveImportRegister,
    EnergyActiveExportInterval,
    EnergyActiveImportInterval,
    EnergyReactiveExportInterval,
    EnergyReactiveImportInterval,
    PowerActiveExport,
    PowerActiveImport,
    PowerReactiveExport,
    PowerReactiveImport,
    CurrentExport,
    CurrentImport,
    Voltage,
    Temperature,
}

/// Where on the charging infrastructure the value was measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Location {
    Inlet,
    #[default]
    Outlet,
    Body,
}

/// Unit of the measured value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitOfMeasure {
    #[default]
    Wh,
    KWh,
    Varh,
    Kvarh,
    W,
    KW,
    Var,
    Kvar,
    Amp,
    Volt,
    Celsius,
}
