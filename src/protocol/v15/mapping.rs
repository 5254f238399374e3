//! OCPP 1.5 enumeration tables
//!
//! Explicit, individually testable conversions between 1.5 wire
//! enumerators and domain enumerators. Every table is total in both
//! directions — the 1.5 schema expresses the full domain sets — except
//! the error code, where the wire `NoError` encodes an absent cause.

use crate::domain;

use super::wire;

// ── Authorization ──────────────────────────────────────────────

pub fn auth_status_to_domain(status: wire::AuthorizationStatus) -> domain::AuthorizationStatus {
    match status {
        wire::AuthorizationStatus::Accepted => domain::AuthorizationStatus::Accepted,
        wire::AuthorizationStatus::Blocked => domain::AuthorizationStatus::Blocked,
        wire::AuthorizationStatus::Expired => domain::AuthorizationStatus::Expired,
        wire::AuthorizationStatus::Invalid => domain::AuthorizationStatus::Invalid,
        wire::AuthorizationStatus::ConcurrentTx => domain::AuthorizationStatus::ConcurrentTx,
    }
}

pub fn auth_status_to_wire(status: domain::AuthorizationStatus) -> wire::AuthorizationStatus {
    match status {
        domain::AuthorizationStatus::Accepted => wire::AuthorizationStatus::Accepted,
        domain::AuthorizationStatus::Blocked => wire::AuthorizationStatus::Blocked,
        domain::AuthorizationStatus::Expired => wire::AuthorizationStatus::Expired,
        domain::AuthorizationStatus::Invalid => wire::AuthorizationStatus::Invalid,
        domain::AuthorizationStatus::ConcurrentTx => wire::AuthorizationStatus::ConcurrentTx,
    }
}

pub fn id_tag_info_to_wire(info: domain::IdTagInfo) -> wire::IdTagInfo {
    wire::IdTagInfo {
        status: auth_status_to_wire(info.status),
        expiry_date: info.expiry_date,
        parent_id_tag: info.parent_id_tag,
    }
}

// ── Registration ───────────────────────────────────────────────

pub fn registration_status_to_wire(accepted: bool) -> wire::RegistrationStatus {
    if accepted {
        wire::RegistrationStatus::Accepted
    } else {
        wire::RegistrationStatus::Rejected
    }
}

pub fn registration_status_to_domain(status: wire::RegistrationStatus) -> bool {
    matches!(status, wire::RegistrationStatus::Accepted)
}

// ── Charge point status ────────────────────────────────────────

/// The wire error code and vendor fields only carry meaning for
/// `Faulted`; for the other statuses they are dropped.
pub fn charge_point_status_to_domain(
    status: wire::ChargePointStatus,
    error_code: wire::ChargePointErrorCode,
    info: Option<String>,
    vendor_error_code: Option<String>,
) -> domain::ChargePointStatus {
    match status {
        wire::ChargePointStatus::Available => domain::ChargePointStatus::Available,
        wire::ChargePointStatus::Occupied => domain::ChargePointStatus::Occupied,
        wire::ChargePointStatus::Unavailable => domain::ChargePointStatus::Unavailable,
        wire::ChargePointStatus::Reserved => domain::ChargePointStatus::Reserved,
        wire::ChargePointStatus::Faulted => domain::ChargePointStatus::Faulted {
            error_code: error_code_to_domain(error_code),
            info,
            vendor_error_code,
        },
    }
}

/// `NoError` carries no cause and maps to `None`.
pub fn error_code_to_domain(
    code: wire::ChargePointErrorCode,
) -> Option<domain::ChargePointErrorCode> {
    match code {
        wire::ChargePointErrorCode::ConnectorLockFailure => {
            Some(domain::ChargePointErrorCode::ConnectorLockFailure)
        }
        wire::ChargePointErrorCode::HighTemperature => {
            Some(domain::ChargePointErrorCode::HighTemperature)
        }
        wire::ChargePointErrorCode::Mode3Error => Some(domain::ChargePointErrorCode::Mode3Error),
        wire::ChargePointErrorCode::PowerMeterFailure => {
            Some(domain::ChargePointErrorCode::PowerMeterFailure)
        }
        wire::ChargePointErrorCode::PowerSwitchFailure => {
            Some(domain::ChargePointErrorCode::PowerSwitchFailure)
        }
        wire::ChargePointErrorCode::ReaderFailure => {
            Some(domain::ChargePointErrorCode::ReaderFailure)
        }
        wire::ChargePointErrorCode::ResetFailure => {
            Some(domain::ChargePointErrorCode::ResetFailure)
        }
        wire::ChargePointErrorCode::GroundFailure => {
            Some(domain::ChargePointErrorCode::GroundFailure)
        }
        wire::ChargePointErrorCode::OverCurrentFailure => {
            Some(domain::ChargePointErrorCode::OverCurrentFailure)
        }
        wire::ChargePointErrorCode::UnderVoltage => {
            Some(domain::ChargePointErrorCode::UnderVoltage)
        }
        wire::ChargePointErrorCode::WeakSignal => Some(domain::ChargePointErrorCode::WeakSignal),
        wire::ChargePointErrorCode::OtherError => Some(domain::ChargePointErrorCode::OtherError),
        wire::ChargePointErrorCode::NoError => None,
    }
}

/// Outbound counterpart, total: every domain code has a 1.5 enumerator.
pub fn error_code_to_wire(code: domain::ChargePointErrorCode) -> wire::ChargePointErrorCode {
    match code {
        domain::ChargePointErrorCode::ConnectorLockFailure => {
            wire::ChargePointErrorCode::ConnectorLockFailure
        }
        domain::ChargePointErrorCode::HighTemperature => {
            wire::ChargePointErrorCode::HighTemperature
        }
        domain::ChargePointErrorCode::Mode3Error => wire::ChargePointErrorCode::Mode3Error,
        domain::ChargePointErrorCode::PowerMeterFailure => {
            wire::ChargePointErrorCode::PowerMeterFailure
        }
        domain::ChargePointErrorCode::PowerSwitchFailure => {
            wire::ChargePointErrorCode::PowerSwitchFailure
        }
        domain::ChargePointErrorCode::ReaderFailure => wire::ChargePointErrorCode::ReaderFailure,
        domain::ChargePointErrorCode::ResetFailure => wire::ChargePointErrorCode::ResetFailure,
        domain::ChargePointErrorCode::GroundFailure => wire::ChargePointErrorCode::GroundFailure,
        domain::ChargePointErrorCode::OverCurrentFailure => {
            wire::ChargePointErrorCode::OverCurrentFailure
        }
        domain::ChargePointErrorCode::UnderVoltage => wire::ChargePointErrorCode::UnderVoltage,
        domain::ChargePointErrorCode::WeakSignal => wire::ChargePointErrorCode::WeakSignal,
        domain::ChargePointErrorCode::OtherError => wire::ChargePointErrorCode::OtherError,
    }
}

// ── Diagnostics / firmware ─────────────────────────────────────

pub fn diagnostics_status_to_domain(status: wire::DiagnosticsStatus) -> bool {
    matches!(status, wire::DiagnosticsStatus::Uploaded)
}

pub fn diagnostics_status_to_wire(uploaded: bool) -> wire::DiagnosticsStatus {
    if uploaded {
        wire::DiagnosticsStatus::Uploaded
    } else {
        wire::DiagnosticsStatus::UploadFailed
    }
}

pub fn firmware_status_to_domain(status: wire::FirmwareStatus) -> domain::FirmwareStatus {
    match status {
        wire::FirmwareStatus::Downloaded => domain::FirmwareStatus::Downloaded,
        wire::FirmwareStatus::DownloadFailed => domain::FirmwareStatus::DownloadFailed,
        wire::FirmwareStatus::InstallationFailed => domain::FirmwareStatus::InstallationFailed,
        wire::FirmwareStatus::Installed => domain::FirmwareStatus::Installed,
    }
}

pub fn firmware_status_to_wire(status: domain::FirmwareStatus) -> wire::FirmwareStatus {
    match status {
        domain::FirmwareStatus::Downloaded => wire::FirmwareStatus::Downloaded,
        domain::FirmwareStatus::DownloadFailed => wire::FirmwareStatus::DownloadFailed,
        domain::FirmwareStatus::InstallationFailed => wire::FirmwareStatus::InstallationFailed,
        domain::FirmwareStatus::Installed => wire::FirmwareStatus::Installed,
    }
}

// ── Meter attributes ───────────────────────────────────────────

pub fn reading_context_to_domain(context: wire::ReadingContext) -> domain::ReadingContext {
    match context {
        wire::ReadingContext::InterruptionBegin => domain::ReadingContext::InterruptionBegin,
        wire::ReadingContext::InterruptionEnd => domain::ReadingContext::InterruptionEnd,
        wire::ReadingContext::SampleClock => domain::ReadingContext::SampleClock,
        wire::ReadingContext::SamplePeriodic => domain::ReadingContext::SamplePeriodic,
        wire::ReadingContext::TransactionBegin => domain::ReadingContext::TransactionBegin,
        wire::ReadingContext::TransactionEnd => domain::ReadingContext::TransactionEnd,
    }
}

pub fn reading_context_to_wire(context: domain::ReadingContext) -> wire::ReadingContext {
    match context {
        domain::ReadingContext::InterruptionBegin => wire::ReadingContext::InterruptionBegin,
        domain::ReadingContext::InterruptionEnd => wire::ReadingContext::InterruptionEnd,
        domain::ReadingContext::SampleClock => wire::ReadingContext::SampleClock,
        domain::ReadingContext::SamplePeriodic => wire::ReadingContext::SamplePeriodic,
        domain::ReadingContext::TransactionBegin => wire::ReadingContext::TransactionBegin,
        domain::ReadingContext::TransactionEnd => wire::ReadingContext::TransactionEnd,
    }
}

pub fn value_format_to_domain(format: wire::ValueFormat) -> domain::ValueFormat {
    match format {
        wire::ValueFormat::Raw => domain::ValueFormat::Raw,
        wire::ValueFormat::SignedData => domain::ValueFormat::SignedData,
    }
}

pub fn value_format_to_wire(format: domain::ValueFormat) -> wire::ValueFormat {
    match format {
        domain::ValueFormat::Raw => wire::ValueFormat::Raw,
        domain::ValueFormat::SignedData => wire::ValueFormat::SignedData,
    }
}

pub fn measurand_to_domain(measurand: wire::Measurand) -> domain::Measurand {
    match measurand {
        wire::Measurand::EnergyActiveExportRegister => {
            domain::Measurand::EnergyActiveExportRegister
        }
        wire::Measurand::EnergyActiveImportRegister => {
            domain::Measurand::EnergyActiveImportRegister
        }
        wire::Measurand::EnergyReactiveExportRegister => {
            domain::Measurand::EnergyReactiveExportRegister
        }
        wire::Measurand::EnergyReactiveImportRegister => {
            domain::Measurand::EnergyReactiveImportRegister
        }
        wire::Measurand::EnergyActiveExportInterval => {
            domain::Measurand::EnergyActiveExportInterval
        }
        wire::Measurand::EnergyActiveImportInterval => {
            domain::Measurand::EnergyActiveImportInterval
        }
        wire::Measurand::EnergyReactiveExportInterval => {
            domain::Measurand::EnergyReactiveExportInterval
        }
        wire::Measurand::EnergyReactiveImportInterval => {
            domain::Measurand::EnergyReactiveImportInterval
        }
        wire::Measurand::PowerActiveExport => domain::Measurand::PowerActiveExport,
        wire::Measurand::PowerActiveImport => domain::Measurand::PowerActiveImport,
        wire::Measurand::PowerReactiveExport => domain::Measurand::PowerReactiveExport,
        wire::Measurand::PowerReactiveImport => domain::Measurand::PowerReactiveImport,
        wire::Measurand::CurrentExport => domain::Measurand::CurrentExport,
        wire::Measurand::CurrentImport => domain::Measurand::CurrentImport,
        wire::Measurand::Voltage => domain::Measurand::Voltage,
        wire::Measurand::Temperature => domain::Measurand::Temperature,
    }
}

pub fn measurand_to_wire(measurand: domain::Measurand) -> wire::Measurand {
    match measurand {
        domain::Measurand::EnergyActiveExportRegister => {
            wire::Measurand::EnergyActiveExportRegister
        }
        domain::Measurand::EnergyActiveImportRegister => {
            wire::Measurand::EnergyActiveImportRegister
        }
        domain::Measurand::EnergyReactiveExportRegister => {
            wire::Measurand::EnergyReactiveExportRegister
        }
        domain::Measurand::EnergyReactiveImportRegister => {
            wire::Measurand::EnergyReactiveImportRegister
        }
        domain::Measurand::EnergyActiveExportInterval => {
            wire::Measurand::EnergyActiveExportInterval
        }
        domain::Measurand::EnergyActiveImportInterval => {
            wire::Measurand::EnergyActiveImportInterval
        }
        domain::Measurand::EnergyReactiveExportInterval => {
            wire::Measurand::EnergyReactiveExportInterval
        }
        domain::Measurand::EnergyReactiveImportInterval => {
            wire::Measurand::EnergyReactiveImportInterval
        }
        domain::Measurand::PowerActiveExport => wire::Measurand::PowerActiveExport,
        domain::Measurand::PowerActiveImport => wire::Measurand::PowerActiveImport,
        domain::Measurand::PowerReactiveExport => wire::Measurand::PowerReactiveExport,
        domain::Measurand::PowerReactiveImport => wire::Measurand::PowerReactiveImport,
        domain::Measurand::CurrentExport => wire::Measurand::CurrentExport,
        domain::Measurand::CurrentImport => wire::Measurand::CurrentImport,
        domain::Measurand::Voltage => wire::Measurand::Voltage,
        domain::Measurand::Temperature => wire::Measurand::Temperature,
    }
}

pub fn location_to_domain(location: wire::Location) -> domain::Location {
    match location {
        wire::Location::Inlet => domain::Location::Inlet,
        wire::Location::Outlet => domain::Location::Outlet,
        wire::Location::Body => domain::Location::Body,
    }
}

pub fn location_to_wire(location: domain::Location) -> wire::Location {
    match location {
        domain::Location::Inlet => wire::Location::Inlet,
        domain::Location::Outlet => wire::Location::Outlet,
        domain::Location::Body => wire::Location::Body,
    }
}

pub fn unit_to_domain(unit: wire::UnitOfMeasure) -> domain::UnitOfMeasure {
    match unit {
        wire::UnitOfMeasure::Wh => domain::UnitOfMeasure::Wh,
        wire::UnitOfMeasure::KWh => domain::UnitOfMeasure::KWh,
        wire::UnitOfMeasure::Varh => domain::UnitOfMeasure::Varh,
        wire::UnitOfMeasure::Kvarh => domain::UnitOfMeasure::Kvarh,
        wire::UnitOfMeasure::W => domain::UnitOfMeasure::W,
        wire::UnitOfMeasure::KW => domain::UnitOfMeasure::KW,
        wire::UnitOfMeasure::Var => domain::UnitOfMeasure::Var,
        wire::UnitOfMeasure::Kvar => domain::UnitOfMeasure::Kvar,
        wire::UnitOfMeasure::Amp => domain::UnitOfMeasure::Amp,
        wire::UnitOfMeasure::Volt => domain::UnitOfMeasure::Volt,
        wire::UnitOfMeasure::Celsius => domain::UnitOfMeasure::Celsius,
    }
}

pub fn unit_to_wire(unit: domain::UnitOfMeasure) -> wire::UnitOfMeasure {
    match unit {
        domain::UnitOfMeasure::Wh => wire::UnitOfMeasure::Wh,
        domain::UnitOfMeasure::KWh => wire::UnitOfMeasure::KWh,
        domain::UnitOfMeasure::Varh => wire::UnitOfMeasure::Varh,
        domain::UnitOfMeasure::Kvarh => wire::UnitOfMeasure::Kvarh,
        domain::UnitOfMeasure::W => wire::UnitOfMeasure::W,
        domain::UnitOfMeasure::KW => wire::UnitOfMeasure::KW,
        domain::UnitOfMeasure::Var => wire::UnitOfMeasure::Var,
        domain::UnitOfMeasure::Kvar => wire::UnitOfMeasure::Kvar,
        domain::UnitOfMeasure::Amp => wire::UnitOfMeasure::Amp,
        domain::UnitOfMeasure::Volt => wire::UnitOfMeasure::Volt,
        domain::UnitOfMeasure::Celsius => wire::UnitOfMeasure::Celsius,
    }
}

// ── Meter structures ───────────────────────────────────────────

/// Absent attributes take the protocol defaults.
pub fn sampled_value_to_domain(value: wire::SampledValue) -> domain::MeterReading {
    domain::MeterReading {
        value: value.value,
        context: value
            .context
            .map(reading_context_to_domain)
            .unwrap_or_default(),
        format: value.format.map(value_format_to_domain).unwrap_or_default(),
        measurand: value.measurand.map(measurand_to_domain).unwrap_or_default(),
        location: value.location.map(location_to_domain).unwrap_or_default(),
        unit: value.unit.map(unit_to_domain).unwrap_or_default(),
    }
}

pub fn meter_value_to_domain(value: wire::MeterValue) -> domain::MeterSample {
    domain::MeterSample {
        timestamp: value.timestamp,
        readings: value.value.into_iter().map(sampled_value_to_domain).collect(),
    }
}
