//! OCPP 1.2 enumeration tables
//!
//! Explicit, individually testable conversions between 1.2 wire
//! enumerators and domain enumerators. Inbound conversions are total over
//! the wire enum; outbound conversions are defined over the subset of the
//! domain the 1.2 schema can express (the five 1.5-only error codes have
//! no 1.2 enumerator).

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

/// The wire error code only carries meaning for `Faulted`; for the other
/// statuses it is dropped.
pub fn charge_point_status_to_domain(
    status: wire::ChargePointStatus,
    error_code: wire::ChargePointErrorCode,
) -> domain::ChargePointStatus {
    match status {
        wire::ChargePointStatus::Available => domain::ChargePointStatus::Available,
        wire::ChargePointStatus::Occupied => domain::ChargePointStatus::Occupied,
        wire::ChargePointStatus::Unavailable => domain::ChargePointStatus::Unavailable,
        wire::ChargePointStatus::Faulted => domain::ChargePointStatus::Faulted {
            error_code: error_code_to_domain(error_code),
            info: None,
            vendor_error_code: None,
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
        wire::ChargePointErrorCode::NoError => None,
    }
}

/// Outbound counterpart; `None` when the domain code has no 1.2
/// enumerator. Dispatch never takes that path (responses carry no error
/// codes); this direction exists for the outbound client calls.
pub fn error_code_to_wire(
    code: domain::ChargePointErrorCode,
) -> Option<wire::ChargePointErrorCode> {
    match code {
        domain::ChargePointErrorCode::ConnectorLockFailure => {
            Some(wire::ChargePointErrorCode::ConnectorLockFailure)
        }
        domain::ChargePointErrorCode::HighTemperature => {
            Some(wire::ChargePointErrorCode::HighTemperature)
        }
        domain::ChargePointErrorCode::Mode3Error => Some(wire::ChargePointErrorCode::Mode3Error),
        domain::ChargePointErrorCode::PowerMeterFailure => {
            Some(wire::ChargePointErrorCode::PowerMeterFailure)
        }
        domain::ChargePointErrorCode::PowerSwitchFailure => {
            Some(wire::ChargePointErrorCode::PowerSwitchFailure)
        }
        domain::ChargePointErrorCode::ReaderFailure => {
            Some(wire::ChargePointErrorCode::ReaderFailure)
        }
        domain::ChargePointErrorCode::ResetFailure => {
            Some(wire::ChargePointErrorCode::ResetFailure)
        }
        domain::ChargePointErrorCode::GroundFailure
        | domain::ChargePointErrorCode::OverCurrentFailure
        | domain::ChargePointErrorCode::UnderVoltage
        | domain::ChargePointErrorCode::WeakSignal
        | domain::ChargePointErrorCode::OtherError => None,
    }
}

// ── Diagnostics ────────────────────────────────────────────────

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

// ── Firmware ───────────────────────────────────────────────────

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

#[cfg(test)]
mod tests {
    use super::*;

    const AUTH_STATUSES: [wire::AuthorizationStatus; 5] = [
        wire::AuthorizationStatus::Accepted,
        wire::AuthorizationStatus::Blocked,
        wire::AuthorizationStatus::Expired,
        wire::AuthorizationStatus::Invalid,
        wire::AuthorizationStatus::ConcurrentTx,
    ];

    const ERROR_CODES: [wire::ChargePointErrorCode; 7] = [
        wire::ChargePointErrorCode::ConnectorLockFailure,
        wire::ChargePointErrorCode::HighTemperature,
        wire::ChargePointErrorCode::Mode3Error,
        wire::ChargePointErrorCode::PowerMeterFailure,
        wire::ChargePointErrorCode::PowerSwitchFailure,
        wire::ChargePointErrorCode::ReaderFailure,
        wire::ChargePointErrorCode::ResetFailure,
    ];

    const FIRMWARE_STATUSES: [wire::FirmwareStatus; 4] = [
        wire::FirmwareStatus::Downloaded,
        wire::FirmwareStatus::DownloadFailed,
        wire::FirmwareStatus::InstallationFailed,
        wire::FirmwareStatus::Installed,
    ];

    #[test]
    fn auth_status_round_trips() {
        for status in AUTH_STATUSES {
            assert_eq!(auth_status_to_wire(auth_status_to_domain(status)), status);
        }
    }

    #[test]
    fn error_codes_round_trip_within_the_subset() {
        for code in ERROR_CODES {
            let domain = error_code_to_domain(code).expect("named cause");
            assert_eq!(error_code_to_wire(domain), Some(code));
        }
    }

    #[test]
    fn no_error_means_no_cause() {
        assert_eq!(error_code_to_domain(wire::ChargePointErrorCode::NoError), None);
    }

    #[test]
    fn newer_error_codes_have_no_wire_counterpart() {
        for code in [
            domain::ChargePointErrorCode::GroundFailure,
            domain::ChargePointErrorCode::OverCurrentFailure,
            domain::ChargePointErrorCode::UnderVoltage,
            domain::ChargePointErrorCode::WeakSignal,
            domain::ChargePointErrorCode::OtherError,
        ] {
            assert_eq!(error_code_to_wire(code), None);
        }
    }

    #[test]
    fn firmware_status_round_trips() {
        for status in FIRMWARE_STATUSES {
            assert_eq!(firmware_status_to_wire(firmware_status_to_domain(status)), status);
        }
    }

    #[test]
    fn diagnostics_and_registration_booleans_round_trip() {
        for status in [wire::DiagnosticsStatus::Uploaded, wire::DiagnosticsStatus::UploadFailed] {
            assert_eq!(
                diagnostics_status_to_wire(diagnostics_status_to_domain(status)),
                status
            );
        }
        for status in [wire::RegistrationStatus::Accepted, wire::RegistrationStatus::Rejected] {
            assert_eq!(
                registration_status_to_wire(registration_status_to_domain(status)),
                status
            );
        }
    }

    #[test]
    fn faulted_with_no_error_has_unknown_cause() {
        let status = charge_point_status_to_domain(
            wire::ChargePointStatus::Faulted,
            wire::ChargePointErrorCode::NoError,
        );
        assert_eq!(
            status,
            domain::ChargePointStatus::Faulted {
                error_code: None,
                info: None,
                vendor_error_code: None,
            }
        );
    }
}
