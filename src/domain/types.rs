//! Core domain entities shared by every protocol version

use std::fmt;

use chrono::{DateTime, Utc};

// ── Scopes ─────────────────────────────────────────────────────

/// Zero-based connector index.
///
/// The wire protocol numbers connectors from 1; the domain model counts
/// from 0. The codecs own the shift in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectorScope(u32);

impl ConnectorScope {
    /// Connector scope for a zero-based index.
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    /// Parse a one-based wire connector id.
    ///
    /// Wire id `0` addresses the whole charge point, not a connector, so
    /// it has no `ConnectorScope`.
    pub fn from_wire(connector_id: u32) -> Option<Self> {
        connector_id.checked_sub(1).map(Self)
    }

    /// The zero-based connector index.
    pub fn index(self) -> u32 {
        self.0
    }

    /// The one-based wire connector id.
    pub fn to_wire(self) -> u32 {
        self.0 + 1
    }
}

impl fmt::Display for ConnectorScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "connector {}", self.0)
    }
}

/// Addressing scope of a station-originated notification: one connector,
/// or the charge point as a whole (wire connector id `0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    ChargePoint,
    Connector(ConnectorScope),
}

impl Scope {
    /// Scope for a wire connector id (`0` = whole charge point).
    pub fn from_wire(connector_id: u32) -> Self {
        match ConnectorScope::from_wire(connector_id) {
            Some(connector) => Self::Connector(connector),
            None => Self::ChargePoint,
        }
    }

    /// The wire connector id for this scope.
    pub fn to_wire(&self) -> u32 {
        match self {
            Self::ChargePoint => 0,
            Self::Connector(connector) => connector.to_wire(),
        }
    }
}

// ── Authorization ──────────────────────────────────────────────

/// Outcome of an id-tag authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationStatus {
    Accepted,
    Blocked,
    Expired,
    Invalid,
    ConcurrentTx,
}

impl fmt::Display for AuthorizationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted => write!(f, "Accepted"),
            Self::Blocked => write!(f, "Blocked"),
            Self::Expired => write!(f, "Expired"),
            Self::Invalid => write!(f, "Invalid"),
            Self::ConcurrentTx => write!(f, "ConcurrentTx"),
        }
    }
}

/// Authorization metadata returned for an id tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdTagInfo {
    pub status: AuthorizationStatus,
    pub expiry_date: Option<DateTime<Utc>>,
    pub parent_id_tag: Option<String>,
}

impl IdTagInfo {
    pub fn new(status: AuthorizationStatus) -> Self {
        Self {
            status,
            expiry_date: None,
            parent_id_tag: None,
        }
    }
}

// ── Charge point status ────────────────────────────────────────

/// Operational status reported by a connector or charge point.
///
/// `Faulted` carries its cause when the station named one; a wire error
/// code of `NoError` decodes to a `Faulted` with `error_code: None`
/// (faulted with unknown cause).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChargePointStatus {
    Available,
    Occupied,
    Unavailable,
    /// Only the 1.5 schema can express this status.
    Reserved,
    Faulted {
        error_code: Option<ChargePointErrorCode>,
        info: Option<String>,
        vendor_error_code: Option<String>,
    },
}

/// Cause of a `Faulted` status.
///
/// There is no `NoError` variant: "no error" is a wire-level encoding of
/// an absent cause, not a cause. The last five codes exist only in the
/// 1.5 schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargePointErrorCode {
    ConnectorLockFailure,
    HighTemperature,
    Mode3Error,
    PowerMeterFailure,
    PowerSwitchFailure,
    ReaderFailure,
    ResetFailure,
    GroundFailure,
    OverCurrentFailure,
    UnderVoltage,
    WeakSignal,
    OtherError,
}

// ── Firmware ───────────────────────────────────────────────────

/// Progress of a firmware update on the station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirmwareStatus {
    Downloaded,
    DownloadFailed,
    InstallationFailed,
    Installed,
}

// ── Boot notification ──────────────────────────────────────────

/// Identity a charge point reports when it boots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootNotification {
    pub charge_point_vendor: String,
    pub charge_point_model: String,
    pub charge_point_serial_number: Option<String>,
    pub charge_box_serial_number: Option<String>,
    pub firmware_version: Option<String>,
    pub iccid: Option<String>,
    pub imsi: Option<String>,
    pub meter_type: Option<String>,
    pub meter_serial_number: Option<String>,
}

/// Central-system verdict on a boot notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootNotificationResult {
    pub accepted: bool,
    pub current_time: DateTime<Utc>,
    pub heartbeat_interval_secs: u32,
}

// ── Transactions ───────────────────────────────────────────────

/// Result of starting a charging transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTransactionResult {
    pub transaction_id: i32,
    pub id_tag_info: IdTagInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connector_scope_shifts_wire_numbering() {
        let scope = ConnectorScope::from_wire(1).unwrap();
        assert_eq!(scope.index(), 0);
        assert_eq!(scope.to_wire(), 1);
        assert_eq!(ConnectorScope::from_wire(0), None);
    }

    #[test]
    fn scope_zero_is_charge_point() {
        assert_eq!(Scope::from_wire(0), Scope::ChargePoint);
        assert_eq!(Scope::from_wire(3), Scope::Connector(ConnectorScope::new(2)));
        assert_eq!(Scope::from_wire(3).to_wire(), 3);
        assert_eq!(Scope::ChargePoint.to_wire(), 0);
    }
}
