//! Abstract central-system service
//!
//! The version-agnostic contract the business logic implements. One
//! method per station-originated action; every argument and result type
//! is a domain type, so the implementation never sees which wire version
//! a request came from. Implementations may perform I/O (persistence,
//! authorization lookups); the dispatcher treats each call as opaque and
//! neither retries nor times it out.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::fault::OcppFault;
use super::meter::MeterSample;
use super::types::{
    BootNotification, BootNotificationResult, ChargePointStatus, ConnectorScope, FirmwareStatus,
    IdTagInfo, Scope, StartTransactionResult,
};

/// Station-management service consumed by the dispatcher.
///
/// A fault returned from any method reaches the outbound body unmodified
/// in category and detail.
#[async_trait]
pub trait CentralSystemService: Send + Sync {
    /// Check whether an id tag may charge.
    async fn authorize(&self, id_tag: &str) -> Result<IdTagInfo, OcppFault>;

    /// Register a booting charge point and agree on a heartbeat interval.
    async fn boot_notification(
        &self,
        boot: BootNotification,
    ) -> Result<BootNotificationResult, OcppFault>;

    /// Begin a charging transaction on a specific connector.
    ///
    /// `reservation_id` only exists in the 1.5 schema; 1.2 requests
    /// always pass `None`.
    async fn start_transaction(
        &self,
        connector: ConnectorScope,
        id_tag: &str,
        timestamp: DateTime<Utc>,
        meter_start: i32,
        reservation_id: Option<i32>,
    ) -> Result<StartTransactionResult, OcppFault>;

    /// End a charging transaction.
    ///
    /// `transaction_data` holds meter samples recorded over the
    /// transaction; the 1.2 schema cannot carry any, so 1.2 requests
    /// always pass an empty list.
    async fn stop_transaction(
        &self,
        transaction_id: i32,
        id_tag: Option<&str>,
        timestamp: DateTime<Utc>,
        meter_stop: i32,
        transaction_data: Vec<MeterSample>,
    ) -> Result<Option<IdTagInfo>, OcppFault>;

    /// Liveness ping; returns the central system's current time.
    async fn heartbeat(&self) -> Result<DateTime<Utc>, OcppFault>;

    /// Status change of a connector or of the whole charge point.
    async fn status_notification(
        &self,
        scope: Scope,
        status: ChargePointStatus,
        timestamp: Option<DateTime<Utc>>,
        vendor_id: Option<String>,
    ) -> Result<(), OcppFault>;

    /// Periodic meter samples, optionally tied to a transaction.
    async fn meter_values(
        &self,
        scope: Scope,
        transaction_id: Option<i32>,
        samples: Vec<MeterSample>,
    ) -> Result<(), OcppFault>;

    /// Outcome of a diagnostics upload.
    async fn diagnostics_status_notification(&self, uploaded: bool) -> Result<(), OcppFault>;

    /// Progress of a firmware update.
    async fn firmware_status_notification(&self, status: FirmwareStatus) -> Result<(), OcppFault>;
}
