//! Per-version wire codecs
//!
//! Each version module owns the closed set of serde types for its wire
//! schema (`wire`), the enumeration mapping tables (`mapping`) and the
//! per-action codec (`codec`). Wire types never cross a version boundary
//! and never reach the domain service; the codec is the only place
//! version knowledge exists.

pub mod v12;
pub mod v15;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::dispatch::Action;
use crate::domain::{ConnectorScope, OcppFault};

/// Decode a wire request payload into its typed form.
///
/// A serde failure here means the station sent a malformed request; the
/// diagnostic becomes the detail of a `ProtocolError` fault.
pub(crate) fn decode<T: DeserializeOwned>(action: Action, payload: &Value) -> Result<T, OcppFault> {
    serde_json::from_value(payload.clone()).map_err(|e| {
        OcppFault::protocol_error(format!("malformed {}: {}", action.request_label(), e))
    })
}

/// Encode a typed wire response into the neutral payload form.
pub(crate) fn encode<T: Serialize>(action: Action, response: &T) -> Result<Value, OcppFault> {
    serde_json::to_value(response).map_err(|e| {
        OcppFault::internal_error(format!(
            "failed to serialize {}: {}",
            action.response_label(),
            e
        ))
    })
}

/// Connector scope for an operation that is connector-specific.
///
/// Wire connector id `0` addresses the whole charge point and is not
/// valid here.
pub(crate) fn connector_scope(action: Action, connector_id: u32) -> Result<ConnectorScope, OcppFault> {
    ConnectorScope::from_wire(connector_id).ok_or_else(|| {
        OcppFault::protocol_error(format!(
            "{} requires a connector id >= 1",
            action.request_label()
        ))
    })
}

#[cfg(test)]
pub(crate) mod testing {
    //! Canned service used by codec and dispatcher tests: records every
    //! invocation with its domain arguments and returns fixed results, or
    //! a configured fault for every action.

    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::{DateTime, TimeZone, Utc};

    use crate::domain::{
        AuthorizationStatus, BootNotification, BootNotificationResult, CentralSystemService,
        ChargePointStatus, ConnectorScope, FirmwareStatus, IdTagInfo, MeterSample, OcppFault,
        Scope, StartTransactionResult,
    };

    #[derive(Debug, Clone, PartialEq)]
    pub enum Invocation {
        Authorize {
            id_tag: String,
        },
        BootNotification(BootNotification),
        StartTransaction {
            connector: ConnectorScope,
            id_tag: String,
            timestamp: DateTime<Utc>,
            meter_start: i32,
            reservation_id: Option<i32>,
        },
        StopTransaction {
            transaction_id: i32,
            id_tag: Option<String>,
            timestamp: DateTime<Utc>,
            meter_stop: i32,
            transaction_data: Vec<MeterSample>,
        },
        Heartbeat,
        StatusNotification {
            scope: Scope,
            status: ChargePointStatus,
            timestamp: Option<DateTime<Utc>>,
            vendor_id: Option<String>,
        },
        MeterValues {
            scope: Scope,
            transaction_id: Option<i32>,
            samples: Vec<MeterSample>,
        },
        DiagnosticsStatusNotification {
            uploaded: bool,
        },
        FirmwareStatusNotification {
            status: FirmwareStatus,
        },
    }

    pub struct RecordingService {
        pub calls: Mutex<Vec<Invocation>>,
        pub fault: Option<OcppFault>,
        pub now: DateTime<Utc>,
        pub id_tag_info: IdTagInfo,
        pub transaction_id: i32,
        pub accepted: bool,
        pub heartbeat_interval_secs: u32,
    }

    impl Default for RecordingService {
        fn default() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fault: None,
                now: Utc.with_ymd_and_hms(2013, 2, 1, 15, 9, 18).unwrap(),
                id_tag_info: IdTagInfo::new(AuthorizationStatus::Accepted),
                transaction_id: 42,
                accepted: true,
                heartbeat_interval_secs: 300,
            }
        }
    }

    impl RecordingService {
        pub fn new() -> Self {
            Self::default()
        }

        /// A service whose every method returns the given fault.
        pub fn failing(fault: OcppFault) -> Self {
            Self {
                fault: Some(fault),
                ..Self::default()
            }
        }

        fn record(&self, call: Invocation) -> Result<(), OcppFault> {
            self.calls.lock().unwrap().push(call);
            match &self.fault {
                Some(fault) => Err(fault.clone()),
                None => Ok(()),
            }
        }

        /// The only invocation recorded so far.
        pub fn single_call(&self) -> Invocation {
            let calls = self.calls.lock().unwrap();
            assert_eq!(calls.len(), 1, "expected exactly one service call");
            calls[0].clone()
        }
    }

    #[async_trait]
    impl CentralSystemService for RecordingService {
        async fn authorize(&self, id_tag: &str) -> Result<IdTagInfo, OcppFault> {
            self.record(Invocation::Authorize {
                id_tag: id_tag.to_owned(),
            })?;
            Ok(self.id_tag_info.clone())
        }

        async fn boot_notification(
            &self,
            boot: BootNotification,
        ) -> Result<BootNotificationResult, OcppFault> {
            self.record(Invocation::BootNotification(boot))?;
            Ok(BootNotificationResult {
                accepted: self.accepted,
                current_time: self.now,
                heartbeat_interval_secs: self.heartbeat_interval_secs,
            })
        }

        async fn start_transaction(
            &self,
            connector: ConnectorScope,
            id_tag: &str,
            timestamp: DateTime<Utc>,
            meter_start: i32,
            reservation_id: Option<i32>,
        ) -> Result<StartTransactionResult, OcppFault> {
            self.record(Invocation::StartTransaction {
                connector,
                id_tag: id_tag.to_owned(),
                timestamp,
                meter_start,
                reservation_id,
            })?;
            Ok(StartTransactionResult {
                transaction_id: self.transaction_id,
                id_tag_info: self.id_tag_info.clone(),
            })
        }

        async fn stop_transaction(
            &self,
            transaction_id: i32,
            id_tag: Option<&str>,
            timestamp: DateTime<Utc>,
            meter_stop: i32,
            transaction_data: Vec<MeterSample>,
        ) -> Result<Option<IdTagInfo>, OcppFault> {
            self.record(Invocation::StopTransaction {
                transaction_id,
                id_tag: id_tag.map(str::to_owned),
                timestamp,
                meter_stop,
                transaction_data,
            })?;
            Ok(Some(self.id_tag_info.clone()))
        }

        async fn heartbeat(&self) -> Result<DateTime<Utc>, OcppFault> {
            self.record(Invocation::Heartbeat)?;
            Ok(self.now)
        }

        async fn status_notification(
            &self,
            scope: Scope,
            status: ChargePointStatus,
            timestamp: Option<DateTime<Utc>>,
            vendor_id: Option<String>,
        ) -> Result<(), OcppFault> {
            self.record(Invocation::StatusNotification {
                scope,
                status,
                timestamp,
                vendor_id,
            })
        }

        async fn meter_values(
            &self,
            scope: Scope,
            transaction_id: Option<i32>,
            samples: Vec<MeterSample>,
        ) -> Result<(), OcppFault> {
            self.record(Invocation::MeterValues {
                scope,
                transaction_id,
                samples,
            })
        }

        async fn diagnostics_status_notification(&self, uploaded: bool) -> Result<(), OcppFault> {
            self.record(Invocation::DiagnosticsStatusNotification { uploaded })
        }

        async fn firmware_status_notification(
            &self,
            status: FirmwareStatus,
        ) -> Result<(), OcppFault> {
            self.record(Invocation::FirmwareStatusNotification { status })
        }
    }
}
