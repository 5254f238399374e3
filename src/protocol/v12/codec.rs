//! OCPP 1.2 action codec
//!
//! One decode → service call → encode function per action. The codec is
//! total over the 1.2 schema and has no side effect beyond the single
//! service invocation.

use serde_json::Value;

use crate::dispatch::Action;
use crate::domain::{self, CentralSystemService, MeterReading, MeterSample, OcppFault, Scope};
use crate::protocol::{connector_scope, decode, encode};

use super::{mapping, wire};

/// Dispatch one action against the 1.2 schema.
pub(crate) async fn handle(
    action: Action,
    payload: &Value,
    service: &dyn CentralSystemService,
) -> Result<Value, OcppFault> {
    match action {
        Action::Authorize => authorize(payload, service).await,
        Action::BootNotification => boot_notification(payload, service).await,
        Action::StartTransaction => start_transaction(payload, service).await,
        Action::StopTransaction => stop_transaction(payload, service).await,
        Action::Heartbeat => heartbeat(payload, service).await,
        Action::StatusNotification => status_notification(payload, service).await,
        Action::MeterValues => meter_values(payload, service).await,
        Action::DiagnosticsStatusNotification => {
            diagnostics_status_notification(payload, service).await
        }
        Action::FirmwareStatusNotification => {
            firmware_status_notification(payload, service).await
        }
    }
}

async fn authorize(
    payload: &Value,
    service: &dyn CentralSystemService,
) -> Result<Value, OcppFault> {
    let req: wire::AuthorizeRequest = decode(Action::Authorize, payload)?;
    let info = service.authorize(&req.id_tag).await?;
    encode(
        Action::Authorize,
        &wire::AuthorizeResponse {
            id_tag_info: mapping::id_tag_info_to_wire(info),
        },
    )
}

async fn boot_notification(
    payload: &Value,
    service: &dyn CentralSystemService,
) -> Result<Value, OcppFault> {
    let req: wire::BootNotificationRequest = decode(Action::BootNotification, payload)?;
    let result = service
        .boot_notification(domain::BootNotification {
            charge_point_vendor: req.charge_point_vendor,
            charge_point_model: req.charge_point_model,
            charge_point_serial_number: req.charge_point_serial_number,
            charge_box_serial_number: req.charge_box_serial_number,
            firmware_version: req.firmware_version,
            iccid: req.iccid,
            imsi: req.imsi,
            meter_type: req.meter_type,
            meter_serial_number: req.meter_serial_number,
        })
        .await?;
    encode(
        Action::BootNotification,
        &wire::BootNotificationResponse {
            status: mapping::registration_status_to_wire(result.accepted),
            current_time: result.current_time,
            heartbeat_interval: result.heartbeat_interval_secs as i32,
        },
    )
}

async fn start_transaction(
    payload: &Value,
    service: &dyn CentralSystemService,
) -> Result<Value, OcppFault> {
    let req: wire::StartTransactionRequest = decode(Action::StartTransaction, payload)?;
    let connector = connector_scope(Action::StartTransaction, req.connector_id)?;
    // the 1.2 schema has no reservations
    let result = service
        .start_transaction(connector, &req.id_tag, req.timestamp, req.meter_start, None)
        .await?;
    encode(
        Action::StartTransaction,
        &wire::StartTransactionResponse {
            transaction_id: result.transaction_id,
            id_tag_info: mapping::id_tag_info_to_wire(result.id_tag_info),
        },
    )
}

async fn stop_transaction(
    payload: &Value,
    service: &dyn CentralSystemService,
) -> Result<Value, OcppFault> {
    let req: wire::StopTransactionRequest = decode(Action::StopTransaction, payload)?;
    // the 1.2 schema cannot carry transaction data
    let info = service
        .stop_transaction(
            req.transaction_id,
            req.id_tag.as_deref(),
            req.timestamp,
            req.meter_stop,
            Vec::new(),
        )
        .await?;
    encode(
        Action::StopTransaction,
        &wire::StopTransactionResponse {
            id_tag_info: info.map(mapping::id_tag_info_to_wire),
        },
    )
}

async fn heartbeat(
    payload: &Value,
    service: &dyn CentralSystemService,
) -> Result<Value, OcppFault> {
    let _req: wire::HeartbeatRequest = decode(Action::Heartbeat, payload)?;
    let current_time = service.heartbeat().await?;
    encode(Action::Heartbeat, &wire::HeartbeatResponse { current_time })
}

async fn status_notification(
    payload: &Value,
    service: &dyn CentralSystemService,
) -> Result<Value, OcppFault> {
    let req: wire::StatusNotificationRequest = decode(Action::StatusNotification, payload)?;
    let status = mapping::charge_point_status_to_domain(req.status, req.error_code);
    service
        .status_notification(Scope::from_wire(req.connector_id), status, None, None)
        .await?;
    encode(Action::StatusNotification, &wire::StatusNotificationResponse {})
}

async fn meter_values(
    payload: &Value,
    service: &dyn CentralSystemService,
) -> Result<Value, OcppFault> {
    let req: wire::MeterValuesRequest = decode(Action::MeterValues, payload)?;
    // a flat 1.2 record becomes one sample with a single all-defaults reading
    let samples = req
        .values
        .into_iter()
        .map(|value| MeterSample {
            timestamp: value.timestamp,
            readings: vec![MeterReading::with_defaults(value.value.to_string())],
        })
        .collect();
    service
        .meter_values(Scope::from_wire(req.connector_id), None, samples)
        .await?;
    encode(Action::MeterValues, &wire::MeterValuesResponse {})
}

async fn diagnostics_status_notification(
    payload: &Value,
    service: &dyn CentralSystemService,
) -> Result<Value, OcppFault> {
    let req: wire::DiagnosticsStatusNotificationRequest =
        decode(Action::DiagnosticsStatusNotification, payload)?;
    service
        .diagnostics_status_notification(mapping::diagnostics_status_to_domain(req.status))
        .await?;
    encode(
        Action::DiagnosticsStatusNotification,
        &wire::DiagnosticsStatusNotificationResponse {},
    )
}

async fn firmware_status_notification(
    payload: &Value,
    service: &dyn CentralSystemService,
) -> Result<Value, OcppFault> {
    let req: wire::FirmwareStatusNotificationRequest =
        decode(Action::FirmwareStatusNotification, payload)?;
    service
        .firmware_status_notification(mapping::firmware_status_to_domain(req.status))
        .await?;
    encode(
        Action::FirmwareStatusNotification,
        &wire::FirmwareStatusNotificationResponse {},
    )
}
