//! OCPP 1.5 action codec
//!
//! One decode → service call → encode function per action, covering the
//! richer 1.5 payloads: reservation ids, nested transaction data and
//! attributed meter values.

use serde_json::Value;

use crate::dispatch::Action;
use crate::domain::{self, CentralSystemService, OcppFault, Scope};
use crate::protocol::{connector_scope, decode, encode};

use super::{mapping, wire};

/// Dispatch one action against the 1.5 schema.
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
    let result = service
        .start_transaction(
            connector,
            &req.id_tag,
            req.timestamp,
            req.meter_start,
            req.reservation_id,
        )
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
    let transaction_data = req
        .transaction_data
        .into_iter()
        .flat_map(|data| data.values)
        .map(mapping::meter_value_to_domain)
        .collect();
    let info = service
        .stop_transaction(
            req.transaction_id,
            req.id_tag.as_deref(),
            req.timestamp,
            req.meter_stop,
            transaction_data,
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
    let status = mapping::charge_point_status_to_domain(
        req.status,
        req.error_code,
        req.info,
        req.vendor_error_code,
    );
    service
        .status_notification(
            Scope::from_wire(req.connector_id),
            status,
            req.timestamp,
            req.vendor_id,
        )
        .await?;
    encode(Action::StatusNotification, &wire::StatusNotificationResponse {})
}

async fn meter_values(
    payload: &Value,
    service: &dyn CentralSystemService,
) -> Result<Value, OcppFault> {
    let req: wire::MeterValuesRequest = decode(Action::MeterValues, payload)?;
    let samples = req
        .values
        .into_iter()
        .map(mapping::meter_value_to_domain)
        .collect();
    service
        .meter_values(Scope::from_wire(req.connector_id), req.transaction_id, samples)
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

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use super::*;
    use crate::domain::{
        ChargePointErrorCode, ChargePointStatus, ConnectorScope, FirmwareStatus, Location,
        Measurand, ReadingContext, UnitOfMeasure, ValueFormat,
    };
    use crate::protocol::testing::{Invocation, RecordingService};

    #[tokio::test]
    async fn authorize_round_trips_the_id_tag_info() {
        let service = RecordingService::new();
        let out = handle(Action::Authorize, &json!({ "idTag": "RFID-9" }), &service)
            .await
            .unwrap();
        assert_eq!(out, json!({ "idTagInfo": { "status": "Accepted" } }));
    }

    #[tokio::test]
    async fn start_transaction_carries_the_reservation_id() {
        let service = RecordingService::new();
        handle(
            Action::StartTransaction,
            &json!({
                "connectorId": 2,
                "idTag": "ABC",
                "timestamp": "2013-03-01T10:00:00Z",
                "meterStart": 100,
                "reservationId": 7
            }),
            &service,
        )
        .await
        .unwrap();
        match service.single_call() {
            Invocation::StartTransaction { connector, reservation_id, .. } => {
                assert_eq!(connector, ConnectorScope::new(1));
                assert_eq!(reservation_id, Some(7));
            }
            other => panic!("unexpected invocation: {other:?}"),
        }
    }

    #[tokio::test]
    async fn stop_transaction_flattens_transaction_data() {
        let service = RecordingService::new();
        let timestamp = Utc.with_ymd_and_hms(2013, 3, 1, 12, 0, 0).unwrap();
        handle(
            Action::StopTransaction,
            &json!({
                "transactionId": 42,
                "idTag": "ABC",
                "timestamp": timestamp.to_rfc3339(),
                "meterStop": 200,
                "transactionData": [
                    { "values": [
                        { "timestamp": "2013-03-01T10:00:00Z", "value": [
                            { "value": "100", "context": "Transaction.Begin" }
                        ]},
                        { "timestamp": "2013-03-01T12:00:00Z", "value": [
                            { "value": "200", "context": "Transaction.End", "unit": "kWh" }
                        ]}
                    ]}
                ]
            }),
            &service,
        )
        .await
        .unwrap();
        match service.single_call() {
            Invocation::StopTransaction { id_tag, transaction_data, .. } => {
                assert_eq!(id_tag.as_deref(), Some("ABC"));
                assert_eq!(transaction_data.len(), 2);
                assert_eq!(transaction_data[0].readings[0].context, ReadingContext::TransactionBegin);
                assert_eq!(transaction_data[1].readings[0].unit, UnitOfMeasure::KWh);
            }
            other => panic!("unexpected invocation: {other:?}"),
        }
    }

    #[tokio::test]
    async fn meter_values_default_absent_attributes() {
        let service = RecordingService::new();
        handle(
            Action::MeterValues,
            &json!({
                "connectorId": 1,
                "transactionId": 42,
                "values": [
                    { "timestamp": "2013-03-01T10:00:00Z", "value": [
                        { "value": "1500" }
                    ]}
                ]
            }),
            &service,
        )
        .await
        .unwrap();
        match service.single_call() {
            Invocation::MeterValues { scope, transaction_id, samples } => {
                assert_eq!(scope, Scope::Connector(ConnectorScope::new(0)));
                assert_eq!(transaction_id, Some(42));
                let reading = &samples[0].readings[0];
                assert_eq!(reading.value, "1500");
                assert_eq!(reading.context, ReadingContext::SamplePeriodic);
                assert_eq!(reading.format, ValueFormat::Raw);
                assert_eq!(reading.measurand, Measurand::EnergyActiveImportRegister);
                assert_eq!(reading.location, Location::Outlet);
                assert_eq!(reading.unit, UnitOfMeasure::Wh);
            }
            other => panic!("unexpected invocation: {other:?}"),
        }
    }

    #[tokio::test]
    async fn meter_values_keep_explicit_attributes() {
        let service = RecordingService::new();
        handle(
            Action::MeterValues,
            &json!({
                "connectorId": 1,
                "values": [
                    { "timestamp": "2013-03-01T10:00:00Z", "value": [
                        {
                            "value": "230.1",
                            "context": "Sample.Clock",
                            "measurand": "Voltage",
                            "location": "Inlet",
                            "unit": "Volt"
                        }
                    ]}
                ]
            }),
            &service,
        )
        .await
        .unwrap();
        match service.single_call() {
            Invocation::MeterValues { samples, .. } => {
                let reading = &samples[0].readings[0];
                assert_eq!(reading.context, ReadingContext::SampleClock);
                assert_eq!(reading.measurand, Measurand::Voltage);
                assert_eq!(reading.location, Location::Inlet);
                assert_eq!(reading.unit, UnitOfMeasure::Volt);
            }
            other => panic!("unexpected invocation: {other:?}"),
        }
    }

    #[tokio::test]
    async fn faulted_no_error_keeps_the_cause_unknown() {
        let service = RecordingService::new();
        handle(
            Action::StatusNotification,
            &json!({
                "connectorId": 1,
                "status": "Faulted",
                "errorCode": "NoError",
                "timestamp": "2013-03-01T10:00:00Z",
                "vendorId": "acme"
            }),
            &service,
        )
        .await
        .unwrap();
        match service.single_call() {
            Invocation::StatusNotification { status, vendor_id, timestamp, .. } => {
                assert_eq!(
                    status,
                    ChargePointStatus::Faulted {
                        error_code: None,
                        info: None,
                        vendor_error_code: None,
                    }
                );
                assert_eq!(vendor_id.as_deref(), Some("acme"));
                assert!(timestamp.is_some());
            }
            other => panic!("unexpected invocation: {other:?}"),
        }
    }

    #[tokio::test]
    async fn faulted_with_a_named_cause() {
        let service = RecordingService::new();
        handle(
            Action::StatusNotification,
            &json!({
                "connectorId": 1,
                "status": "Faulted",
                "errorCode": "GroundFailure",
                "info": "RCD tripped",
                "vendorErrorCode": "E42"
            }),
            &service,
        )
        .await
        .unwrap();
        match service.single_call() {
            Invocation::StatusNotification { status, .. } => {
                assert_eq!(
                    status,
                    ChargePointStatus::Faulted {
                        error_code: Some(ChargePointErrorCode::GroundFailure),
                        info: Some("RCD tripped".into()),
                        vendor_error_code: Some("E42".into()),
                    }
                );
            }
            other => panic!("unexpected invocation: {other:?}"),
        }
    }

    #[tokio::test]
    async fn firmware_status_maps_through() {
        let service = RecordingService::new();
        let out = handle(
            Action::FirmwareStatusNotification,
            &json!({ "status": "DownloadFailed" }),
            &service,
        )
        .await
        .unwrap();
        assert_eq!(out, json!({}));
        assert_eq!(
            service.single_call(),
            Invocation::FirmwareStatusNotification { status: FirmwareStatus::DownloadFailed }
        );
    }

    #[tokio::test]
    async fn diagnostics_status_becomes_a_boolean() {
        let service = RecordingService::new();
        handle(
            Action::DiagnosticsStatusNotification,
            &json!({ "status": "Uploaded" }),
            &service,
        )
        .await
        .unwrap();
        assert_eq!(
            service.single_call(),
            Invocation::DiagnosticsStatusNotification { uploaded: true }
        );
    }
}
