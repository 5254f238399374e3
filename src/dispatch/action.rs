//! Action catalog
//!
//! Closed set of station-originated operations. Both wire versions define
//! all of them, under the same request/response element labels; only the
//! payload schemas differ.

use std::fmt;

/// A named operation a charge point may invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Authorize,
    BootNotification,
    StartTransaction,
    StopTransaction,
    Heartbeat,
    StatusNotification,
    MeterValues,
    DiagnosticsStatusNotification,
    FirmwareStatusNotification,
}

impl Action {
    /// Every supported action.
    pub const ALL: &'static [Action] = &[
        Self::Authorize,
        Self::BootNotification,
        Self::StartTransaction,
        Self::StopTransaction,
        Self::Heartbeat,
        Self::StatusNotification,
        Self::MeterValues,
        Self::DiagnosticsStatusNotification,
        Self::FirmwareStatusNotification,
    ];

    /// Resolve an action from a payload element's local name.
    ///
    /// Exact-match only; anything else is not a supported action.
    pub fn from_request_label(label: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|action| action.request_label() == label)
    }

    /// Element label of this action's request payload.
    pub fn request_label(&self) -> &'static str {
        match self {
            Self::Authorize => "authorizeRequest",
            Self::BootNotification => "bootNotificationRequest",
            Self::StartTransaction => "startTransactionRequest",
            Self::StopTransaction => "stopTransactionRequest",
            Self::Heartbeat => "heartbeatRequest",
            Self::StatusNotification => "statusNotificationRequest",
            Self::MeterValues => "meterValuesRequest",
            Self::DiagnosticsStatusNotification => "diagnosticsStatusNotificationRequest",
            Self::FirmwareStatusNotification => "firmwareStatusNotificationRequest",
        }
    }

    /// Element label of this action's response payload.
    pub fn response_label(&self) -> &'static str {
        match self {
            Self::Authorize => "authorizeResponse",
            Self::BootNotification => "bootNotificationResponse",
            Self::StartTransaction => "startTransactionResponse",
            Self::StopTransaction => "stopTransactionResponse",
            Self::Heartbeat => "heartbeatResponse",
            Self::StatusNotification => "statusNotificationResponse",
            Self::MeterValues => "meterValuesResponse",
            Self::DiagnosticsStatusNotification => "diagnosticsStatusNotificationResponse",
            Self::FirmwareStatusNotification => "firmwareStatusNotificationResponse",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Authorize => "Authorize",
            Self::BootNotification => "BootNotification",
            Self::StartTransaction => "StartTransaction",
            Self::StopTransaction => "StopTransaction",
            Self::Heartbeat => "Heartbeat",
            Self::StatusNotification => "StatusNotification",
            Self::MeterValues => "MeterValues",
            Self::DiagnosticsStatusNotification => "DiagnosticsStatusNotification",
            Self::FirmwareStatusNotification => "FirmwareStatusNotification",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_request_labels_exactly() {
        assert_eq!(
            Action::from_request_label("bootNotificationRequest"),
            Some(Action::BootNotification)
        );
        // response labels and near-misses are not request labels
        assert_eq!(Action::from_request_label("bootNotificationResponse"), None);
        assert_eq!(Action::from_request_label("BootNotificationRequest"), None);
        assert_eq!(Action::from_request_label("resetRequest"), None);
    }

    #[test]
    fn labels_are_unique_across_the_catalog() {
        for action in Action::ALL {
            assert_eq!(Action::from_request_label(action.request_label()), Some(*action));
            assert_ne!(action.request_label(), action.response_label());
        }
    }
}
