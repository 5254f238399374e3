//! Envelope-body dispatch
//!
//! Orchestrates one inbound envelope body into exactly one outbound body:
//! classify (action + version), select the codec, invoke the abstract
//! service through the caller-supplied factory, wrap the result. Every
//! failure on the way is normalized into a fault body; nothing escapes to
//! the transport as an uncaught error.
//!
//! Dispatch is stateless and immutable per call, so concurrent envelopes
//! from any number of stations can be dispatched without locking. The
//! service invocation is the only await point.

mod action;
mod version;

pub use action::Action;
pub use version::Version;

use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::domain::{CentralSystemService, FaultCode};
use crate::protocol::{v12, v15};
use crate::soap::{BodyElement, EnvelopeBody, OutboundBody, SoapFault};

// ── DispatchError ──────────────────────────────────────────────

/// Classification failures: the envelope body never reached a codec.
///
/// Always recoverable — each variant converts to a distinct diagnostic
/// fault, never a crash.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("envelope body contains no payload")]
    EmptyBody,
    #[error("no supported action in envelope body (saw: {0})")]
    UnsupportedAction(String),
    #[error("unrecognized protocol version namespace: {0}")]
    UnrecognizedVersion(String),
}

// ── dispatch ───────────────────────────────────────────────────

/// Dispatch one envelope body against the service the factory yields for
/// the detected version.
///
/// The factory is supplied by the surrounding transport; it may hand out
/// the same service instance for both versions or bind each version to
/// its own implementation.
pub async fn dispatch<F>(body: &EnvelopeBody, service_factory: F) -> OutboundBody
where
    F: Fn(Version) -> Arc<dyn CentralSystemService>,
{
    let (action, payload) = match classify(body) {
        Ok(pair) => pair,
        Err(e) => {
            warn!(error = %e, "rejected envelope body");
            return OutboundBody::Fault(SoapFault::from(e));
        }
    };

    let version = match Version::from_namespace(&payload.namespace) {
        Some(version) => version,
        None => {
            let e = DispatchError::UnrecognizedVersion(payload.namespace.clone());
            warn!(action = %action, error = %e, "rejected envelope body");
            return OutboundBody::Fault(SoapFault::from(e));
        }
    };

    info!(action = %action, version = %version, "dispatching");

    let service = service_factory(version);
    let result = match version {
        Version::V12 => v12::handle(action, &payload.value, service.as_ref()).await,
        Version::V15 => v15::handle(action, &payload.value, service.as_ref()).await,
    };

    match result {
        Ok(value) => OutboundBody::Response(BodyElement::new(
            version.namespace(),
            action.response_label(),
            value,
        )),
        Err(fault) => {
            match fault.code {
                FaultCode::InternalError => {
                    error!(action = %action, version = %version, fault = %fault, "dispatch failed")
                }
                _ => {
                    warn!(action = %action, version = %version, fault = %fault, "dispatch returned fault")
                }
            }
            OutboundBody::Fault(SoapFault::from(fault))
        }
    }
}

/// Pick the first recognizable (action, payload) pair out of the body.
///
/// Single-operation-per-envelope is the protocol's actual usage pattern;
/// any further payloads are ignored, but logged so a malformed sender is
/// visible to operators rather than silently truncated.
fn classify(body: &EnvelopeBody) -> Result<(Action, &BodyElement), DispatchError> {
    if body.is_empty() {
        return Err(DispatchError::EmptyBody);
    }

    let recognized = body.elements.iter().enumerate().find_map(|(i, element)| {
        Action::from_request_label(&element.local_name).map(|action| (i, action, element))
    });

    match recognized {
        Some((index, action, element)) => {
            for (other, ignored) in body.elements.iter().enumerate() {
                if other != index {
                    warn!(
                        action = %action,
                        ignored = ignored.local_name.as_str(),
                        "ignoring extra payload in envelope body"
                    );
                }
            }
            Ok((action, element))
        }
        None => {
            let seen = body
                .elements
                .iter()
                .map(|element| element.local_name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            Err(DispatchError::UnsupportedAction(seen))
        }
    }
}
