//! Selector criteria and directive codec.
//!
//! The wire carries criteria as three optional fields; locally they are a
//! [`Criteria`] sum type. Decoding never fails an entity: a selector whose
//! criteria is empty or conflicting is dropped and reported as an [`Anomaly`],
//! and a directive without a condition decodes with an empty one.

use crate::state::{Criteria, CriteriaKind, Directive, Selector};
use crate::wire::{AnalysisSettings, CriteriaWire, DirectiveWire, SelectorWire};
use std::fmt;
use thiserror::Error;
use tracing::warn;

/// Why a wire criteria could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CriteriaError {
    #[error("no criteria set")]
    Missing,

    #[error("conflicting criteria set: {}", join_kinds(.0))]
    Conflicting(Vec<CriteriaKind>),
}

fn join_kinds(kinds: &[CriteriaKind]) -> String {
    kinds
        .iter()
        .map(|k| k.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A recoverable irregularity found while decoding a remote entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anomaly {
    /// The selector at `index` was skipped.
    MalformedSelector { index: usize, reason: CriteriaError },
    /// The directive at `index` had no `condition_id`; it decoded with an empty one.
    DirectiveWithoutCondition { index: usize },
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedSelector { index, reason } => {
                write!(f, "selector {index} skipped: {reason}")
            }
            Self::DirectiveWithoutCondition { index } => {
                write!(f, "directive {index} has no condition_id")
            }
        }
    }
}

/// A decoded value together with the anomalies met on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded<T> {
    pub value: T,
    pub anomalies: Vec<Anomaly>,
}

impl<T> Decoded<T> {
    #[must_use]
    pub const fn clean(value: T) -> Self {
        Self {
            value,
            anomalies: Vec::new(),
        }
    }

    /// Maps the value, keeping the anomalies.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Decoded<U> {
        Decoded {
            value: f(self.value),
            anomalies: self.anomalies,
        }
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.anomalies.is_empty()
    }
}

// ── Criteria ────────────────────────────────────────────────────

/// Sets exactly the field matching the criteria's kind; the others stay absent.
#[must_use]
pub fn encode_criteria(criteria: &Criteria) -> CriteriaWire {
    let value = Some(criteria.value().to_string());
    match criteria.kind() {
        CriteriaKind::Postback => CriteriaWire {
            postback: value,
            ..CriteriaWire::default()
        },
        CriteriaKind::PathPrefix => CriteriaWire {
            path_prefix: value,
            ..CriteriaWire::default()
        },
        CriteriaKind::PathRegex => CriteriaWire {
            path_regex: value,
            ..CriteriaWire::default()
        },
    }
}

/// Decodes a wire criteria, requiring exactly one field to be present.
pub fn decode_criteria(wire: &CriteriaWire) -> Result<Criteria, CriteriaError> {
    let present: Vec<(CriteriaKind, &String)> = [
        (CriteriaKind::Postback, wire.postback.as_ref()),
        (CriteriaKind::PathPrefix, wire.path_prefix.as_ref()),
        (CriteriaKind::PathRegex, wire.path_regex.as_ref()),
    ]
    .into_iter()
    .filter_map(|(kind, value)| value.map(|v| (kind, v)))
    .collect();

    match present.as_slice() {
        [] => Err(CriteriaError::Missing),
        [(kind, value)] => Ok(Criteria::new(*kind, value.as_str())),
        many => Err(CriteriaError::Conflicting(
            many.iter().map(|(kind, _)| *kind).collect(),
        )),
    }
}

// ── Selectors ───────────────────────────────────────────────────

/// `derived_id` is assigned by the remote and never sent.
#[must_use]
pub fn encode_selector(selector: &Selector) -> SelectorWire {
    SelectorWire {
        policy_id: selector.policy_id.clone(),
        criteria: encode_criteria(&selector.criteria),
        analysis_settings: AnalysisSettings {
            rate_limiting: selector.analysis_rate_limiting.clone(),
        },
        derived_id: None,
    }
}

#[must_use]
pub fn encode_selectors(selectors: &[Selector]) -> Vec<SelectorWire> {
    selectors.iter().map(encode_selector).collect()
}

pub fn decode_selector(wire: &SelectorWire) -> Result<Selector, CriteriaError> {
    Ok(Selector {
        policy_id: wire.policy_id.clone(),
        criteria: decode_criteria(&wire.criteria)?,
        analysis_rate_limiting: wire.analysis_settings.rate_limiting.clone(),
        derived_id: wire.derived_id.clone(),
    })
}

/// Decodes a selector list in order, skipping malformed entries.
#[must_use]
pub fn decode_selectors(wires: &[SelectorWire]) -> Decoded<Vec<Selector>> {
    let mut value = Vec::with_capacity(wires.len());
    let mut anomalies = Vec::new();

    for (index, wire) in wires.iter().enumerate() {
        match decode_selector(wire) {
            Ok(selector) => value.push(selector),
            Err(reason) => {
                warn!(index, %reason, "skipping malformed selector");
                anomalies.push(Anomaly::MalformedSelector { index, reason });
            }
        }
    }

    Decoded { value, anomalies }
}

// ── Directives ──────────────────────────────────────────────────

/// Encodes directives in order. An empty condition is omitted from the wire.
#[must_use]
pub fn encode_directives(directives: &[Directive]) -> Vec<DirectiveWire> {
    directives
        .iter()
        .map(|d| DirectiveWire {
            action: d.action.clone(),
            condition_id: (!d.condition_id.is_empty()).then(|| d.condition_id.clone()),
        })
        .collect()
}

/// Decodes directives in order. A missing condition decodes as empty.
#[must_use]
pub fn decode_directives(wires: &[DirectiveWire]) -> Decoded<Vec<Directive>> {
    let mut anomalies = Vec::new();
    let value = wires
        .iter()
        .enumerate()
        .map(|(index, wire)| {
            let condition_id = wire.condition_id.clone().unwrap_or_else(|| {
                warn!(index, action = %wire.action, "directive has no condition_id");
                anomalies.push(Anomaly::DirectiveWithoutCondition { index });
                String::new()
            });
            Directive {
                action: wire.action.clone(),
                condition_id,
            }
        })
        .collect();

    Decoded { value, anomalies }
}
