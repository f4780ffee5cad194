//! Normalizer — turns an untrusted [`RawIncidentPayload`] into a fully
//! populated [`NormalizedIncident`].
//!
//! Normalization never fails. Each field is read, coerced to text and either
//! kept or replaced by its default:
//!
//! - **Presence** follows loose truthiness: a missing key, `null`, `false`,
//!   numeric zero and the empty string all count as absent. An incident
//!   literally titled `""` therefore gets the placeholder title.
//! - **Coercion** turns any other JSON value into text (see [`coerce`]).
//! - **Aliases** are tried in order and the first present key wins:
//!   `user_company` then `unit_company`, `incident_raw` then
//!   `incident_description`.
//! - **Validation** of `priority` and `user_email` degrades silently to a
//!   default instead of rejecting the payload.

use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;
use serde_json::{Number, Value};
use std::sync::LazyLock;

use crate::signature::signature;
use crate::types::{NormalizedIncident, Priority, RawIncidentPayload};

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

pub const DEFAULT_ORIGIN: &str = "Unknown_Source";
pub const DEFAULT_COMPANY: &str = "Fabalos_Standard";
pub const DEFAULT_USER_NAME: &str = "System_Operator";
pub const DEFAULT_USER_ID: &str = "GUEST_USER";
pub const FALLBACK_EMAIL: &str = "admin@fabalos.com";
pub const DEFAULT_TITLE: &str = "Automation Alert: Undefined Incident";
pub const DEFAULT_TELEMETRY: &str = "No raw telemetry provided.";

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Normalize `raw`, stamping missing timestamps with the current time.
pub fn normalize(raw: &RawIncidentPayload) -> NormalizedIncident {
    normalize_at(raw, Utc::now())
}

/// Normalize `raw`, stamping missing timestamps with `now`.
pub fn normalize_at(raw: &RawIncidentPayload, now: DateTime<Utc>) -> NormalizedIncident {
    let incident_raw = text_or(raw, &["incident_raw", "incident_description"], DEFAULT_TELEMETRY);
    let ai_signature = signature(&incident_raw);

    NormalizedIncident {
        origin: text_or(raw, &["origin"], DEFAULT_ORIGIN),
        priority: priority(raw.get("priority")),
        user_company: text_or(raw, &["user_company", "unit_company"], DEFAULT_COMPANY),
        user_name: text_or(raw, &["user_name"], DEFAULT_USER_NAME),
        user_id: text_or(raw, &["user_id"], DEFAULT_USER_ID),
        user_email: email(raw.get("user_email")),
        incident_title: text_or(raw, &["incident_title"], DEFAULT_TITLE),
        incident_raw,
        ai_signature,
        timestamp: first_present(raw, &["timestamp"])
            .unwrap_or_else(|| now.to_rfc3339_opts(SecondsFormat::Millis, true)),
    }
}

/// Text form of a present value, or `None` when the value counts as absent.
///
/// Strings are kept verbatim, booleans and numbers print as they would in a
/// JSON-speaking client (`3.0` prints as `3`), arrays join their elements with
/// commas and objects print as `[object Object]`. A value whose text form is
/// empty (such as `[]`) is also treated as absent.
pub fn coerce(value: &Value) -> Option<String> {
    if !is_truthy(value) {
        return None;
    }
    let text = stringify(value);
    (!text.is_empty()).then_some(text)
}

/// `Priority` named by `value`, case-insensitively, defaulting to `LOW`.
pub fn priority(value: Option<&Value>) -> Priority {
    value
        .and_then(coerce)
        .and_then(|name| Priority::from_name(&name))
        .unwrap_or_default()
}

/// `value` as text if it has the loose `local@domain.tld` shape, else the
/// fallback address.
pub fn email(value: Option<&Value>) -> String {
    match value.map(stringify) {
        Some(candidate) if EMAIL_SHAPE.is_match(&candidate) => candidate,
        _ => FALLBACK_EMAIL.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn text_or(raw: &RawIncidentPayload, keys: &[&str], default: &str) -> String {
    first_present(raw, keys).unwrap_or_else(|| default.to_string())
}

fn first_present(raw: &RawIncidentPayload, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| raw.get(key).and_then(coerce))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(stringify).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn number_text(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
