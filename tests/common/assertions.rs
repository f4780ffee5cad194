//! Domain-specific assertions for fabalos harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear which normalization invariant was violated.

use fabalos_core::{NormalizedIncident, Priority};

/// Assert that two telemetry lines collapse to the same signature.
///
/// ```rust
/// assert_same_signature!("at 10:00:00", "at 23:59:59");
/// ```
#[macro_export]
macro_rules! assert_same_signature {
    ($left:expr, $right:expr) => {{
        let left: &str = $left;
        let right: &str = $right;
        let (l, r) = (fabalos_core::signature(left), fabalos_core::signature(right));
        if l != r {
            panic!(
                "assert_same_signature! failed:\n  left:  {:?}\n    ->   {:?}\n  right: {:?}\n    ->   {:?}",
                left, l, right, r
            );
        }
    }};
}

/// Assert the signature of `$text` equals `$expected`.
#[macro_export]
macro_rules! assert_signature {
    ($text:expr, $expected:expr) => {{
        let text: &str = $text;
        let expected: &str = $expected;
        pretty_assertions::assert_eq!(
            fabalos_core::signature(text),
            expected,
            "signature of {:?}",
            text
        );
    }};
}

/// Assert that every field of a normalized incident is populated.
pub fn assert_populated(incident: &NormalizedIncident) {
    let fields = [
        ("origin", &incident.origin),
        ("user_company", &incident.user_company),
        ("user_name", &incident.user_name),
        ("user_id", &incident.user_id),
        ("user_email", &incident.user_email),
        ("incident_title", &incident.incident_title),
        ("incident_raw", &incident.incident_raw),
        ("ai_signature", &incident.ai_signature),
        ("timestamp", &incident.timestamp),
    ];
    for (name, value) in fields {
        assert!(
            !value.is_empty(),
            "normalized incident has empty {name}: {incident:#?}"
        );
    }
    assert!(
        Priority::ALL.contains(&incident.priority),
        "unexpected priority {:?}",
        incident.priority
    );
}
