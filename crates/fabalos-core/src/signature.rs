//! Signature extractor — rewrites free-form incident telemetry into a stable
//! template by replacing volatile tokens with fixed placeholders.
//!
//! Two reports of the same fault that differ only in embedded addresses,
//! identifiers or clock readings collapse to the same signature, which makes
//! the signature usable as an embedding/similarity key.
//!
//! # Rule cascade
//!
//! [`RULES`] is applied strictly in order. Each rule is a global, leftmost,
//! non-overlapping replacement over the output of the previous rule.
//!
//! | # | Rule   | Matches                                   | Placeholder |
//! |---|--------|-------------------------------------------|-------------|
//! | 1 | `hex`  | `0x` followed by hex digits               | `{HEX}`     |
//! | 2 | `uuid` | 8-4-4-4-12 hex, any case                  | `{UUID}`    |
//! | 3 | `ipv4` | four 1–3 digit groups joined by dots      | `{IP}`      |
//! | 4 | `iso`  | `YYYY-MM-DDThh:mm:ss`                     | `{TIME}`    |
//! | 5 | `time` | `hh:mm:ss`                                | `{TIME}`    |
//! | 6 | `num`  | standalone run of five or more digits     | `{NUM}`     |
//!
//! Longer, more specific shapes must run before the shorter shapes they
//! contain: the ISO rule before the bare clock rule, and every digit-bearing
//! rule before `num`. Placeholders contain no digits and are delimited by
//! braces, so no later pass (and no second application) can match inside one.
//!
//! Digits are ASCII only and `num` uses ASCII word boundaries.

use regex::{NoExpand, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

/// One step of the signature cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub name: &'static str,
    pub pattern: &'static str,
    pub placeholder: &'static str,
}

/// The cascade, in application order.
pub const RULES: &[Rule] = &[
    Rule {
        name: "hex",
        pattern: r"0x[0-9a-fA-F]+",
        placeholder: "{HEX}",
    },
    Rule {
        name: "uuid",
        pattern: r"(?i)[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}",
        placeholder: "{UUID}",
    },
    Rule {
        name: "ipv4",
        pattern: r"[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}",
        placeholder: "{IP}",
    },
    Rule {
        name: "iso",
        pattern: r"[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}",
        placeholder: "{TIME}",
    },
    Rule {
        name: "time",
        pattern: r"[0-9]{2}:[0-9]{2}:[0-9]{2}",
        placeholder: "{TIME}",
    },
    Rule {
        name: "num",
        pattern: r"(?-u:\b)[0-9]{5,}(?-u:\b)",
        placeholder: "{NUM}",
    },
];

static COMPILED: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    RULES
        .iter()
        .map(|rule| {
            let regex = Regex::new(rule.pattern).expect("signature rule patterns are valid");
            (regex, rule.placeholder)
        })
        .collect()
});

/// Derive the signature of `text`. Total and idempotent.
pub fn signature(text: &str) -> String {
    let mut out = text.to_owned();
    for (regex, placeholder) in COMPILED.iter() {
        let replaced = regex.replace_all(&out, NoExpand(placeholder));
        if let Cow::Owned(next) = replaced {
            out = next;
        }
    }
    out
}
