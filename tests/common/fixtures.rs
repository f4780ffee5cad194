//! Static payload and telemetry corpora used across harnesses.

/// Incident payloads in the shapes real reporters send.
pub const CORPUS_PAYLOADS: &[&str] = &[
    r#"{"origin":"checkout-api","priority":"high","user_company":"Acme","user_name":"Dana","user_id":"u-17","user_email":"dana@acme.io","incident_title":"Payment timeouts","incident_raw":"POST /pay timed out after 30000 ms at 2024-05-01T12:30:45","timestamp":"2024-05-01T12:30:46Z"}"#,
    r#"{"origin":"edge","priority":"CRITICAL","unit_company":"Globex","incident_description":"segfault at 0x7ffd1234 in worker 9f1c2a3b-1d2e-4f50-8a9b-0c1d2e3f4a5b"}"#,
    r#"{"priority":"banana","user_email":"not-an-email","incident_title":""}"#,
    r#"{"user_id":42,"priority":null,"incident_raw":"disk full on 10.0.0.12 at 03:14:15"}"#,
    r#"{}"#,
    r#"[1,2,3]"#,
];

/// Pairs of telemetry lines that describe the same fault with different
/// volatile values. Each pair must produce one signature.
pub const EQUIVALENT_TELEMETRY: &[(&str, &str)] = &[
    (
        "Connection to 10.0.0.1 refused at 2024-05-01T12:30:45 (req 8812345)",
        "Connection to 172.16.254.3 refused at 2025-11-30T23:59:59 (req 10000000)",
    ),
    (
        "job 3f2504e0-4f89-11d3-9a0c-0305e82c3301 crashed: SIGSEGV at 0x0040a1f3",
        "job 123E4567-E89B-12D3-A456-426614174000 crashed: SIGSEGV at 0xdeadbeef",
    ),
    (
        "[14:02:11] heartbeat lost for node 55555",
        "[09:00:00] heartbeat lost for node 98765432",
    ),
];

/// Telemetry mixing every volatile token class.
pub const MIXED_TELEMETRY: &str = "worker 0xAB12 job 3f2504e0-4f89-11d3-9a0c-0305e82c3301 \
     from 192.168.0.9 started 2024-05-01T00:00:01 retry at 00:00:31 pid 424242 port 8080";
