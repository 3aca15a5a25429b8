use crate::snowflake::{snowflake_timestamp, snowflake_timestamp_iso};

#[test]
fn test_known_snowflake_decodes_to_exact_instant() {
    assert_eq!(
        snowflake_timestamp_iso("470573716711931905").as_deref(),
        Some("2018-07-22T12:51:56.901Z")
    );
}

#[test]
fn test_zero_decodes_to_discord_epoch() {
    assert_eq!(
        snowflake_timestamp_iso("0").as_deref(),
        Some("2015-01-01T00:00:00.000Z")
    );
}

#[test]
fn test_timestamps_are_monotonic_in_identifier_order() {
    // Ascending identifiers, spanning well past the signed 64-bit range
    let ids = [
        "0",
        "4194304",
        "470573716711931905",
        "9223372036854775807",
        "18446744073709551615",
        "1180591620717411303424",
    ];

    let decoded: Vec<_> = ids
        .iter()
        .map(|id| snowflake_timestamp(id).expect("each identifier should decode"))
        .collect();

    for pair in decoded.windows(2) {
        assert!(
            pair[0] <= pair[1],
            "timestamps must not decrease: {:?} > {:?}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_identifiers_past_u64_still_decode() {
    // 2^70: parseable only with arbitrary-precision-safe arithmetic
    let ts = snowflake_timestamp("1180591620717411303424");
    assert!(ts.is_some());
}

#[test]
fn test_invalid_identifiers_yield_none() {
    for id in ["", "abc", "-5", "12.5", "470573716711931905x"] {
        assert_eq!(snowflake_timestamp(id), None, "{id:?} should not decode");
    }
}

#[test]
fn test_astronomically_large_identifier_yields_none() {
    // u128::MAX shifts to a millisecond count past the representable range
    assert_eq!(
        snowflake_timestamp("340282366920938463463374607431768211455"),
        None
    );
}

#[test]
fn test_decoding_is_deterministic() {
    let first = snowflake_timestamp("470573716711931905");
    let second = snowflake_timestamp("470573716711931905");
    assert_eq!(first, second);
}
