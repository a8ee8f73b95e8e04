use inet_conversion::conversion::parse::{atoi, parse_integer_compatible};
use inet_conversion::conversion::parse::{parse_integer_strict, parse_octet_strict};
use inet_conversion::{integer_text_to_octets, octets_to_integer};
use inet_conversion::{ConversionConfig, ConversionError, ParsePolicy};

#[test]
fn test_atoi() {
    assert_eq!(atoi("72"), 72);
    assert_eq!(atoi("abc"), 0);
    assert_eq!(atoi(""), 0);
    assert_eq!(atoi(" 12xyz"), 12);
    assert_eq!(atoi("\t\n+7"), 7);
    assert_eq!(atoi("-1"), -1);
    assert_eq!(atoi("- 1"), 0);
    assert_eq!(atoi("1.5"), 1);
    assert_eq!(atoi("0x1F"), 0);
    assert_eq!(atoi("010"), 10);
}

/// `strtol` saturates to `long`, the cast to `int` keeps the low 32 bits.
#[test]
fn test_atoi_wide_values() {
    assert_eq!(atoi("2147483648"), i32::MIN);
    assert_eq!(atoi("99999999999"), 1215752191);
    assert_eq!(atoi("-2147483649"), i32::MAX);
    assert_eq!(atoi("99999999999999999999999"), -1);
    assert_eq!(atoi("-99999999999999999999999"), 0);
}

#[test]
fn test_compatible_octets_degrade_silently() {
    let config = ConversionConfig::default();
    assert_eq!(config.parse_policy, ParsePolicy::Compatible);
    assert_eq!(octets_to_integer(&["abc", "", "x", "?"], &config).unwrap(), 0);
    assert_eq!(octets_to_integer(&["0", "0", "0", "256"], &config).unwrap(), 256);
    assert_eq!(octets_to_integer(&["0", "0", "0", "-1"], &config).unwrap(), 4294967295);
    assert_eq!(octets_to_integer(&[" 10", "0abc", "0", "1"], &config).unwrap(), 167772161);
}

#[test]
fn test_compatible_integer() {
    assert_eq!(parse_integer_compatible("-1"), u32::MAX);
    assert_eq!(parse_integer_compatible("junk"), 0);
    let config = ConversionConfig::default();
    assert_eq!(integer_text_to_octets("-1", &config).unwrap().to_string(), "255.255.255.255");
}

#[test]
fn test_strict_octets() {
    assert_eq!(parse_octet_strict("0"), Ok(0));
    assert_eq!(parse_octet_strict("+255"), Ok(255));
    assert_eq!(parse_octet_strict("007"), Ok(7));
    assert_eq!(
        parse_octet_strict("abc"),
        Err(ConversionError::Parse { token: "abc".to_string() }),
    );
    assert_eq!(
        parse_octet_strict("-1"),
        Err(ConversionError::Parse { token: "-1".to_string() }),
    );
    assert_eq!(
        parse_octet_strict(" 1"),
        Err(ConversionError::Parse { token: " 1".to_string() }),
    );
    assert_eq!(
        parse_octet_strict("256"),
        Err(ConversionError::Range { token: "256".to_string(), max: 255 }),
    );
}

#[test]
fn test_strict_integer() {
    assert_eq!(parse_integer_strict("4294967295"), Ok(u32::MAX));
    assert_eq!(
        parse_integer_strict("4294967296"),
        Err(ConversionError::Range { token: "4294967296".to_string(), max: u32::MAX }),
    );
    assert_eq!(
        parse_integer_strict("1e9"),
        Err(ConversionError::Parse { token: "1e9".to_string() }),
    );
}

#[test]
fn test_strict_rejects_first_bad_octet() {
    let config = ConversionConfig::strict();
    assert_eq!(config.parse_policy, ParsePolicy::Strict);
    assert_eq!(
        octets_to_integer(&["1", "999", "x", "4"], &config),
        Err(ConversionError::Range { token: "999".to_string(), max: 255 }),
    );
}

#[test]
fn test_error_messages() {
    let e = ConversionError::Range { token: "256".to_string(), max: 255 };
    assert_eq!(e.to_string(), "Number `256` out of range [0, 255].");
    assert_eq!(format!("{:?}", e), "ConversionError::Number `256` out of range [0, 255].");
    assert_eq!(
        ConversionError::OctetCount { found: 2 }.to_string(),
        "Expected 4 octets, found 2.",
    );
}
