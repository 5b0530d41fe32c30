use anyhow::Result;
use strconv_kit::{
    from_base64, from_bool, from_float64, from_hex, from_int, from_int64, from_uint64, to_base64,
    to_bool, to_float64, to_hex, to_int, to_int64, to_uint64, ConvertError, ErrorCategory,
};

#[test]
fn test_int_round_trip_canonical_text() -> Result<()> {
    for s in ["0", "1", "-1", "456", "-9876543210", "9223372036854775807"] {
        assert_eq!(from_int64(to_int64(s)?), s);
    }
    for s in ["0", "123", "-2147483648"] {
        assert_eq!(from_int(to_int(s)?), s);
    }
    Ok(())
}

#[test]
fn test_int_non_canonical_text_normalizes() -> Result<()> {
    assert_eq!(from_int64(to_int64("+15")?), "15");
    assert_eq!(from_int64(to_int64("007")?), "7");
    assert_eq!(from_int64(to_int64("-0")?), "0");
    Ok(())
}

#[test]
fn test_invalid_numbers_are_parse_errors() {
    let cases: Vec<ConvertError> = vec![
        to_int("abc").unwrap_err(),
        to_int64("xyz").unwrap_err(),
        to_int64("1_000").unwrap_err(),
        to_uint64("-123").unwrap_err(),
        to_uint64("").unwrap_err(),
        to_float64("not-a-float").unwrap_err(),
    ];
    for err in cases {
        assert_eq!(err.category(), ErrorCategory::Parse, "{err}");
    }
}

#[test]
fn test_uint64_and_float64() -> Result<()> {
    assert_eq!(to_uint64("1234567890")?, 1234567890);
    assert_eq!(from_uint64(1234567890), "1234567890");
    assert_eq!(to_float64("3.1415")?, 3.1415);
    assert_eq!(from_float64(2.71828), "2.71828");
    assert!(!from_float64(1.0e300).contains('e'));
    assert!(!from_float64(5.0e-324).contains('e'));
    Ok(())
}

#[test]
fn test_bool_literals() -> Result<()> {
    assert!(to_bool("true")?);
    assert!(!to_bool("false")?);
    assert!(to_bool("1")?);
    assert!(!to_bool("0")?);
    assert_eq!(to_bool("maybe").unwrap_err().category(), ErrorCategory::Parse);
    assert_eq!(from_bool(to_bool("TRUE")?), "true");
    assert_eq!(from_bool(to_bool("F")?), "false");
    Ok(())
}

#[test]
fn test_base64() -> Result<()> {
    assert_eq!(to_base64("hello world"), "aGVsbG8gd29ybGQ=");
    assert_eq!(from_base64("aGVsbG8gd29ybGQ=")?, b"hello world");
    assert_eq!(
        from_base64("!!invalid!!").unwrap_err().category(),
        ErrorCategory::Encoding
    );
    Ok(())
}

#[test]
fn test_hex() -> Result<()> {
    assert_eq!(to_hex("abc123"), "616263313233");
    assert_eq!(from_hex("616263313233")?, b"abc123");
    assert_eq!(from_hex("ZZZ123").unwrap_err().category(), ErrorCategory::Encoding);
    Ok(())
}

#[test]
fn test_byte_round_trips() -> Result<()> {
    let all_bytes: Vec<u8> = (0..=255).collect();
    let samples: [&[u8]; 5] = [b"", b"a", b"ab", b"abc", &all_bytes];
    for bytes in samples {
        assert_eq!(from_base64(&to_base64(bytes))?, bytes);
        assert_eq!(from_hex(&to_hex(bytes))?, bytes);
    }
    Ok(())
}
