//! 行序列化的端到端场景：标量、嵌套列表、两种解码策略（严格失败与跳过坏片段）。

use std::convert::Infallible;
use std::num::ParseIntError;

use spark_line_serial::{
    Boundaries, InvalidEncodingError, LineCodec, LineCodecConfig, LineDecoder, LineEncoder,
    Terminator, deserialize, deserialize_lenient, serialize,
};

/// 把 `[1, 2]` 写成 `"[1, 2]"`，与常见的列表 `Display` 风格一致。
struct IntListEncoder;

impl LineEncoder<Vec<i32>> for IntListEncoder {
    fn encode(&self, element: &Vec<i32>) -> String {
        format!("{element:?}")
    }
}

/// 严格解码：任一片段不是整数即失败。
struct StrictIntListDecoder;

impl LineDecoder<Vec<i32>> for StrictIntListDecoder {
    type Error = ParseIntError;

    fn decode(&self, line: &str) -> Result<Vec<i32>, Self::Error> {
        let inner = line.trim_start_matches('[').trim_end_matches(']');
        inner
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::parse)
            .collect()
    }
}

/// 宽松解码：丢弃无法解析的片段，自身永不失败。
struct SkippingIntListDecoder;

impl LineDecoder<Vec<i32>> for SkippingIntListDecoder {
    type Error = Infallible;

    fn decode(&self, line: &str) -> Result<Vec<i32>, Self::Error> {
        let inner = line.trim_start_matches('[').trim_end_matches(']');
        Ok(inner
            .split(',')
            .filter_map(|token| token.trim().parse().ok())
            .collect())
    }
}

#[test]
fn integers_round_trip_through_text() {
    let text = serialize(&[1, 2, 3], |n: &i32| n.to_string()).expect("serialize");
    assert_eq!(text, "1\n2\n3\n");
    assert_eq!(deserialize(&text, str::parse::<i32>), Ok(vec![1, 2, 3]));
}

#[test]
fn nested_lists_round_trip_with_comma_encoding() {
    let input = vec![vec![1, 2], vec![3], vec![]];
    let text = serialize(&input, |list: &Vec<i32>| {
        list.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
    })
    .expect("serialize");
    assert_eq!(text, "1,2\n3\n\n");

    let output = deserialize(&text, |line: &str| {
        line.split(',')
            .filter(|token| !token.is_empty())
            .map(str::parse::<i32>)
            .collect::<Result<Vec<_>, _>>()
    })
    .expect("deserialize");
    assert_eq!(output, input);
}

#[test]
fn nested_lists_round_trip_with_trait_implementations() {
    let input = vec![vec![-5, 0, 12], vec![], vec![i32::MAX, i32::MIN]];
    let text = serialize(&input, IntListEncoder).expect("serialize");
    assert_eq!(text.lines().next(), Some("[-5, 0, 12]"));

    assert_eq!(deserialize(&text, StrictIntListDecoder), Ok(input.clone()));
    assert_eq!(deserialize(&text, SkippingIntListDecoder), Ok(input));
}

#[test]
fn strict_and_skipping_decoders_disagree_on_malformed_tokens() {
    let text = "[1, x, 3]\n[4]\n";
    assert!(deserialize(text, StrictIntListDecoder).is_err());
    assert_eq!(
        deserialize(text, SkippingIntListDecoder),
        Ok(vec![vec![1, 3], vec![4]])
    );
}

#[test]
fn decode_error_is_returned_unwrapped() {
    let err = deserialize("1\n2\nthree\n", str::parse::<u8>).expect_err("third line is invalid");
    let expected = "three".parse::<u8>().expect_err("not a number");
    assert_eq!(err, expected);
}

#[test]
fn lenient_free_function_drops_bad_lines() {
    assert_eq!(
        deserialize_lenient("10\nten\n30", str::parse::<u16>),
        vec![10, 30]
    );
}

#[test]
fn final_line_without_terminator_is_accepted() {
    assert_eq!(deserialize("4\n5", str::parse::<i32>), Ok(vec![4, 5]));
    assert_eq!(deserialize("4\r\n5\r\n", str::parse::<i32>), Ok(vec![4, 5]));
}

#[test]
fn empty_lines_between_terminators_are_decoded() {
    let lines = deserialize("a\n\nb\n", |line: &str| -> Result<String, Infallible> {
        Ok(line.to_owned())
    })
    .expect("infallible");
    assert_eq!(lines, ["a", "", "b"]);
}

#[test]
fn rejection_reports_first_offending_element() {
    let err = serialize(["fine", "two\nlines", "also\nbad"], |s: &str| s.to_owned())
        .expect_err("must reject");
    assert_eq!(
        err,
        InvalidEncodingError {
            index: 1,
            line: "two\nlines".to_owned(),
            offset: 3,
        }
    );
}

#[test]
fn carriage_return_is_rejected_by_default() {
    let err = serialize(["tail\r"], |s: &str| s.to_owned()).expect_err("must reject");
    assert_eq!(err.offset, 4);
}

#[test]
fn lone_carriage_return_splits_lines_by_default() {
    assert_eq!(deserialize("1\r2\n", str::parse::<i32>), Ok(vec![1, 2]));
    assert_eq!(deserialize("3\u{85}4\u{2029}", str::parse::<i32>), Ok(vec![3, 4]));

    let newline = LineCodec::from(LineCodecConfig::default().with_boundaries(Boundaries::Newline));
    assert!(newline.deserialize("1\r2\n", str::parse::<i32>).is_err());
}

#[test]
fn configured_codec_loaded_from_toml() {
    let config = LineCodecConfig::from_toml_str("terminator = \"crlf\"\nboundaries = \"unicode\"")
        .expect("valid config");
    assert_eq!(config.terminator, Terminator::CrLf);
    assert_eq!(config.boundaries, Boundaries::Unicode);

    let codec = LineCodec::from(config);
    let text = codec
        .serialize(["α", "β"], |s: &str| s.to_owned())
        .expect("serialize");
    assert_eq!(text, "α\r\nβ\r\n");

    let scanned: Vec<&str> = codec.lines("a\rb\u{2028}c").collect();
    assert_eq!(scanned, ["a", "b", "c"]);
}
