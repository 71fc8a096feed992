//! 时长解析与序列化工具
//!
//! 提供自定义 Serde 序列化/反序列化支持（用于 `http_timeout`）：
//! - 序列化: `Duration` -> 时长字符串（如 `"1m30s"`）
//! - 反序列化: 时长字符串 或 整数纳秒 -> `Duration`
//!
//! 字符串格式为带单位的数字序列：`ns`、`us`（`µs`）、`ms`、`s`、`m`、`h`、`d`，
//! 允许小数，例如 `"30s"`、`"1.5h"`、`"1m30s"`、`"500ms"`。

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serializer};

/// Largest nanosecond count representable as `u64`, rounded down.
const MAX_NANOS: f64 = 1.8e19;

const NANOS_PER_UNIT: &[(&str, f64)] = &[
    ("ns", 1.0),
    ("us", 1e3),
    ("µs", 1e3),
    ("ms", 1e6),
    ("s", 1e9),
    ("m", 60e9),
    ("h", 3_600e9),
    ("d", 86_400e9),
];

/// 解析时长字符串
///
/// `"0"` 被接受为零时长；其余数值必须带单位。
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_duration(input: &str) -> Result<Duration, String> {
    let s = input.trim();
    if s.is_empty() {
        return Err("empty duration".to_string());
    }
    if s == "0" {
        return Ok(Duration::ZERO);
    }

    let mut total_nanos = 0f64;
    let mut rest = s;
    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        if number_len == 0 {
            return Err(format!("invalid duration \"{input}\": expected a number"));
        }
        let value: f64 = rest[..number_len]
            .parse()
            .map_err(|_| format!("invalid duration \"{input}\": bad number"))?;
        rest = &rest[number_len..];

        let unit_len = rest
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(rest.len());
        let unit = &rest[..unit_len];
        let Some(&(_, scale)) = NANOS_PER_UNIT.iter().find(|(name, _)| *name == unit) else {
            return Err(if unit.is_empty() {
                format!("invalid duration \"{input}\": missing unit")
            } else {
                format!("invalid duration \"{input}\": unknown unit \"{unit}\"")
            });
        };
        rest = &rest[unit_len..];
        total_nanos += value * scale;
    }

    if !total_nanos.is_finite() || total_nanos >= MAX_NANOS {
        return Err(format!("invalid duration \"{input}\": out of range"));
    }
    Ok(Duration::from_nanos(total_nanos.round() as u64))
}

/// 格式化时长（`parse_duration` 的逆操作）
pub fn format_duration(d: Duration) -> String {
    if d.is_zero() {
        return "0s".to_string();
    }
    if d.subsec_nanos() != 0 {
        return if d.subsec_nanos() % 1_000_000 == 0 {
            format!("{}ms", d.as_millis())
        } else {
            format!("{}ns", d.as_nanos())
        };
    }

    let secs = d.as_secs();
    let (hours, minutes, seconds) = (secs / 3600, secs % 3600 / 60, secs % 60);
    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours}h"));
    }
    if minutes > 0 {
        out.push_str(&format!("{minutes}m"));
    }
    if seconds > 0 {
        out.push_str(&format!("{seconds}s"));
    }
    out
}

/// 序列化 Option<`Duration`> 为 Option<时长字符串>
#[allow(clippy::ref_option)]
pub fn serialize<S>(d: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match d {
        Some(d) => serializer.serialize_some(&format_duration(*d)),
        None => serializer.serialize_none(),
    }
}

/// 反序列化：支持时长字符串或整数纳秒
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawDuration {
        String(String),
        Nanos(u64),
    }

    match Option::<RawDuration>::deserialize(deserializer)? {
        Some(RawDuration::String(s)) => parse_duration(&s).map(Some).map_err(Error::custom),
        Some(RawDuration::Nanos(n)) => Ok(Some(Duration::from_nanos(n))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_units() {
        assert_eq!(parse_duration("30s"), Ok(Duration::from_secs(30)));
        assert_eq!(parse_duration("500ms"), Ok(Duration::from_millis(500)));
        assert_eq!(parse_duration("2h"), Ok(Duration::from_secs(7200)));
        assert_eq!(parse_duration("1d"), Ok(Duration::from_secs(86_400)));
        assert_eq!(parse_duration("250us"), Ok(Duration::from_micros(250)));
        assert_eq!(parse_duration("7ns"), Ok(Duration::from_nanos(7)));
    }

    #[test]
    fn parse_compound_and_fractional() {
        assert_eq!(parse_duration("1m30s"), Ok(Duration::from_secs(90)));
        assert_eq!(parse_duration("1.5h"), Ok(Duration::from_secs(5400)));
        assert_eq!(parse_duration(" 45s "), Ok(Duration::from_secs(45)));
    }

    #[test]
    fn parse_zero_without_unit() {
        assert_eq!(parse_duration("0"), Ok(Duration::ZERO));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("30").is_err());
        assert!(parse_duration("s").is_err());
        assert!(parse_duration("10x").is_err());
        assert!(parse_duration("1..5s").is_err());
        assert!(parse_duration("-5s").is_err());
    }

    #[test]
    fn format_whole_and_subsecond() {
        assert_eq!(format_duration(Duration::from_secs(30)), "30s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m30s");
        assert_eq!(format_duration(Duration::from_secs(3600)), "1h");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1500ms");
        assert_eq!(format_duration(Duration::from_nanos(42)), "42ns");
        assert_eq!(format_duration(Duration::ZERO), "0s");
    }

    #[test]
    fn format_output_parses_back() {
        for d in [
            Duration::from_secs(45),
            Duration::from_secs(3725),
            Duration::from_millis(250),
        ] {
            assert_eq!(parse_duration(&format_duration(d)), Ok(d));
        }
    }
}
