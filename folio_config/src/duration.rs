use std::ops::Deref;

use serde::Deserialize;

/// A duration written as space separated parts like `"1m 30s"`. Supported
/// units are `ms`, `s`, `m`, `h` and `d`; a bare number means seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(pub std::time::Duration);

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl Deref for Duration {
    type Target = std::time::Duration;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse(&s)
            .map(Self)
            .ok_or_else(|| serde::de::Error::custom("Invalid duration"))
    }
}

fn parse(s: &str) -> Option<std::time::Duration> {
    s.split_whitespace()
        .try_fold(std::time::Duration::ZERO, |total, part| {
            let split = part
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(part.len());
            let (value, unit) = part.split_at(split);
            let value = value.parse::<u32>().ok()?;
            let unit = match unit {
                "ms" => std::time::Duration::from_millis(1),
                "" | "s" => std::time::Duration::from_secs(1),
                "m" => std::time::Duration::from_secs(60),
                "h" => std::time::Duration::from_secs(60 * 60),
                "d" => std::time::Duration::from_secs(24 * 60 * 60),
                _ => return None,
            };
            total.checked_add(unit.checked_mul(value)?)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_duration() {
        for (input, expected) in [
            ("13s", Some(13_000)),
            ("250ms", Some(250)),
            ("42m", Some(42 * 60 * 1000)),
            ("7h", Some(7 * 60 * 60 * 1000)),
            ("20d", Some(20 * 24 * 60 * 60 * 1000)),
            ("5", Some(5000)),
            ("", Some(0)),
            ("1d 2h 3m 4s", Some((((24 + 2) * 60 + 3) * 60 + 4) * 1000)),
            ("1m 500ms", Some(60_500)),
            ("xyz", None),
            ("7dd", None),
            ("s", None),
        ] {
            let input = serde_json::Value::String(input.into());
            let output = serde_json::from_value::<Duration>(input)
                .ok()
                .map(|x| x.0.as_millis());
            assert_eq!(output, expected);
        }
    }
}
