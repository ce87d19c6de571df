//! Custom serde helpers for backend wire formats.

/// Deserializes an amount that may be `null`, an empty string, a numeric
/// string or a JSON number into `Option<Decimal>`.
///
/// The API reports amounts that are not known yet (e.g. an unpaid order's
/// `receive_amount`) as `""`.
pub mod optional_decimal {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};
    use std::str::FromStr;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Raw>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Raw::Text(s)) if s.trim().is_empty() => Ok(None),
            Some(Raw::Text(s)) => Decimal::from_str(s.trim())
                .map(Some)
                .map_err(|e| serde::de::Error::custom(format!("Invalid decimal '{}': {}", s, e))),
            Some(Raw::Number(n)) => Decimal::from_str(&n.to_string())
                .or_else(|_| Decimal::from_scientific(&n.to_string()))
                .map(Some)
                .map_err(|e| serde::de::Error::custom(format!("Invalid decimal '{}': {}", n, e))),
        }
    }
}

/// Parses a plain-text decimal body; an empty body means "no rate".
pub fn parse_decimal_text(text: &str) -> Result<Option<rust_decimal::Decimal>, String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<rust_decimal::Decimal>()
        .map(Some)
        .map_err(|e| format!("Invalid decimal '{}': {}", trimmed, e))
}
