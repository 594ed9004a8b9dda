//! Typed parameters decoded from path captures.

/// Values extracted from a matched path.
///
/// Currency codes are kept exactly as they appeared in the path.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestParam {
    pub from_currency: String,
    pub to_currency: String,
    /// Amount captured from the path, 0.0 for routes without one.
    pub value: f64,
}

/// Error produced when captures cannot be turned into a [`RequestParam`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamError {
    #[error("capture group {index} is missing")]
    MissingCapture { index: usize },

    #[error("'{raw}' is not a finite number")]
    InvalidValue { raw: String },
}

/// Decode `[from, to]` captures. The value defaults to 0.0.
pub fn decode_currency_pair(captures: &[&str]) -> Result<RequestParam, ParamError> {
    Ok(RequestParam {
        from_currency: capture(captures, 0)?.to_string(),
        to_currency: capture(captures, 1)?.to_string(),
        value: 0.0,
    })
}

/// Decode `[from, to, value]` captures.
pub fn decode_currency_pair_with_value(captures: &[&str]) -> Result<RequestParam, ParamError> {
    let raw = capture(captures, 2)?;
    Ok(RequestParam {
        from_currency: capture(captures, 0)?.to_string(),
        to_currency: capture(captures, 1)?.to_string(),
        value: parse_value(raw)?,
    })
}

/// Parse a decimal amount. Overflowing literals become infinite and are rejected.
pub fn parse_value(raw: &str) -> Result<f64, ParamError> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParamError::InvalidValue { raw: raw.to_string() })
}

fn capture<'a>(captures: &[&'a str], index: usize) -> Result<&'a str, ParamError> {
    captures
        .get(index)
        .copied()
        .filter(|c| !c.is_empty())
        .ok_or(ParamError::MissingCapture { index })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_defaults_value() {
        let param = decode_currency_pair(&["usd", "EUR"]).unwrap();
        assert_eq!(param.from_currency, "usd");
        assert_eq!(param.to_currency, "EUR");
        assert_eq!(param.value, 0.0);
    }

    #[test]
    fn test_pair_with_value() {
        let param = decode_currency_pair_with_value(&["gbp", "jpy", "100"]).unwrap();
        assert_eq!(param.value, 100.0);

        let param = decode_currency_pair_with_value(&["gbp", "jpy", "5.50"]).unwrap();
        assert_eq!(param.value, 5.5);

        let param = decode_currency_pair_with_value(&["gbp", "jpy", ".5"]).unwrap();
        assert_eq!(param.value, 0.5);
    }

    #[test]
    fn test_missing_capture() {
        assert_eq!(
            decode_currency_pair(&["usd"]),
            Err(ParamError::MissingCapture { index: 1 })
        );
        assert_eq!(
            decode_currency_pair_with_value(&["usd", "eur", ""]),
            Err(ParamError::MissingCapture { index: 2 })
        );
    }

    #[test]
    fn test_value_must_be_finite() {
        let huge = "9".repeat(400);
        assert!(matches!(
            parse_value(&huge),
            Err(ParamError::InvalidValue { .. })
        ));
        assert!(parse_value("NaN").is_err());
        assert!(parse_value("inf").is_err());
        assert_eq!(parse_value("0001.250"), Ok(1.25));
    }
}
