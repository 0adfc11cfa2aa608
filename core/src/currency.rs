//! Currency text codec for catalog prices like `€ 3,45`.
//!
//! Parsing is lenient about decoration (symbol, spaces, stray letters)
//! and strict about the number that remains.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot parse '{text}' as a currency amount (cleaned to '{cleaned}')")]
pub struct ParseError {
    pub text:    String,
    pub cleaned: String,
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyFormat {
    pub symbol:   String,
    pub decimals: u32,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self { symbol: "€".into(), decimals: 2 }
    }
}

impl CurrencyFormat {
    pub fn new(symbol: impl Into<String>, decimals: u32) -> Self {
        Self { symbol: symbol.into(), decimals }
    }

    /// `"€ 3,45"`, `"3,45"` and `"3.45"` all parse to 3.45.
    /// Empty or digit-free text is `Ok(None)`.
    pub fn parse(&self, text: &str) -> Result<Option<f64>, ParseError> {
        let mut s = text.trim().to_string();
        if !self.symbol.is_empty() {
            s = s.replace(self.symbol.as_str(), "");
        }
        let cleaned: String = s
            .replace('€', "")
            .trim()
            .replace(',', ".")
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();

        if cleaned.is_empty() {
            return Ok(None);
        }
        cleaned.parse::<f64>().map(Some).map_err(|_| ParseError {
            text: text.to_string(),
            cleaned,
        })
    }

    pub fn format(&self, value: Option<f64>) -> Option<String> {
        let value = value.filter(|v| v.is_finite())?;
        let rounded = round_to(value, self.decimals);
        let digits = format!("{:.*}", self.decimals as usize, rounded).replace('.', ",");
        Some(if self.symbol.is_empty() {
            digits
        } else {
            format!("{} {}", self.symbol, digits)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_symbol_and_converts_comma() {
        let fmt = CurrencyFormat::default();
        assert_eq!(fmt.parse("€ 3,45").unwrap(), Some(3.45));
        assert_eq!(fmt.parse("  3,45 ").unwrap(), Some(3.45));
        assert_eq!(fmt.parse("3.45").unwrap(), Some(3.45));
        assert_eq!(fmt.parse("€12").unwrap(), Some(12.0));
    }

    #[test]
    fn formats_with_comma_decimal() {
        let fmt = CurrencyFormat::default();
        assert_eq!(fmt.format(Some(3.456)).as_deref(), Some("€ 3,46"));
        assert_eq!(fmt.format(Some(10.0)).as_deref(), Some("€ 10,00"));
        assert_eq!(fmt.format(None), None);
        assert_eq!(fmt.format(Some(f64::NAN)), None);
    }

    #[test]
    fn custom_symbol_and_precision() {
        let fmt = CurrencyFormat::new("$", 3);
        assert_eq!(fmt.format(Some(1.23456)).as_deref(), Some("$ 1,235"));
        assert_eq!(fmt.parse("$ 1,235").unwrap(), Some(1.235));
    }
}
