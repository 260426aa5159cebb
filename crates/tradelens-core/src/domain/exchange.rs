use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Supported stock exchanges and their Yahoo Finance ticker suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Exchange {
    /// National Stock Exchange of India, suffix "NS".
    Nse,
    /// Bombay Stock Exchange, suffix "BO".
    Bse,
}

impl Exchange {
    pub const ALL: [Self; 2] = [Self::Nse, Self::Bse];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nse => "nse",
            Self::Bse => "bse",
        }
    }

    /// Suffix appended to a bare symbol to form the provider ticker.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Nse => "NS",
            Self::Bse => "BO",
        }
    }
}

impl Display for Exchange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Exchange {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "nse" => Ok(Self::Nse),
            "bse" => Ok(Self::Bse),
            other => Err(ValidationError::InvalidExchange {
                value: other.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exchange_case_insensitively() {
        assert_eq!(Exchange::from_str("NSE").expect("must parse"), Exchange::Nse);
        assert_eq!(Exchange::from_str(" bse ").expect("must parse"), Exchange::Bse);
    }

    #[test]
    fn rejects_unknown_exchange() {
        let err = Exchange::from_str("nyse").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidExchange { .. }));
    }

    #[test]
    fn maps_to_yahoo_suffixes() {
        assert_eq!(Exchange::Nse.suffix(), "NS");
        assert_eq!(Exchange::Bse.suffix(), "BO");
    }
}
