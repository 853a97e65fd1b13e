use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::account::AccountId;
use crate::error::TypeError;

/// Quantity of the native asset, in drops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Drops(pub u64);

impl Drops {
    /// The raw drop count.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Drops {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Drops {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Native amounts are plain numeric strings on the wire.
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Drops {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse::<u64>()
            .map(Drops)
            .map_err(serde::de::Error::custom)
    }
}

/// Three-character issued-currency code.
///
/// Codes are case-sensitive ASCII alphanumerics. `XRP` is reserved for the
/// native asset and is not a valid issued code.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Currency([u8; 3]);

impl Currency {
    /// Validate and construct a currency code.
    pub fn from_code(code: &str) -> Result<Self, TypeError> {
        let bytes = code.as_bytes();
        if bytes.len() != 3 || !bytes.iter().all(|b| b.is_ascii_alphanumeric()) {
            return Err(TypeError::InvalidCurrency(code.to_string()));
        }
        if bytes == b"XRP" {
            return Err(TypeError::InvalidCurrency(code.to_string()));
        }
        Ok(Self([bytes[0], bytes[1], bytes[2]]))
    }

    /// The code as a string slice.
    pub fn as_str(&self) -> &str {
        // Construction guarantees ASCII.
        std::str::from_utf8(&self.0).unwrap_or("???")
    }
}

impl fmt::Debug for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Currency({})", self.as_str())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Currency {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Currency::from_code(&s).map_err(serde::de::Error::custom)
    }
}

/// Signed decimal value of an issued-currency amount.
///
/// Stored as a normalized `mantissa * 10^exponent` pair: the mantissa carries
/// no trailing zeros, and zero is always `{0, 0}`. Rendering never uses
/// exponent notation.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct IouValue {
    mantissa: i64,
    exponent: i32,
}

impl IouValue {
    /// Zero.
    pub const ZERO: IouValue = IouValue {
        mantissa: 0,
        exponent: 0,
    };

    /// Construct from a mantissa/exponent pair, normalizing.
    pub fn new(mantissa: i64, exponent: i32) -> Self {
        Self::normalize(mantissa as i128, exponent)
    }

    /// Construct from an integer.
    pub fn from_int(value: i64) -> Self {
        Self::new(value, 0)
    }

    fn normalize(mut mantissa: i128, mut exponent: i32) -> Self {
        if mantissa == 0 {
            return Self::ZERO;
        }
        // Widths beyond i64 lose the least-significant digits; sums of
        // in-range values stay well inside this bound in practice.
        while mantissa > i64::MAX as i128 || mantissa < i64::MIN as i128 {
            mantissa /= 10;
            exponent += 1;
        }
        while mantissa != 0 && mantissa % 10 == 0 {
            mantissa /= 10;
            exponent += 1;
        }
        Self {
            mantissa: mantissa as i64,
            exponent,
        }
    }

    /// `true` if the value is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.mantissa == 0
    }

    /// Sign of the value: -1, 0, or 1.
    pub fn signum(&self) -> i32 {
        self.mantissa.signum() as i32
    }

    /// The negated value.
    pub fn negated(&self) -> IouValue {
        // i64::MIN cannot appear in a normalized mantissa reached through
        // `normalize`, but widen anyway.
        Self::normalize(-(self.mantissa as i128), self.exponent)
    }

    /// Sum of two values, aligning exponents.
    pub fn add(&self, other: &IouValue) -> IouValue {
        if self.is_zero() {
            return *other;
        }
        if other.is_zero() {
            return *self;
        }
        let exponent = self.exponent.min(other.exponent);
        let a = scale(self.mantissa as i128, (self.exponent - exponent) as u32);
        let b = scale(other.mantissa as i128, (other.exponent - exponent) as u32);
        Self::normalize(a + b, exponent)
    }

    /// Difference `self - other`.
    pub fn sub(&self, other: &IouValue) -> IouValue {
        self.add(&other.negated())
    }
}

fn scale(mantissa: i128, power: u32) -> i128 {
    mantissa.saturating_mul(10i128.saturating_pow(power))
}

impl fmt::Debug for IouValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IouValue({self})")
    }
}

impl fmt::Display for IouValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mantissa == 0 {
            return write!(f, "0");
        }
        if self.mantissa < 0 {
            write!(f, "-")?;
        }
        let digits = self.mantissa.unsigned_abs().to_string();
        if self.exponent >= 0 {
            write!(f, "{digits}")?;
            for _ in 0..self.exponent {
                write!(f, "0")?;
            }
            Ok(())
        } else {
            let frac_len = (-self.exponent) as usize;
            if digits.len() > frac_len {
                let split = digits.len() - frac_len;
                write!(f, "{}.{}", &digits[..split], &digits[split..])
            } else {
                write!(f, "0.")?;
                for _ in 0..(frac_len - digits.len()) {
                    write!(f, "0")?;
                }
                write!(f, "{digits}")
            }
        }
    }
}

impl FromStr for IouValue {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, TypeError> {
        let trimmed = s.trim();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let (int_part, frac_part) = match rest.split_once('.') {
            Some((i, f)) => (i, f),
            None => (rest, ""),
        };
        let digits: String = [int_part, frac_part].concat();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TypeError::InvalidValue(s.to_string()));
        }
        if digits.len() > 32 {
            return Err(TypeError::ValueOutOfRange(s.to_string()));
        }
        let mut mantissa: i128 = digits
            .parse()
            .map_err(|_| TypeError::InvalidValue(s.to_string()))?;
        let mut exponent = -(frac_part.len() as i32);
        while mantissa != 0 && mantissa % 10 == 0 {
            mantissa /= 10;
            exponent += 1;
        }
        if mantissa > i64::MAX as i128 {
            return Err(TypeError::ValueOutOfRange(s.to_string()));
        }
        if negative {
            mantissa = -mantissa;
        }
        Ok(Self::normalize(mantissa, exponent))
    }
}

impl Serialize for IouValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for IouValue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// An issued-currency amount: value, currency code, and issuer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedAmount {
    pub currency: Currency,
    pub issuer: AccountId,
    pub value: IouValue,
}

/// A ledger amount in its native representation.
///
/// Serializes the way amounts appear on the wire: native amounts as plain
/// numeric strings of drops, issued amounts as `{currency, issuer, value}`
/// objects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Issued(IssuedAmount),
    Native(Drops),
}

impl Amount {
    /// The amount's decimal text, without currency or issuer.
    pub fn value_text(&self) -> String {
        match self {
            Amount::Native(drops) => drops.to_string(),
            Amount::Issued(issued) => issued.value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn val(s: &str) -> IouValue {
        s.parse().unwrap()
    }

    #[test]
    fn currency_validation() {
        assert!(Currency::from_code("USD").is_ok());
        assert!(Currency::from_code("e19").is_ok());
        assert!(Currency::from_code("XRP").is_err());
        assert!(Currency::from_code("US").is_err());
        assert!(Currency::from_code("USDC").is_err());
        assert!(Currency::from_code("U$D").is_err());
    }

    #[test]
    fn value_display_integral() {
        assert_eq!(val("0").to_string(), "0");
        assert_eq!(val("100").to_string(), "100");
        assert_eq!(val("-35").to_string(), "-35");
    }

    #[test]
    fn value_display_fractional() {
        assert_eq!(val("1.5").to_string(), "1.5");
        assert_eq!(val("0.001").to_string(), "0.001");
        assert_eq!(val("-12.340").to_string(), "-12.34");
        assert_eq!(val("007.10").to_string(), "7.1");
    }

    #[test]
    fn value_parse_rejects_garbage() {
        assert!("".parse::<IouValue>().is_err());
        assert!("abc".parse::<IouValue>().is_err());
        assert!("1.2.3".parse::<IouValue>().is_err());
        assert!(".".parse::<IouValue>().is_err());
        assert!("1e5".parse::<IouValue>().is_err());
    }

    #[test]
    fn value_add_aligns_exponents() {
        assert_eq!(val("1.5").add(&val("2.25")), val("3.75"));
        assert_eq!(val("100").add(&val("0.01")), val("100.01"));
        assert_eq!(val("1").add(&val("-1")), IouValue::ZERO);
    }

    #[test]
    fn value_negate_and_signum() {
        assert_eq!(val("2.5").negated(), val("-2.5"));
        assert_eq!(val("-3").signum(), -1);
        assert_eq!(val("3").signum(), 1);
        assert_eq!(IouValue::ZERO.signum(), 0);
        assert_eq!(IouValue::ZERO.negated(), IouValue::ZERO);
    }

    #[test]
    fn value_sub() {
        // Obligation accumulation subtracts negative balances.
        let total = IouValue::ZERO.sub(&val("-75")).sub(&val("-25"));
        assert_eq!(total, val("100"));
    }

    #[test]
    fn native_amount_serializes_as_string() {
        let amount = Amount::Native(Drops(1_000_000));
        assert_eq!(
            serde_json::to_value(amount).unwrap(),
            serde_json::json!("1000000")
        );
    }

    #[test]
    fn issued_amount_serializes_as_object() {
        let amount = Amount::Issued(IssuedAmount {
            currency: Currency::from_code("USD").unwrap(),
            issuer: AccountId::from_raw([1u8; 20]),
            value: val("10.25"),
        });
        let json = serde_json::to_value(amount).unwrap();
        assert_eq!(json["currency"], "USD");
        assert_eq!(json["value"], "10.25");
        assert_eq!(
            json["issuer"],
            AccountId::from_raw([1u8; 20]).to_address().as_str()
        );
    }

    #[test]
    fn amount_deserialize_distinguishes_forms() {
        let native: Amount = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(native, Amount::Native(Drops(42)));
        let issued: Amount = serde_json::from_value(serde_json::json!({
            "currency": "EUR",
            "issuer": AccountId::from_raw([2u8; 20]).to_address(),
            "value": "-3.5",
        }))
        .unwrap();
        assert!(matches!(issued, Amount::Issued(a) if a.value == val("-3.5")));
    }
}
