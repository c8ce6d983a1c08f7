//! Money helpers. All amounts are integer cents.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::{
    PartialSchema, ToSchema,
    openapi::{
        RefOr,
        schema::{ObjectBuilder, Schema, Type},
    },
};

/// Largest accepted price, in cents ($1,000,000.00).
pub const MAX_PRICE: i64 = 100_000_000;

/// Parse a catalog price such as `"$5.00"`, `"5.5"` or `"12"` into cents.
pub fn parse_price(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    let raw = raw.strip_prefix('$').unwrap_or(raw).trim();
    if raw.is_empty() {
        return None;
    }

    let (whole, fraction) = match raw.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (raw, ""),
    };
    if fraction.len() > 2 || !fraction.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let whole: i64 = whole.parse().ok()?;
    let fraction: i64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().ok()? * 10,
        _ => fraction.parse().ok()?,
    };
    let cents = whole.checked_mul(100)?.checked_add(fraction)?;
    (cents <= MAX_PRICE).then_some(cents)
}

pub fn format_price(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!("{sign}${}.{:02}", cents / 100, cents % 100)
}

/// The four fixed discount codes, serialized by their display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DiscountCode {
    #[default]
    NoDiscount,
    Halal10,
    Foodie15,
    Vip20,
}

impl DiscountCode {
    pub const ALL: [DiscountCode; 4] = [
        DiscountCode::NoDiscount,
        DiscountCode::Halal10,
        DiscountCode::Foodie15,
        DiscountCode::Vip20,
    ];

    pub fn percent(self) -> i64 {
        match self {
            DiscountCode::NoDiscount => 0,
            DiscountCode::Halal10 => 10,
            DiscountCode::Foodie15 => 15,
            DiscountCode::Vip20 => 20,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            DiscountCode::NoDiscount => "NONE",
            DiscountCode::Halal10 => "HALAL10",
            DiscountCode::Foodie15 => "FOODIE15",
            DiscountCode::Vip20 => "VIP20",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DiscountCode::NoDiscount => "No Discount",
            DiscountCode::Halal10 => "HALAL10 (10% off)",
            DiscountCode::Foodie15 => "FOODIE15 (15% off)",
            DiscountCode::Vip20 => "VIP20 (20% off)",
        }
    }
}

impl fmt::Display for DiscountCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl PartialSchema for DiscountCode {
    fn schema() -> RefOr<Schema> {
        ObjectBuilder::new()
            .schema_type(Type::String)
            .enum_values(Some(DiscountCode::ALL.iter().map(|code| code.label())))
            .into()
    }
}

impl ToSchema for DiscountCode {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDiscount(pub String);

impl fmt::Display for UnknownDiscount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown discount code '{}'", self.0)
    }
}

impl std::error::Error for UnknownDiscount {}

impl FromStr for DiscountCode {
    type Err = UnknownDiscount;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(DiscountCode::NoDiscount);
        }
        DiscountCode::ALL
            .into_iter()
            .find(|code| s.eq_ignore_ascii_case(code.label()) || s.eq_ignore_ascii_case(code.code()))
            .ok_or_else(|| UnknownDiscount(s.to_string()))
    }
}

impl TryFrom<String> for DiscountCode {
    type Error = UnknownDiscount;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DiscountCode> for String {
    fn from(code: DiscountCode) -> Self {
        code.label().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DiscountBreakdown {
    pub subtotal: i64,
    pub discount: DiscountCode,
    pub percent: i64,
    pub discount_amount: i64,
    pub total: i64,
}

/// Apply `code` to `subtotal`. The saving is rounded half-up to the cent.
pub fn apply_discount(subtotal: i64, code: DiscountCode) -> DiscountBreakdown {
    let percent = code.percent();
    let discount_amount =
        (i128::from(subtotal) * i128::from(percent) + 50).div_euclid(100) as i64;
    DiscountBreakdown {
        subtotal,
        discount: code,
        percent,
        discount_amount,
        total: subtotal - discount_amount,
    }
}
