// 🛒 Transaction Entity - Buy/Sell records attached to a client
//
// Every field is a self-validating value object. Invalid text never makes it
// into a Transaction, whether it comes from the command line or a data file.

use crate::error::ValidationError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The single display/input format for transaction dates
pub const DATE_FORMAT: &str = "%d/%m/%Y";

// ============================================================================
// GOODS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Goods(String);

impl Goods {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Goods name should not be blank.";

    pub fn is_valid(text: &str) -> bool {
        !text.trim().is_empty()
    }

    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        if !Self::is_valid(text) {
            return Err(ValidationError::new("goods", Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Goods(text.trim().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// PRICE
// ============================================================================

/// Unit price, strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Price(Decimal);

impl Price {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Price should be a positive number, e.g. 2.5";

    /// Plain decimal notation only: digits with at most one '.'
    fn parse_decimal(text: &str) -> Option<Decimal> {
        let text = text.trim();
        let digits = text.chars().filter(|c| c.is_ascii_digit()).count();
        let dots = text.chars().filter(|c| *c == '.').count();
        if digits == 0 || dots > 1 || digits + dots != text.chars().count() {
            return None;
        }
        Decimal::from_str(text).ok()
    }

    pub fn is_valid(text: &str) -> bool {
        matches!(Self::parse_decimal(text), Some(value) if value > Decimal::ZERO)
    }

    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        match Self::parse_decimal(text) {
            Some(value) if value > Decimal::ZERO => Ok(Price(value)),
            _ => Err(ValidationError::new("price", Self::MESSAGE_CONSTRAINTS)),
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

// ============================================================================
// QUANTITY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Quantity(u32);

impl Quantity {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Quantity should be a positive integer.";
    pub const MESSAGE_TOO_LARGE: &'static str = "Quantity should be at most 4294967295.";

    fn parse_count(text: &str) -> Result<u32, &'static str> {
        let text = text.trim();
        if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
            return Err(Self::MESSAGE_CONSTRAINTS);
        }
        // All digits, so a failed parse can only mean overflow
        match text.parse::<u32>() {
            Ok(0) => Err(Self::MESSAGE_CONSTRAINTS),
            Ok(n) => Ok(n),
            Err(_) => Err(Self::MESSAGE_TOO_LARGE),
        }
    }

    pub fn is_valid(text: &str) -> bool {
        Self::parse_count(text).is_ok()
    }

    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        Self::parse_count(text)
            .map(Quantity)
            .map_err(|message| ValidationError::new("quantity", message))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

// ============================================================================
// DATE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Date(NaiveDate);

impl Date {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Date should be a valid date in the format dd/MM/yyyy.";

    /// Exactly dd/MM/yyyy, and a real calendar day
    fn parse_day(text: &str) -> Option<NaiveDate> {
        let text = text.trim();
        let bytes = text.as_bytes();
        if bytes.len() != 10 || bytes[2] != b'/' || bytes[5] != b'/' {
            return None;
        }
        let digits_ok = bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());
        if !digits_ok {
            return None;
        }
        NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
    }

    pub fn is_valid(text: &str) -> bool {
        Self::parse_day(text).is_some()
    }

    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        Self::parse_day(text)
            .map(Date)
            .ok_or_else(|| ValidationError::new("date", Self::MESSAGE_CONSTRAINTS))
    }

    pub fn from_naive(day: NaiveDate) -> Self {
        Date(day)
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }
}

// ============================================================================
// DISPLAY + SERDE PLUMBING
// ============================================================================

impl fmt::Display for Goods {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl TryFrom<String> for Goods {
    type Error = ValidationError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Goods::parse(&value)
    }
}

impl TryFrom<String> for Price {
    type Error = ValidationError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Price::parse(&value)
    }
}

impl TryFrom<String> for Quantity {
    type Error = ValidationError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Quantity::parse(&value)
    }
}

impl TryFrom<String> for Date {
    type Error = ValidationError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Date::parse(&value)
    }
}

impl From<Goods> for String {
    fn from(value: Goods) -> Self {
        value.0
    }
}

impl From<Price> for String {
    fn from(value: Price) -> Self {
        value.to_string()
    }
}

impl From<Quantity> for String {
    fn from(value: Quantity) -> Self {
        value.to_string()
    }
}

impl From<Date> for String {
    fn from(value: Date) -> Self {
        value.to_string()
    }
}

// ============================================================================
// TRANSACTION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    Buy,
    Sell,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Buy => "buy",
            TransactionKind::Sell => "sell",
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            TransactionKind::Buy => "bought",
            TransactionKind::Sell => "sold",
        }
    }
}

/// One buy or sell of a single kind of goods.
///
/// `total_cost` is a positive magnitude for both kinds: selling 10 apples at
/// $0.8 costs 8, not -8.
///
/// Parsed transactions always have a representable total; one loaded from a
/// data file may not, so `total_cost` stays checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transaction {
    pub kind: TransactionKind,
    pub goods: Goods,
    pub price: Price,
    pub quantity: Quantity,
    pub date: Date,
}

impl Transaction {
    pub const MESSAGE_TOTAL_TOO_LARGE: &'static str =
        "Price multiplied by quantity is too large to record.";

    pub fn new(kind: TransactionKind, goods: Goods, price: Price, quantity: Quantity, date: Date) -> Self {
        Transaction {
            kind,
            goods,
            price,
            quantity,
            date,
        }
    }

    pub fn buy(goods: Goods, price: Price, quantity: Quantity, date: Date) -> Self {
        Self::new(TransactionKind::Buy, goods, price, quantity, date)
    }

    pub fn sell(goods: Goods, price: Price, quantity: Quantity, date: Date) -> Self {
        Self::new(TransactionKind::Sell, goods, price, quantity, date)
    }

    pub fn is_buy(&self) -> bool {
        self.kind == TransactionKind::Buy
    }

    /// `price × quantity`, or `None` when it does not fit in a `Decimal`
    pub fn total_cost(&self) -> Option<Decimal> {
        self.price.value().checked_mul(Decimal::from(self.quantity.value()))
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "You {} {} quantity of {} at ${} each",
            self.kind.verb(),
            self.quantity,
            self.goods,
            self.price
        )
    }
}

/// Checked sum of `total_cost` over `transactions`
pub fn sum_total_cost<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Option<Decimal> {
    transactions
        .into_iter()
        .try_fold(Decimal::ZERO, |sum, tx| sum.checked_add(tx.total_cost()?))
}

// ============================================================================
// TRANSACTION FILTER
// ============================================================================

/// Which transactions the transaction view exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionFilter {
    #[default]
    All,
    Buy,
    Sell,
}

impl TransactionFilter {
    pub fn matches(&self, transaction: &Transaction) -> bool {
        match self {
            TransactionFilter::All => true,
            TransactionFilter::Buy => transaction.kind == TransactionKind::Buy,
            TransactionFilter::Sell => transaction.kind == TransactionKind::Sell,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
