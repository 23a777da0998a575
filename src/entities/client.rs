// 👤 Client Entity - contact details, tags, company and trade history
//
// "A client's name is its identity, everything else is a value."
//
// Clients are never mutated in place. Edits, new transactions and company
// changes each build a new snapshot that the model swaps in.

use crate::entities::company::Company;
use crate::entities::tag::Tag;
use crate::entities::transaction::{sum_total_cost, Transaction, TransactionFilter};
use crate::error::ValidationError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

// ============================================================================
// NAME
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Names should only contain alphanumeric characters and spaces, and it should not be blank";

    /// First character alphanumeric, the rest alphanumeric or spaces
    pub fn is_valid(text: &str) -> bool {
        let mut chars = text.chars();
        match chars.next() {
            Some(first) if first.is_alphanumeric() => {
                chars.all(|c| c.is_alphanumeric() || c == ' ')
            }
            _ => false,
        }
    }

    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let text = text.trim();
        if !Self::is_valid(text) {
            return Err(ValidationError::new("name", Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Name(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// PHONE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Phone numbers should only contain numbers, and it should be at least 3 digits long";

    pub fn is_valid(text: &str) -> bool {
        text.len() >= 3 && text.chars().all(|c| c.is_ascii_digit())
    }

    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let text = text.trim();
        if !Self::is_valid(text) {
            return Err(ValidationError::new("phone", Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Phone(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// EMAIL
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Emails should be of the format local-part@domain \
        and adhere to the following constraints:\n\
        1. The local-part should only contain alphanumeric characters and these special characters, \
        excluding the parentheses, (+_.-). The local-part may not start or end with any special characters.\n\
        2. This is followed by a '@' and then a domain name. The domain name is made up of domain labels \
        separated by periods.\n\
        The domain name must:\n    \
        - end with a domain label at least 2 characters long\n    \
        - have each domain label start and end with alphanumeric characters\n    \
        - have each domain label consist of alphanumeric characters, separated only by hyphens, if any.";

    const LOCAL_SPECIALS: [char; 4] = ['+', '_', '.', '-'];

    fn is_valid_local_part(local: &str) -> bool {
        let (Some(first), Some(last)) = (local.chars().next(), local.chars().last()) else {
            return false;
        };
        first.is_alphanumeric()
            && last.is_alphanumeric()
            && local
                .chars()
                .all(|c| c.is_alphanumeric() || Self::LOCAL_SPECIALS.contains(&c))
    }

    fn is_valid_domain_label(label: &str) -> bool {
        let (Some(first), Some(last)) = (label.chars().next(), label.chars().last()) else {
            return false;
        };
        first.is_alphanumeric()
            && last.is_alphanumeric()
            && label.chars().all(|c| c.is_alphanumeric() || c == '-')
    }

    pub fn is_valid(text: &str) -> bool {
        let Some((local, domain)) = text.split_once('@') else {
            return false;
        };
        if !Self::is_valid_local_part(local) {
            return false;
        }
        let labels: Vec<&str> = domain.split('.').collect();
        let last_ok = labels.last().map(|l| l.chars().count() >= 2).unwrap_or(false);
        last_ok && labels.iter().all(|l| Self::is_valid_domain_label(l))
    }

    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let text = text.trim();
        if !Self::is_valid(text) {
            return Err(ValidationError::new("email", Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Email(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// ADDRESS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Addresses can take any values, and it should not be blank";

    pub fn is_valid(text: &str) -> bool {
        !text.trim().is_empty()
    }

    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        if !Self::is_valid(text) {
            return Err(ValidationError::new("address", Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Address(text.trim().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Name {
    type Error = ValidationError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Name::parse(&value)
    }
}

impl TryFrom<String> for Phone {
    type Error = ValidationError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Phone::parse(&value)
    }
}

impl TryFrom<String> for Email {
    type Error = ValidationError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Email::parse(&value)
    }
}

impl TryFrom<String> for Address {
    type Error = ValidationError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Address::parse(&value)
    }
}

impl From<Name> for String {
    fn from(value: Name) -> Self {
        value.0
    }
}

impl From<Phone> for String {
    fn from(value: Phone) -> Self {
        value.0
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl From<Address> for String {
    fn from(value: Address) -> Self {
        value.0
    }
}

// ============================================================================
// CLIENT ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    // ========================================================================
    // IDENTITY
    // ========================================================================
    pub name: Name,

    // ========================================================================
    // CONTACT VALUES
    // ========================================================================
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,

    // ========================================================================
    // RELATIONSHIPS
    // ========================================================================
    /// Trade history, oldest first
    #[serde(default)]
    pub transactions: Vec<Transaction>,

    #[serde(default)]
    pub company: Option<Company>,
}

impl Client {
    /// Create a client with no history and no company
    pub fn new(name: Name, phone: Phone, email: Email, address: Address, tags: BTreeSet<Tag>) -> Self {
        Client {
            name,
            phone,
            email,
            address,
            tags,
            transactions: Vec::new(),
            company: None,
        }
    }

    /// Two clients are the same client when they share a name
    pub fn is_same_client(&self, other: &Client) -> bool {
        self.name == other.name
    }

    /// New snapshot with one more transaction appended
    pub fn with_transaction(&self, transaction: Transaction) -> Client {
        let mut next = self.clone();
        next.transactions.push(transaction);
        next
    }

    /// New snapshot linked to `company` (or unlinked when `None`)
    pub fn with_company(&self, company: Option<Company>) -> Client {
        let mut next = self.clone();
        next.company = company;
        next
    }

    pub fn transactions_matching(&self, filter: TransactionFilter) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().filter(move |tx| filter.matches(tx))
    }

    /// Sum of `total_cost` over the matching transactions; `None` on overflow
    pub fn total_cost(&self, filter: TransactionFilter) -> Option<Decimal> {
        sum_total_cost(self.transactions_matching(filter))
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}",
            self.name.as_str(),
            self.phone.as_str(),
            self.email.as_str(),
            self.address.as_str()
        )?;
        if !self.tags.is_empty() {
            write!(f, "; Tags: ")?;
            for tag in &self.tags {
                write!(f, "{}", tag)?;
            }
        }
        if let Some(company) = &self.company {
            write!(f, "; Company: {}", company.name.as_str())?;
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::transaction::{Date, Goods, Price, Quantity};

    fn alice() -> Client {
        Client::new(
            Name::parse("Alice Pauline").unwrap(),
            Phone::parse("94351253").unwrap(),
            Email::parse("alice@example.com").unwrap(),
            Address::parse("123, Jurong West Ave 6, #08-111").unwrap(),
            BTreeSet::new(),
        )
    }

    #[test]
    fn test_name_validation() {
        assert!(Name::is_valid("peter jack"));
        assert!(Name::is_valid("12345"));
        assert!(Name::is_valid("Capital Tan"));
        assert!(!Name::is_valid(""));
        assert!(!Name::is_valid(" leading"));
        assert!(!Name::is_valid("peter*"));
    }

    #[test]
    fn test_phone_validation() {
        assert!(Phone::is_valid("911"));
        assert!(Phone::is_valid("93121534"));
        assert!(!Phone::is_valid("91"));
        assert!(!Phone::is_valid("9312 1534"));
        assert!(!Phone::is_valid("phone"));
    }

    #[test]
    fn test_email_validation() {
        assert!(Email::is_valid("alice@example.com"));
        assert!(Email::is_valid("a+b_c.d-e@mail-server.co"));
        assert!(Email::is_valid("peter@ab"));
        assert!(!Email::is_valid("alice.example.com"));
        assert!(!Email::is_valid("@example.com"));
        assert!(!Email::is_valid("-alice@example.com"));
        assert!(!Email::is_valid("alice-@example.com"));
        assert!(!Email::is_valid("alice@example.c"));
        assert!(!Email::is_valid("alice@-example.com"));
        assert!(!Email::is_valid("alice@example..com"));
        assert!(!Email::is_valid("alice@exa_mple.com"));
    }

    #[test]
    fn test_address_validation() {
        assert!(Address::is_valid("Blk 456, Den Road, #01-355"));
        assert!(!Address::is_valid(""));
        assert!(!Address::is_valid("   "));
    }

    #[test]
    fn test_is_same_client_uses_name_only() {
        let a = alice();
        let mut b = alice();
        b.phone = Phone::parse("11111111").unwrap();
        assert!(a.is_same_client(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_with_transaction_leaves_original_untouched() {
        let a = alice();
        let tx = Transaction::sell(
            Goods::parse("Apple").unwrap(),
            Price::parse("0.8").unwrap(),
            Quantity::parse("10").unwrap(),
            Date::parse("01/01/2022").unwrap(),
        );
        let next = a.with_transaction(tx.clone());

        assert!(a.transactions.is_empty());
        assert_eq!(next.transactions, vec![tx]);
        assert_eq!(next.total_cost(TransactionFilter::Sell), Some(Decimal::from(8)));
        assert_eq!(next.total_cost(TransactionFilter::Buy), Some(Decimal::ZERO));
    }

    #[test]
    fn test_client_serde_round_trip_keeps_history() {
        let tx = Transaction::buy(
            Goods::parse("Orange").unwrap(),
            Price::parse("2.5").unwrap(),
            Quantity::parse("200").unwrap(),
            Date::parse("09/11/2000").unwrap(),
        );
        let client = alice().with_transaction(tx);
        let json = serde_json::to_string(&client).unwrap();
        let back: Client = serde_json::from_str(&json).unwrap();
        assert_eq!(back, client);
    }
}
