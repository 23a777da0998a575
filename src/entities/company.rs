// 🏢 Company Entity - the organisation a client belongs to
//
// Identity is the company name (case-insensitive), so "Shopee" and "SHOPEE"
// are the same company no matter which client they are attached to.

use crate::entities::tag::Tag;
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

// ============================================================================
// VALUE OBJECTS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CompanyName(String);

impl CompanyName {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Company names can take any values, and it should not be blank";

    pub fn is_valid(text: &str) -> bool {
        !text.trim().is_empty()
    }

    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        if !Self::is_valid(text) {
            return Err(ValidationError::new("company name", Self::MESSAGE_CONSTRAINTS));
        }
        Ok(CompanyName(text.trim().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CompanyAddress(String);

impl CompanyAddress {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Company addresses can take any values, and it should not be blank";

    pub fn is_valid(text: &str) -> bool {
        !text.trim().is_empty()
    }

    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        if !Self::is_valid(text) {
            return Err(ValidationError::new("company address", Self::MESSAGE_CONSTRAINTS));
        }
        Ok(CompanyAddress(text.trim().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CompanyName {
    type Error = ValidationError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        CompanyName::parse(&value)
    }
}

impl TryFrom<String> for CompanyAddress {
    type Error = ValidationError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        CompanyAddress::parse(&value)
    }
}

impl From<CompanyName> for String {
    fn from(value: CompanyName) -> Self {
        value.0
    }
}

impl From<CompanyAddress> for String {
    fn from(value: CompanyAddress) -> Self {
        value.0
    }
}

// ============================================================================
// COMPANY ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: CompanyName,
    pub address: CompanyAddress,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
}

impl Company {
    pub fn new(name: CompanyName, address: CompanyAddress, tags: BTreeSet<Tag>) -> Self {
        Company { name, address, tags }
    }

    /// Weaker notion of equality used for duplicate detection
    pub fn is_same_company(&self, other: &Company) -> bool {
        self.name.as_str().eq_ignore_ascii_case(other.name.as_str())
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}; Address: {}", self.name.as_str(), self.address.as_str())?;
        if !self.tags.is_empty() {
            write!(f, "; Tags: ")?;
            for tag in &self.tags {
                write!(f, "{}", tag)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(name: &str) -> Company {
        Company::new(
            CompanyName::parse(name).unwrap(),
            CompanyAddress::parse("1 Fusionopolis Place").unwrap(),
            BTreeSet::new(),
        )
    }

    #[test]
    fn test_company_fields_reject_blank() {
        assert!(CompanyName::parse("   ").is_err());
        assert!(CompanyAddress::parse("").is_err());
        assert_eq!(
            CompanyName::parse("").unwrap_err().message,
            CompanyName::MESSAGE_CONSTRAINTS
        );
    }

    #[test]
    fn test_is_same_company_ignores_case() {
        assert!(company("Shopee").is_same_company(&company("SHOPEE")));
        assert!(!company("Shopee").is_same_company(&company("Lazada")));
    }

    #[test]
    fn test_company_display() {
        let mut tags = BTreeSet::new();
        tags.insert(Tag::parse("retail").unwrap());
        let shopee = Company::new(
            CompanyName::parse("Shopee").unwrap(),
            CompanyAddress::parse("5 Science Park Dr").unwrap(),
            tags,
        );
        assert_eq!(shopee.to_string(), "Shopee; Address: 5 Science Park Dr; Tags: [retail]");
    }
}
