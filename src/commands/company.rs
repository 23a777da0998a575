// 🏢 Company commands - link a company to a client, or unlink it

use super::{client_at, CommandResult};
use crate::entities::Company;
use crate::error::CommandError;
use crate::index::Index;
use crate::model::Model;

pub const CREATE_COMMAND_WORD: &str = "create";

pub const CREATE_MESSAGE_USAGE: &str = "create: Creates a company for the client identified by the \
    index number used in the displayed client list.\n\
    Parameters: INDEX (must be a positive integer) n/COMPANY_NAME a/COMPANY_ADDRESS [t/TAG]...\n\
    Example: create 1 n/Shopee a/5 Science Park Dr t/retail";

// ============================================================================
// CREATE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCommand {
    pub index: Index,
    pub company: Company,
}

impl CreateCommand {
    pub fn new(index: Index, company: Company) -> Self {
        CreateCommand { index, company }
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let client = client_at(model, self.index)?;

        if model.has_company(&self.company) {
            return Err(CommandError::DuplicateCompany);
        }
        if let Some(existing) = &client.company {
            return Err(CommandError::CompanyAlreadyLinked {
                client: client.name.as_str().to_string(),
                company: existing.name.as_str().to_string(),
            });
        }

        let linked = client.with_company(Some(self.company.clone()));
        model.set_client(&client, linked);
        log::info!(
            "Linked company {} to {}",
            self.company.name.as_str(),
            client.name.as_str()
        );

        Ok(CommandResult::new(format!(
            "New company added to {}: {}",
            client.name.as_str(),
            self.company
        )))
    }
}

// ============================================================================
// DELETE COMPANY
// ============================================================================

/// `delete INDEX m/company`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteCompanyCommand {
    pub index: Index,
}

impl DeleteCompanyCommand {
    pub fn new(index: Index) -> Self {
        DeleteCompanyCommand { index }
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let client = client_at(model, self.index)?;

        let Some(company) = client.company.clone() else {
            return Err(CommandError::NoCompany {
                client: client.name.as_str().to_string(),
            });
        };

        model.set_client(&client, client.with_company(None));
        log::info!("Unlinked company {} from {}", company.name.as_str(), client.name.as_str());

        Ok(CommandResult::new(format!(
            "Deleted company {} from {}",
            company.name.as_str(),
            client.name.as_str()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::typical_model;
    use crate::entities::{CompanyAddress, CompanyName};
    use std::collections::BTreeSet;

    fn company(name: &str) -> Company {
        Company::new(
            CompanyName::parse(name).unwrap(),
            CompanyAddress::parse("5 Science Park Dr").unwrap(),
            BTreeSet::new(),
        )
    }

    fn first() -> Index {
        Index::from_one_based(1).unwrap()
    }

    #[test]
    fn test_create_links_company() {
        let mut model = typical_model();
        let result = CreateCommand::new(first(), company("Shopee"))
            .execute(&mut model)
            .unwrap();

        assert_eq!(
            result.feedback,
            "New company added to Alice Pauline: Shopee; Address: 5 Science Park Dr"
        );
        assert_eq!(model.clients()[0].company, Some(company("Shopee")));
    }

    #[test]
    fn test_create_duplicate_company_fails() {
        let mut model = typical_model();
        CreateCommand::new(first(), company("Shopee")).execute(&mut model).unwrap();

        let second = Index::from_one_based(2).unwrap();
        let err = CreateCommand::new(second, company("shopee"))
            .execute(&mut model)
            .unwrap_err();
        assert_eq!(err, CommandError::DuplicateCompany);
        assert!(model.clients()[1].company.is_none());
    }

    #[test]
    fn test_create_on_linked_client_fails() {
        let mut model = typical_model();
        CreateCommand::new(first(), company("Shopee")).execute(&mut model).unwrap();

        let err = CreateCommand::new(first(), company("Lazada"))
            .execute(&mut model)
            .unwrap_err();
        assert!(matches!(err, CommandError::CompanyAlreadyLinked { .. }));
        assert_eq!(model.clients()[0].company, Some(company("Shopee")));
    }

    #[test]
    fn test_create_out_of_range() {
        let mut model = typical_model();
        let err = CreateCommand::new(Index::from_one_based(9).unwrap(), company("Shopee"))
            .execute(&mut model)
            .unwrap_err();
        assert!(matches!(err, CommandError::InvalidIndex { .. }));
    }

    #[test]
    fn test_delete_company() {
        let mut model = typical_model();
        let err = DeleteCompanyCommand::new(first()).execute(&mut model).unwrap_err();
        assert!(matches!(err, CommandError::NoCompany { .. }));

        CreateCommand::new(first(), company("Shopee")).execute(&mut model).unwrap();
        let result = DeleteCompanyCommand::new(first()).execute(&mut model).unwrap();

        assert_eq!(result.feedback, "Deleted company Shopee from Alice Pauline");
        assert!(model.clients()[0].company.is_none());
    }
}
