// 📒 Model - the in-memory client book and its filtered views
//
// Commands only ever see `&mut dyn Model`. ModelManager is the real
// implementation; tests can swap in anything that implements the trait.
//
// Single-threaded by construction: one command holds the `&mut` borrow at a
// time, so there is no locking here.

use crate::entities::{Client, Company, Name, Transaction, TransactionFilter};

// ============================================================================
// CLIENT PREDICATE
// ============================================================================

/// Which clients the filtered view exposes to index-based commands
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClientPredicate {
    #[default]
    ShowAll,

    /// Any keyword equals any word of the name (case-insensitive)
    NameContainsKeywords(Vec<String>),

    /// Only the client with this name
    SameClient(Name),
}

impl ClientPredicate {
    pub fn test(&self, client: &Client) -> bool {
        match self {
            ClientPredicate::ShowAll => true,
            ClientPredicate::NameContainsKeywords(keywords) => {
                client.name.as_str().split_whitespace().any(|word| {
                    keywords
                        .iter()
                        .any(|keyword| word.to_lowercase() == keyword.to_lowercase())
                })
            }
            ClientPredicate::SameClient(name) => client.name == *name,
        }
    }
}

// ============================================================================
// MODEL INTERFACE
// ============================================================================

pub trait Model {
    /// Full storage, in insertion order
    fn clients(&self) -> &[Client];

    /// Clients visible to index-based commands, in storage order
    fn filtered_client_list(&self) -> Vec<&Client>;

    fn update_filtered_client_list(&mut self, predicate: ClientPredicate);

    /// Transactions of the visible clients that pass the transaction filter
    fn filtered_transaction_list(&self) -> Vec<&Transaction>;

    fn update_filtered_transaction_list(&mut self, filter: TransactionFilter);

    fn transaction_filter(&self) -> TransactionFilter;

    /// True if a client with the same identity exists
    fn has_client(&self, client: &Client) -> bool;

    /// True if any client is linked to a company with the same identity
    fn has_company(&self, company: &Company) -> bool;

    fn add_client(&mut self, client: Client);

    fn delete_client(&mut self, target: &Client);

    /// Replace `target` with `edited`
    fn set_client(&mut self, target: &Client, edited: Client);

    fn add_transaction_to_client(&mut self, client: &Client, transaction: Transaction) {
        let updated = client.with_transaction(transaction);
        self.set_client(client, updated);
    }

    /// Remove every client
    fn clear(&mut self);
}

// ============================================================================
// MODEL MANAGER
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct ModelManager {
    clients: Vec<Client>,
    predicate: ClientPredicate,
    transaction_filter: TransactionFilter,
}

impl ModelManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from previously saved clients
    pub fn with_clients(clients: Vec<Client>) -> Self {
        ModelManager {
            clients,
            ..Self::default()
        }
    }

    fn position_of(&self, target: &Client) -> Option<usize> {
        self.clients.iter().position(|c| c == target)
    }
}

impl Model for ModelManager {
    fn clients(&self) -> &[Client] {
        &self.clients
    }

    fn filtered_client_list(&self) -> Vec<&Client> {
        self.clients
            .iter()
            .filter(|c| self.predicate.test(c))
            .collect()
    }

    fn update_filtered_client_list(&mut self, predicate: ClientPredicate) {
        log::debug!("Client filter set to {:?}", predicate);
        self.predicate = predicate;
    }

    fn filtered_transaction_list(&self) -> Vec<&Transaction> {
        let filter = self.transaction_filter;
        self.clients
            .iter()
            .filter(|c| self.predicate.test(c))
            .flat_map(|c| c.transactions_matching(filter))
            .collect()
    }

    fn update_filtered_transaction_list(&mut self, filter: TransactionFilter) {
        log::debug!("Transaction filter set to {:?}", filter);
        self.transaction_filter = filter;
    }

    fn transaction_filter(&self) -> TransactionFilter {
        self.transaction_filter
    }

    fn has_client(&self, client: &Client) -> bool {
        self.clients.iter().any(|c| c.is_same_client(client))
    }

    fn has_company(&self, company: &Company) -> bool {
        self.clients
            .iter()
            .filter_map(|c| c.company.as_ref())
            .any(|existing| existing.is_same_company(company))
    }

    fn add_client(&mut self, client: Client) {
        self.clients.push(client);
    }

    fn delete_client(&mut self, target: &Client) {
        match self.position_of(target) {
            Some(pos) => {
                self.clients.remove(pos);
            }
            None => log::warn!("delete_client: {} is not in the tracker", target.name.as_str()),
        }
    }

    fn set_client(&mut self, target: &Client, edited: Client) {
        let Some(pos) = self.position_of(target) else {
            log::warn!("set_client: {} is not in the tracker", target.name.as_str());
            return;
        };

        // A renamed client stays in a single-client view
        if self.predicate == ClientPredicate::SameClient(target.name.clone()) {
            self.predicate = ClientPredicate::SameClient(edited.name.clone());
        }

        self.clients[pos] = edited;
    }

    fn clear(&mut self) {
        self.clients.clear();
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        Address, CompanyAddress, CompanyName, Date, Email, Goods, Phone, Price, Quantity,
    };
    use std::collections::BTreeSet;

    fn client(name: &str) -> Client {
        Client::new(
            Name::parse(name).unwrap(),
            Phone::parse("98765432").unwrap(),
            Email::parse("someone@example.com").unwrap(),
            Address::parse("311, Clementi Ave 2").unwrap(),
            BTreeSet::new(),
        )
    }

    fn orange(buy: bool) -> Transaction {
        let goods = Goods::parse("Orange").unwrap();
        let price = Price::parse("2.5").unwrap();
        let quantity = Quantity::parse("200").unwrap();
        let date = Date::parse("09/11/2000").unwrap();
        if buy {
            Transaction::buy(goods, price, quantity, date)
        } else {
            Transaction::sell(goods, price, quantity, date)
        }
    }

    fn three_clients() -> ModelManager {
        ModelManager::with_clients(vec![
            client("Alice Pauline"),
            client("Benson Meier"),
            client("Carl Kurz"),
        ])
    }

    #[test]
    fn test_predicate_name_keywords() {
        let predicate = ClientPredicate::NameContainsKeywords(vec!["alice".into(), "Kurz".into()]);
        assert!(predicate.test(&client("Alice Pauline")));
        assert!(predicate.test(&client("Carl Kurz")));
        assert!(!predicate.test(&client("Benson Meier")));
        // whole words only
        assert!(!predicate.test(&client("Alicia Keys")));
    }

    #[test]
    fn test_filtered_view_follows_predicate() {
        let mut model = three_clients();
        assert_eq!(model.filtered_client_list().len(), 3);

        model.update_filtered_client_list(ClientPredicate::NameContainsKeywords(vec!["meier".into()]));
        let visible = model.filtered_client_list();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name.as_str(), "Benson Meier");

        // storage is untouched
        assert_eq!(model.clients().len(), 3);
    }

    #[test]
    fn test_has_client_uses_identity() {
        let model = three_clients();
        let mut lookalike = client("Alice Pauline");
        lookalike.phone = Phone::parse("000").unwrap();
        assert!(model.has_client(&lookalike));
        assert!(!model.has_client(&client("Daniel Meier")));
    }

    #[test]
    fn test_add_transaction_replaces_snapshot() {
        let mut model = three_clients();
        let target = model.filtered_client_list()[1].clone();
        model.add_transaction_to_client(&target, orange(true));

        assert_eq!(model.clients()[1].transactions.len(), 1);
        assert_eq!(model.clients()[1].name.as_str(), "Benson Meier");
        assert!(model.clients()[0].transactions.is_empty());
    }

    #[test]
    fn test_filtered_transaction_list() {
        let mut model = three_clients();
        let alice = model.clients()[0].clone();
        model.add_transaction_to_client(&alice, orange(true));
        let carl = model.clients()[2].clone();
        model.add_transaction_to_client(&carl, orange(false));

        assert_eq!(model.filtered_transaction_list().len(), 2);

        model.update_filtered_transaction_list(TransactionFilter::Buy);
        let buys = model.filtered_transaction_list();
        assert_eq!(buys.len(), 1);
        assert!(buys[0].is_buy());

        model.update_filtered_transaction_list(TransactionFilter::Sell);
        assert_eq!(model.filtered_transaction_list().len(), 1);
        assert_eq!(model.transaction_filter(), TransactionFilter::Sell);
    }

    #[test]
    fn test_has_company() {
        let mut model = three_clients();
        let shopee = Company::new(
            CompanyName::parse("Shopee").unwrap(),
            CompanyAddress::parse("5 Science Park Dr").unwrap(),
            BTreeSet::new(),
        );
        assert!(!model.has_company(&shopee));

        let alice = model.clients()[0].clone();
        model.set_client(&alice, alice.with_company(Some(shopee.clone())));
        assert!(model.has_company(&shopee));
    }

    #[test]
    fn test_set_client_keeps_single_client_view_on_rename() {
        let mut model = three_clients();
        let alice = model.clients()[0].clone();
        model.update_filtered_client_list(ClientPredicate::SameClient(alice.name.clone()));

        let mut renamed = alice.clone();
        renamed.name = Name::parse("Alice Tan").unwrap();
        model.set_client(&alice, renamed);

        let visible = model.filtered_client_list();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name.as_str(), "Alice Tan");
    }

    #[test]
    fn test_delete_and_clear() {
        let mut model = three_clients();
        let benson = model.clients()[1].clone();
        model.delete_client(&benson);
        assert_eq!(model.clients().len(), 2);
        assert!(!model.has_client(&benson));

        model.clear();
        assert!(model.clients().is_empty());
        assert!(model.filtered_client_list().is_empty());
    }
}
