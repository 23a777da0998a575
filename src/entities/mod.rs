// Entity Models
// Value objects validate themselves on construction; entities are immutable
// snapshots that the model replaces wholesale.
//
// - Client: identity (name) + contact values + trade history + company
// - Company: attached to a client, unique by name across the tracker
// - Transaction: a single buy or sell

pub mod client;
pub mod company;
pub mod tag;
pub mod transaction;

pub use client::{Address, Client, Email, Name, Phone};
pub use company::{Company, CompanyAddress, CompanyName};
pub use tag::Tag;
pub use transaction::{
    sum_total_cost, Date, Goods, Price, Quantity, Transaction, TransactionFilter, TransactionKind,
    DATE_FORMAT,
};
