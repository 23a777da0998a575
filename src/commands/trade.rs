// 💸 Buy / Sell - record a transaction against a displayed client

use super::{client_at, CommandResult};
use crate::entities::Transaction;
use crate::error::CommandError;
use crate::index::Index;
use crate::model::Model;

pub const BUY_COMMAND_WORD: &str = "buy";
pub const SELL_COMMAND_WORD: &str = "sell";

pub const BUY_MESSAGE_USAGE: &str = "buy: Records goods bought from the client identified by the \
    index number used in the displayed client list.\n\
    Parameters: INDEX (must be a positive integer) q/QUANTITY g/GOODS p/PRICE [d/DATE]\n\
    Example: buy 1 q/200 g/Orange p/2.5 d/09/11/2000";

pub const SELL_MESSAGE_USAGE: &str = "sell: Records goods sold to the client identified by the \
    index number used in the displayed client list.\n\
    Parameters: INDEX (must be a positive integer) q/QUANTITY g/GOODS p/PRICE [d/DATE]\n\
    Example: sell 1 q/10 g/Apple p/0.8 d/01/02/2022";

/// Attach one transaction to the client at `index`.
///
/// Used for both `buy` and `sell`; the transaction carries its own kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeCommand {
    pub index: Index,
    pub transaction: Transaction,
}

impl TradeCommand {
    pub fn new(index: Index, transaction: Transaction) -> Self {
        TradeCommand { index, transaction }
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let client = client_at(model, self.index)?;

        model.add_transaction_to_client(&client, self.transaction.clone());
        let total = self
            .transaction
            .total_cost()
            .map_or_else(|| "out of range".to_string(), |t| t.to_string());
        log::info!(
            "Recorded {} of {} for {} (total {})",
            self.transaction.kind.as_str(),
            self.transaction.goods,
            client.name.as_str(),
            total
        );

        Ok(CommandResult::new(format!(
            "New {} transaction added to {}: {} on {}",
            self.transaction.kind.as_str(),
            client.name.as_str(),
            self.transaction,
            self.transaction.date
        ))
        .with_transaction_refresh())
    }
}
