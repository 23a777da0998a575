// 💸 Buy / Sell parser
//
// buy INDEX q/QUANTITY g/GOODS p/PRICE [d/DATE]
//
// Structure is checked before any field is validated, so a missing field is
// always reported as a usage error even when other fields are malformed.

use super::syntax::{PREFIX_DATE, PREFIX_GOODS, PREFIX_PRICE, PREFIX_QUANTITY};
use super::tokenizer::tokenize;
use super::util::parse_index_or_usage;
use crate::clock::Clock;
use crate::commands::trade::{BUY_MESSAGE_USAGE, SELL_MESSAGE_USAGE};
use crate::commands::{Command, TradeCommand};
use crate::entities::{Date, Goods, Price, Quantity, Transaction, TransactionKind};
use crate::error::{ParseError, ValidationError};

pub fn parse_buy(args: &str, clock: &dyn Clock) -> Result<Command, ParseError> {
    parse_trade(args, clock, TransactionKind::Buy, BUY_MESSAGE_USAGE).map(Command::Buy)
}

pub fn parse_sell(args: &str, clock: &dyn Clock) -> Result<Command, ParseError> {
    parse_trade(args, clock, TransactionKind::Sell, SELL_MESSAGE_USAGE).map(Command::Sell)
}

fn parse_trade(
    args: &str,
    clock: &dyn Clock,
    kind: TransactionKind,
    usage: &'static str,
) -> Result<TradeCommand, ParseError> {
    let map = tokenize(args, &[PREFIX_QUANTITY, PREFIX_GOODS, PREFIX_PRICE, PREFIX_DATE]);

    // 1. Structure
    let index = parse_index_or_usage(map.preamble(), usage)?;

    if !map.exactly_once(&[PREFIX_QUANTITY, PREFIX_GOODS, PREFIX_PRICE])
        || !map.at_most_once(&[PREFIX_DATE])
    {
        return Err(ParseError::usage(usage));
    }

    // The date, when given, closes the command
    if map.is_present(PREFIX_DATE) && map.positions().last() != Some(&PREFIX_DATE) {
        return Err(ParseError::usage(usage));
    }

    let (Some(quantity), Some(goods), Some(price)) = (
        map.value(PREFIX_QUANTITY),
        map.value(PREFIX_GOODS),
        map.value(PREFIX_PRICE),
    ) else {
        return Err(ParseError::usage(usage));
    };

    // 2. Fields, first failure wins
    let quantity = Quantity::parse(quantity)?;
    let goods = Goods::parse(goods)?;
    let price = Price::parse(price)?;
    let date = match map.value(PREFIX_DATE) {
        Some(text) => Date::parse(text)?,
        None => Date::from_naive(clock.today()),
    };

    let transaction = Transaction::new(kind, goods, price, quantity, date);
    if transaction.total_cost().is_none() {
        return Err(ValidationError::new("price", Transaction::MESSAGE_TOTAL_TOO_LARGE).into());
    }
    Ok(TradeCommand::new(index, transaction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::index::Index;
    use chrono::NaiveDate;

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2022, 10, 18).unwrap())
    }

    fn buy_usage() -> ParseError {
        ParseError::usage(BUY_MESSAGE_USAGE)
    }

    fn assert_buy_fails(args: &str, expected: ParseError) {
        assert_eq!(parse_buy(args, &clock()).unwrap_err(), expected, "args: {:?}", args);
    }

    fn expected(kind: TransactionKind, date: &str) -> TradeCommand {
        TradeCommand::new(
            Index::from_one_based(1).unwrap(),
            Transaction::new(
                kind,
                Goods::parse("Orange").unwrap(),
                Price::parse("2.5").unwrap(),
                Quantity::parse("200").unwrap(),
                Date::parse(date).unwrap(),
            ),
        )
    }

    #[test]
    fn test_parse_buy_all_fields() {
        let cmd = parse_buy(" 1 q/200 g/Orange p/2.5 d/09/11/2000 ", &clock()).unwrap();
        assert_eq!(cmd, Command::Buy(expected(TransactionKind::Buy, "09/11/2000")));
    }

    #[test]
    fn test_parse_sell_all_fields() {
        let cmd = parse_sell(" 1 q/200 g/Orange p/2.5 d/09/11/2000", &clock()).unwrap();
        assert_eq!(cmd, Command::Sell(expected(TransactionKind::Sell, "09/11/2000")));
    }

    #[test]
    fn test_missing_date_uses_clock() {
        let cmd = parse_buy(" 1 q/200 g/Orange p/2.5", &clock()).unwrap();
        assert_eq!(cmd, Command::Buy(expected(TransactionKind::Buy, "18/10/2022")));
    }

    #[test]
    fn test_invalid_index_preamble() {
        assert_buy_fails("-5", buy_usage());
        assert_buy_fails("0", buy_usage());
        assert_buy_fails("-5 q/1 g/Tea p/1", buy_usage());
        assert_buy_fails("0 q/1 g/Tea p/1", buy_usage());
        assert_buy_fails("abc q/1 g/Tea p/1", buy_usage());
        assert_buy_fails("1 some random string", buy_usage());
        assert_buy_fails("1 i/ string", buy_usage());
        assert_buy_fails("q/200 g/Orange p/2.5", buy_usage());
    }

    #[test]
    fn test_missing_or_repeated_fields() {
        assert_buy_fails("1 p/2.5", buy_usage());
        assert_buy_fails("1 q/200", buy_usage());
        assert_buy_fails("1 g/Orange", buy_usage());
        assert_buy_fails("1 g/Orange p/2.5", buy_usage());
        assert_buy_fails("1 q/200 q/200 q/5", buy_usage());
        assert_buy_fails("1 q/200 g/Orange g/Apple p/2.5", buy_usage());
        assert_buy_fails("1 q/200 g/Orange p/2.5 d/09/11/2000 d/10/11/2000", buy_usage());
    }

    #[test]
    fn test_structure_checked_before_fields() {
        // quantity malformed but price missing: usage wins
        assert_buy_fails("1 q/-1 g/Orange", buy_usage());
        assert_buy_fails("1 g/ p/abc", buy_usage());
    }

    #[test]
    fn test_date_must_come_last() {
        assert_buy_fails("1 d/09/11/2000 q/200 g/Orange p/2.5", buy_usage());
        assert_buy_fails("1 q/200 g/Orange d/09/11/2000 p/2.5", buy_usage());
        assert_buy_fails("1 q/200 d/09/11/2000 g/Orange p/2.5", buy_usage());
    }

    #[test]
    fn test_field_errors_are_reported_verbatim() {
        let quantity = ParseError::from(Quantity::parse("0").unwrap_err());
        assert_buy_fails("1 q/0 g/Orange p/2.5", quantity.clone());
        assert_buy_fails("1 q/-3 g/Orange p/2.5", quantity.clone());
        assert_buy_fails("1 q/2.5 g/Orange p/2.5", quantity.clone());
        // quantity reported even when price is also bad
        assert_buy_fails("1 q/abc g/Orange p/-1", quantity);

        let goods = ParseError::from(Goods::parse("").unwrap_err());
        assert_buy_fails("1 q/200 g/ p/2.5", goods);

        let price = ParseError::from(Price::parse("0").unwrap_err());
        assert_buy_fails("1 q/200 g/Orange p/0", price.clone());
        assert_buy_fails("1 q/200 g/Orange p/two", price);

        let date = ParseError::from(Date::parse("").unwrap_err());
        assert_buy_fails("1 q/200 g/Orange p/2.5 d/", date.clone());
        assert_buy_fails("1 q/200 g/Orange p/2.5 d/2000-11-09", date.clone());
        assert_buy_fails("1 q/200 g/Orange p/2.5 d/31/02/2000", date);
    }

    #[test]
    fn test_total_out_of_range_is_field_error() {
        let too_large = ParseError::from(ValidationError::new("price", Transaction::MESSAGE_TOTAL_TOO_LARGE));
        assert_buy_fails("1 q/10 g/Gold p/79228162514264337593543950335", too_large.clone());
        assert_eq!(
            parse_sell(" 1 q/2 g/Gold p/50000000000000000000000000000", &clock()).unwrap_err(),
            too_large
        );

        // largest total that still fits
        assert!(parse_buy(" 1 q/1 g/Gold p/79228162514264337593543950335", &clock()).is_ok());
        assert!(parse_buy(" 1 q/4294967295 g/Gold p/1000", &clock()).is_ok());
    }

    #[test]
    fn test_parse_is_repeatable() {
        let args = " 2 q/10 g/Apple p/0.8";
        assert_eq!(parse_sell(args, &clock()), parse_sell(args, &clock()));
    }
}
