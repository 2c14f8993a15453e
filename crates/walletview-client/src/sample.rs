//! Bundled wallet history and offers used by the demo commands.

use chrono::NaiveDateTime;

use crate::ClientResult;
use crate::filter::date::parse_timestamp;
use crate::filter::types::Transaction;
use crate::offers::Offer;
use crate::source::{load_offers, load_transactions};

pub const SAMPLE_NOW: &str = "2023-05-20T12:00:00";

const SAMPLE_TRANSACTIONS: &str = r#"[
  {"id":"txn_1012","direction":"credit","amount":"100.00","timestamp":"2023-05-18T10:30:00","description":"Added money to wallet","category":"deposit","counterparty":"UPI"},
  {"id":"txn_1011","direction":"debit","amount":"45.50","timestamp":"2023-05-17T20:15:00","description":"Order #FD-88213","category":"food","counterparty":"Burger Barn"},
  {"id":"txn_1010","direction":"credit","amount":"20.00","timestamp":"2023-05-17T09:00:00","description":"Referral bonus","category":"reward","counterparty":null},
  {"id":"txn_1009","direction":"credit","amount":"200.00","timestamp":"2023-05-15T08:45:00","description":"Added money to wallet","category":"deposit","counterparty":"Credit Card"},
  {"id":"txn_1008","direction":"debit","amount":"32.75","timestamp":"2023-05-09T13:20:00","description":"Order #FD-87940","category":"food","counterparty":"Sushi Central"},
  {"id":"txn_1007","direction":"credit","amount":"12.00","timestamp":"2023-05-02T19:05:00","description":"Refund for missing item","category":"other","counterparty":"Sushi Central"},
  {"id":"txn_1006","direction":"debit","amount":"58.20","timestamp":"2023-04-27T21:40:00","description":"Order #FD-86311","category":"food","counterparty":"Curry House"},
  {"id":"txn_1005","direction":"credit","amount":"5.00","timestamp":"2023-04-20T12:00:00","description":"Cashback on order","category":"reward","counterparty":"Curry House"},
  {"id":"txn_1004","direction":"debit","amount":"18.90","timestamp":"2023-04-11T08:10:00","description":"Order #FD-85102","category":"food","counterparty":"Morning Brew"},
  {"id":"txn_1003","direction":"credit","amount":"150.00","timestamp":"2023-03-30T17:25:00","description":"Added money to wallet","category":"deposit","counterparty":"Net Banking"},
  {"id":"txn_1002","direction":"debit","amount":"74.00","timestamp":"2023-03-14T20:50:00","description":"Order #FD-83007","category":"food","counterparty":"Pasta Point"},
  {"id":"txn_1001","direction":"debit","amount":"9.99","timestamp":"2023-02-25T11:00:00","description":"Gold membership","category":"other","counterparty":"Credit Card"}
]"#;

const SAMPLE_OFFERS: &str = r#"[
  {"code":"WELCOME50","title":"50% off your first order","description":"New users only","restaurant":null,"discount_percent":50,"max_discount":"100","min_order":"199","expires_on":"2023-06-30"},
  {"code":"BURGER20","title":"20% off burgers","description":"Valid on all combos","restaurant":"Burger Barn","discount_percent":20,"max_discount":"60","min_order":"149","expires_on":"2023-05-25"},
  {"code":"SUSHI15","title":"15% off sushi platters","description":"Weekend special","restaurant":"Sushi Central","discount_percent":15,"max_discount":null,"min_order":"299","expires_on":null},
  {"code":"WALLET10","title":"10% cashback with wallet","description":"Pay using wallet balance","restaurant":null,"discount_percent":10,"max_discount":"50","min_order":"0","expires_on":"2023-05-31"},
  {"code":"SPRING25","title":"25% off spring menu","description":"Seasonal dishes","restaurant":"Curry House","discount_percent":25,"max_discount":"75","min_order":"249","expires_on":"2023-05-10"}
]"#;

pub fn sample_now() -> NaiveDateTime {
    parse_timestamp(SAMPLE_NOW).unwrap_or_default()
}

pub fn sample_transactions() -> ClientResult<Vec<Transaction>> {
    load_transactions(SAMPLE_TRANSACTIONS)
}

pub fn sample_offers() -> ClientResult<Vec<Offer>> {
    load_offers(SAMPLE_OFFERS)
}

pub(crate) fn sample_transactions_source() -> &'static str {
    SAMPLE_TRANSACTIONS
}

pub(crate) fn sample_offers_source() -> &'static str {
    SAMPLE_OFFERS
}

#[cfg(test)]
mod tests {
    use super::{sample_now, sample_offers, sample_transactions};
    use crate::filter::date::format_timestamp;

    #[test]
    fn bundled_samples_load() {
        let transactions = sample_transactions();
        assert!(transactions.is_ok());
        if let Ok(rows) = transactions {
            assert_eq!(rows.len(), 12);
            assert!(rows.windows(2).all(|pair| pair[0].timestamp() >= pair[1].timestamp()));
        }

        let offers = sample_offers();
        assert!(offers.is_ok());
        assert_eq!(format_timestamp(&sample_now()), "2023-05-20T12:00:00");
    }
}
