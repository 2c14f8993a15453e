//! Offer list search and ordering for the offers screen.

use std::cmp::Ordering;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::filter::predicate::matches_query;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub code: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub restaurant: Option<String>,
    pub discount_percent: u8,
    #[serde(default)]
    pub max_discount: Option<Decimal>,
    #[serde(default)]
    pub min_order: Decimal,
    #[serde(default)]
    pub expires_on: Option<NaiveDate>,
}

impl Offer {
    /// Discount this offer gives on `order_total`: nothing below the minimum
    /// order, otherwise the percentage capped at `max_discount`, to 2 dp.
    /// Never more than the order itself.
    pub fn savings_for(&self, order_total: Decimal) -> Decimal {
        if order_total <= Decimal::ZERO || order_total < self.min_order {
            return Decimal::ZERO;
        }
        let raw = order_total * Decimal::from(self.discount_percent) / Decimal::ONE_HUNDRED;
        let capped = match self.max_discount {
            Some(cap) => raw.min(cap),
            None => raw,
        };
        capped.min(order_total).round_dp(2)
    }

    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expires_on.is_some_and(|expiry| expiry < today)
    }

    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.code.as_str()),
            Some(self.title.as_str()),
            Some(self.description.as_str()),
            self.restaurant.as_deref(),
        ]
        .into_iter()
        .flatten()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OfferSort {
    /// Input order, as the backend ranked them.
    #[default]
    Featured,
    DiscountDesc,
    ExpiringSoon,
    MinOrderAsc,
}

impl OfferSort {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::DiscountDesc => "discount",
            Self::ExpiringSoon => "expiring",
            Self::MinOrderAsc => "min_order",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "featured" => Some(Self::Featured),
            "discount" => Some(Self::DiscountDesc),
            "expiring" => Some(Self::ExpiringSoon),
            "min_order" => Some(Self::MinOrderAsc),
            _ => None,
        }
    }
}

/// Live offers matching `query`, ordered by `sort`. Ties keep input order.
pub fn search_offers(
    offers: &[Offer],
    query: Option<&str>,
    today: NaiveDate,
    sort: OfferSort,
) -> Vec<Offer> {
    let query = query.unwrap_or_default();
    let mut matched = offers
        .iter()
        .filter(|offer| !offer.is_expired(today))
        .filter(|offer| matches_query(offer.search_fields(), query))
        .cloned()
        .collect::<Vec<Offer>>();

    match sort {
        OfferSort::Featured => {}
        OfferSort::DiscountDesc => {
            matched.sort_by(|left, right| right.discount_percent.cmp(&left.discount_percent));
        }
        OfferSort::ExpiringSoon => matched.sort_by(compare_expiry),
        OfferSort::MinOrderAsc => matched.sort_by(|left, right| left.min_order.cmp(&right.min_order)),
    }

    log::debug!(
        "offer search kept {} of {} offers (sort: {})",
        matched.len(),
        offers.len(),
        sort.as_str()
    );
    matched
}

fn compare_expiry(left: &Offer, right: &Offer) -> Ordering {
    match (left.expires_on, right.expires_on) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use super::{Offer, OfferSort, search_offers};

    fn offer(code: &str, percent: u8, min_order: i64, expires_on: Option<(u32, u32)>) -> Offer {
        Offer {
            code: code.to_string(),
            title: format!("{percent}% off"),
            description: String::new(),
            restaurant: None,
            discount_percent: percent,
            max_discount: None,
            min_order: Decimal::from(min_order),
            expires_on: expires_on
                .and_then(|(month, day)| NaiveDate::from_ymd_opt(2023, month, day)),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 5, 20).unwrap_or_default()
    }

    #[test]
    fn savings_respect_minimum_and_cap() {
        let mut welcome = offer("WELCOME50", 50, 199, None);
        welcome.max_discount = Some(Decimal::from(100));

        assert_eq!(welcome.savings_for(Decimal::from(150)), Decimal::ZERO);
        assert_eq!(welcome.savings_for(Decimal::from(199)), Decimal::new(9950, 2));
        assert_eq!(welcome.savings_for(Decimal::from(500)), Decimal::from(100));
    }

    #[test]
    fn savings_never_exceed_the_order_total() {
        let generous = offer("X", 250, 0, None);
        assert_eq!(generous.savings_for(Decimal::from(100)), Decimal::from(100));
        assert_eq!(generous.savings_for(Decimal::ZERO), Decimal::ZERO);
        assert_eq!(
            offer("FREE", 100, 0, None).savings_for(Decimal::new(4550, 2)),
            Decimal::new(4550, 2)
        );
    }

    #[test]
    fn expired_offers_are_hidden() {
        let offers = vec![
            offer("OLD", 10, 0, Some((5, 19))),
            offer("TODAY", 10, 0, Some((5, 20))),
        ];
        let codes = search_offers(&offers, None, today(), OfferSort::Featured)
            .into_iter()
            .map(|row| row.code)
            .collect::<Vec<String>>();
        assert_eq!(codes, vec!["TODAY".to_string()]);
    }

    #[test]
    fn expiring_sort_puts_open_ended_offers_last_and_keeps_ties_stable() {
        let offers = vec![
            offer("FOREVER", 5, 0, None),
            offer("JUNE", 20, 0, Some((6, 1))),
            offer("MAY_A", 15, 0, Some((5, 31))),
            offer("MAY_B", 25, 0, Some((5, 31))),
        ];
        let codes = search_offers(&offers, Some(""), today(), OfferSort::ExpiringSoon)
            .into_iter()
            .map(|row| row.code)
            .collect::<Vec<String>>();
        assert_eq!(codes, vec!["MAY_A", "MAY_B", "JUNE", "FOREVER"]);
    }

    #[test]
    fn search_matches_code_title_and_restaurant() {
        let mut pizza = offer("SLICE20", 20, 0, None);
        pizza.restaurant = Some("Pizza Palace".to_string());
        let offers = vec![pizza, offer("WELCOME50", 50, 0, None)];

        let by_restaurant = search_offers(&offers, Some("pizza"), today(), OfferSort::Featured);
        assert_eq!(by_restaurant.len(), 1);
        let by_code = search_offers(&offers, Some("welcome"), today(), OfferSort::Featured);
        assert_eq!(by_code.len(), 1);
        assert_eq!(OfferSort::parse("min-order"), Some(OfferSort::MinOrderAsc));
    }
}
