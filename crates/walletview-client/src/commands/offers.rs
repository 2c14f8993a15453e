use chrono::NaiveDate;

use crate::contracts::envelope::SuccessEnvelope;
use crate::contracts::types::{OfferRow, OffersData};
use crate::filter::date::format_iso_date;
use crate::offers::{Offer, OfferSort, search_offers};
use crate::source::{ResolvedSource, load_offers, resolve_source};
use crate::{ClientError, ClientResult};

const COMMAND: &str = "offers";

#[derive(Debug, Clone)]
pub struct OffersRunOptions {
    pub path: String,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub today: NaiveDate,
    pub stdin_override: Option<String>,
}

pub fn run_with_options(options: OffersRunOptions) -> ClientResult<SuccessEnvelope> {
    let sort = parse_sort(options.sort.as_deref())?;
    let source = resolve_source(&options.path, options.stdin_override)?;
    run_with_source(&source, options.search.as_deref(), sort, options.today)
}

pub(crate) fn run_with_source(
    source: &ResolvedSource,
    search: Option<&str>,
    sort: OfferSort,
    today: NaiveDate,
) -> ClientResult<SuccessEnvelope> {
    let offers = load_offers(&source.content)?;
    let search = search
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string);
    let rows = search_offers(&offers, search.as_deref(), today, sort)
        .iter()
        .map(offer_row)
        .collect();

    let data = OffersData {
        source: source.describe(),
        today: format_iso_date(&today),
        search,
        sort: sort.as_str().to_string(),
        rows_read: offers.len(),
        rows,
    };

    Ok(SuccessEnvelope::from(data))
}

pub fn parse_sort(value: Option<&str>) -> ClientResult<OfferSort> {
    let Some(raw) = value else {
        return Ok(OfferSort::default());
    };
    OfferSort::parse(raw).ok_or_else(|| {
        ClientError::invalid_argument_for_command(
            "`--sort` must be one of: featured, discount, expiring, min-order.",
            Some(COMMAND),
        )
    })
}

fn offer_row(offer: &Offer) -> OfferRow {
    OfferRow {
        code: offer.code.clone(),
        title: offer.title.clone(),
        description: offer.description.clone(),
        restaurant: offer.restaurant.clone(),
        discount_percent: offer.discount_percent,
        max_discount: offer.max_discount,
        min_order: offer.min_order,
        expires_on: offer.expires_on.as_ref().map(format_iso_date),
    }
}
