use rust_decimal::Decimal;
use serde::Deserialize;

/// One currency record inside a daily document. The API only carries the
/// commercial `saleRate`/`purchaseRate` for currencies the bank actually
/// trades; the rest expose National Bank reference rates under other keys.
#[derive(Debug, Deserialize, PartialEq)]
pub struct CurrencyRate {
    pub currency: String,
    #[serde(rename = "saleRate")]
    pub sale_rate: Option<Decimal>,
    #[serde(rename = "purchaseRate")]
    pub purchase_rate: Option<Decimal>,
}

/// Exchange rates for a single date, as returned by the API.
#[derive(Debug, Deserialize, PartialEq)]
pub struct DayRates {
    pub date: String,
    #[serde(rename = "exchangeRate")]
    pub exchange_rate: Vec<CurrencyRate>,
}
