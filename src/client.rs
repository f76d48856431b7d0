use chrono::{Days, NaiveDate};
use futures_util::future::try_join_all;
use reqwest::Client;

use crate::error::RateError;
use crate::rates::DayRates;

const API_URL: &str = "https://api.privatbank.ua/p24api/exchange_rates";

/// HTTP client for the exchange-rates endpoint. Holds the shared connection
/// pool for the whole run; dropping it releases the pool on every exit path.
pub struct RateClient {
    http: Client,
    base_url: String,
}

impl RateClient {
    pub fn new() -> Self {
        Self::with_base_url(API_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetches the exchange rates for all of the last `days` calendar days,
    /// `today` included. Requests are dispatched concurrently; the result
    /// keeps submission order (most recent date first) and the first failure
    /// fails the whole batch with no partial results.
    pub async fn fetch_all(&self, today: NaiveDate, days: u32) -> Result<Vec<DayRates>, RateError> {
        let dates = dates_back_from(today, days)?;
        try_join_all(dates.into_iter().map(|date| self.fetch_one(date))).await
    }

    /// Fetches the exchange-rate document for a single date.
    pub async fn fetch_one(&self, date: NaiveDate) -> Result<DayRates, RateError> {
        let url = format!("{}?json&date={}", self.base_url, date.format("%d.%m.%Y"));
        log::debug!("GET {url}");

        let resp = self.http.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(RateError::Status(resp.status()));
        }

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// `days` calendar dates counting back from `today`, most recent first.
pub fn dates_back_from(today: NaiveDate, days: u32) -> Result<Vec<NaiveDate>, RateError> {
    (0..u64::from(days))
        .map(|back| {
            today.checked_sub_days(Days::new(back)).ok_or_else(|| {
                RateError::InvalidArgument(format!("can't go {back} days back from {today}"))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::dates_back_from;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn range_counts_back_from_today() {
        assert_eq!(
            dates_back_from(date(2024, 3, 15), 3).unwrap(),
            vec![date(2024, 3, 15), date(2024, 3, 14), date(2024, 3, 13)]
        );
    }

    #[test]
    fn range_crosses_month_and_leap_boundaries() {
        assert_eq!(
            dates_back_from(date(2024, 3, 1), 2).unwrap(),
            vec![date(2024, 3, 1), date(2024, 2, 29)]
        );
    }

    #[test]
    fn zero_days_is_an_empty_range() {
        assert_eq!(dates_back_from(date(2024, 3, 15), 0).unwrap(), vec![]);
    }

    #[test]
    fn single_day_is_today_only() {
        assert_eq!(
            dates_back_from(date(2024, 3, 15), 1).unwrap(),
            vec![date(2024, 3, 15)]
        );
    }
}
