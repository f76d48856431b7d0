use std::env;
use std::process;

use chrono::Utc;

use client::RateClient;
use error::RateError;
use rates::DayRates;

mod client;
mod error;
mod rates;

const MAX_DAYS: u32 = 10;

#[tokio::main]
async fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: kursy <number of days>");
        process::exit(1);
    }

    let days = match validate_days(&args[1]) {
        Ok(days) => days,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let client = RateClient::new();
    let today = Utc::now().date_naive();

    // A failed fetch is reported as a single line; the process still exits 0.
    match client.fetch_all(today, days).await {
        Ok(day_rates) => print!("{}", render(&day_rates)),
        Err(e) => println!("Error: {e}"),
    }
}

fn validate_days(arg: &str) -> Result<u32, RateError> {
    let days: i64 = arg.parse().map_err(|_| {
        RateError::InvalidArgument("Invalid input. Please enter a valid number of days.".into())
    })?;

    if days < 1 {
        return Err(RateError::InvalidArgument(
            "Number of days must be at least 1.".into(),
        ));
    }
    if days > i64::from(MAX_DAYS) {
        return Err(RateError::InvalidArgument(
            "Number of days should not exceed 10.".into(),
        ));
    }

    Ok(days as u32)
}

/// One block per date: a blank line, the date header, then the USD and EUR
/// sale/buy lines in the order the API returned them.
fn render(day_rates: &[DayRates]) -> String {
    let mut out = String::new();

    for day in day_rates {
        out.push_str(&format!("\n{}:\n", day.date));
        for rate in &day.exchange_rate {
            if rate.currency != "USD" && rate.currency != "EUR" {
                continue;
            }
            if let (Some(sale), Some(buy)) = (rate.sale_rate, rate.purchase_rate) {
                out.push_str(&format!("{}: sale: {sale}, buy: {buy}\n", rate.currency));
            }
        }
    }

    out
}
