use super::payment::PaymentRequest;
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

pub const SUPPORTED_CURRENCIES: [&str; 3] = ["USD", "EUR", "GBP"];

static CARD_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{14,19}$").expect("card number pattern is valid"));
static CVV: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3,4}$").expect("cvv pattern is valid"));

/// A single failed rule. The `Display` text is part of the public API contract.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    #[error("Card number must be provided")]
    CardNumberMissing,
    #[error("Card number must be between 14 and 19 digits")]
    CardNumberFormat,
    #[error("CVV must be provided")]
    CvvMissing,
    #[error("CVV must be 3 or 4 digits")]
    CvvFormat,
    #[error("Expiry month must be between 1 and 12")]
    ExpiryMonthRange,
    #[error("Expiry year must be current year or later")]
    ExpiryYearPast,
    #[error("Expiry date must be in the future")]
    ExpiryDateNotFuture,
    #[error("Currency must be provided")]
    CurrencyMissing,
    #[error("Currency must be one of USD, EUR, or GBP")]
    CurrencyUnsupported,
    #[error("Amount must be greater than zero")]
    AmountNotPositive,
}

type Rule = fn(&PaymentRequest, NaiveDate) -> bool;

/// Every rule, in reporting order. A rule returns `true` when the request passes it.
const RULES: [(Rule, Violation); 10] = [
    (card_number_present, Violation::CardNumberMissing),
    (card_number_well_formed, Violation::CardNumberFormat),
    (cvv_present, Violation::CvvMissing),
    (cvv_well_formed, Violation::CvvFormat),
    (expiry_month_in_range, Violation::ExpiryMonthRange),
    (expiry_year_not_past, Violation::ExpiryYearPast),
    (expiry_in_future, Violation::ExpiryDateNotFuture),
    (currency_present, Violation::CurrencyMissing),
    (currency_supported, Violation::CurrencyUnsupported),
    (amount_positive, Violation::AmountNotPositive),
];

/// Checks a request against every rule and returns all violations found.
///
/// An empty result means the request is valid. `today` is the reference date for
/// expiry checks; callers pass the current UTC date.
pub fn validate(request: &PaymentRequest, today: NaiveDate) -> Vec<Violation> {
    RULES
        .iter()
        .filter(|(passes, _)| !passes(request, today))
        .map(|(_, violation)| *violation)
        .collect()
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn card_number_present(request: &PaymentRequest, _: NaiveDate) -> bool {
    !is_blank(request.card.number())
}

fn card_number_well_formed(request: &PaymentRequest, _: NaiveDate) -> bool {
    CARD_NUMBER.is_match(request.card.number())
}

fn cvv_present(request: &PaymentRequest, _: NaiveDate) -> bool {
    !is_blank(request.card.cvv())
}

fn cvv_well_formed(request: &PaymentRequest, _: NaiveDate) -> bool {
    CVV.is_match(request.card.cvv())
}

fn expiry_month_in_range(request: &PaymentRequest, _: NaiveDate) -> bool {
    (1..=12).contains(&request.expiry_month)
}

fn expiry_year_not_past(request: &PaymentRequest, today: NaiveDate) -> bool {
    request.expiry_year >= i64::from(today.year())
}

fn currency_present(request: &PaymentRequest, _: NaiveDate) -> bool {
    !is_blank(&request.currency)
}

fn currency_supported(request: &PaymentRequest, _: NaiveDate) -> bool {
    SUPPORTED_CURRENCIES.contains(&request.currency.as_str())
}

fn amount_positive(request: &PaymentRequest, _: NaiveDate) -> bool {
    request.amount > 0
}

/// Passes when the expiry year-month is strictly after the current one.
///
/// A month/year pair that is not a calendar year-month is left to the month and
/// year rules and treated as passing here.
fn expiry_in_future(request: &PaymentRequest, today: NaiveDate) -> bool {
    let (Ok(year), Ok(month)) = (
        i32::try_from(request.expiry_year),
        u32::try_from(request.expiry_month),
    ) else {
        return true;
    };
    if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
        return true;
    }
    (year, month) > (today.year(), today.month())
}
