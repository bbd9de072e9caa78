//! ISO 4217 currency codes and display symbols.
//!
//! Covers the common world currencies an invoicing application encounters.
//! Codes without a widely recognized symbol are rendered with the code
//! itself, the way "CHF 1,234.56" is usually printed.

/// Check whether `code` is a known ISO 4217 currency code.
pub fn is_known_currency_code(code: &str) -> bool {
    CURRENCIES.binary_search_by_key(&code, |(c, _)| c).is_ok()
}

/// The display symbol for a currency code, if it has one distinct from the
/// code itself.
pub fn currency_symbol(code: &str) -> Option<&'static str> {
    CURRENCIES
        .binary_search_by_key(&code, |(c, _)| c)
        .ok()
        .and_then(|i| CURRENCIES[i].1)
}

/// Sorted list of (code, symbol) pairs. Sorted for binary search; `None`
/// means the code is printed as-is.
static CURRENCIES: &[(&str, Option<&str>)] = &[
    ("AED", None),           // UAE Dirham
    ("AUD", Some("A$")),     // Australian Dollar
    ("BGN", None),           // Bulgarian Lev
    ("BRL", Some("R$")),     // Brazilian Real
    ("CAD", Some("CA$")),    // Canadian Dollar
    ("CHF", None),           // Swiss Franc
    ("CNY", Some("CN¥")),    // Chinese Yuan
    ("CZK", None),           // Czech Koruna
    ("DKK", None),           // Danish Krone
    ("EUR", Some("€")),      // Euro
    ("GBP", Some("£")),      // Pound Sterling
    ("HKD", Some("HK$")),    // Hong Kong Dollar
    ("HUF", None),           // Hungarian Forint
    ("IDR", None),           // Indonesian Rupiah
    ("ILS", Some("₪")),      // Israeli Shekel
    ("INR", Some("₹")),      // Indian Rupee
    ("ISK", None),           // Icelandic Krona
    ("JPY", Some("¥")),      // Japanese Yen
    ("KRW", Some("₩")),      // South Korean Won
    ("MXN", Some("MX$")),    // Mexican Peso
    ("MYR", None),           // Malaysian Ringgit
    ("NGN", Some("₦")),      // Nigerian Naira
    ("NOK", None),           // Norwegian Krone
    ("NZD", Some("NZ$")),    // New Zealand Dollar
    ("PHP", Some("₱")),      // Philippine Peso
    ("PLN", None),           // Polish Zloty
    ("RON", None),           // Romanian Leu
    ("SEK", None),           // Swedish Krona
    ("SGD", None),           // Singapore Dollar
    ("THB", None),           // Thai Baht
    ("TRY", Some("₺")),      // Turkish Lira
    ("TWD", Some("NT$")),    // New Taiwan Dollar
    ("UAH", Some("₴")),      // Ukrainian Hryvnia
    ("USD", Some("$")),      // US Dollar
    ("VND", Some("₫")),      // Vietnamese Dong
    ("ZAR", None),           // South African Rand
];
