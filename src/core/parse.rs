use rust_decimal::Decimal;

/// Parse a free-text amount the way a forgiving form input does: the value
/// is trimmed, and anything empty or unparseable becomes 0 instead of an
/// error. Plain and scientific notation are accepted.
pub fn parse_amount(input: &str) -> Decimal {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }
    trimmed
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(trimmed))
        .unwrap_or(Decimal::ZERO)
}
