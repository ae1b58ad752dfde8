//! Stock quote profit.

/// Largest profit from buying at most one share per day and selling any
/// number of held shares on a later day.
///
/// Every day's price is paired with the best price on that day or after it,
/// and the gains are summed. A single backward pass tracks that best price.
/// Returns `None` when the profit does not fit in `i64`.
pub fn get_most_profit_from_stock_quotes(quotes: &[i64]) -> Option<i64> {
    let mut best_ahead = i64::MIN;
    let total: i128 = quotes
        .iter()
        .rev()
        .map(|&price| {
            best_ahead = best_ahead.max(price);
            best_ahead as i128 - price as i128
        })
        .sum();
    i64::try_from(total).ok()
}
