//! # Daily Totals Commands
//!
//! Day-wise queries over the durable running totals.

use chrono::NaiveDate;
use tracing::debug;
use zweeti_core::Money;
use zweeti_store::Store;

use crate::error::AppResult;

/// The running total of finalized bills for a date (₹0.00 when none).
pub async fn day_total(store: &Store, date: NaiveDate) -> AppResult<Money> {
    debug!(%date, "day_total command");
    Ok(store.daily_totals().total_for(date).await?)
}

/// Removes a date's running total entirely.
pub async fn reset_day_total(store: &Store, date: NaiveDate) -> AppResult<()> {
    debug!(%date, "reset_day_total command");
    store.daily_totals().reset(date).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use zweeti_store::StoreConfig;

    #[tokio::test]
    async fn test_day_total_round_trip() {
        let store = Store::open(StoreConfig::in_memory()).await.unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();

        store
            .daily_totals()
            .record_finalized_bill(Money::from_paise(14700), date)
            .await
            .unwrap();

        assert_eq!(day_total(&store, date).await.unwrap().paise(), 14700);

        reset_day_total(&store, date).await.unwrap();
        assert_eq!(day_total(&store, date).await.unwrap(), Money::zero());
    }
}
