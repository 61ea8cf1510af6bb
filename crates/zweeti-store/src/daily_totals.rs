//! # Daily Totals Repository
//!
//! The day-keyed accumulator for finalized bill totals.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Daily Totals Lifecycle                         │
//! │                                                                     │
//! │  1. FINALIZE A BILL                                                 │
//! │     └── record_finalized_bill(₹147.00, today)                       │
//! │         └── dailyTotal_2024-3-7 = existing + 14700                  │
//! │                                                                     │
//! │  2. QUERY ANY PAST DATE                                             │
//! │     └── total_for(date) → stored value, or ₹0.00 when absent        │
//! │                                                                     │
//! │  3. RESET TODAY (explicit)                                          │
//! │     └── reset(today) → key deleted entirely (absent, not zero)      │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Format
//! `dailyTotal_<year>-<month>-<day>` with month and day NOT zero-padded:
//! March 7th 2024 is `dailyTotal_2024-3-7`, never `dailyTotal_2024-03-07`.
//! The two spellings are incompatible keys, so [`date_key`] is the single
//! derivation used by both the write path and the read path.

use chrono::{Datelike, NaiveDate};
use tracing::{debug, info};
use zweeti_core::Money;

use crate::error::StoreResult;
use crate::kv::KvRepository;

/// Key prefix for daily-total entries.
const DAILY_TOTAL_PREFIX: &str = "dailyTotal_";

/// Derives the storage key for a calendar date.
///
/// Month and day are unpadded. Shared by every read and write so the two
/// paths can never drift apart.
pub fn date_key(date: NaiveDate) -> String {
    format!(
        "{}{}-{}-{}",
        DAILY_TOTAL_PREFIX,
        date.year(),
        date.month(),
        date.day()
    )
}

/// Repository for day-keyed running sales totals.
#[derive(Debug, Clone)]
pub struct DailyTotals {
    kv: KvRepository,
}

impl DailyTotals {
    pub fn new(kv: KvRepository) -> Self {
        DailyTotals { kv }
    }

    /// Folds a finalized bill's grand total into the date's running total.
    ///
    /// ## Behavior
    /// - No-op when `grand_total` is zero or negative
    /// - Otherwise read-modify-write of the single key, durable immediately
    ///
    /// Each finalize is an independent write; a crash between computing a
    /// grand total and recording it loses that one increment, which is the
    /// accepted risk for this tool.
    pub async fn record_finalized_bill(
        &self,
        grand_total: Money,
        date: NaiveDate,
    ) -> StoreResult<()> {
        if !grand_total.is_positive() {
            debug!("Skipping daily-total record for non-positive grand total");
            return Ok(());
        }

        let key = date_key(date);
        let existing = self.read_paise(&key).await?;
        let updated = existing + grand_total.paise();

        self.kv.put(&key, &updated.to_string()).await?;

        info!(key = %key, amount = grand_total.paise(), total = updated, "Recorded finalized bill");
        Ok(())
    }

    /// The running total for a date; ₹0.00 when no bill was finalized on it.
    ///
    /// Never errors on a missing key. A malformed stored value (anything
    /// that doesn't parse as paise) reads as absent.
    pub async fn total_for(&self, date: NaiveDate) -> StoreResult<Money> {
        let paise = self.read_paise(&date_key(date)).await?;
        Ok(Money::from_paise(paise))
    }

    /// Removes the date's entry entirely.
    ///
    /// The key becomes genuinely absent - not present-with-zero - so the
    /// next recorded bill starts a fresh accumulation.
    pub async fn reset(&self, date: NaiveDate) -> StoreResult<()> {
        let key = date_key(date);
        let removed = self.kv.delete(&key).await?;
        info!(key = %key, removed, "Reset daily total");
        Ok(())
    }

    /// Reads and parses the stored paise amount; absent or malformed → 0.
    async fn read_paise(&self, key: &str) -> StoreResult<i64> {
        let stored = self.kv.get(key).await?;
        Ok(stored.and_then(|v| v.trim().parse::<i64>().ok()).unwrap_or(0))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Store, StoreConfig};

    fn march_7() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
    }

    async fn test_store() -> Store {
        Store::open(StoreConfig::in_memory()).await.unwrap()
    }

    #[test]
    fn test_date_key_is_unpadded() {
        assert_eq!(date_key(march_7()), "dailyTotal_2024-3-7");
        assert_eq!(
            date_key(NaiveDate::from_ymd_opt(2024, 12, 25).unwrap()),
            "dailyTotal_2024-12-25"
        );
    }

    #[tokio::test]
    async fn test_accumulates_across_bills() {
        let totals = test_store().await.daily_totals();

        totals
            .record_finalized_bill(Money::from_paise(5000), march_7())
            .await
            .unwrap();
        totals
            .record_finalized_bill(Money::from_paise(2500), march_7())
            .await
            .unwrap();

        assert_eq!(totals.total_for(march_7()).await.unwrap().paise(), 7500);
    }

    #[tokio::test]
    async fn test_dates_accumulate_independently() {
        let totals = test_store().await.daily_totals();
        let march_8 = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();

        totals
            .record_finalized_bill(Money::from_paise(14700), march_7())
            .await
            .unwrap();
        totals
            .record_finalized_bill(Money::from_paise(1000), march_8)
            .await
            .unwrap();

        assert_eq!(totals.total_for(march_7()).await.unwrap().paise(), 14700);
        assert_eq!(totals.total_for(march_8).await.unwrap().paise(), 1000);
    }

    #[tokio::test]
    async fn test_absent_date_reads_zero() {
        let totals = test_store().await.daily_totals();
        assert_eq!(totals.total_for(march_7()).await.unwrap(), Money::zero());
    }

    #[tokio::test]
    async fn test_non_positive_totals_are_not_recorded() {
        let totals = test_store().await.daily_totals();

        totals
            .record_finalized_bill(Money::zero(), march_7())
            .await
            .unwrap();
        totals
            .record_finalized_bill(Money::from_paise(-100), march_7())
            .await
            .unwrap();

        assert_eq!(totals.total_for(march_7()).await.unwrap(), Money::zero());
    }

    #[tokio::test]
    async fn test_reset_deletes_rather_than_zeroes() {
        let store = test_store().await;
        let totals = store.daily_totals();

        totals
            .record_finalized_bill(Money::from_paise(9900), march_7())
            .await
            .unwrap();
        totals.reset(march_7()).await.unwrap();

        // Reads as zero through the absent→0 rule...
        assert_eq!(totals.total_for(march_7()).await.unwrap(), Money::zero());
        // ...because the key is genuinely gone
        assert_eq!(store.kv().get("dailyTotal_2024-3-7").await.unwrap(), None);

        // A fresh bill starts from scratch with no leftover accumulation
        totals
            .record_finalized_bill(Money::from_paise(1000), march_7())
            .await
            .unwrap();
        assert_eq!(totals.total_for(march_7()).await.unwrap().paise(), 1000);
    }

    #[tokio::test]
    async fn test_malformed_stored_value_reads_as_absent() {
        let store = test_store().await;
        let totals = store.daily_totals();

        store
            .kv()
            .put("dailyTotal_2024-3-7", "not-a-number")
            .await
            .unwrap();
        assert_eq!(totals.total_for(march_7()).await.unwrap(), Money::zero());

        // Recording on top of garbage starts a clean accumulation
        totals
            .record_finalized_bill(Money::from_paise(4200), march_7())
            .await
            .unwrap();
        assert_eq!(totals.total_for(march_7()).await.unwrap().paise(), 4200);
    }

    #[tokio::test]
    async fn test_write_path_uses_unpadded_key() {
        let store = test_store().await;

        store
            .daily_totals()
            .record_finalized_bill(Money::from_paise(14700), march_7())
            .await
            .unwrap();

        assert_eq!(
            store.kv().get("dailyTotal_2024-3-7").await.unwrap().as_deref(),
            Some("14700")
        );
        assert_eq!(store.kv().get("dailyTotal_2024-03-07").await.unwrap(), None);
    }
}
