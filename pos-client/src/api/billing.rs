//! Billing endpoints

use shared::models::{Bill, DailyReport, DiningTable, PaymentMethod, PaymentReceipt, PaymentRequest};

use super::ApiClient;
use crate::ClientResult;

impl ApiClient {
    /// Unpaid bills for one table, newest first.
    pub async fn open_bills_for_table(&self, table_id: &str) -> ClientResult<Vec<Bill>> {
        self.http()
            .get(&format!("billing/table/{table_id}/open"))
            .await
    }

    /// Every unpaid bill across the branch, gathered table by table.
    ///
    /// A table whose fetch fails is skipped with a warning so one bad table
    /// cannot blank the whole screen; `strict_errors` turns the skip into a
    /// hard failure.
    pub async fn unpaid_bills(&self, branch_id: &str) -> ClientResult<Vec<(DiningTable, Vec<Bill>)>> {
        let tables = self.list_tables(branch_id).await?;
        let mut result = Vec::new();
        for table in tables {
            match self.open_bills_for_table(&table.id).await {
                Ok(bills) if !bills.is_empty() => result.push((table, bills)),
                Ok(_) => {}
                Err(e) if self.config().strict_errors => return Err(e),
                Err(e) => {
                    tracing::warn!(table = table.table_number, "Skipping table, bill fetch failed: {e}");
                }
            }
        }
        Ok(result)
    }

    pub async fn pay_bill(
        &self,
        bill_id: &str,
        method: PaymentMethod,
        amount: f64,
        upi_reference_id: Option<String>,
    ) -> ClientResult<PaymentReceipt> {
        let req = PaymentRequest {
            method,
            amount,
            upi_reference_id,
        };
        self.http()
            .post(&format!("billing/{bill_id}/pay"), &req)
            .await
    }

    /// Daily aggregate for a branch; `date` is `YYYY-MM-DD`.
    pub async fn daily_report(&self, branch_id: &str, date: &str) -> ClientResult<DailyReport> {
        self.http()
            .get(&format!("billing/report/daily?branch_id={branch_id}&date={date}"))
            .await
    }
}
