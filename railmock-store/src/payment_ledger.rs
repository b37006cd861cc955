use async_trait::async_trait;
use railmock_core::PaymentNotifier;
use tokio::sync::Mutex;
use tracing::info;

/// Records which reservations were committed, in commit order.
#[derive(Default)]
pub struct InMemoryPaymentLedger {
    reservation_ids: Mutex<Vec<u64>>,
}

impl InMemoryPaymentLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.reservation_ids.lock().await.len()
    }
}

#[async_trait]
impl PaymentNotifier for InMemoryPaymentLedger {
    async fn record_payment(&self, reservation_id: u64) {
        self.reservation_ids.lock().await.push(reservation_id);
        info!("Payment recorded for reservation {}", reservation_id);
    }

    async fn recorded(&self) -> Vec<u64> {
        self.reservation_ids.lock().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ledger_records_in_order() {
        let ledger = InMemoryPaymentLedger::new();
        ledger.record_payment(7).await;
        ledger.record_payment(3).await;

        assert_eq!(ledger.count().await, 2);
        assert_eq!(ledger.recorded().await, vec![7, 3]);
    }
}
