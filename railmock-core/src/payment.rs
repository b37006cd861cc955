use async_trait::async_trait;

/// Payment bookkeeping collaborator, notified once per committed reservation.
#[async_trait]
pub trait PaymentNotifier: Send + Sync {
    async fn record_payment(&self, reservation_id: u64);

    /// Reservation ids recorded so far, oldest first.
    async fn recorded(&self) -> Vec<u64>;
}
