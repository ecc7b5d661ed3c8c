use crate::udp::structs::transaction_id::TransactionId;

#[cfg_attr(test, mockall::automock)]
pub trait TransactionIdSource {
    /// A fresh, unpredictable ID for the next outgoing request.
    fn next_transaction_id(&mut self) -> TransactionId;
}
