use rand::RngExt;
use crate::session::structs::random_transaction_ids::RandomTransactionIds;
use crate::session::traits::TransactionIdSource;
use crate::udp::structs::transaction_id::TransactionId;

impl TransactionIdSource for RandomTransactionIds {
    fn next_transaction_id(&mut self) -> TransactionId {
        let mut rng = rand::rng();
        TransactionId(rng.random())
    }
}
