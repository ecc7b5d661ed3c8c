use std::fmt;
use std::fmt::Formatter;
use crate::udp::structs::transaction_id::TransactionId;

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}
