/// Per-request correlation token.
///
/// Every connect and every announce phase gets its own random value; a
/// response is only accepted when it echoes the value of the request it
/// answers.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct TransactionId(pub i32);
