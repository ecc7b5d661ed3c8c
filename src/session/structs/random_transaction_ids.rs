/// Draws transaction IDs from the thread-local CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomTransactionIds;
