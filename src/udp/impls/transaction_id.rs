use rand::RngExt;
use crate::udp::structs::transaction_id::TransactionId;

impl TransactionId {
    pub fn random() -> TransactionId {
        let mut rng = rand::rng();
        TransactionId(rng.random::<i32>())
    }
}
