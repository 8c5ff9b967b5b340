use std::fmt::Debug;
use sentry::{
    Transaction,
    TransactionContext
};

/// Starts a Sentry transaction, but only while trace logging is enabled.
pub fn start_trace_transaction(name: &str, operation: &str) -> Option<Transaction> {
    if log::max_level() >= log::LevelFilter::Trace {
        let ctx = TransactionContext::new(name, operation);
        Some(sentry::start_transaction(ctx))
    } else {
        None
    }
}

/// Tags the transaction with the outcome and `tags`, then finishes it.
pub fn finish_trace_transaction<T, E: Debug>(transaction: Option<Transaction>, result: &Result<T, E>, tags: &[(&str, String)]) {
    let Some(txn) = transaction else {
        return;
    };
    match result {
        Ok(_) => txn.set_tag("result", "success"),
        Err(e) => txn.set_tag("result", format!("error: {:?}", e)),
    }
    for (key, value) in tags {
        txn.set_tag(key, value.clone());
    }
    txn.finish();
}

#[macro_export]
macro_rules! instrument_with_sentry {
    (name = $name:expr, op = $op:expr, $body:block) => {{
        let transaction = $crate::utils::sentry_tracing::start_trace_transaction($name, $op);
        let result = $body;
        if let Some(txn) = transaction {
            txn.finish();
        }
        result
    }};
}
