use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryValue {
    Plain(String),
    Hash(HashMap<String, String>),
}
