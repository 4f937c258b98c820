use std::collections::HashMap;

/// Name to occurrence count, as returned by the aggregate queries
pub type NameCount = HashMap<String, u64>;
