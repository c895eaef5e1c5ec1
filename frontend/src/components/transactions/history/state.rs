use common::listing::TransactionRow;

pub struct TransactionHistory {
    /// `None` until the first load succeeds; `Some(vec![])` is an empty history.
    pub rows: Option<Vec<TransactionRow>>,

    /// Guard so the first-render load runs once.
    pub loaded: bool,
}

impl TransactionHistory {
    pub fn new() -> Self {
        Self {
            rows: None,
            loaded: false,
        }
    }
}
