use common::listing::TransactionRow;

#[derive(Clone)]
pub enum Msg {
    Loaded(Vec<TransactionRow>),
    /// Carries the text shown to the user.
    Failed(String),
}
