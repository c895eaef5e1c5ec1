//! Row models for the transaction history table and the relation dropdown,
//! and the GET calls that feed them.

use crate::config::Endpoints;
use crate::error::ClientError;
use crate::http::{get_json, HttpClient, HttpRequest};
use crate::model::relation::RelatedUser;
use crate::model::transaction::Transaction;
use crate::model::user::UserId;

pub const EMPTY_HISTORY_LABEL: &str = "Aucune transaction";
pub const RELATION_PLACEHOLDER: &str = "Sélectionner une relation";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The current user received the money.
    Incoming,
    Outgoing,
}

impl Direction {
    pub fn sign(self) -> char {
        match self {
            Direction::Incoming => '+',
            Direction::Outgoing => '-',
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    pub counterparty: String,
    pub description: String,
    pub direction: Direction,
    /// Always two decimals, e.g. `5.00`.
    pub amount: String,
}

impl TransactionRow {
    pub fn from_transaction(tx: &Transaction, current: &UserId) -> Self {
        let (direction, counterparty) = if &tx.receiver_id == current {
            (Direction::Incoming, &tx.sender_name)
        } else {
            (Direction::Outgoing, &tx.receiver_name)
        };
        Self {
            counterparty: counterparty.clone(),
            description: tx.description.clone(),
            direction,
            amount: format_amount(tx.amount),
        }
    }

    /// Text of the amount cell: `+ 5.00 €` or `- 5.00 €`.
    pub fn amount_label(&self) -> String {
        format!("{} {} €", self.direction.sign(), self.amount)
    }
}

pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

pub fn transaction_rows(items: &[Transaction], current: &UserId) -> Vec<TransactionRow> {
    items
        .iter()
        .map(|tx| TransactionRow::from_transaction(tx, current))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
    pub selected: bool,
}

/// Placeholder option followed by one option per relation.
pub fn relation_options(items: &[RelatedUser]) -> Vec<SelectOption> {
    let placeholder = SelectOption {
        value: String::new(),
        label: RELATION_PLACEHOLDER.to_string(),
        disabled: true,
        selected: true,
    };
    std::iter::once(placeholder)
        .chain(items.iter().map(|relation| SelectOption {
            value: relation.id.to_string(),
            label: relation.name.clone(),
            disabled: false,
            selected: false,
        }))
        .collect()
}

pub async fn fetch_transactions<C: HttpClient + ?Sized>(
    client: &C,
    endpoints: &Endpoints,
    user: &UserId,
) -> Result<Vec<Transaction>, ClientError> {
    get_json(client, HttpRequest::get(endpoints.transactions_of(user))).await
}

pub async fn fetch_relations<C: HttpClient + ?Sized>(
    client: &C,
    endpoints: &Endpoints,
    user: &UserId,
) -> Result<Vec<RelatedUser>, ClientError> {
    get_json(client, HttpRequest::get(endpoints.relations_of(user))).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(sender: &str, receiver: &str, amount: f64) -> Transaction {
        Transaction {
            sender_id: UserId::parse(sender).unwrap(),
            receiver_id: UserId::parse(receiver).unwrap(),
            sender_name: format!("user{}", sender),
            receiver_name: format!("user{}", receiver),
            description: "lunch".to_string(),
            amount,
            amount_with_fee: None,
        }
    }

    #[test]
    fn received_money_shows_sender_with_plus() {
        let me = UserId::parse("2").unwrap();
        let row = TransactionRow::from_transaction(&tx("1", "2", 5.0), &me);
        assert_eq!(row.direction, Direction::Incoming);
        assert_eq!(row.counterparty, "user1");
        assert_eq!(row.amount_label(), "+ 5.00 €");
    }

    #[test]
    fn sent_money_shows_receiver_with_minus() {
        let me = UserId::parse("1").unwrap();
        let row = TransactionRow::from_transaction(&tx("1", "2", 12.5), &me);
        assert_eq!(row.direction, Direction::Outgoing);
        assert_eq!(row.counterparty, "user2");
        assert_eq!(row.amount_label(), "- 12.50 €");
    }

    #[test]
    fn amounts_have_two_decimals() {
        assert_eq!(format_amount(5.0), "5.00");
        assert_eq!(format_amount(0.1 + 0.2), "0.30");
        assert_eq!(format_amount(1234.567), "1234.57");
    }

    #[test]
    fn empty_inputs_render_nothing_but_placeholder() {
        let me = UserId::parse("1").unwrap();
        assert!(transaction_rows(&[], &me).is_empty());

        let options = relation_options(&[]);
        assert_eq!(options.len(), 1);
        assert!(options[0].disabled && options[0].selected);
        assert_eq!(options[0].label, RELATION_PLACEHOLDER);
    }

    #[test]
    fn relation_options_follow_input_order() {
        let relations = vec![
            RelatedUser { id: UserId::parse("4").unwrap(), name: "Bob".to_string() },
            RelatedUser { id: UserId::parse("9").unwrap(), name: "Eve".to_string() },
        ];
        let options = relation_options(&relations);
        let labels: Vec<_> = options.iter().skip(1).map(|o| (o.value.as_str(), o.label.as_str())).collect();
        assert_eq!(labels, vec![("4", "Bob"), ("9", "Eve")]);
    }
}
