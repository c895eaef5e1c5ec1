//! Table body rendering. Every render replaces the previous rows.

use yew::prelude::*;

use common::listing::{Direction, TransactionRow, EMPTY_HISTORY_LABEL};

use super::state::TransactionHistory;

pub fn view(component: &TransactionHistory, _ctx: &Context<TransactionHistory>) -> Html {
    match &component.rows {
        None => html! {},
        Some(rows) if rows.is_empty() => html! {
            <tr class="empty-history">
                <td colspan="3">{ EMPTY_HISTORY_LABEL }</td>
            </tr>
        },
        Some(rows) => html! {
            <>
                { for rows.iter().enumerate().map(|(index, row)| row_view(index, row)) }
            </>
        },
    }
}

fn row_view(index: usize, row: &TransactionRow) -> Html {
    let amount_class = match row.direction {
        Direction::Incoming => "amount incoming",
        Direction::Outgoing => "amount outgoing",
    };
    html! {
        <tr key={index.to_string()}>
            <td>{ row.counterparty.clone() }</td>
            <td>{ row.description.clone() }</td>
            <td class={amount_class}>{ row.amount_label() }</td>
        </tr>
    }
}
