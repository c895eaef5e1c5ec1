//! Transaction history: fills `#transactionsTable tbody` with one row per
//! transaction of the current user.
//!
//! The component loads once, on first render. The current user comes from
//! the page resolver, so incoming and outgoing rows are told apart with the
//! same identity the forms use. A failed load leaves the table untouched
//! and raises a toast.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::feedback::Tone;
use common::listing::{fetch_transactions, transaction_rows};
use common::workflows::IDENTITY_MESSAGE;

use crate::components::helpers::show_toast;
use crate::http::GlooClient;

mod messages;
mod props;
mod state;
mod view;

pub use messages::Msg;
pub use props::TransactionHistoryProps;
pub use state::TransactionHistory;

pub const LOAD_FAILED_MESSAGE: &str = "Impossible de charger les transactions.";

impl Component for TransactionHistory {
    type Message = Msg;
    type Properties = TransactionHistoryProps;

    fn create(_ctx: &Context<Self>) -> Self {
        TransactionHistory::new()
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(rows) => {
                self.rows = Some(rows);
                true
            }
            Msg::Failed(message) => {
                show_toast(&message, Tone::Error);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            let props = ctx.props().clone();
            spawn_local(async move {
                link.send_message(load(&props).await);
            });
        }
    }
}

async fn load(props: &TransactionHistoryProps) -> Msg {
    let user = match props.identity.resolve().await {
        Ok(user) => user,
        Err(_) => return Msg::Failed(IDENTITY_MESSAGE.to_string()),
    };

    match fetch_transactions(&GlooClient, &props.endpoints, &user).await {
        Ok(items) => {
            log::debug!("loaded {} transactions for user {}", items.len(), user);
            Msg::Loaded(transaction_rows(&items, &user))
        }
        Err(err) => {
            log::error!("could not load transactions: {}", err);
            Msg::Failed(LOAD_FAILED_MESSAGE.to_string())
        }
    }
}
