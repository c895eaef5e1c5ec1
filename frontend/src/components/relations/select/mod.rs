//! Relation dropdown: fills `#relationSelect` with the current user's
//! relations, after a disabled placeholder option.
//!
//! The placeholder is rendered straight away, so the select is usable (and
//! the transaction form rejects an empty receiver) even when the load fails.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::config::Endpoints;
use common::feedback::Tone;
use common::listing::{fetch_relations, relation_options, SelectOption};
use common::workflows::IDENTITY_MESSAGE;

use crate::components::helpers::show_toast;
use crate::components::IdentityHandle;
use crate::http::GlooClient;

mod view;

pub const LOAD_FAILED_MESSAGE: &str = "Une erreur est survenue lors du chargement des relations.";

#[derive(Properties, PartialEq, Clone)]
pub struct RelationSelectProps {
    pub identity: IdentityHandle,
    pub endpoints: Endpoints,
}

pub enum Msg {
    Loaded(Vec<SelectOption>),
    Failed(String),
}

pub struct RelationSelect {
    pub options: Vec<SelectOption>,
    pub loaded: bool,
}

impl Component for RelationSelect {
    type Message = Msg;
    type Properties = RelationSelectProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            options: relation_options(&[]),
            loaded: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(options) => {
                self.options = options;
                true
            }
            Msg::Failed(message) => {
                show_toast(&message, Tone::Error);
                false
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        view::view(&self.options)
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

async fn load(props: &RelationSelectProps) -> Msg {
    let user = match props.identity.resolve().await {
        Ok(user) => user,
        Err(_) => return Msg::Failed(IDENTITY_MESSAGE.to_string()),
    };

    match fetch_relations(&GlooClient, &props.endpoints, &user).await {
        Ok(relations) => {
            log::debug!("loaded {} relations", relations.len());
            Msg::Loaded(relation_options(&relations))
        }
        Err(err) => {
            log::error!("could not load relations: {}", err);
            Msg::Failed(LOAD_FAILED_MESSAGE.to_string())
        }
    }
}
