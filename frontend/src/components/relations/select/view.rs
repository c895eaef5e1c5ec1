use yew::prelude::*;

use common::listing::SelectOption;

pub fn view(options: &[SelectOption]) -> Html {
    html! {
        <>
            { for options.iter().map(option_view) }
        </>
    }
}

fn option_view(option: &SelectOption) -> Html {
    html! {
        <option
            key={option.value.clone()}
            value={option.value.clone()}
            disabled={option.disabled}
            selected={option.selected}
        >
            { option.label.clone() }
        </option>
    }
}
