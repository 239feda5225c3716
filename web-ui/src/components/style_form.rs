// Style form: paired rows of field inputs

use button_creator_core::{StyleConfig, StyleField};
use yew::prelude::*;

use super::style_input::{FieldChange, StyleInput};

#[derive(Properties, PartialEq)]
pub struct StyleFormProps {
    pub config: StyleConfig,
    pub on_change: Callback<FieldChange>,
}

#[function_component(StyleForm)]
pub fn style_form(props: &StyleFormProps) -> Html {
    let render_input = |field: StyleField| {
        html! {
            <StyleInput
                key={field.name()}
                field={field}
                value={props.config.get(field).to_string()}
                on_change={props.on_change.clone()}
            />
        }
    };

    html! {
        <form onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
            {
                for StyleField::rows().map(|row| html! {
                    <div class="form-row">
                        { for row.into_iter().map(&render_input) }
                    </div>
                })
            }
        </form>
    }
}
