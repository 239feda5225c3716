// Labeled input bound to a single style field

use button_creator_core::StyleField;
use yew::prelude::*;

/// Change emitted by an input: `(name, value)` as read from the element
pub type FieldChange = (String, String);

#[derive(Properties, PartialEq)]
pub struct StyleInputProps {
    pub field: StyleField,
    pub value: String,
    pub on_change: Callback<FieldChange>,
}

#[function_component(StyleInput)]
pub fn style_input(props: &StyleInputProps) -> Html {
    let on_input = {
        let on_change = props.on_change.clone();

        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_change.emit((input.name(), input.value()));
        })
    };

    let id = format!("field-{}", props.field.name());

    html! {
        <div class="form-group col">
            <label for={id.clone()}>{ props.field.label() }</label>
            <input
                class="form-control"
                id={id}
                name={props.field.name()}
                type={props.field.kind().input_type()}
                value={props.value.clone()}
                oninput={on_input}
            />
        </div>
    }
}
