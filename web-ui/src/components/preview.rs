// Preview panel with sample buttons styled from the current config

use button_creator_core::{preview_style, PreviewState, StyleConfig};
use yew::prelude::*;

/// State of the sample at `index` given the currently selected one
pub fn preview_state(index: usize, selected: Option<usize>) -> PreviewState {
    if selected == Some(index) {
        PreviewState::Selected
    } else {
        PreviewState::Normal
    }
}

#[derive(Properties, PartialEq)]
pub struct PreviewButtonProps {
    pub label: String,
    pub style: String,
    #[prop_or_default]
    pub last: bool,
    pub on_select: Callback<()>,
}

#[function_component(PreviewButton)]
pub fn preview_button(props: &PreviewButtonProps) -> Html {
    let onclick = props.on_select.reform(|_: MouseEvent| ());

    html! {
        <label
            class={classes!("preview-button", props.last.then(|| "mb-0"))}
            style={props.style.clone()}
            {onclick}
        >
            { props.label.clone() }
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub struct PreviewProps {
    pub config: StyleConfig,
    pub labels: Vec<String>,
}

#[function_component(Preview)]
pub fn preview(props: &PreviewProps) -> Html {
    let selected = use_state(|| None::<usize>);
    let count = props.labels.len();

    let render_button = |(index, label): (usize, &String)| {
        let on_select = {
            let selected = selected.clone();
            Callback::from(move |_: ()| selected.set(Some(index)))
        };
        let style = preview_style(&props.config, preview_state(index, *selected));

        html! {
            <PreviewButton
                key={index}
                label={label.clone()}
                style={style}
                last={index + 1 == count}
                on_select={on_select}
            />
        }
    };

    html! {
        <div class="mb-3">
            <label>{ "Preview:" }</label>
            <div class="card">
                <div class="card-body">
                    { for props.labels.iter().enumerate().map(render_button) }
                </div>
            </div>
        </div>
    }
}
