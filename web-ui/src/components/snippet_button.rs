// Snippet button component

use std::time::Duration;

use button_creator_clipboard::{DomClipboardBackend, ExportAction, TimeoutScheduler};
use button_creator_core::{StyleConfig, TriggerLabel};
use yew::prelude::*;

use crate::errors::UiError;

#[derive(Properties, PartialEq)]
pub struct SnippetButtonProps {
    pub config: StyleConfig,
    pub revert_delay: Duration,
}

#[function_component(SnippetButton)]
pub fn snippet_button(props: &SnippetButtonProps) -> Html {
    let label = use_state(TriggerLabel::default);

    let on_click = {
        let config = props.config.clone();
        let revert_delay = props.revert_delay;
        let label = label.clone();

        Callback::from(move |_: MouseEvent| {
            let action = ExportAction::new(DomClipboardBackend::new(), TimeoutScheduler, revert_delay);
            let label = label.clone();

            // Copy failures get no fallback message, only a log line
            if let Err(e) = action.trigger(&config, move |next| label.set(next)) {
                tracing::warn!(error = %UiError::from(e), "snippet was not copied");
            }
        })
    };

    html! {
        <button
            type="button"
            class="btn btn-success btn-block"
            onclick={on_click}
        >
            { label.text() }
        </button>
    }
}
