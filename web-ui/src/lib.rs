// Web UI library for the button creator
//
// This crate provides the Yew components of the style configuration
// form: field inputs, live preview and the snippet button.

use button_creator_core::{CreatorSettings, StyleConfig};
use yew::prelude::*;

pub mod components;
pub mod errors;

// Re-export components
pub use components::*;
pub use errors::UiError;

/// Apply an input change to `config`, returning the updated copy
pub fn apply_change(config: &StyleConfig, change: &FieldChange) -> Result<StyleConfig, UiError> {
    let (name, value) = change;
    let mut next = config.clone();
    next.set_field_by_name(name, value.as_str())?;
    Ok(next)
}

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub settings: CreatorSettings,
}

/// Main application component (owns the style config)
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let config = use_state(StyleConfig::default);

    let on_field_change = {
        let config = config.clone();

        Callback::from(move |change: FieldChange| match apply_change(&config, &change) {
            Ok(next) => {
                tracing::debug!(field = %change.0, value = %change.1, "style field updated");
                config.set(next);
            }
            Err(e) => tracing::error!(error = %e, "input change ignored"),
        })
    };

    html! {
        <div class="container">
            <div class="row">
                <div class="col-lg-6 offset-lg-3 col-12">
                    <div class="card mt-3">
                        <div class="card-body">
                            <h5 class="card-title">{ props.settings.title.clone() }</h5>
                            <Preview
                                config={(*config).clone()}
                                labels={props.settings.preview_labels.clone()}
                            />
                            <StyleForm
                                config={(*config).clone()}
                                on_change={on_field_change}
                            />
                            <SnippetButton
                                config={(*config).clone()}
                                revert_delay={props.settings.revert_delay()}
                            />
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
