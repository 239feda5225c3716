// Button Creator Browser Application

use button_creator_core::CreatorSettings;
use button_creator_web_ui::App;
use yew::prelude::*;

mod logging;

#[function_component(Main)]
fn main_component() -> Html {
    html! {
        <App settings={CreatorSettings::default()} />
    }
}

fn main() {
    logging::init(&CreatorSettings::default().log_filter);
    tracing::info!("starting button creator");

    yew::Renderer::<Main>::new().render();
}
