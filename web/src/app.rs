use yew::prelude::*;

use crate::game::GameView;
use crate::grid_lights::GridLightsView;

/// The two pages of the original app, switched in-app instead of routed.
#[derive(Copy, Clone, Debug, PartialEq)]
enum Page {
    Mine,
    GridLights,
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct AppProps {
    #[prop_or_default]
    pub seed: Option<u64>,
}

#[function_component(App)]
pub(crate) fn app(props: &AppProps) -> Html {
    let page = use_state(|| Page::Mine);

    let nav_link = |target: Page, label: &'static str| {
        let page = page.clone();
        let active = (*page == target).then_some("active");
        let onclick = Callback::from(move |_: MouseEvent| page.set(target));
        html! {
            <button class={classes!("nav-link", active)} {onclick}>{label}</button>
        }
    };

    html! {
        <>
            <nav>
                { nav_link(Page::Mine, "Mine") }
                { nav_link(Page::GridLights, "Grid lights") }
            </nav>
            {
                match *page {
                    Page::Mine => html! { <GameView seed={props.seed}/> },
                    Page::GridLights => html! { <GridLightsView/> },
                }
            }
        </>
    }
}
