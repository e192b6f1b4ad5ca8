use minegame_core as game;
use serde::{Deserialize, Serialize};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::utils::StorageKey;

/// Player-facing options. Size and win rule recreate the session when they
/// change; volume is consumed only by the audio collaborator.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct Settings {
    pub size: game::BoardSize,
    pub volume: u8,
    pub require_flag_count: bool,
}

impl Settings {
    pub(crate) fn clamped(self) -> Self {
        Self {
            size: self.size.clamp(game::MIN_SIZE, game::MAX_SIZE),
            volume: self.volume.min(100),
            require_flag_count: self.require_flag_count,
        }
    }

    pub(crate) fn game_config(&self) -> game::GameConfig {
        game::GameConfig::new(self.size, self.require_flag_count)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            size: 4,
            volume: 100,
            require_flag_count: false,
        }
    }
}

impl StorageKey for Settings {
    const KEY: &'static str = "minegame:settings:v1";
}

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsProps {
    #[prop_or_default]
    pub open: bool,
    pub settings: Settings,
    pub on_change: Callback<Settings>,
    pub on_close: Callback<()>,
}

#[function_component(SettingsView)]
pub(crate) fn settings_view(props: &SettingsProps) -> Html {
    let settings = props.settings;

    let on_size = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(size) = input.value().parse() {
                on_change.emit(Settings { size, ..settings }.clamped());
            }
        })
    };

    let on_volume = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(volume) = input.value().parse() {
                on_change.emit(Settings { volume, ..settings }.clamped());
            }
        })
    };

    let on_flag_rule = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(Settings {
                require_flag_count: input.checked(),
                ..settings
            });
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <dialog id="settings" open={props.open}>
            <article>
                <h2>{"Settings"}</h2>
                <label>
                    {format!("Board size: {}", settings.size)}
                    <input type="range" min="2" max="5" step="1"
                        value={settings.size.to_string()} oninput={on_size}/>
                </label>
                <label>
                    {format!("Volume: {}", settings.volume)}
                    <input type="range" min="0" max="100" step="1"
                        value={settings.volume.to_string()} oninput={on_volume}/>
                </label>
                <label>
                    <input type="checkbox" checked={settings.require_flag_count}
                        oninput={on_flag_rule}/>
                    {"Win requires flags"}
                </label>
                <footer>
                    <button onclick={on_close}>{"Close"}</button>
                </footer>
            </article>
        </dialog>
    }
}
