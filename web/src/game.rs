use minegame_core as game;
use yew::prelude::*;

use crate::audio;
use crate::settings::{Settings, SettingsView};
use crate::utils::{LocalOrDefault, Modal, js_random_seed};

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Reveal(game::CellIx),
    Flag(game::CellIx),
    Restart,
    ToggleSettings,
    UpdateSettings(Settings),
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[prop_or_default]
    pub seed: Option<u64>,
}

/// CSS classes for one board button. Opened mines tint red, cells the player
/// resolved themselves tint green, matching the source styling.
fn cell_classes(cell: game::Cell, finished: bool) -> Classes {
    let mut class = classes!("cell");
    if cell.is_open && cell.is_mine {
        class.push("exploded");
    } else if cell.revealed_by_player && !cell.is_mine {
        class.push("answered");
    }
    if cell.is_flagged {
        class.push("flag");
    }
    if finished {
        class.push("locked");
    }
    class
}

pub(crate) struct GameView {
    settings: Settings,
    session: game::GameSession,
    settings_open: bool,
    forced_seed: Option<u64>,
}

impl GameView {
    fn next_seed(&self) -> u64 {
        self.forced_seed.unwrap_or_else(js_random_seed)
    }

    fn view_cell(&self, ctx: &Context<Self>, ix: game::CellIx) -> Html {
        let cell = self.session.cell_at(ix);
        let finished = self.session.is_finished();
        let class = cell_classes(cell, finished);

        let onclick = ctx.link().callback(move |_: MouseEvent| Msg::Reveal(ix));
        let oncontextmenu = ctx.link().callback(move |e: MouseEvent| {
            e.prevent_default();
            Msg::Flag(ix)
        });

        let content = if cell.is_open {
            if cell.is_mine {
                html! { <img src="/bomb.svg" alt="bomb"/> }
            } else {
                html! { <img src="/gem.svg" alt="gem"/> }
            }
        } else {
            html! {}
        };

        html! {
            <button {class} {onclick} {oncontextmenu} disabled={finished}>
                {content}
            </button>
        }
    }

    fn view_game_over_dialog(&self, ctx: &Context<Self>) -> Html {
        if !self.session.is_finished() {
            return html! {};
        }

        let onclick = ctx.link().callback(|_: MouseEvent| Msg::Restart);

        // the source shows the same dialog for wins and losses
        html! {
            <Modal>
                <dialog open={true} class="game-over">
                    <article>
                        <h2>{"Game over"}</h2>
                        <p>{"Thank you for playing the game! Hope you enjoyed it!"}</p>
                        <footer>
                            <button {onclick}>{"Restart"}</button>
                        </footer>
                    </article>
                </dialog>
            </Modal>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let settings = Settings::local_or_default().clamped();
        let forced_seed = ctx.props().seed;
        let seed = forced_seed.unwrap_or_else(js_random_seed);
        let session = game::GameSession::new(
            settings.game_config(),
            game::RandomMinePlacer::new(seed),
        );

        Self {
            settings,
            session,
            settings_open: false,
            forced_seed,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Reveal(ix) => {
                let outcome = self.session.reveal(ix);
                log::debug!("reveal {}: {:?}", ix, outcome);
                audio::play_events(outcome.events(), self.settings.volume);
                outcome.has_update()
            }
            Flag(ix) => {
                let outcome = self.session.flag(ix);
                log::debug!("flag {}: {:?}", ix, outcome);
                audio::play_events(outcome.events(), self.settings.volume);
                outcome.has_update()
            }
            Restart => {
                self.session
                    .reset(game::RandomMinePlacer::new(self.next_seed()));
                true
            }
            ToggleSettings => {
                self.settings_open = !self.settings_open;
                true
            }
            UpdateSettings(settings) => {
                if self.settings == settings {
                    return false;
                }

                let needs_new_session = settings.size != self.settings.size
                    || settings.require_flag_count != self.settings.require_flag_count;
                self.settings = settings;
                self.settings.local_save();

                if needs_new_session {
                    self.session = game::GameSession::new(
                        self.settings.game_config(),
                        game::RandomMinePlacer::new(self.next_seed()),
                    );
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let size = usize::from(self.session.size());
        let total = usize::from(self.session.total_cells());
        let grid_style = format!("grid-template-columns: repeat({}, 1fr);", size);

        let cb_settings = ctx.link().callback(|_: MouseEvent| ToggleSettings);
        let cb_update_settings = ctx.link().callback(UpdateSettings);
        let cb_close_settings = ctx.link().callback(|()| ToggleSettings);

        html! {
            <main class="mine"
                oncontextmenu={Callback::from(move |e: MouseEvent| e.prevent_default())}>
                <header>
                    <h1>{"Mine"}</h1>
                    <p>{"Find diamond"}</p>
                    <small onclick={cb_settings}>{"···"}</small>
                </header>
                <div class="board" style={grid_style}>
                    { for (0..total).map(|ix| self.view_cell(ctx, ix)) }
                </div>
                { self.view_game_over_dialog(ctx) }
                <SettingsView open={self.settings_open}
                    settings={self.settings}
                    on_change={cb_update_settings}
                    on_close={cb_close_settings}/>
            </main>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_mine() -> game::Cell {
        game::Cell {
            is_open: true,
            is_mine: true,
            is_flagged: false,
            revealed_by_player: false,
        }
    }

    #[test]
    fn opened_mine_renders_exploded() {
        let class = cell_classes(open_mine(), true);
        assert!(class.contains("exploded"));
        assert!(class.contains("locked"));
        assert!(!class.contains("answered"));
    }

    #[test]
    fn player_answered_cell_renders_green() {
        let cell = game::Cell {
            is_open: true,
            is_mine: false,
            is_flagged: false,
            revealed_by_player: true,
        };
        let class = cell_classes(cell, false);
        assert!(class.contains("answered"));
        assert!(!class.contains("locked"));
    }

    #[test]
    fn force_opened_safe_cell_is_not_marked_answered() {
        // opened by the loss cascade, not by the player
        let cell = game::Cell {
            is_open: true,
            is_mine: false,
            is_flagged: false,
            revealed_by_player: false,
        };
        assert!(!cell_classes(cell, true).contains("answered"));
    }
}
