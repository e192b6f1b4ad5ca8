use gloo::timers::callback::Interval;
use yew::prelude::*;

/// Slot labels of the 3x3 demo grid; the center slot is empty and never
/// lights up.
const GRID_ITEMS: [Option<u8>; 9] = [
    Some(1),
    Some(2),
    Some(3),
    Some(4),
    None,
    Some(6),
    Some(7),
    Some(8),
    Some(9),
];

const UNWIND_TICK_MS: u32 = 500;

/// Pure model behind the demo page: cells light in click order and, once all
/// are lit, unwind one per tick in reverse order.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct LightsModel {
    lit: Vec<usize>,
}

impl LightsModel {
    pub(crate) fn is_lit(&self, ix: usize) -> bool {
        self.lit.contains(&ix)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.lit.is_empty()
    }

    pub(crate) fn all_lit(&self) -> bool {
        self.lit.len() == GRID_ITEMS.iter().flatten().count()
    }

    /// Lights a slot; ignores the empty slot and already-lit cells.
    pub(crate) fn press(&mut self, ix: usize) -> bool {
        if GRID_ITEMS.get(ix).copied().flatten().is_none() || self.is_lit(ix) {
            return false;
        }
        self.lit.push(ix);
        true
    }

    /// Removes the most recently lit cell.
    pub(crate) fn unwind_step(&mut self) {
        self.lit.pop();
    }
}

pub(crate) enum Msg {
    Press(usize),
    Unwind,
}

pub(crate) struct GridLightsView {
    model: LightsModel,
    unwind_timer: Option<Interval>,
}

impl Component for GridLightsView {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            model: LightsModel::default(),
            unwind_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Press(ix) => {
                if !self.model.press(ix) {
                    return false;
                }
                if self.model.all_lit() {
                    log::debug!("all cells lit, starting unwind");
                    let link = ctx.link().clone();
                    self.unwind_timer = Some(Interval::new(UNWIND_TICK_MS, move || {
                        link.send_message(Msg::Unwind)
                    }));
                }
                true
            }
            Msg::Unwind => {
                self.model.unwind_step();
                if self.model.is_empty() {
                    self.unwind_timer = None;
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="grid-lights">
                <h1>{"Grid lights"}</h1>
                <div class="lights">
                    {
                        for GRID_ITEMS.iter().enumerate().map(|(ix, item)| match item {
                            Some(label) => {
                                let lit = self.model.is_lit(ix);
                                let onclick =
                                    ctx.link().callback(move |_: MouseEvent| Msg::Press(ix));
                                html! {
                                    <button class={classes!("light", lit.then_some("on"))}
                                        disabled={lit} {onclick}>
                                        {*label}
                                    </button>
                                }
                            }
                            None => html! { <div/> },
                        })
                    }
                </div>
            </div>
        }
    }
}
