use clap::Args;
use gloo::timers::callback::{Interval, Timeout};
use memoji_core::{
    Difficulty, Face, GameController, Position, RESOLVE_DELAY_MS, SessionId,
    TICK_INTERVAL_MS,
};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::audio::WebAudio;
use crate::prefs::Preferences;
use crate::utils::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    SetPlayerName(String),
    SetDifficulty(Difficulty),
    Start,
    Flip(Position),
    ToggleMusic,
    Tick(SessionId),
    ClearFlipped(SessionId),
    NewGame,
}

fn music_label(enabled: bool) -> &'static str {
    if enabled {
        "🔊 Music ON"
    } else {
        "🔇 Music OFF"
    }
}

fn card_inner_class(face: Face) -> Classes {
    classes!("inner", face.is_up().then_some("flip"))
}

/// Music starts off when `--mute` was given, without touching the stored preference.
fn initial_music_enabled(prefs: &Preferences, mute: bool) -> bool {
    prefs.music_enabled && !mute
}

/// Sends [`Msg::ClearFlipped`] once the resolve delay has passed, dropping the handle cancels it.
fn clear_after_resolve_delay(id: SessionId, send: impl FnOnce(Msg) + 'static) -> Timeout {
    Timeout::new(RESOLVE_DELAY_MS, move || send(Msg::ClearFlipped(id)))
}

#[derive(Properties, Clone, PartialEq)]
struct CardProps {
    position: Position,
    face: Face,
    callback: Callback<Position>,
}

#[function_component(CardTile)]
fn card_component(props: &CardProps) -> Html {
    let CardProps {
        position,
        face,
        callback,
    } = props.clone();

    let class = card_inner_class(face);
    let symbol = match face {
        Face::Up(symbol) => symbol.emoji(),
        Face::Down => "",
    };

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("card {} clicked", position);
        callback.emit(position);
    });

    html! {
        <div class="card" {onclick}>
            <div {class}>
                <div class="front">{"❓"}</div>
                <div class="back">{symbol}</div>
            </div>
        </div>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a shuffle seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Start with the background music off
    #[arg(long)]
    pub mute: bool,
}

#[derive(Debug)]
pub(crate) struct GameView {
    controller: GameController<WebAudio>,
    prefs: Preferences,
    seed: Option<u64>,
    tick_interval: Option<Interval>,
    pending_clear: Option<Timeout>,
}

impl GameView {
    fn create_timer(ctx: &Context<Self>, id: SessionId) -> Interval {
        let link = ctx.link().clone();
        Interval::new(TICK_INTERVAL_MS, move || link.send_message(Msg::Tick(id)))
    }

    fn schedule_clear(ctx: &Context<Self>, id: SessionId) -> Timeout {
        let link = ctx.link().clone();
        clear_after_resolve_delay(id, move |msg| link.send_message(msg))
    }

    fn start(&mut self, ctx: &Context<Self>) -> bool {
        if !self.prefs.can_start() {
            return false;
        }

        let seed = self.seed.unwrap_or_else(js_random_seed);
        let id = self.controller.start_session(
            self.prefs.trimmed_name(),
            self.prefs.difficulty,
            seed,
        );

        // replacing the handles cancels timers of the previous session
        self.pending_clear = None;
        self.tick_interval = Some(Self::create_timer(ctx, id));
        self.prefs.local_save();
        true
    }

    fn flip(&mut self, ctx: &Context<Self>, position: Position) -> bool {
        let outcome = match self.controller.flip(position) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::warn!("flip {} failed: {}", position, err);
                return false;
            }
        };

        if outcome.completes_pair() {
            if let Some(session) = self.controller.session() {
                self.pending_clear = Some(Self::schedule_clear(ctx, session.id()));
            }
        }
        outcome.has_update()
    }

    fn view_setup(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            SetPlayerName(input.value())
        });
        let onchange = ctx.link().batch_callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            Difficulty::from_key(&select.value()).map(SetDifficulty)
        });
        let onclick = ctx.link().callback(|_: MouseEvent| Start);

        html! {
            <div class="setup">
                <input placeholder="Enter Name" value={self.prefs.player_name.clone()} {oninput}/>
                <select {onchange}>
                    {
                        for Difficulty::ALL.into_iter().map(|difficulty| html! {
                            <option
                                value={difficulty.key()}
                                selected={difficulty == self.prefs.difficulty}
                            >
                                {difficulty.label()}
                            </option>
                        })
                    }
                </select>
                <button {onclick} disabled={!self.prefs.can_start()}>{"Start Game"}</button>
            </div>
        }
    }

    fn view_board(&self, ctx: &Context<Self>) -> Html {
        let Some(session) = self.controller.session() else {
            return Html::default();
        };

        let callback = ctx.link().callback(Msg::Flip);
        let on_new_game = ctx.link().callback(|_: MouseEvent| Msg::NewGame);

        html! {
            <>
                <div class="stats">
                    <p>{format!("👤 {}", session.player_name())}</p>
                    <p>{format!("🎯 {}", session.difficulty().key())}</p>
                    <p>{format!("🧮 Moves: {}", session.move_count())}</p>
                    <p>{format!("⏱ {}s", session.elapsed_secs())}</p>
                </div>
                <div class="grid">
                    {
                        for session.cards().map(|card| html! {
                            <CardTile
                                key={card.position.to_string()}
                                position={card.position}
                                face={card.face}
                                callback={callback.clone()}
                            />
                        })
                    }
                </div>
                if session.is_won() {
                    <p class="win">
                        {format!("🎉 All pairs found in {} moves and {}s!", session.move_count(), session.elapsed_secs())}
                    </p>
                }
                <button onclick={on_new_game}>{"New Game"}</button>
            </>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let prefs: Preferences = LocalOrDefault::local_or_default();
        let music_enabled = initial_music_enabled(&prefs, props.mute);

        Self {
            controller: GameController::new(WebAudio::new(), music_enabled),
            prefs,
            seed: props.seed,
            tick_interval: None,
            pending_clear: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            SetPlayerName(player_name) => {
                self.prefs.player_name = player_name;
                true
            }
            SetDifficulty(difficulty) => {
                let changed = self.prefs.difficulty != difficulty;
                self.prefs.difficulty = difficulty;
                changed
            }
            Start => self.start(ctx),
            Flip(position) => self.flip(ctx, position),
            ToggleMusic => {
                self.prefs.music_enabled = self.controller.toggle_music();
                self.prefs.local_save();
                true
            }
            Tick(id) => self.controller.tick(id),
            ClearFlipped(id) => {
                self.pending_clear = None;
                self.controller.clear_flipped(id)
            }
            NewGame => {
                self.tick_interval = None;
                self.pending_clear = None;
                self.controller.end_session()
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_toggle_music = ctx.link().callback(|_: MouseEvent| Msg::ToggleMusic);

        html! {
            <div class="app">
                <h1>{"🧠 Memoji"}</h1>
                <button onclick={on_toggle_music}>{music_label(self.controller.music_enabled())}</button>
                if self.controller.is_started() {
                    { self.view_board(ctx) }
                } else {
                    { self.view_setup(ctx) }
                }
            </div>
        }
    }
}
