use crate::utils::*;
use clap::Args;
use flipgrid_core as game;
use game::{GameSession, GameStatus, Line};
use web_sys::HtmlInputElement;
use yew::prelude::*;

const fn status_class(status: GameStatus) -> &'static str {
    match status {
        GameStatus::NotStarted => "not-started",
        GameStatus::InProgress => "in-progress",
        GameStatus::Won => "win",
        GameStatus::Lost => "lose",
    }
}

const fn status_message(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::Won => Some("You Win"),
        GameStatus::Lost => Some("You Lost"),
        GameStatus::NotStarted | GameStatus::InProgress => None,
    }
}

fn start_session(
    size_input: &str,
    goal_count: game::MoveCount,
    seed: u64,
) -> game::Result<GameSession> {
    let config = game::GameConfig::from_input(Some(size_input), goal_count)?;
    Ok(GameSession::initialize(config, seed))
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    SizeInput(String),
    StartGame,
    ResetGame,
    Flip(Line),
}

#[derive(Properties, Clone, PartialEq)]
struct MatrixProps {
    matrix: game::BitMatrix,
    label: &'static str,
    /// Only the player's matrix gets clickable headers, and only while the game runs.
    #[prop_or_default]
    on_flip: Option<Callback<Line>>,
}

#[function_component(MatrixView)]
fn matrix_component(props: &MatrixProps) -> Html {
    let MatrixProps {
        matrix,
        label,
        on_flip,
    } = props.clone();
    let size = matrix.size();

    let header = |line: Line, text: String| {
        let class = classes!("header", on_flip.is_none().then_some("locked"));
        let onclick = on_flip.as_ref().map(|callback| {
            callback.reform(move |_: MouseEvent| {
                log::trace!("header click: {:?}", line);
                line
            })
        });
        html! { <th {class} {onclick}>{text}</th> }
    };

    html! {
        <table class="matrix" aria-label={label}>
            <tr>
                <th class="corner"/>
                { for (0..size).map(|col| header(Line::Column(col), column_label(col))) }
            </tr>
            {
                for (0..size).map(|row| html! {
                    <tr>
                        { header(Line::Row(row), row.to_string()) }
                        {
                            for matrix.row_bits(row).map(|bit| html! {
                                <td class={classes!("cell", format!("bit-{}", bit))}>{bit.to_string()}</td>
                            })
                        }
                    </tr>
                })
            }
        </table>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed for the first puzzle instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// How many flips are allowed before the game is lost
    #[arg(short, long, default_value_t = game::GameConfig::DEFAULT_GOAL_COUNT)]
    pub goal: game::MoveCount,
}

#[derive(Debug)]
pub(crate) struct GameView {
    game: GameSession,
    size_input: String,
    error: Option<game::GameError>,
    goal_count: game::MoveCount,
    seed: u64,
}

impl GameView {
    fn start_game(&mut self) {
        match start_session(&self.size_input, self.goal_count, self.seed) {
            Ok(session) => {
                log::debug!("game started, seed: {}", self.seed);
                self.game = session;
                self.error = None;
                self.seed = js_random_seed();
            }
            Err(err) => {
                log::debug!("game not started: {}", err);
                self.error = Some(err);
            }
        }
    }

    fn reset_game(&mut self) {
        self.game.reset();
        self.size_input.clear();
        self.error = None;
    }

    fn flip(&mut self, line: Line) -> bool {
        match self.game.flip(line) {
            Ok(outcome) => {
                if outcome.is_finished() {
                    log::info!(
                        "game over: {:?} after {} flip(s)",
                        outcome,
                        self.game.flip_count()
                    );
                }
                true
            }
            Err(err) => {
                log::warn!("flip {:?} rejected: {}", line, err);
                false
            }
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let GameProps { seed, goal } = ctx.props().clone();
        Self {
            game: GameSession::default(),
            size_input: String::new(),
            error: None,
            goal_count: goal,
            seed: seed.unwrap_or_else(js_random_seed),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            SizeInput(value) => {
                self.error = None;
                self.size_input = value;
                true
            }
            StartGame => {
                self.start_game();
                true
            }
            ResetGame => {
                log::debug!("reset game");
                self.reset_game();
                true
            }
            Flip(line) => self.flip(line),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let status = self.game.status();
        let started = status.is_started();

        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            SizeInput(input.value())
        });
        let cb_start = ctx.link().callback(|_: MouseEvent| StartGame);
        let cb_reset = ctx.link().callback(|_: MouseEvent| ResetGame);
        let on_flip = (status == GameStatus::InProgress).then(|| ctx.link().callback(Flip));

        html! {
            <div class={classes!("flipgrid", status_class(status))}>
                <header>
                    <p>{"Enter the size of Game Matrix :"}</p>
                    <input type="number" min="1" value={self.size_input.clone()} {oninput}/>
                    if let Some(err) = &self.error {
                        <div class="error">{err.to_string()}</div>
                    }
                </header>
                <nav>
                    <button class="primary" onclick={cb_start}>{"Click to Start Game"}</button>
                    if started {
                        <button class="primary" onclick={cb_reset}>{"Reset Game"}</button>
                    }
                </nav>
                if started {
                    <>
                    <aside>
                        <span>{format!("flipCount: {}", self.game.flip_count())}</span>
                        <span>{format!("goalCount: {}", self.game.goal_count())}</span>
                    </aside>
                    if let Some(message) = status_message(status) {
                        <output class="notice">{message}</output>
                    }
                    <main>
                        <MatrixView matrix={self.game.source().clone()} label="source" {on_flip}/>
                        <MatrixView matrix={self.game.destination().clone()} label="destination"/>
                    </main>
                    </>
                }
            </div>
        }
    }
}
