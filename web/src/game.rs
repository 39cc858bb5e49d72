use crate::api::JService;
use crate::utils::*;
use jeopardy_core::{
    Board, BoardConfig, CellAddr, DisplayGrid, GameController, GamePhase, Generation, MASKED,
    TriviaClient, TriviaResult,
};
use yew::prelude::*;

pub(crate) enum Msg {
    Restart,
    Loaded(Generation, TriviaResult<Board>),
    CellActivated(CellAddr),
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    addr: CellAddr,
    text: AttrValue,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps { addr, text } = props.clone();
    let class = classes!("cell", (text.as_str() != MASKED).then_some("open"));

    html! {
        <td id={addr.to_id()} {class}>{text}</td>
    }
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Fixed RNG seed, random per game when unset
    #[prop_or_default]
    pub seed: Option<u64>,
    #[prop_or_default]
    pub api: JService,
}

/// The board page. Owns the game controller and is the only place that talks to the trivia service.
#[derive(Debug)]
pub(crate) struct GameView {
    controller: GameController<DisplayGrid>,
    api: JService,
    seed: Option<u64>,
}

impl GameView {
    const CONFIG: BoardConfig = BoardConfig::STANDARD;

    fn start(&mut self, ctx: &Context<Self>) {
        let generation = self.controller.begin_loading();
        let seed = self.seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);

        let mut client = TriviaClient::new(self.api.clone(), self.controller.config(), seed);
        ctx.link().send_future(async move {
            let result = client.fetch_board().await;
            Msg::Loaded(generation, result)
        });
    }

    fn view_status(&self, ctx: &Context<Self>) -> Html {
        let phase = self.controller.phase();
        let loading = phase.is_loading();
        let label = match phase {
            GamePhase::Idle => "Start",
            GamePhase::Loading => "Loading…",
            GamePhase::Ready | GamePhase::Failed(_) => "Restart",
        };
        let onclick = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::Restart
        });

        html! {
            <nav>
                <button id="restart" {onclick} disabled={loading}>{label}</button>
                if loading {
                    <span class="spinner" aria-busy="true"/>
                }
                if let GamePhase::Failed(message) = phase {
                    <p class="error" role="alert">{message.clone()}</p>
                }
            </nav>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let GameProps { seed, api } = ctx.props().clone();
        ctx.link().send_message(Msg::Restart);
        Self {
            controller: GameController::new(Self::CONFIG, DisplayGrid::new(Self::CONFIG)),
            api,
            seed,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Restart => {
                log::debug!("restart");
                self.start(ctx);
                true
            }
            Loaded(generation, result) => self.controller.end_loading(generation, result),
            CellActivated(addr) => {
                log::trace!("cell activated: {}", addr);
                self.controller.on_cell_activated(addr).has_update()
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let grid = self.controller.renderer();
        let playable = self.controller.phase().is_playable();
        let onclick = ctx
            .link()
            .batch_callback(|e: MouseEvent| clicked_cell(&e).map(Msg::CellActivated));

        html! {
            <div class="jeopardy">
                {self.view_status(ctx)}
                <table id="jeopardy" class={classes!(playable.then_some("playable"))}>
                    <thead>
                        <tr>
                            { for grid.headers().iter().map(|title| html! { <th>{title.clone()}</th> }) }
                        </tr>
                    </thead>
                    <tbody {onclick}>
                        {
                            for (0..grid.rows()).map(|row| html! {
                                <tr>
                                    {
                                        for (0..grid.cols()).map(|col| {
                                            let addr = CellAddr::new(col, row);
                                            let text = AttrValue::from(grid.cell(addr).to_owned());
                                            html! { <CellView {addr} {text}/> }
                                        })
                                    }
                                </tr>
                            })
                        }
                    </tbody>
                </table>
            </div>
        }
    }
}
