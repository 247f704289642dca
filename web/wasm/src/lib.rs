use bjtable::{
    Card, ChipId, GameOptions, GameSession, Phase, RoundOutcome, RoundView, ScheduledStep,
    StepKind, Suit,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmSession {
    session: GameSession,
}

#[wasm_bindgen]
impl WasmSession {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            session: GameSession::new(GameOptions::default(), u64::from(seed)),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.session = GameSession::new(GameOptions::default(), u64::from(seed));
    }

    pub fn bankroll(&self) -> u32 {
        self.session.bankroll() as u32
    }

    pub fn wagered(&self) -> u32 {
        self.session.wagered() as u32
    }

    pub fn is_broke(&self) -> bool {
        self.session.is_broke()
    }

    /// Places a bet and returns the chip identifier the page keeps for undo.
    pub fn place_bet(&self, amount: u32) -> Result<u32, JsValue> {
        self.session
            .place_bet(amount as usize)
            .map(|id| id.0)
            .map_err(js_err)
    }

    pub fn retract_chip(&self, chip_id: u32) -> Result<u32, JsValue> {
        self.session
            .retract_chip(ChipId(chip_id))
            .map(|amount| amount as u32)
            .map_err(js_err)
    }

    pub fn reset_bankroll(&self) -> Result<(), JsValue> {
        self.session.reset_bankroll().map_err(js_err)
    }

    pub fn start_round(&self) -> Result<JsValue, JsValue> {
        let view = self.session.start_round().map_err(js_err)?;
        to_js_value(&JsView::from(view))
    }

    pub fn hit(&self) -> Result<JsValue, JsValue> {
        let view = self.session.hit().map_err(js_err)?;
        to_js_value(&JsView::from(view))
    }

    pub fn stand(&self) -> Result<JsValue, JsValue> {
        let view = self.session.stand().map_err(js_err)?;
        to_js_value(&JsView::from(view))
    }

    /// Runs the pending step the page was handed in an earlier view.
    pub fn advance(&self, round: f64, seq: u32) -> Result<JsValue, JsValue> {
        let step = self
            .session
            .pending_step()
            .filter(|step| step.round.0 as f64 == round && step.seq == seq)
            .ok_or_else(|| JsValue::from_str("step is stale"))?;
        let view = self.session.advance(step).map_err(js_err)?;
        to_js_value(&JsView::from(view))
    }

    pub fn return_to_main(&self) -> Result<(), JsValue> {
        self.session.return_to_main().map_err(js_err)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js_value(&JsView::from(self.session.view()))
    }
}

#[derive(Serialize)]
struct JsView {
    round: f64,
    phase: &'static str,
    player_cards: Vec<JsCard>,
    player_value: u8,
    dealer_cards: Vec<JsCard>,
    dealer_value: u8,
    hole_revealed: bool,
    outcome: Option<&'static str>,
    pending: Option<JsStep>,
    bankroll: u32,
    wagered: u32,
}

impl From<RoundView> for JsView {
    fn from(view: RoundView) -> Self {
        Self {
            round: view.round.0 as f64,
            phase: phase_to_str(view.phase),
            player_cards: view.player_cards.into_iter().map(card_to_js).collect(),
            player_value: view.player_value,
            dealer_cards: view.dealer_cards.into_iter().map(card_to_js).collect(),
            dealer_value: view.dealer_value,
            hole_revealed: view.hole_revealed,
            outcome: view.outcome.map(outcome_to_str),
            pending: view.pending.map(JsStep::from),
            bankroll: view.bankroll as u32,
            wagered: view.wagered as u32,
        }
    }
}

#[derive(Serialize)]
struct JsStep {
    round: f64,
    seq: u32,
    kind: &'static str,
    delay_ms: u32,
}

impl From<ScheduledStep> for JsStep {
    fn from(step: ScheduledStep) -> Self {
        Self {
            round: step.round.0 as f64,
            seq: step.seq,
            kind: match step.kind {
                StepKind::DealerDraw => "DealerDraw",
                StepKind::RevealOutcome => "RevealOutcome",
            },
            delay_ms: step.delay.as_millis() as u32,
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: u8,
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        rank: card.rank,
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "hearts",
        Suit::Diamonds => "diamonds",
        Suit::Spades => "spades",
        Suit::Clubs => "clubs",
    }
}

fn phase_to_str(phase: Phase) -> &'static str {
    match phase {
        Phase::Betting => "Betting",
        Phase::PlayerTurn => "PlayerTurn",
        Phase::DealerTurn => "DealerTurn",
        Phase::Settled => "Settled",
    }
}

fn outcome_to_str(outcome: RoundOutcome) -> &'static str {
    match outcome {
        RoundOutcome::Win => "win",
        RoundOutcome::Blackjack => "blackjack",
        RoundOutcome::Bust => "bust",
        RoundOutcome::Lose => "loss",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
