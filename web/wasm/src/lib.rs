use core::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use typhoon::{CardView, Game, GameError, GameRules, GameState, ManualScheduler, Randomize};
use wasm_bindgen::prelude::*;

/// Luminance above which card titles switch to black text.
const CONTRAST_THRESHOLD: f64 = 0.5;
const DARK_TEXT: &str = "#000000";
const LIGHT_TEXT: &str = "#FFFFFF";
const LIGHT_TEXT_SHADOW: &str = "1px 1px 3px rgba(0, 0, 0, 0.7)";

#[wasm_bindgen]
pub struct WasmGame {
    game: Game<ManualScheduler>,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Result<WasmGame, JsValue> {
        let game = Game::with_parts(
            GameRules::default(),
            ChaCha8Rng::seed_from_u64(seed as u64),
            ManualScheduler::new(),
        )
        .map_err(js_err)?;
        Ok(Self { game })
    }

    pub fn init(&mut self) -> Result<(), JsValue> {
        self.game.init().map_err(js_err)
    }

    /// Returns `"immediate"`, `"deferred"`, or `"busy"` when a previous
    /// randomize is still flipping back.
    pub fn randomize(&mut self, now_ms: f64) -> Result<String, JsValue> {
        self.advance_clock(now_ms);
        let outcome = match self.game.randomize() {
            Ok(Randomize::Immediate) => "immediate",
            Ok(Randomize::Deferred(_)) => "deferred",
            Err(GameError::Busy) => "busy",
            Err(err) => return Err(js_err(err)),
        };
        Ok(outcome.to_string())
    }

    /// Advances the clock to `now_ms` and runs a due flip-back.
    ///
    /// Returns whether the deck changed and needs a re-render.
    pub fn tick(&mut self, now_ms: f64) -> Result<bool, JsValue> {
        self.advance_clock(now_ms);
        self.game.poll().map_err(js_err)
    }

    pub fn reveal_all(&mut self) -> Result<(), JsValue> {
        self.game.reveal_all_cards().map_err(js_err)
    }

    pub fn request_reveal(&mut self, index: u32) -> Result<(), JsValue> {
        self.game
            .request_reveal(index as usize)
            .map_err(js_err)
    }

    pub fn set_names_visible(&mut self, visible: bool) {
        self.game.set_names_visible(visible);
    }

    pub fn reset(&mut self) {
        self.game.reset();
    }

    pub fn animation_duration_ms(&self) -> u32 {
        self.game.rules().animation_duration.as_millis() as u32
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js_value(&JsSnapshot::from_game(&self.game))
    }
}

impl WasmGame {
    fn advance_clock(&mut self, now_ms: f64) {
        if now_ms.is_finite() && now_ms > 0.0 {
            self.game
                .scheduler_mut()
                .set_now(Duration::from_millis(now_ms as u64));
        }
    }
}

#[derive(Serialize)]
struct JsSnapshot {
    state: &'static str,
    cards: Vec<JsCard>,
    names_visible: bool,
    busy: bool,
    card_count: u32,
    revealed_count: u32,
}

impl JsSnapshot {
    fn from_game(game: &Game<ManualScheduler>) -> Self {
        let snapshot = game.snapshot();
        Self {
            state: state_to_str(snapshot.state),
            cards: snapshot.cards.iter().map(JsCard::from_view).collect(),
            names_visible: snapshot.names_visible,
            busy: snapshot.busy,
            card_count: snapshot.card_count as u32,
            revealed_count: snapshot.revealed_count as u32,
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    color_name: &'static str,
    hex_value: &'static str,
    point_label: String,
    revealed: bool,
    text_color: &'static str,
    text_shadow: &'static str,
}

impl JsCard {
    fn from_view(view: &CardView) -> Self {
        let text_color = text_color(view.hex);
        Self {
            color_name: view.color_name,
            hex_value: view.hex,
            point_label: view.point_label.clone(),
            revealed: view.revealed,
            text_color,
            text_shadow: text_shadow(text_color),
        }
    }
}

/// Perceived luminance of a `#RRGGBB` color in `0.0..=1.0`.
fn luminance(hex: &str) -> f64 {
    let channel = |range: core::ops::Range<usize>| {
        hex.get(range)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
            .map_or(0.0, f64::from)
    };
    (0.299 * channel(1..3) + 0.587 * channel(3..5) + 0.114 * channel(5..7)) / 255.0
}

fn text_color(background: &str) -> &'static str {
    if luminance(background) > CONTRAST_THRESHOLD {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}

fn text_shadow(text_color: &str) -> &'static str {
    if text_color == LIGHT_TEXT {
        LIGHT_TEXT_SHADOW
    } else {
        "none"
    }
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::Uninitialized => "Uninitialized",
        GameState::Ready => "Ready",
        GameState::AwaitingFlipBack => "AwaitingFlipBack",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
