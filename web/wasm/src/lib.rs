use cribbage::{Card, Hand, HandScore, ScoreOptions};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Scores a hand given as space-separated codes ("5C 5D 5H JS") and a cut code ("5S").
///
/// Codes are upper-cased before parsing, so "5c" is accepted.
#[wasm_bindgen]
pub fn score(cards: &str, cut: &str, crib: bool) -> Result<JsValue, JsValue> {
    let hand = Hand::parse(&cards.to_uppercase(), &cut.to_uppercase()).map_err(js_err)?;
    let options = ScoreOptions::default()
        .with_crib(crib)
        .with_reject_duplicates(true);
    let score = hand.score_with(&options).map_err(js_err)?;
    to_js_value(&JsScore::new(&hand, &score))
}

/// Parses a single card code and returns its description.
#[wasm_bindgen]
pub fn card(code: &str) -> Result<JsValue, JsValue> {
    let card = code.trim().to_uppercase().parse::<Card>().map_err(js_err)?;
    to_js_value(&card_to_js(card))
}

#[derive(Serialize)]
struct JsCard {
    code: String,
    short: String,
    name: String,
    suit: &'static str,
    rank: u8,
    red: bool,
}

#[derive(Serialize)]
struct JsScore {
    cards: Vec<JsCard>,
    cut: JsCard,
    fifteens: u8,
    pairs: u8,
    runs: u8,
    flush: u8,
    jack: u8,
    total: u16,
}

impl JsScore {
    fn new(hand: &Hand, score: &HandScore) -> Self {
        Self {
            cards: hand.cards().iter().copied().map(card_to_js).collect(),
            cut: card_to_js(hand.cut()),
            fifteens: score.fifteens,
            pairs: score.pairs,
            runs: score.runs,
            flush: score.flush,
            jack: score.jack,
            total: score.total(),
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        code: card.code().to_string(),
        short: card.short().to_string(),
        name: card.to_string(),
        suit: card.suit().name(),
        rank: card.rank(),
        red: card.suit().is_red(),
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
