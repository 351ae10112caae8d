//! Browser front end: canvas board, DOM overlays, input listeners and the
//! animation-frame loop that feeds `performance.now()` into the session.
//!
//! Nothing in here is reachable off-wasm; the core never depends on it.

mod audio;
mod render;
mod storage;

pub use audio::WebAudioFeedback;
pub use storage::LocalStorageStore;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, window};

use crate::config::GameConfig;
use crate::log;
use crate::rng::TileRng;
use crate::session::{GameStatus, Notice, SessionController};
#[cfg(feature = "serde_json")]
use crate::session::Snapshot;

const CANVAS_SIZE: u32 = 640;
const TOAST_MS: f64 = 2200.0;

struct Toast {
    text: String,
    until_ms: f64,
}

struct WebState {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    game: SessionController,
    toasts: Vec<Toast>,
}

thread_local! {
    static WEB_STATE: RefCell<Option<WebState>> = const { RefCell::new(None) };
}

fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

pub fn start(config: GameConfig) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;

    // Create / reuse the board canvas
    let canvas: HtmlCanvasElement = if let Some(el) = doc.get_element_by_id("nr-board-canvas") {
        el.dyn_into()?
    } else {
        let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
        c.set_id("nr-board-canvas");
        c.set_width(CANVAS_SIZE);
        c.set_height(CANVAS_SIZE);
        c.set_attribute("style", "position:fixed; left:50%; top:46%; transform:translate(-50%,-50%); box-shadow:0 0 32px 0 rgba(76,201,240,0.25); border-radius:14px; border:2px solid #2a3a6a; background:#0a0f1e; z-index:20;").ok();
        body.append_child(&c)?;
        c
    };
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;
    ctx.set_text_align("center");

    ensure_overlays(&doc)?;

    let store = LocalStorageStore::new(config.high_score_key.clone());
    let game = SessionController::new(
        config,
        Box::new(store),
        Box::new(WebAudioFeedback::new()),
        TileRng::from_entropy(),
    );
    log::info("start", &format!("high score {}", game.high_score()));

    WEB_STATE.with(|s| {
        s.replace(Some(WebState { canvas: canvas.clone(), ctx, game, toasts: Vec::new() }))
    });

    install_listeners(&doc, &canvas)?;
    start_frame_loop();
    Ok(())
}

/// Overlay id and its fixed-position style.
const OVERLAYS: &[(&str, &str)] = &[
    ("nr-level", "position:fixed; top:10px; left:12px; font-family:'Fira Code', monospace; font-size:16px; padding:4px 8px; background:rgba(0,0,0,0.42); border:1px solid #2a3a6a; border-radius:6px; color:#4cc9f0; z-index:45;"),
    ("nr-score", "position:fixed; top:10px; right:12px; font-family:'Fira Code', monospace; font-size:16px; padding:4px 8px; background:rgba(0,0,0,0.42); border:1px solid #2a3a6a; border-radius:6px; color:#39ff88; z-index:45;"),
    ("nr-integrity", "position:fixed; top:48px; left:12px; width:220px; font-family:'Fira Code', monospace; padding:4px 8px; background:rgba(0,0,0,0.42); border:1px solid #2a3a6a; border-radius:6px; z-index:45;"),
    ("nr-grid", "position:fixed; top:48px; right:12px; font-family:'Fira Code', monospace; font-size:14px; padding:4px 8px; background:rgba(0,0,0,0.42); border:1px solid #2a3a6a; border-radius:6px; color:#4cc9f0; z-index:45;"),
    ("nr-combo", "position:fixed; top:84px; right:12px; font-family:'Fira Code', monospace; font-size:14px; padding:4px 8px; background:rgba(0,0,0,0.42); border:1px solid #2a3a6a; border-radius:6px; color:#f72585; z-index:45;"),
    ("nr-status", "position:fixed; bottom:16px; left:50%; transform:translateX(-50%); font-family:'Fira Code', monospace; font-size:13px; padding:4px 10px; background:rgba(0,0,0,0.42); border-left:2px solid #4cc9f0; color:#4cc9f0; z-index:45;"),
    ("nr-toast", "position:fixed; bottom:52px; left:50%; transform:translateX(-50%); font-family:'Fira Code', monospace; font-size:16px; color:#ffd166; z-index:46;"),
    ("nr-begin", render::BEGIN_BUTTON_STYLE),
];

fn ensure_overlays(doc: &Document) -> Result<(), JsValue> {
    let Some(body) = doc.body() else {
        return Ok(());
    };
    for (id, style) in OVERLAYS {
        if doc.get_element_by_id(id).is_none() {
            let div = doc.create_element("div")?;
            div.set_id(id);
            div.set_attribute("style", style).ok();
            body.append_child(&div)?;
        }
    }
    Ok(())
}

fn install_listeners(doc: &Document, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    // Canvas click -> tile under the cursor
    {
        let canvas_click = canvas.clone();
        let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
            let x = evt.offset_x() as f64;
            let y = evt.offset_y() as f64;
            let id = WEB_STATE.with(|cell| {
                let state = cell.borrow();
                let board = state.as_ref()?.game.board()?;
                tile_at(
                    board.grid_size(),
                    canvas_click.client_width() as f64,
                    canvas_click.client_height() as f64,
                    x,
                    y,
                )
                .and_then(|idx| board.tiles().get(idx))
                .map(|t| t.id)
            });
            if let Some(id) = id {
                if let Err(e) = select(id) {
                    log::error("click", &format!("{e:?}"));
                }
            }
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Begin button
    if let Some(button) = doc.get_element_by_id("nr-begin") {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            if let Err(e) = begin() {
                log::error("begin", &format!("{e:?}"));
            }
        }) as Box<dyn FnMut(_)>);
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Enter / Space begins, but only while a begin is accepted
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
            let key = evt.key();
            if (key == "Enter" || key == " ") && accepts_begin(current_status()) {
                evt.prevent_default();
                if let Err(e) = begin() {
                    log::error("begin", &format!("{e:?}"));
                }
            }
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

/// Row-major board index under canvas-local point (`x`, `y`).
fn tile_at(grid_size: u32, width: f64, height: f64, x: f64, y: f64) -> Option<usize> {
    if grid_size == 0 || x < 0.0 || y < 0.0 || x >= width || y >= height {
        return None;
    }
    let col = (x / (width / grid_size as f64)).floor() as usize;
    let row = (y / (height / grid_size as f64)).floor() as usize;
    Some(row * grid_size as usize + col)
}

fn current_status() -> Option<GameStatus> {
    WEB_STATE.with(|cell| cell.borrow().as_ref().map(|s| s.game.status()))
}

/// Whether a begin key press should be claimed from the page.
fn accepts_begin(status: Option<GameStatus>) -> bool {
    matches!(status, Some(GameStatus::Ready | GameStatus::Lost))
}

pub fn begin() -> Result<bool, JsValue> {
    let now = now_ms();
    WEB_STATE.with(|cell| match cell.borrow_mut().as_mut() {
        Some(state) => Ok(state.game.begin(now)?),
        None => Err(JsValue::from_str("game not started")),
    })
}

pub fn select(id: u32) -> Result<(), JsValue> {
    let now = now_ms();
    WEB_STATE.with(|cell| match cell.borrow_mut().as_mut() {
        Some(state) => {
            state.game.select_tile(id, now)?;
            Ok(())
        }
        None => Err(JsValue::from_str("game not started")),
    })
}

#[cfg(feature = "serde_json")]
pub fn snapshot() -> Option<Snapshot> {
    WEB_STATE.with(|cell| cell.borrow().as_ref().map(|s| s.game.snapshot()))
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn start_frame_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        WEB_STATE.with(|state_cell| {
            if let Some(state) = state_cell.borrow_mut().as_mut() {
                frame(state, ts);
            }
        });
        request_frame(&f);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&g);
}

fn request_frame(cb: &FrameCallback) {
    if let (Some(w), Some(closure)) = (window(), cb.borrow().as_ref()) {
        let _ = w.request_animation_frame(closure.as_ref().unchecked_ref());
    }
}

fn frame(state: &mut WebState, now: f64) {
    if let Err(e) = state.game.tick(now) {
        log::error("tick", &e.to_string());
    }

    for notice in state.game.drain_notices() {
        state.toasts.push(Toast { text: notice_text(&notice), until_ms: now + TOAST_MS });
    }
    state.toasts.retain(|t| t.until_ms > now);

    let snap = state.game.snapshot();
    render::render_board(
        &state.ctx,
        state.canvas.width() as f64,
        state.canvas.height() as f64,
        &snap,
    );
    if let Some(doc) = window().and_then(|w| w.document()) {
        let texts: Vec<String> = state.toasts.iter().map(|t| t.text.clone()).collect();
        render::render_hud(&doc, &snap, &texts);
    }
}

fn notice_text(notice: &Notice) -> String {
    match notice {
        Notice::LevelComplete { level, bonus } => {
            format!("Neural Circuit Level {level} Complete! +{bonus}")
        }
        Notice::Combo { count } => format!("{count}x Combo!"),
        Notice::GameOver { score, .. } => {
            format!("Neural Synchronization Failed. Mind integrity collapsed at {score}.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_at_maps_points_row_major() {
        assert_eq!(tile_at(4, 640.0, 640.0, 0.0, 0.0), Some(0));
        assert_eq!(tile_at(4, 640.0, 640.0, 639.0, 0.0), Some(3));
        assert_eq!(tile_at(4, 640.0, 640.0, 170.0, 170.0), Some(5));
        assert_eq!(tile_at(4, 640.0, 640.0, 639.0, 639.0), Some(15));
    }

    #[test]
    fn test_tile_at_rejects_outside_points() {
        assert_eq!(tile_at(4, 640.0, 640.0, -1.0, 10.0), None);
        assert_eq!(tile_at(4, 640.0, 640.0, 640.0, 10.0), None);
        assert_eq!(tile_at(0, 640.0, 640.0, 10.0, 10.0), None);
    }

    #[test]
    fn test_begin_keys_only_claimed_when_begin_is_accepted() {
        assert!(accepts_begin(Some(GameStatus::Ready)));
        assert!(accepts_begin(Some(GameStatus::Lost)));
        assert!(!accepts_begin(Some(GameStatus::Playing)));
        assert!(!accepts_begin(Some(GameStatus::Won)));
        assert!(!accepts_begin(None));
    }

    #[test]
    fn test_notice_text() {
        assert_eq!(notice_text(&Notice::Combo { count: 3 }), "3x Combo!");
        assert!(
            notice_text(&Notice::LevelComplete { level: 2, bonus: 200 }).contains("Level 2")
        );
    }
}
