use web_sys::{CanvasRenderingContext2d, Document};

use crate::session::{GameStatus, Snapshot};

const TILE_GAP: f64 = 6.0;

pub const BEGIN_BUTTON_STYLE: &str = "position:fixed; top:78%; left:50%; transform:translateX(-50%); font-family:'Fira Code', monospace; font-size:18px; padding:10px 22px; background:#4cc9f0; color:#0a0f1e; border:1px solid #4cc9f0; border-radius:8px; cursor:pointer; z-index:50;";

pub fn render_board(ctx: &CanvasRenderingContext2d, width: f64, height: f64, snap: &Snapshot) {
    ctx.set_fill_style_str("#0a0f1e");
    ctx.fill_rect(0.0, 0.0, width, height);

    let grid = snap.grid_size.max(1) as f64;
    let cell_w = width / grid;
    let cell_h = height / grid;

    for (idx, tile) in snap.tiles.iter().enumerate() {
        let col = (idx as u32 % snap.grid_size.max(1)) as f64;
        let row = (idx as u32 / snap.grid_size.max(1)) as f64;
        let x = col * cell_w + TILE_GAP / 2.0;
        let y = row * cell_h + TILE_GAP / 2.0;
        let w = cell_w - TILE_GAP;
        let h = cell_h - TILE_GAP;

        let (fill, border) = if tile.matched {
            ("#0b3d2e", "#39ff88")
        } else if tile.flipped {
            ("#1f2f5a", "#4cc9f0")
        } else {
            ("#141b33", "#2a3a6a")
        };
        ctx.set_fill_style_str(fill);
        ctx.fill_rect(x, y, w, h);
        ctx.set_stroke_style_str(border);
        ctx.set_line_width(2.0);
        ctx.stroke_rect(x, y, w, h);

        match tile.symbol {
            Some(symbol) => {
                let color = if tile.matched { "#39ff88" } else { "#4cc9f0" };
                ctx.set_fill_style_str(color);
                ctx.set_font(&format!("{}px 'Noto Color Emoji', 'Segoe UI Symbol', sans-serif", (h * 0.45).round()));
                ctx.fill_text(symbol, x + w / 2.0, y + h / 2.0 + h * 0.16).ok();
            }
            None => draw_circuit(ctx, x, y, w, h),
        }
    }

    if let Some(banner) = banner_for(snap.status) {
        ctx.set_fill_style_str("rgba(5,8,20,0.72)");
        ctx.fill_rect(0.0, height / 2.0 - 40.0, width, 80.0);
        ctx.set_fill_style_str("#f72585");
        ctx.set_font("24px 'Fira Code', monospace");
        ctx.fill_text(banner, width / 2.0, height / 2.0 + 8.0).ok();
    }
}

fn banner_for(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::Playing => None,
        GameStatus::Ready => Some("AWAITING INITIALIZATION"),
        GameStatus::Won => Some("NEURAL PATTERN STABILIZED"),
        GameStatus::Lost => Some("NEURAL COLLAPSE"),
    }
}

// Face-down tile motif: two traces and a node.
fn draw_circuit(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64) {
    ctx.set_stroke_style_str("rgba(76,201,240,0.3)");
    ctx.set_line_width(1.5);
    ctx.begin_path();
    ctx.move_to(x + w * 0.2, y + h * 0.3);
    ctx.line_to(x + w * 0.6, y + h * 0.3);
    ctx.line_to(x + w * 0.8, y + h * 0.5);
    ctx.move_to(x + w * 0.2, y + h * 0.7);
    ctx.line_to(x + w * 0.7, y + h * 0.7);
    ctx.stroke();
    ctx.set_fill_style_str("rgba(247,37,133,0.35)");
    ctx.begin_path();
    ctx.arc(x + w * 0.8, y + h * 0.5, (w.min(h) * 0.05).max(2.0), 0.0, std::f64::consts::TAU)
        .ok();
    ctx.fill();
}

pub fn status_line(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Ready => "Neural sync prepared. Awaiting initialization.",
        GameStatus::Playing => {
            "Neural patterns destabilizing. Match memory pairs to recover integrity."
        }
        GameStatus::Won => "Level complete. Advancing to next neural depth.",
        GameStatus::Lost => "Catastrophic pattern loss. Neural structure collapsed.",
    }
}

/// Refresh the DOM overlays from the snapshot.
pub fn render_hud(doc: &Document, snap: &Snapshot, toasts: &[String]) {
    set_text(doc, "nr-level", &format!("Neural Trial: Level {}", snap.level));
    set_text(doc, "nr-score", &format!("{} | High: {}", snap.score, snap.high_score));
    set_text(doc, "nr-grid", &format!("GRID {}x{}", snap.grid_size, snap.grid_size));
    set_text(doc, "nr-combo", &format!("COMBO {}x", snap.combo_display));
    set_text(doc, "nr-status", status_line(snap.status));

    if let Some(el) = doc.get_element_by_id("nr-integrity") {
        let pct = snap.mind_integrity.min(100);
        el.set_inner_html(&format!(
            "<span style='font-size:11px;color:#f72585;'>MIND INTEGRITY {pct}%</span>\
             <div style='height:8px;background:#1b1f3a;border-radius:4px;margin-top:3px;'>\
             <div style='height:8px;width:{pct}%;background:linear-gradient(90deg,#f72585,#4cc9f0);border-radius:4px;'></div></div>"
        ));
    }

    if let Some(el) = doc.get_element_by_id("nr-begin") {
        let label = match snap.status {
            GameStatus::Lost => Some("New Neural Simulation"),
            GameStatus::Ready => Some("Initialize Sequence"),
            _ => None,
        };
        match label {
            Some(label) => {
                el.set_text_content(Some(label));
                el.set_attribute("style", &format!("{BEGIN_BUTTON_STYLE} display:block;")).ok();
            }
            None => {
                el.set_attribute("style", &format!("{BEGIN_BUTTON_STYLE} display:none;")).ok();
            }
        }
    }

    set_text(doc, "nr-toast", &toasts.join("  ·  "));
}

fn set_text(doc: &Document, id: &str, text: &str) {
    if let Some(el) = doc.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}
