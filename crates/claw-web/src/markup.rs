// Overlay markup. Pure string building so it can be tested on the host.

use claw_core::PrizeOutcome;

pub const INSTRUCTIONS_ROOT_ID: &str = "instructions";
pub const INSTRUCTIONS_TOGGLE_ID: &str = "instructions-toggle";
pub const INSTRUCTIONS_BODY_ID: &str = "instructions-body";
pub const INSTRUCTIONS_GLYPH_ID: &str = "instructions-glyph";
pub const PRIZE_POPUP_ID: &str = "prize-popup";

pub const INSTRUCTIONS_TITLE: &str = "遊戲玩法";

#[inline]
pub fn toggle_glyph(open: bool) -> &'static str {
    if open {
        "▲"
    } else {
        "▼"
    }
}

#[inline]
pub fn body_style(open: bool) -> &'static str {
    if open {
        ""
    } else {
        "display:none"
    }
}

pub fn prize_strip() -> String {
    PrizeOutcome::PRIZES.iter().map(|p| p.icon()).collect()
}

pub fn instruction_lines() -> [String; 3] {
    [
        "使用 <b>W/A/S/D</b> 或方向鍵移動爪子".to_string(),
        "按 <b>Space</b> 下降抓娃娃".to_string(),
        format!(
            "隨機獲得三種獎品 <span class=\"prize-strip\">{}</span>",
            prize_strip()
        ),
    ]
}

pub fn instructions_html(open: bool) -> String {
    let items: String = instruction_lines()
        .iter()
        .map(|line| format!("<li><span class=\"bullet\">•</span>{}</li>", line))
        .collect();
    format!(
        "<button id=\"{toggle}\" class=\"panel-header\"><span class=\"icon\">🎮</span>{title}<span id=\"{glyph}\" class=\"glyph\">{g}</span></button>\
         <div id=\"{body}\" class=\"panel-body\" style=\"{style}\"><ul>{items}</ul></div>",
        toggle = INSTRUCTIONS_TOGGLE_ID,
        title = INSTRUCTIONS_TITLE,
        glyph = INSTRUCTIONS_GLYPH_ID,
        g = toggle_glyph(open),
        body = INSTRUCTIONS_BODY_ID,
        style = body_style(open),
        items = items,
    )
}

pub fn popup_html(outcome: PrizeOutcome) -> String {
    format!(
        "<div class=\"popup-card{win}\"><span class=\"popup-icon\">{icon}</span><span class=\"popup-label\">{label}</span></div>",
        win = if outcome.is_win() { " win" } else { "" },
        icon = outcome.icon(),
        label = outcome.label(),
    )
}
