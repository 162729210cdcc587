//! DOM overlays around the canvas: score/level/lives text, level-up banner and
//! the start / game-over screens.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::ports::Hud;

pub(crate) struct DomHud {
    doc: Document,
    input_id: &'static str,
}

impl DomHud {
    pub(crate) fn new(doc: Document, input_id: &'static str) -> Self {
        Self { doc, input_id }
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.doc.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn container(&self) -> Option<Element> {
        self.doc.query_selector(".game-container").ok().flatten()
    }

    /// Hide start / game-over screens, show the playfield and focus the input.
    pub(crate) fn show_playing(&mut self) {
        toggle_screen(self.doc.get_element_by_id("startScreen"), false);
        toggle_screen(self.doc.get_element_by_id("gameOverScreen"), false);
        toggle_screen(self.container(), true);
        if let Some(input) = self.input() {
            input.focus().ok();
        }
    }

    fn input(&self) -> Option<HtmlInputElement> {
        self.doc
            .get_element_by_id(self.input_id)
            .and_then(|el| el.dyn_into().ok())
    }
}

fn toggle_screen(el: Option<Element>, show: bool) {
    let Some(el) = el else { return };
    let classes = el.class_list();
    let _ = classes.toggle_with_force("hidden", !show);
    let _ = classes.toggle_with_force("visible", show);
}

fn hearts(lives: u32) -> String {
    format!("Lives: {}", "❤️".repeat(lives as usize))
}

impl Hud for DomHud {
    fn show_progress(&mut self, score: u64, level: u32, high_score: u64) {
        self.set_text("scoreDisplay", &format!("Score: {score}"));
        self.set_text("levelDisplay", &format!("Level: {level}"));
        self.set_text("highScoreDisplay", &format!("High Score: {high_score}"));
    }

    fn show_lives(&mut self, lives: u32) {
        self.set_text("livesDisplay", &hearts(lives));
    }

    fn set_level_up_flash(&mut self, visible: bool) {
        let Some(flash) = self
            .doc
            .get_element_by_id("levelUpFlash")
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        let display = if visible { "block" } else { "none" };
        let _ = flash.style().set_property("display", display);
    }

    fn show_game_over(&mut self, final_score: u64) {
        toggle_screen(self.container(), false);
        toggle_screen(self.doc.get_element_by_id("gameOverScreen"), true);
        self.set_text("finalScore", &final_score.to_string());
    }

    fn clear_input(&mut self) {
        if let Some(input) = self.input() {
            input.set_value("");
        }
    }
}
