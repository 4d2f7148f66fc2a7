//! Intro lines typed out on page load.

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::config::{INSTRUCTION_MESSAGE, INSTRUCTION_TICK_MS, WELCOME_MESSAGE, WELCOME_TICK_MS};

/// Cursor revealing a string one character per tick.
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: &'static str,
    cursor: usize,
}

impl Typewriter {
    pub fn new(text: &'static str) -> Self {
        Self { text, cursor: 0 }
    }

    /// Reveal the next character, or `None` once the text is complete.
    pub fn tick(&mut self) -> Option<char> {
        let next = self.text[self.cursor..].chars().next()?;
        self.cursor += next.len_utf8();
        Some(next)
    }

    pub fn revealed(&self) -> &'static str {
        &self.text[..self.cursor]
    }

    pub fn is_done(&self) -> bool {
        self.cursor == self.text.len()
    }
}

/// Append `text` to `target`, one character every `tick_ms`.
async fn type_out(text: &'static str, tick_ms: u32, target: WriteSignal<String>) {
    let mut writer = Typewriter::new(text);
    while let Some(ch) = writer.tick() {
        target.update(|shown| shown.push(ch));
        TimeoutFuture::new(tick_ms).await;
    }
}

#[component]
pub fn Intro() -> impl IntoView {
    let (message, set_message) = create_signal(String::new());
    let (instruction, set_instruction) = create_signal(String::new());

    // Runs once per mount; the instruction starts after the welcome line.
    spawn_local(async move {
        type_out(WELCOME_MESSAGE, WELCOME_TICK_MS, set_message).await;
        type_out(INSTRUCTION_MESSAGE, INSTRUCTION_TICK_MS, set_instruction).await;
        log::debug!("Intro animation finished");
    });

    view! {
        <div class="intro">
            <h1 id="message">{move || message.get()}</h1>
            <p id="instruction" class="subtitle">{move || instruction.get()}</p>
        </div>
    }
}
