/// Spoken feedback. Browsers without speech synthesis stay silent.
pub trait Announcer {
    fn announce(&self, text: &str);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SpeechAnnouncer;

impl Announcer for SpeechAnnouncer {
    #[cfg(target_arch = "wasm32")]
    fn announce(&self, text: &str) {
        let Some(synth) = web_sys::window().and_then(|w| w.speech_synthesis().ok()) else {
            return;
        };
        if let Ok(utterance) = web_sys::SpeechSynthesisUtterance::new_with_text(text) {
            synth.speak(&utterance);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn announce(&self, text: &str) {
        log::debug!("announce: {}", text);
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SilentAnnouncer;

impl Announcer for SilentAnnouncer {
    fn announce(&self, _text: &str) {}
}

pub fn welcome_message(first_name: &str) -> String {
    format!("Welcome to DocBook, {}", first_name.trim())
}
