use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, HtmlAudioElement};

use crate::ports::{Sound, SoundTrigger};

/// Plays the page's `<audio>` elements by id.
pub(crate) struct DomAudio {
    doc: Document,
}

impl DomAudio {
    pub(crate) fn new(doc: Document) -> Self {
        Self { doc }
    }
}

fn element_id(sound: Sound) -> &'static str {
    match sound {
        Sound::Shoot => "shootSound",
        Sound::Explosion => "explosionSound",
        Sound::Music => "bgMusic",
    }
}

impl SoundTrigger for DomAudio {
    fn play(&mut self, sound: Sound) {
        let Some(el) = self.doc.get_element_by_id(element_id(sound)) else {
            return;
        };
        let Ok(audio) = el.dyn_into::<HtmlAudioElement>() else {
            return;
        };
        // Music keeps its position across restarts, effects start over.
        if sound != Sound::Music {
            audio.set_current_time(0.0);
        }
        // Autoplay policy rejects the promise until the page has seen a gesture.
        // Awaiting it keeps the rejection out of the console's uncaught errors.
        match audio.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::debug!("{sound:?} blocked: {e:?}");
                }
            }),
            Err(e) => log::debug!("{sound:?} failed to start: {e:?}"),
        }
    }
}
