use memoji_core::{AudioBackend, AudioError, BACKGROUND_VOLUME, Cue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::HtmlAudioElement;

const fn source(cue: Cue) -> &'static str {
    match cue {
        Cue::Background => "audio/background.mp3",
        Cue::Flip => "audio/flip.mp3",
        Cue::Win => "audio/win.mp3",
    }
}

/// Audio elements for every cue, created once and shared by all sessions. A cue whose element could not be created
/// reports [`AudioError::Unavailable`].
#[derive(Debug)]
pub(crate) struct WebAudio {
    background: Option<HtmlAudioElement>,
    flip: Option<HtmlAudioElement>,
    win: Option<HtmlAudioElement>,
}

impl WebAudio {
    pub(crate) fn new() -> Self {
        let background = Self::load(Cue::Background);
        if let Some(element) = &background {
            element.set_loop(true);
            element.set_volume(BACKGROUND_VOLUME);
        }

        Self {
            background,
            flip: Self::load(Cue::Flip),
            win: Self::load(Cue::Win),
        }
    }

    fn load(cue: Cue) -> Option<HtmlAudioElement> {
        match HtmlAudioElement::new_with_src(source(cue)) {
            Ok(element) => Some(element),
            Err(err) => {
                log::warn!("could not create {:?} audio: {:?}", cue, err);
                None
            }
        }
    }

    fn element(&self, cue: Cue) -> Result<&HtmlAudioElement, AudioError> {
        match cue {
            Cue::Background => self.background.as_ref(),
            Cue::Flip => self.flip.as_ref(),
            Cue::Win => self.win.as_ref(),
        }
        .ok_or(AudioError::Unavailable(cue))
    }
}

impl AudioBackend for WebAudio {
    fn play(&mut self, cue: Cue) -> Result<(), AudioError> {
        let promise = self
            .element(cue)?
            .play()
            .map_err(|_| AudioError::Rejected(cue))?;

        // autoplay policies reject the promise asynchronously
        spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                log::debug!("{:?} playback rejected: {:?}", cue, err);
            }
        });
        Ok(())
    }

    fn pause(&mut self, cue: Cue) -> Result<(), AudioError> {
        self.element(cue)?
            .pause()
            .map_err(|_| AudioError::Rejected(cue))
    }

    fn rewind_and_play(&mut self, cue: Cue) -> Result<(), AudioError> {
        self.element(cue)?.set_current_time(0.0);
        self.play(cue)
    }
}
