use gloo::timers::callback::Timeout;
use minegame_core::{GAME_OVER_CUE_DELAY_MS, GameEvent};
use web_sys::HtmlAudioElement;

/// Sound file played for each engine notification.
pub(crate) const fn sound_src(event: GameEvent) -> &'static str {
    use GameEvent::*;
    match event {
        MineTriggered => "/sounds/explosion.mpeg",
        SafeReveal => "/sounds/click.mpeg",
        Victory => "/sounds/win.mpeg",
        GameOverDelayed => "/sounds/gameover.mpeg",
    }
}

/// Fire-and-forget playback; a failed `play()` only loses an audio cue.
pub(crate) fn play(event: GameEvent, volume: u8) {
    let Ok(audio) = HtmlAudioElement::new_with_src(sound_src(event)) else {
        log::error!("could not create audio element for {:?}", event);
        return;
    };
    audio.set_volume(f64::from(volume.min(100)) / 100.0);
    if let Err(err) = audio.play() {
        log::debug!("audio cue {:?} not played: {:?}", event, err);
    }
}

/// Play the immediate cues for an outcome and, on a mine hit, schedule the
/// delayed game-over cue. The timeout is deliberately leaked: the source
/// never cancels it on reset, so a reset before it fires still plays the cue.
pub(crate) fn play_events(events: &[GameEvent], volume: u8) {
    for &event in events {
        play(event, volume);
        if event == GameEvent::MineTriggered {
            Timeout::new(GAME_OVER_CUE_DELAY_MS, move || {
                play(GameEvent::GameOverDelayed, volume)
            })
            .forget();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_event_has_a_distinct_sound() {
        use GameEvent::*;
        let sources = [
            sound_src(MineTriggered),
            sound_src(SafeReveal),
            sound_src(Victory),
            sound_src(GameOverDelayed),
        ];
        for (i, a) in sources.iter().enumerate() {
            for b in &sources[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn delayed_cue_matches_the_spec_delay() {
        assert_eq!(GAME_OVER_CUE_DELAY_MS, 1_000);
    }
}
