//! Audio contract.
//!
//! Scenes only decide *when* a sound starts or stops. The sink records those
//! decisions as commands; the front end drains them and surfaces the cue.

/// Every sound the game uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    Jump,
    Coin,
    Dead,
    Theme,
}

impl Sound {
    /// Asset key.
    pub fn key(&self) -> &'static str {
        match self {
            Sound::Jump => "jump",
            Sound::Coin => "coin",
            Sound::Dead => "dead",
            Sound::Theme => "theme",
        }
    }

    pub fn asset_path(&self) -> String {
        format!("assets/sounds/{}.mp3", self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCommand {
    Play { sound: Sound, looping: bool },
    Stop(Sound),
}

pub trait AudioSink {
    fn play(&mut self, sound: Sound, looping: bool);
    fn stop(&mut self, sound: Sound);
}

/// Sink that queues commands until the front end drains them.
#[derive(Debug, Clone, Default)]
pub struct AudioQueue {
    commands: Vec<AudioCommand>,
    looping: Vec<Sound>,
}

impl AudioQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands issued since the last drain.
    pub fn commands(&self) -> &[AudioCommand] {
        &self.commands
    }

    pub fn drain(&mut self) -> Vec<AudioCommand> {
        std::mem::take(&mut self.commands)
    }

    /// True while a looping sound has been started and not stopped.
    pub fn is_looping(&self, sound: Sound) -> bool {
        self.looping.contains(&sound)
    }

    pub fn played(&self, sound: Sound) -> bool {
        self.commands
            .iter()
            .any(|c| matches!(c, AudioCommand::Play { sound: s, .. } if *s == sound))
    }

    pub fn stopped(&self, sound: Sound) -> bool {
        self.commands.contains(&AudioCommand::Stop(sound))
    }
}

impl AudioSink for AudioQueue {
    fn play(&mut self, sound: Sound, looping: bool) {
        log::debug!("audio: play {} (looping: {})", sound.key(), looping);
        if looping && !self.looping.contains(&sound) {
            self.looping.push(sound);
        }
        self.commands.push(AudioCommand::Play { sound, looping });
    }

    fn stop(&mut self, sound: Sound) {
        log::debug!("audio: stop {}", sound.key());
        self.looping.retain(|s| *s != sound);
        self.commands.push(AudioCommand::Stop(sound));
    }
}
