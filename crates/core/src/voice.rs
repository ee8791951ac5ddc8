//! Read replies aloud through the platform's text-to-speech program.

use crate::constants::SPEECH_RATE_WPM;
use crate::{MediError, MediResult};
use std::process::Command;

/// Text-to-speech program used when none is configured.
pub fn default_program() -> &'static str {
    if cfg!(target_os = "macos") {
        "say"
    } else {
        "espeak-ng"
    }
}

/// Speaks text by running a TTS program such as `say`, `espeak` or `espeak-ng`.
#[derive(Debug, Clone)]
pub struct Speaker {
    program: String,
    voice: Option<String>,
    rate: u32,
}

impl Speaker {
    pub fn new(program: Option<String>, voice: Option<String>) -> Self {
        Self {
            program: program
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| default_program().to_string()),
            voice: voice
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            rate: SPEECH_RATE_WPM,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments for speaking `text`. `say` takes `-r` for rate; the espeak family takes `-s`.
    pub fn args(&self, text: &str) -> Vec<String> {
        let rate_flag = if self.is_say() { "-r" } else { "-s" };
        let mut args = vec![rate_flag.to_string(), self.rate.to_string()];
        if let Some(voice) = &self.voice {
            args.push("-v".to_string());
            args.push(voice.clone());
        }
        // "--" stops option parsing for text that begins with '-'.
        args.push("--".to_string());
        args.push(text.to_string());
        args
    }

    /// Speak `text` and wait for the program to finish.
    pub fn speak(&self, text: &str) -> MediResult<()> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(());
        }

        let status = Command::new(&self.program)
            .args(self.args(text))
            .status()
            .map_err(|source| MediError::SpeechSpawn {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(MediError::SpeechExit {
                program: self.program.clone(),
                status,
            });
        }
        Ok(())
    }

    fn is_say(&self) -> bool {
        std::path::Path::new(&self.program)
            .file_name()
            .and_then(|name| name.to_str())
            == Some("say")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn espeak_uses_speed_flag_and_optional_voice() {
        let speaker = Speaker::new(Some("espeak-ng".into()), Some("en-gb".into()));
        assert_eq!(
            speaker.args("drink fluids"),
            ["-s", "170", "-v", "en-gb", "--", "drink fluids"]
        );
    }

    #[test]
    fn say_uses_rate_flag() {
        let speaker = Speaker::new(Some("/usr/bin/say".into()), None);
        assert_eq!(speaker.args("rest"), ["-r", "170", "--", "rest"]);
    }

    #[test]
    fn blank_program_falls_back_to_platform_default() {
        let speaker = Speaker::new(Some("  ".into()), Some(" ".into()));
        assert_eq!(speaker.program(), default_program());
        assert_eq!(speaker.args("x"), [
            if default_program() == "say" { "-r" } else { "-s" },
            "170",
            "--",
            "x"
        ]);
    }

    #[test]
    fn missing_program_is_reported() {
        let speaker = Speaker::new(Some("medibot-no-such-tts-program".into()), None);
        let err = speaker.speak("hello").expect_err("program does not exist");
        assert!(matches!(err, MediError::SpeechSpawn { .. }));
    }

    #[test]
    fn blank_text_is_not_spoken() {
        let speaker = Speaker::new(Some("medibot-no-such-tts-program".into()), None);
        speaker.speak("   ").expect("nothing to speak");
    }
}
