//! Session configuration.

use serde::Deserialize;

/// Player-facing switches, loadable from JSON. Missing fields take defaults.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionConfig {
    /// Initial state of the hint assistant (toggled at runtime).
    pub hint_enabled: bool,
    /// Forward feedback cues to the attached sink.
    pub audio_cues: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            hint_enabled: true,
            audio_cues: true,
        }
    }
}

impl SessionConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_hints_and_audio() {
        let cfg = SessionConfig::default();
        assert!(cfg.hint_enabled);
        assert!(cfg.audio_cues);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = SessionConfig::from_json(r#"{ "hintEnabled": false }"#).unwrap();
        assert!(!cfg.hint_enabled);
        assert!(cfg.audio_cues);
        assert_eq!(SessionConfig::from_json("{}").unwrap(), SessionConfig::default());
    }
}
