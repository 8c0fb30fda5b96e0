//! Session settings loaded from an optional TOML file and command-line flags.

use std::{fs, path::Path, time::Duration};

use anyhow::{bail, Context, Result};
use sand_serpent_core::{Difficulty, SnakeSkin};
use sand_serpent_world::GameConfig;
use serde::Deserialize;

const SUPPORTED_SESSION_VERSION: u32 = 1;
const DEFAULT_SEED: u64 = 0x5a4d;
const DEFAULT_FRAMES: usize = 20_000;
const DEFAULT_FRAME_MS: u64 = 16;
const DEFAULT_PLAYER: &str = "autopilot";

/// Settings read from a session file. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct SessionFile {
    version: u32,
    #[serde(default)]
    game: GameSection,
    #[serde(default)]
    run: RunSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct GameSection {
    difficulty: Option<Difficulty>,
    seed: Option<u64>,
    skin: Option<SnakeSkin>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RunSection {
    frames: Option<usize>,
    frame_ms: Option<u64>,
    player: Option<String>,
}

/// Values supplied on the command line; they win over the session file.
#[derive(Debug, Default)]
pub(crate) struct Overrides {
    pub(crate) difficulty: Option<Difficulty>,
    pub(crate) seed: Option<u64>,
    pub(crate) skin: Option<SnakeSkin>,
    pub(crate) frames: Option<usize>,
    pub(crate) frame_ms: Option<u64>,
    pub(crate) player: Option<String>,
}

/// Fully resolved settings for one headless run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RunSettings {
    pub(crate) config: GameConfig,
    pub(crate) frames: usize,
    pub(crate) frame: Duration,
    pub(crate) player: String,
}

impl SessionFile {
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read session file at {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("invalid session file at {}", path.display()))
    }

    fn parse(contents: &str) -> Result<Self> {
        let session: SessionFile =
            toml::from_str(contents).context("failed to parse session toml contents")?;
        if session.version != SUPPORTED_SESSION_VERSION {
            bail!(
                "unsupported session version {}; expected {}",
                session.version,
                SUPPORTED_SESSION_VERSION
            );
        }
        Ok(session)
    }

    pub(crate) fn resolve(self, overrides: Overrides) -> Result<RunSettings> {
        let frame_ms = overrides
            .frame_ms
            .or(self.run.frame_ms)
            .unwrap_or(DEFAULT_FRAME_MS);
        if frame_ms == 0 {
            bail!("frame interval must be at least one millisecond");
        }

        let config = GameConfig::new(
            overrides
                .difficulty
                .or(self.game.difficulty)
                .unwrap_or_default(),
            overrides.seed.or(self.game.seed).unwrap_or(DEFAULT_SEED),
            overrides.skin.or(self.game.skin).unwrap_or_default(),
        );

        Ok(RunSettings {
            config,
            frames: overrides
                .frames
                .or(self.run.frames)
                .unwrap_or(DEFAULT_FRAMES),
            frame: Duration::from_millis(frame_ms),
            player: overrides
                .player
                .or(self.run.player)
                .unwrap_or_else(|| DEFAULT_PLAYER.to_owned()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
version = 1

[game]
difficulty = "hardcore"
seed = 7
skin = "ruby"

[run]
frames = 900
frame_ms = 20
player = "dune"
"#;

    #[test]
    fn parses_complete_session() {
        let settings = SessionFile::parse(SAMPLE)
            .expect("parse")
            .resolve(Overrides::default())
            .expect("resolve");

        assert_eq!(
            settings.config,
            GameConfig::new(Difficulty::Hardcore, 7, SnakeSkin::Ruby)
        );
        assert_eq!(settings.frames, 900);
        assert_eq!(settings.frame, Duration::from_millis(20));
        assert_eq!(settings.player, "dune");
    }

    #[test]
    fn flags_override_file_values() {
        let overrides = Overrides {
            difficulty: Some(Difficulty::Casual),
            seed: Some(99),
            frame_ms: Some(33),
            ..Overrides::default()
        };
        let settings = SessionFile::parse(SAMPLE)
            .expect("parse")
            .resolve(overrides)
            .expect("resolve");

        assert_eq!(settings.config.difficulty, Difficulty::Casual);
        assert_eq!(settings.config.seed, 99);
        assert_eq!(settings.config.skin, SnakeSkin::Ruby);
        assert_eq!(settings.frame, Duration::from_millis(33));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let settings = SessionFile::parse("version = 1")
            .expect("parse")
            .resolve(Overrides::default())
            .expect("resolve");

        assert_eq!(settings.config.difficulty, Difficulty::Normal);
        assert_eq!(settings.config.skin, SnakeSkin::Emerald);
        assert_eq!(settings.frames, DEFAULT_FRAMES);
        assert_eq!(settings.player, DEFAULT_PLAYER);
    }

    #[test]
    fn rejects_unsupported_version() {
        let error = SessionFile::parse("version = 2").expect_err("version 2 is unknown");
        assert!(error.to_string().contains("unsupported session version"));
    }

    #[test]
    fn rejects_unknown_difficulty() {
        assert!(SessionFile::parse("version = 1\n[game]\ndifficulty = \"nightmare\"").is_err());
    }

    #[test]
    fn rejects_zero_frame_interval() {
        let overrides = Overrides {
            frame_ms: Some(0),
            ..Overrides::default()
        };
        assert!(SessionFile::parse("version = 1")
            .expect("parse")
            .resolve(overrides)
            .is_err());
    }
}
