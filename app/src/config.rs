//! Handles the configuration files for surface racer.

use simulation::{FlightParams, NpcParams};
use track::TrackShape;
use utils::loader;

use anyhow::anyhow;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use figment::{
    providers::{Format, Yaml},
    Figment,
};

/// Returns the directory of the user config:
///
/// Linux: /home/Alice/.config/surface-racer
/// Windows: C:\Users\Alice\AppData\Roaming\simaflux\surface-racer\config
/// Mac: /Users/Alice/Library/Application Support/com.simaflux.surface-racer
pub fn get_config_dir() -> anyhow::Result<std::path::PathBuf> {
    ProjectDirs::from("com", "simaflux", "surface-racer")
        .map(|dir| dir.config_dir().to_path_buf())
        .ok_or_else(|| {
            anyhow!("no valid home directory found using the projectdirs crate, can't use config dir")
        })
}

/// Configuration of the game loop.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GameConfig {
    /// Ticks simulated per second.
    pub tick_rate: u32,
    /// Stop after this many ticks. Runs until the input quits if not set.
    pub max_ticks: Option<u64>,
    /// Sleep between ticks to hold the tick rate. Without pacing ticks run back to back.
    pub paced: bool,
    /// Input script to replay, relative to the res directory. Without a script no input is given.
    pub input_script: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60,
            max_ticks: None,
            paced: true,
            input_script: Some("scripts/demo.yml".to_string()),
        }
    }
}

/// Configuration of surface racer.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    /// The track to generate.
    pub track: TrackShape,
    pub flight: FlightParams,
    pub npc: NpcParams,
    pub game: GameConfig,
}

/// Layers the base config, the user config and in debug builds a local `config.yml`, later files
/// overriding earlier ones. Missing files are skipped.
fn config_figment() -> Figment {
    let figment = Figment::from(Yaml::file(loader::res_path("config/base_config.yml")));
    let figment = match get_config_dir() {
        Ok(mut user_conf) => {
            user_conf.push("config.yml");
            figment.merge(Yaml::file(user_conf))
        }
        Err(e) => {
            log::warn!("skipping user config: {e}");
            figment
        }
    };
    #[cfg(debug_assertions)]
    let figment = figment.merge(Yaml::file("config.yml"));
    figment
}

/// Loads the configuration for surface racer
pub fn load_config() -> anyhow::Result<Config> {
    let config: Config = config_figment().extract()?;
    log::info!(
        "loaded config: {} track, {} npcs, {} ticks/s",
        config.track.name(),
        config.npc.count,
        config.game.tick_rate
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::*;
    use std::io::prelude::*;
    use track::{FigureEight, HeightProfile};

    #[test]
    fn base_config_matches_defaults() {
        let config: Config = Figment::from(Yaml::file("../res/config/base_config.yml"))
            .extract()
            .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let figment = Figment::new().merge(Yaml::string(
            "
track:
  kind: figure_eight
  loop_radius: 300
  height_profile: double_sine
npc:
  count: 5
game:
  max_ticks: 600
",
        ));
        let config: Config = figment.extract().unwrap();

        let TrackShape::FigureEight(fig) = config.track else {
            panic!("expected a figure eight, got {:?}", config.track);
        };
        assert_eq!(
            fig,
            FigureEight {
                loop_radius: 300.0,
                height_profile: HeightProfile::DoubleSine,
                ..FigureEight::default()
            }
        );
        assert_eq!(config.npc.count, 5);
        assert_eq!(config.npc.speed, NpcParams::default().speed);
        assert_eq!(config.game.max_ticks, Some(600));
        assert_eq!(config.game.tick_rate, 60);
        assert_eq!(config.flight, FlightParams::default());
    }

    #[test]
    fn empty_figment_is_runnable() {
        let config: Config = Figment::new().extract().unwrap();
        assert_eq!(config, Config::default());
    }

    // Run with cargo test write_baseconfig -- --ignored --nocapture in this crate
    #[test]
    #[ignore]
    fn write_baseconfig() {
        let baseconfig = Config::default();
        let baseconfigyaml = serde_yaml::to_string(&baseconfig).unwrap();
        println!("{}", baseconfigyaml);

        let mut file = File::create("../res/config/base_config.yml").unwrap();
        file.write_all(baseconfigyaml.as_bytes()).unwrap();
    }
}
