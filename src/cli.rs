use crate::app;
use crate::config::{OrreryConfig, SettingsError};
use bevy::window::WindowResolution;
use caption::{CaptionSource, HttpCaption, StaticCaption};
use clap::ArgAction;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

#[derive(clap::Parser)]
#[clap(version, about = "Animated solar system backdrop")]
pub(crate) struct Cli {
    #[clap(subcommand)]
    command: CliCommand,
}

impl Cli {
    pub(crate) fn run(self) -> Result<(), SettingsError> {
        self.command.run()
    }
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Print the effective settings as YAML
    DumpSettings {
        #[clap(short, long, env = "ORRERY_SETTINGS")]
        settings: Option<PathBuf>,
    },
    /// Open the scene in a window
    Run {
        #[clap(short, long)]
        resolution: Option<Resolution>,
        #[clap(long, action = ArgAction::SetTrue)]
        inspector: bool,
        #[clap(long, action = ArgAction::SetTrue)]
        fps: bool,
        /// Seed for star, planet and asteroid placement; random when omitted
        #[clap(long)]
        seed: Option<u64>,
        #[clap(short, long, env = "ORRERY_SETTINGS")]
        settings: Option<PathBuf>,
        /// Show this text instead of fetching the caption
        #[clap(long, conflicts_with = "caption_url")]
        caption: Option<String>,
        #[clap(long, env = "ORRERY_CAPTION_URL", default_value = caption::DEFAULT_URL)]
        caption_url: String,
    },
}

#[derive(Debug, Copy, Clone, PartialEq)]
struct Resolution {
    width: f32,
    height: f32,
}

impl FromStr for Resolution {
    type Err = ResolutionInvalidFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s.split_once('x').ok_or(ResolutionInvalidFormat)?;
        let width = w.parse::<f32>().map_err(|_| ResolutionInvalidFormat)?;
        let height = h.parse::<f32>().map_err(|_| ResolutionInvalidFormat)?;
        Ok(Self { width, height })
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Invalid format for resolution; expected <width>x<height>")]
struct ResolutionInvalidFormat;

fn load_config(path: Option<PathBuf>) -> Result<OrreryConfig, SettingsError> {
    path.map(OrreryConfig::from_path)
        .transpose()
        .map(Option::unwrap_or_default)
}

impl CliCommand {
    fn run(self) -> Result<(), SettingsError> {
        match self {
            Self::DumpSettings { settings } => {
                print!("{}", load_config(settings)?.to_yaml()?);
            }
            Self::Run {
                resolution,
                inspector,
                fps,
                seed,
                settings,
                caption,
                caption_url,
            } => {
                let caption: Arc<dyn CaptionSource> = match caption {
                    Some(text) => Arc::new(StaticCaption(text)),
                    None => Arc::new(HttpCaption::new(caption_url)),
                };
                app::get_app(app::AppSettings {
                    resolution: resolution
                        .map(|r| WindowResolution::new(r.width, r.height))
                        .unwrap_or_default(),
                    with_inspector: inspector,
                    with_fps: fps,
                    seed,
                    config: load_config(settings)?,
                    caption,
                })
                .run();
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn resolution_parses() {
        assert_eq!(
            "1920x1080".parse::<Resolution>().unwrap(),
            Resolution {
                width: 1920.0,
                height: 1080.0
            }
        );
        assert!("1920".parse::<Resolution>().is_err());
        assert!("axb".parse::<Resolution>().is_err());
    }

    #[test]
    fn caption_and_url_conflict() {
        let result = Cli::try_parse_from([
            "bevy-orrery",
            "run",
            "--caption",
            "hi",
            "--caption-url",
            "http://example.com",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn run_defaults() {
        let cli = Cli::try_parse_from(["bevy-orrery", "run", "--seed", "7"]).unwrap();
        let CliCommand::Run {
            seed,
            inspector,
            caption_url,
            ..
        } = cli.command
        else {
            panic!("expected run");
        };
        assert_eq!(seed, Some(7));
        assert!(!inspector);
        assert_eq!(caption_url, caption::DEFAULT_URL);
    }
}
