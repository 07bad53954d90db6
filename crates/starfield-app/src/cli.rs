use std::path::PathBuf;

use clap::Parser;

use starfield_config::{ProjectionMode, StarfieldConfig};

/// Starfield: fly through an endless field of stars.
#[derive(Parser, Debug)]
#[command(name = "starfield", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error) or a full
    /// tracing filter directive.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Seed for star placement and colors.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of stars.
    #[arg(long)]
    pub stars: Option<u32>,

    /// Where the perspective divide happens (cpu or gpu).
    #[arg(long)]
    pub projection: Option<ProjectionMode>,

    /// Run this many frames without a window and exit.
    #[arg(long, value_name = "FRAMES")]
    pub headless: Option<u64>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

impl Args {
    /// Apply command-line overrides on top of a loaded config.
    pub fn apply_overrides(&self, config: &mut StarfieldConfig) {
        if let Some(seed) = self.seed {
            config.field.seed = Some(seed);
        }
        if let Some(stars) = self.stars {
            config.field.star_count = stars;
        }
        if let Some(projection) = self.projection {
            config.camera.projection = projection;
        }
    }

    /// Filter directive for a `--log-level` value. Bare level names are
    /// scoped to this program's crates.
    pub fn log_directive(&self) -> Option<String> {
        self.log_level.as_deref().map(|level| {
            match level.to_ascii_lowercase().as_str() {
                l @ ("trace" | "debug" | "info" | "warn" | "error") => format!("starfield={l}"),
                _ => level.to_string(),
            }
        })
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "starfield",
            "--config",
            "/tmp/s.toml",
            "--seed",
            "7",
            "--stars",
            "100",
            "--projection",
            "cpu",
            "--headless",
            "60",
            "--print-config",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/s.toml")));
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.stars, Some(100));
        assert_eq!(args.projection, Some(ProjectionMode::Cpu));
        assert_eq!(args.headless, Some(60));
        assert!(args.print_config);
    }

    #[test]
    fn rejects_unknown_projection() {
        assert!(Args::try_parse_from(["starfield", "--projection", "gl"]).is_err());
    }

    #[test]
    fn overrides_replace_config_values() {
        let args = Args::try_parse_from(["starfield", "--seed", "3", "--stars", "10", "--projection", "cpu"]).unwrap();
        let mut config = StarfieldConfig::default();
        args.apply_overrides(&mut config);
        assert_eq!(config.field.seed, Some(3));
        assert_eq!(config.field.star_count, 10);
        assert_eq!(config.camera.projection, ProjectionMode::Cpu);
    }

    #[test]
    fn no_overrides_keep_config() {
        let args = Args::try_parse_from(["starfield"]).unwrap();
        let mut config = StarfieldConfig::default();
        args.apply_overrides(&mut config);
        assert_eq!(config.field.seed, None);
        assert_eq!(config.field.star_count, 500);
    }

    #[test]
    fn log_directive_scopes_bare_levels() {
        let args = Args::try_parse_from(["starfield", "--log-level", "DEBUG"]).unwrap();
        assert_eq!(args.log_directive().as_deref(), Some("starfield=debug"));

        let args = Args::try_parse_from(["starfield", "--log-level", "wgpu_core=warn"]).unwrap();
        assert_eq!(args.log_directive().as_deref(), Some("wgpu_core=warn"));
    }
}
