use std::path::PathBuf;

use aoc_config::{ConfigOverrides, PlotConfig};
use figment::Jail;
use pretty_assertions::assert_eq;

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_file("aocplot.toml", "[output]\ndir = \"from-toml\"\n")?;
        jail.set_env("AOCPLOT_OUTPUT__DIR", "from-env");

        let config = PlotConfig::load().expect("config loads");
        assert_eq!(config.output.dir, PathBuf::from("from-env"));
        Ok(())
    });
}

#[test]
fn cli_overrides_beat_env() {
    Jail::expect_with(|jail| {
        jail.set_env("AOCPLOT_INPUT__PATH", "env.json");

        let config = PlotConfig::load()
            .expect("config loads")
            .with_overrides(ConfigOverrides {
                input: Some(PathBuf::from("cli.json")),
                ..Default::default()
            })
            .expect("valid overrides");
        assert_eq!(config.input.path, PathBuf::from("cli.json"));
        Ok(())
    });
}

#[test]
fn unrelated_env_vars_are_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("AOCPLOT_LOG", "debug");

        let config = PlotConfig::load().expect("config loads");
        assert_eq!(config, PlotConfig::default());
        Ok(())
    });
}
