//! `liquid-types.toml` and its merge with command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::generate::GenerateArgs;

/// Looked up in the working directory when `--config` is not given.
pub const CONFIG_FILENAME: &str = "liquid-types.toml";
pub const DEFAULT_INPUT: &str = "docs/objects.json";
pub const DEFAULT_OUTPUT: &str = "dist/shopify-liquid-types.ts";

/// Contents of the configuration file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    /// Default for `--template-contexts` / `--no-template-contexts`.
    pub template_contexts: Option<bool>,
    pub formatter: FormatterConfig,
}

/// `[formatter]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatterConfig {
    pub enabled: Option<bool>,
    /// Program and arguments, e.g. `["prettier", "--parser", "typescript"]`.
    pub command: Option<Vec<String>>,
}

impl ConfigFile {
    /// Load `explicit` if given, else `liquid-types.toml` in `cwd` if present.
    /// Relative paths in the file are taken relative to the file itself.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<Self, String> {
        let path = match explicit {
            Some(path) => cwd.join(path),
            None => {
                let path = cwd.join(CONFIG_FILENAME);
                if !path.exists() {
                    debug!("No {CONFIG_FILENAME} in {}, using defaults", cwd.display());
                    return Ok(Self::default());
                }
                path
            }
        };

        let contents = fs::read_to_string(&path)
            .map_err(|err| format!("Failed to read config {}: {err}", path.display()))?;
        let mut config: Self = toml::from_str(&contents)
            .map_err(|err| format!("Failed to parse config {}: {err}", path.display()))?;
        debug!(path = %path.display(), "Loaded config");

        let base = path.parent().unwrap_or(cwd);
        config.input = config.input.map(|input| base.join(input));
        config.output = config.output.map(|output| base.join(output));
        Ok(config)
    }
}

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub template_contexts: bool,
    /// `None` leaves the text unformatted.
    pub formatter: Option<Vec<String>>,
}

impl Settings {
    /// Flags win over the file, the file wins over built-in defaults.
    pub fn resolve(config: ConfigFile, args: &GenerateArgs, cwd: &Path) -> Self {
        let input = args
            .input
            .as_ref()
            .map(|input| cwd.join(input))
            .or(config.input)
            .unwrap_or_else(|| cwd.join(DEFAULT_INPUT));
        let output = args
            .output
            .as_ref()
            .map(|output| cwd.join(output))
            .or(config.output)
            .unwrap_or_else(|| cwd.join(DEFAULT_OUTPUT));

        let formatter = if args.no_format {
            None
        } else if let Some(command) = &args.formatter {
            Some(command.split_whitespace().map(str::to_string).collect())
        } else if config.formatter.enabled == Some(false) {
            None
        } else {
            Some(config.formatter.command.unwrap_or_else(|| {
                liquid_types_core::DEFAULT_FORMATTER
                    .iter()
                    .map(|&arg| arg.to_owned())
                    .collect()
            }))
        };

        let template_contexts = if args.no_template_contexts {
            false
        } else if args.template_contexts {
            true
        } else {
            config.template_contexts.unwrap_or(false)
        };

        Self {
            input,
            output,
            template_contexts,
            formatter,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn prettier() -> Option<Vec<String>> {
        Some(vec!["prettier".into(), "--parser".into(), "typescript".into()])
    }

    #[test]
    fn defaults_without_config_file() {
        let dir = TempDir::new().unwrap();
        let config = ConfigFile::load(None, dir.path()).unwrap();
        assert_eq!(config, ConfigFile::default());

        let settings = Settings::resolve(config, &GenerateArgs::default(), dir.path());
        assert_eq!(settings.input, dir.path().join("docs/objects.json"));
        assert_eq!(settings.output, dir.path().join("dist/shopify-liquid-types.ts"));
        assert!(!settings.template_contexts);
        assert_eq!(settings.formatter, prettier());
    }

    #[test]
    fn reads_config_in_working_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"
input = "vendor/objects.json"
output = "types/liquid.ts"
template_contexts = true

[formatter]
command = ["dprint", "fmt", "--stdin", "file.ts"]
"#,
        )
        .unwrap();

        let config = ConfigFile::load(None, dir.path()).unwrap();
        let settings = Settings::resolve(config, &GenerateArgs::default(), dir.path());
        assert_eq!(settings.input, dir.path().join("vendor/objects.json"));
        assert_eq!(settings.output, dir.path().join("types/liquid.ts"));
        assert!(settings.template_contexts);
        assert_eq!(
            settings.formatter,
            Some(vec!["dprint".into(), "fmt".into(), "--stdin".into(), "file.ts".into()])
        );
    }

    #[test]
    fn explicit_config_paths_are_relative_to_the_file() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("conf")).unwrap();
        fs::write(dir.path().join("conf/types.toml"), "input = \"objects.json\"\n").unwrap();

        let config = ConfigFile::load(Some(Path::new("conf/types.toml")), dir.path()).unwrap();
        assert_eq!(config.input, Some(dir.path().join("conf/objects.json")));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = ConfigFile::load(Some(Path::new("nope.toml")), dir.path()).unwrap_err();
        assert!(err.contains("Failed to read config"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "inptu = \"x.json\"\n").unwrap();
        let err = ConfigFile::load(None, dir.path()).unwrap_err();
        assert!(err.contains("Failed to parse config"));
    }

    #[test]
    fn flags_override_config() {
        let dir = TempDir::new().unwrap();
        let config = ConfigFile {
            input: Some(dir.path().join("a.json")),
            output: Some(dir.path().join("a.ts")),
            template_contexts: Some(false),
            formatter: FormatterConfig {
                enabled: Some(true),
                command: Some(vec!["dprint".into()]),
            },
        };
        let args = GenerateArgs {
            input: Some(PathBuf::from("b.json")),
            output: Some(PathBuf::from("b.ts")),
            template_contexts: true,
            formatter: Some("prettier --parser typescript".into()),
            ..GenerateArgs::default()
        };
        let settings = Settings::resolve(config, &args, dir.path());
        assert_eq!(settings.input, dir.path().join("b.json"));
        assert_eq!(settings.output, dir.path().join("b.ts"));
        assert!(settings.template_contexts);
        assert_eq!(settings.formatter, prettier());
    }

    #[test]
    fn template_contexts_can_be_turned_off_from_the_command_line() {
        let dir = TempDir::new().unwrap();
        let config = || ConfigFile {
            template_contexts: Some(true),
            ..ConfigFile::default()
        };

        let settings = Settings::resolve(config(), &GenerateArgs::default(), dir.path());
        assert!(settings.template_contexts);

        let args = GenerateArgs {
            no_template_contexts: true,
            ..GenerateArgs::default()
        };
        let settings = Settings::resolve(config(), &args, dir.path());
        assert!(!settings.template_contexts);
    }

    #[test]
    fn formatting_can_be_disabled() {
        let dir = TempDir::new().unwrap();
        let config = ConfigFile {
            formatter: FormatterConfig {
                enabled: Some(false),
                command: None,
            },
            ..ConfigFile::default()
        };
        let settings = Settings::resolve(config, &GenerateArgs::default(), dir.path());
        assert_eq!(settings.formatter, None);

        let args = GenerateArgs {
            no_format: true,
            ..GenerateArgs::default()
        };
        let settings = Settings::resolve(ConfigFile::default(), &args, dir.path());
        assert_eq!(settings.formatter, None);
    }
}
