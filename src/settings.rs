use std::path::Path;

use bgpaint_lib::{parse_ignore_selectors, AuditOptions, BgpaintError, Config};

/// Tracks which CLI flags were explicitly provided vs. defaulted.
#[derive(Debug, Default)]
pub struct AuditFlagSources {
    pub ignore_selectors: bool,
    pub include_hidden: bool,
    pub text_only: bool,
    pub fail_on_incomplete: bool,
}

impl AuditFlagSources {
    pub fn from_args(args: &[String]) -> Self {
        Self {
            ignore_selectors: flag_present(args, "--ignore-selectors"),
            include_hidden: flag_present(args, "--include-hidden"),
            text_only: flag_present(args, "--text-only"),
            fail_on_incomplete: flag_present(args, "--fail-on-incomplete"),
        }
    }
}

/// Checks if a flag was present in the command-line arguments.
pub fn flag_present(args: &[String], flag: &str) -> bool {
    args.iter()
        .any(|arg| arg == flag || arg.starts_with(&format!("{flag}=")))
}

/// Resolved settings after merging CLI args and config file.
#[derive(Debug, Clone)]
pub struct ResolvedAuditSettings {
    pub options: AuditOptions,
    pub fail_on_incomplete: bool,
}

/// Merge CLI arguments with config file, preferring CLI when flags are present.
pub fn resolve_audit_settings(
    cli_ignore_selectors: Option<&str>,
    cli_include_hidden: bool,
    cli_text_only: bool,
    cli_fail_on_incomplete: bool,
    config: &Config,
    flags: &AuditFlagSources,
) -> ResolvedAuditSettings {
    let mut options = config.audit_options();
    if flags.ignore_selectors {
        options.ignore_selectors = parse_ignore_selectors(cli_ignore_selectors);
    }
    if flags.include_hidden {
        options.skip_hidden = !cli_include_hidden;
    }
    if flags.text_only {
        options.text_only = cli_text_only;
    }

    ResolvedAuditSettings {
        options,
        fail_on_incomplete: if flags.fail_on_incomplete {
            cli_fail_on_incomplete
        } else {
            config.audit.fail_on_incomplete
        },
    }
}

/// Load config from a TOML file, central config, or return defaults.
/// Priority: explicit path > ~/.config/bgpaint/config.toml > defaults
pub fn load_config(path: Option<&Path>) -> Result<Config, BgpaintError> {
    let cfg = Config::load(path).map_err(|e| {
        let loc = path
            .map(|p| p.display().to_string())
            .or_else(|| Config::central_config_path().map(|p| p.display().to_string()))
            .unwrap_or_else(|| "defaults".to_string());
        BgpaintError::Config(format!("Failed to read config {}: {}", loc, e))
    })?;

    cfg.validate().map_err(|e| {
        let prefix = path
            .map(|p| format!("Invalid config ({}): {}", p.display(), e))
            .unwrap_or_else(|| format!("Invalid config: {}", e));
        BgpaintError::Config(prefix)
    })?;
    Ok(cfg)
}

/// Format effective audit settings as a single-line string.
pub fn format_effective_settings(
    settings: &ResolvedAuditSettings,
    config_source: Option<&Path>,
) -> String {
    let source = config_source
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    let selectors = if settings.options.ignore_selectors.is_empty() {
        "-".to_string()
    } else {
        settings.options.ignore_selectors.join(",")
    };
    format!(
        "Effective config [{source}]: skip_hidden={}, text_only={}, fail_on_incomplete={}, ignore_selectors={}",
        settings.options.skip_hidden,
        settings.options.text_only,
        settings.fail_on_incomplete,
        selectors
    )
}
