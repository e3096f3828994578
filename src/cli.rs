use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bgpaint")]
#[command(
    version,
    about = "Background Paint Checker - Flag elements whose background makes contrast math unreliable",
    long_about = "Background Paint Checker (bgpaint)\n\nModes:\n- audit: walk a captured DOM snapshot and report every element whose contrast must be treated as indeterminate (image/gradient backgrounds, graphical elements).\n- classify: classify a single background-image value, optionally for a given tag.\n\nUse --help on any subcommand for details."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Optional config file (TOML) to set audit defaults; CLI flags override config"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Audit a DOM snapshot for backgrounds that defeat contrast computation
    Audit {
        #[arg(long, help = "DOM snapshot file (.json, .yaml or .yml)")]
        input: PathBuf,

        #[arg(
            long,
            help = "CSS selectors to skip (comma-separated; supports #id, .class, tag)"
        )]
        ignore_selectors: Option<String>,

        #[arg(long, help = "Also check nodes hidden via display/visibility/opacity")]
        include_hidden: bool,

        #[arg(long, help = "Only check nodes that carry text")]
        text_only: bool,

        #[arg(long, help = "Exit with status 1 when any finding is reported")]
        fail_on_incomplete: bool,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,

        #[arg(long, short, help = "Output file path (stdout if omitted)")]
        output: Option<PathBuf>,
    },

    /// Classify a single background-image value
    Classify {
        #[arg(
            long,
            allow_hyphen_values = true,
            help = "Resolved background-image value (e.g. 'url(a.png)', 'none, linear-gradient(red, blue)')"
        )]
        value: String,

        #[arg(long, default_value = "div", help = "Tag name of the element")]
        tag: String,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,

        #[arg(long, short, help = "Output file path (stdout if omitted)")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Pretty,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands, OutputFormat};
    use clap::Parser;

    #[test]
    fn audit_command_uses_defaults() {
        let cli = Cli::parse_from(["bgpaint", "audit", "--input", "page.json"]);

        assert!(!cli.verbose);
        assert!(cli.config.is_none());

        match cli.command {
            Commands::Audit {
                input,
                ignore_selectors,
                include_hidden,
                text_only,
                fail_on_incomplete,
                format,
                output,
            } => {
                assert_eq!(input, std::path::PathBuf::from("page.json"));
                assert!(ignore_selectors.is_none());
                assert!(!include_hidden);
                assert!(!text_only);
                assert!(!fail_on_incomplete);
                assert!(matches!(format, OutputFormat::Json));
                assert!(output.is_none());
            }
            _ => panic!("expected audit command"),
        }
    }

    #[test]
    fn audit_command_respects_overrides() {
        let cli = Cli::parse_from([
            "bgpaint",
            "audit",
            "--input",
            "page.yaml",
            "--ignore-selectors",
            ".ads,#hero",
            "--include-hidden",
            "--text-only",
            "--fail-on-incomplete",
            "--format",
            "pretty",
            "--output",
            "report.json",
            "--config",
            "bgpaint.toml",
        ]);

        assert_eq!(
            cli.config.as_deref(),
            Some(std::path::Path::new("bgpaint.toml"))
        );
        match cli.command {
            Commands::Audit {
                ignore_selectors,
                include_hidden,
                text_only,
                fail_on_incomplete,
                format,
                output,
                ..
            } => {
                assert_eq!(ignore_selectors.as_deref(), Some(".ads,#hero"));
                assert!(include_hidden);
                assert!(text_only);
                assert!(fail_on_incomplete);
                assert!(matches!(format, OutputFormat::Pretty));
                assert_eq!(output.as_deref(), Some(std::path::Path::new("report.json")));
            }
            _ => panic!("expected audit command with overrides"),
        }
    }

    #[test]
    fn classify_command_sets_verbose_and_accepts_vendor_values() {
        let cli = Cli::parse_from([
            "bgpaint",
            "--verbose",
            "classify",
            "--value",
            "-webkit-linear-gradient(red, blue)",
        ]);

        assert!(cli.verbose);
        match cli.command {
            Commands::Classify { value, tag, .. } => {
                assert_eq!(value, "-webkit-linear-gradient(red, blue)");
                assert_eq!(tag, "div");
            }
            _ => panic!("expected classify command"),
        }
    }
}
