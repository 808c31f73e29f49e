use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::OutputFormat;

/// Find the crates that pull duplicate dependency versions into a Cargo.lock
#[derive(Parser, Debug)]
#[command(name = "checkdeps")]
#[command(version)]
#[command(
    about = "Find the crates that pull duplicate dependency versions into a Cargo.lock",
    long_about = None
)]
pub struct Args {
    /// Path to the Cargo.lock file to analyse
    #[arg(value_name = "LOCKFILE")]
    pub lockfile: PathBuf,

    /// Remove packages that do not depend transitively on a crate locked at
    /// more than one version
    #[arg(long)]
    pub trim: bool,

    /// Render the graph in Graphviz dot format (same as --format dot)
    #[arg(long, conflicts_with = "format")]
    pub dot: bool,

    /// Output format: report, dot or json [default: report]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// URL prefix for links to crates in this workspace,
    /// e.g. https://github.com/<org>/<repo>/blob/master/
    #[arg(long, value_name = "URL")]
    pub baseurl: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to a config file (defaults to checkdeps.config.yml next to the lockfile)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Exit with code 1 when any crate is locked at more than one version
    #[arg(long)]
    pub check: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Format selected on the command line, if any.
    pub fn requested_format(&self) -> Option<OutputFormat> {
        if self.dot {
            Some(OutputFormat::Dot)
        } else {
            self.format
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("checkdeps").chain(args.iter().copied()))
    }

    #[test]
    fn test_parse_minimal() {
        let args = parse(&["Cargo.lock"]).unwrap();
        assert_eq!(args.lockfile, PathBuf::from("Cargo.lock"));
        assert!(!args.trim);
        assert!(!args.check);
        assert!(args.requested_format().is_none());
        assert!(args.baseurl.is_none());
    }

    #[test]
    fn test_parse_all_flags() {
        let args = parse(&[
            "--trim",
            "-f",
            "json",
            "--baseurl",
            "https://example.com/ws/",
            "-o",
            "out.json",
            "-c",
            "custom.yml",
            "--check",
            "ws/Cargo.lock",
        ])
        .unwrap();
        assert!(args.trim);
        assert!(args.check);
        assert_eq!(args.requested_format(), Some(OutputFormat::Json));
        assert_eq!(args.baseurl.as_deref(), Some("https://example.com/ws/"));
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
        assert_eq!(args.config, Some(PathBuf::from("custom.yml")));
        assert_eq!(args.lockfile, PathBuf::from("ws/Cargo.lock"));
    }

    #[test]
    fn test_dot_flag_selects_dot() {
        let args = parse(&["--dot", "Cargo.lock"]).unwrap();
        assert_eq!(args.requested_format(), Some(OutputFormat::Dot));
    }

    #[test]
    fn test_dot_conflicts_with_format() {
        assert!(parse(&["--dot", "--format", "json", "Cargo.lock"]).is_err());
    }

    #[test]
    fn test_lockfile_is_required() {
        assert!(parse(&["--trim"]).is_err());
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        let err = parse(&["-f", "svg", "Cargo.lock"]).unwrap_err();
        assert!(err.to_string().contains("Invalid format: svg"));
    }
}
