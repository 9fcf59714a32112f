use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rolodex", version)]
#[command(about = "Menu-driven contact book", long_about = None)]
pub struct Cli {
    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// Count days to the next birthday by calendar date instead of by day of month
    #[arg(long)]
    pub calendar_birthdays: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::parse_from(["rolodex", "-v", "--calendar-birthdays", "--config", "c.json"]);
        assert!(cli.verbose);
        assert!(cli.calendar_birthdays);
        assert_eq!(cli.config, Some(PathBuf::from("c.json")));
    }
}
