use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "staffing-console",
    version,
    about = "Admin console for workers, clients and job assignments"
)]
pub struct Cli {
    /// Database URL, overrides DATABASE_URL
    #[arg(long, global = true, value_name = "URL")]
    pub database_url: Option<String>,

    /// Bind address, overrides HOST
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Listening port, overrides PORT
    #[arg(short, long, global = true)]
    pub port: Option<u16>,

    #[command(subcommand)]
    pub command: Option<Cmds>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Cmds {
    /// Start the HTTP server (default)
    Serve,
    /// Create the database tables and exit
    InitDb,
}

impl Cli {
    pub fn command(&self) -> &Cmds {
        self.command.as_ref().unwrap_or(&Cmds::Serve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::parse_from(["staffing-console"]);
        assert_eq!(cli.command(), &Cmds::Serve);
    }

    #[test]
    fn parses_init_db_with_global_flags() {
        let cli = Cli::parse_from(["staffing-console", "init-db", "--database-url", "sqlite://x.db"]);
        assert_eq!(cli.command(), &Cmds::InitDb);
        assert_eq!(cli.database_url.as_deref(), Some("sqlite://x.db"));
    }
}
