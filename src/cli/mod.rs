//! CLI module for the SmartChef relay

pub mod serve;

use clap::{Parser, Subcommand};

/// SmartChef relay - recipe, diet plan and dish image generation
#[derive(Parser)]
#[command(name = "smartchef-relay")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP relay (default)
    Serve(serve::ServeArgs),
}

impl Default for Command {
    fn default() -> Self {
        Self::Serve(serve::ServeArgs::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_with_port_override() {
        let cli = Cli::try_parse_from(["smartchef-relay", "serve", "--port", "4000"]).unwrap();
        match cli.command {
            Some(Command::Serve(args)) => assert_eq!(args.port, Some(4000)),
            None => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["smartchef-relay"]).unwrap();
        assert!(cli.command.is_none());
        assert!(matches!(Command::default(), Command::Serve(_)));
    }
}
