//! CLI command definitions and dispatch.

pub mod port_index;
pub mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dockspec_common::config::DockspecConfig;

/// dockspec: build docker container definitions for an orchestrator.
#[derive(Parser, Debug)]
#[command(name = dockspec_common::constants::BIN_NAME, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Path to a JSON configuration file.
    #[arg(long, global = true, env = dockspec_common::constants::CONFIG_ENV_VAR)]
    pub config: Option<PathBuf>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a docker container definition and print it as JSON.
    Render(render::RenderArgs),
    /// Print the service port index of a container port in a definition file.
    PortIndex(port_index::PortIndexArgs),
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the command fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let config = match cli.config {
        Some(ref path) => DockspecConfig::load(path)?,
        None => DockspecConfig::default(),
    };

    match cli.command {
        Command::Render(args) => render::execute(&args, &config),
        Command::PortIndex(args) => port_index::execute(&args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn binary_name_comes_from_constants() {
        use clap::CommandFactory;
        assert_eq!(
            Cli::command().get_name(),
            dockspec_common::constants::BIN_NAME
        );
    }

    #[test]
    fn render_flags_accumulate() {
        let cli = Cli::try_parse_from([
            "dspec", "render", "--image", "nginx", "--tcp", "80", "--tcp", "443", "--udp", "53",
        ])
        .unwrap();
        match cli.command {
            Command::Render(args) => {
                assert_eq!(args.image, "nginx");
                assert_eq!(args.tcp, vec![80, 443]);
                assert_eq!(args.udp, vec![53]);
            }
            Command::PortIndex(_) => panic!("expected render"),
        }
    }

    #[test]
    fn port_index_takes_file_and_port() {
        let cli = Cli::try_parse_from(["dspec", "port-index", "app.json", "443"]).unwrap();
        match cli.command {
            Command::PortIndex(args) => {
                assert_eq!(args.file, PathBuf::from("app.json"));
                assert_eq!(args.port, 443);
            }
            Command::Render(_) => panic!("expected port-index"),
        }
    }
}
