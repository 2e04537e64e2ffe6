//! `dspec port-index`: Look up the service port index of a container port.

use std::path::PathBuf;

use clap::Args;
use dockspec_common::error::DockspecError;
use dockspec_sdk::container::Container;

/// Arguments for the `port-index` subcommand.
#[derive(Args, Debug)]
pub struct PortIndexArgs {
    /// Path to a container definition in JSON.
    pub file: PathBuf,

    /// Container port to look up.
    pub port: u16,
}

/// Returns the zero-based index of `port` in the definition's port mappings.
///
/// # Errors
///
/// Returns an error if the definition has no docker section, no port
/// mappings, or does not map `port`.
pub fn lookup(container: &Container, port: u16) -> anyhow::Result<usize> {
    let Some(docker) = container.docker.as_ref() else {
        anyhow::bail!("container definition has no docker section");
    };
    Ok(docker.service_port_index(port)?)
}

/// Reads the definition file named in `args` and looks up its port.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded, or the lookup fails.
pub fn resolve(args: &PortIndexArgs) -> anyhow::Result<usize> {
    tracing::info!(path = %args.file.display(), port = args.port, "looking up service port index");

    let content = std::fs::read_to_string(&args.file).map_err(|e| DockspecError::Io {
        path: args.file.clone(),
        source: e,
    })?;
    let container = Container::from_json(&content)?;
    lookup(&container, args.port)
}

/// Executes the `port-index` command.
///
/// # Errors
///
/// Returns an error if the lookup fails or the index cannot be printed.
pub fn execute(args: &PortIndexArgs) -> anyhow::Result<()> {
    let index = resolve(args)?;
    crate::output::emit(&index.to_string(), None)?;
    Ok(())
}
