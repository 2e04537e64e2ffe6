//! `dspec render`: Build a docker container definition from flags.

use std::path::PathBuf;

use clap::Args;
use dockspec_common::config::DockspecConfig;
use dockspec_sdk::container::Container;

use crate::parse::{PortSpec, VolumeSpec};

/// Arguments for the `render` subcommand.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Image reference to run.
    #[arg(long)]
    pub image: String,

    /// Network mode token (HOST, BRIDGE, NONE, ...). Defaults to the configured network.
    #[arg(long)]
    pub network: Option<String>,

    /// Expose a container port over TCP with a dynamic host port.
    #[arg(long = "tcp", value_name = "PORT")]
    pub tcp: Vec<u16>,

    /// Expose a container port over UDP with a dynamic host port.
    #[arg(long = "udp", value_name = "PORT")]
    pub udp: Vec<u16>,

    /// Fully specified mapping: CONTAINER[:HOST[:SERVICE]][/PROTO].
    #[arg(long = "port", value_name = "SPEC", value_parser = crate::parse::port_spec)]
    pub ports: Vec<PortSpec>,

    /// Host volume: HOST:CONTAINER[:MODE].
    #[arg(long = "volume", value_name = "SPEC", value_parser = crate::parse::volume_spec)]
    pub volumes: Vec<VolumeSpec>,

    /// Docker runtime parameter: KEY=VALUE. May repeat keys.
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = crate::parse::parameter)]
    pub params: Vec<(String, String)>,

    /// Run the container privileged.
    #[arg(long)]
    pub privileged: Option<bool>,

    /// Always pull the image before launching.
    #[arg(long)]
    pub force_pull: Option<bool>,

    /// Emit an empty volume list, removing existing volumes on update.
    #[arg(long)]
    pub clear_volumes: bool,

    /// Emit an empty port mapping list, removing existing mappings on update.
    #[arg(long)]
    pub clear_ports: bool,

    /// Emit an empty parameter list, removing existing parameters on update.
    #[arg(long)]
    pub clear_params: bool,

    /// Indent the JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Write output to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Builds the container definition described by `args`.
///
/// Command-line values take precedence over `config`. Clear flags are
/// applied before any entries are appended.
#[must_use]
pub fn build(args: &RenderArgs, config: &DockspecConfig) -> Container {
    let mut container = Container::new_docker();

    if args.clear_volumes {
        let _ = container.clear_volumes();
    }
    for volume in &args.volumes {
        let mode = volume
            .mode
            .as_deref()
            .unwrap_or(&config.default_volume_mode);
        let _ = container.add_volume(&volume.host_path, &volume.container_path, mode);
    }

    let docker = container.docker_mut();
    let network = args.network.as_deref().unwrap_or(&config.default_network);
    let _ = docker.set_image(&args.image).set_network(network);

    if let Some(force_pull) = args.force_pull.or(config.force_pull_image) {
        let _ = docker.set_force_pull_image(force_pull);
    }
    if let Some(privileged) = args.privileged.or(config.privileged) {
        let _ = docker.set_privileged(privileged);
    }

    if args.clear_ports {
        let _ = docker.clear_port_mappings();
    }
    let _ = docker.expose_tcp_ports(&args.tcp).expose_udp_ports(&args.udp);
    for port in &args.ports {
        let _ = docker.expose_port(
            port.container_port,
            port.host_port,
            port.service_port,
            port.protocol.as_str(),
        );
    }

    if args.clear_params {
        let _ = docker.clear_parameters();
    }
    for (key, value) in &args.params {
        let _ = docker.add_parameter(key, value);
    }

    container
}

/// Executes the `render` command.
///
/// # Errors
///
/// Returns an error if encoding or writing the output fails.
pub fn execute(args: &RenderArgs, config: &DockspecConfig) -> anyhow::Result<()> {
    tracing::info!(image = %args.image, "rendering container definition");

    let container = build(args, config);
    let json = if args.pretty {
        container.to_json_pretty()?
    } else {
        container.to_json()?
    };

    crate::output::emit(&json, args.output.as_deref())?;
    Ok(())
}
