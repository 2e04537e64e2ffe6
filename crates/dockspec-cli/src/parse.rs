//! Value parsers for repeatable `render` flags.
//!
//! Each parser returns a `String` error so clap can report it against the
//! offending flag.

use dockspec_common::constants::{PROTOCOL_TCP, PROTOCOL_UDP};

/// A `--port` value: `CONTAINER[:HOST[:SERVICE]][/PROTO]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortSpec {
    /// Container port.
    pub container_port: u16,
    /// Host port, `0` when omitted.
    pub host_port: u16,
    /// Service port, `0` when omitted.
    pub service_port: u16,
    /// Protocol token.
    pub protocol: String,
}

/// A `--volume` value: `HOST:CONTAINER[:MODE]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeSpec {
    /// Path on the host.
    pub host_path: String,
    /// Path inside the container.
    pub container_path: String,
    /// Mode token; `None` falls back to the configured default.
    pub mode: Option<String>,
}

fn parse_port_number(raw: &str, what: &str) -> Result<u16, String> {
    raw.parse::<u16>()
        .map_err(|_| format!("invalid {what} port \"{raw}\": expected 0-65535"))
}

/// Parses a `--port` value.
///
/// # Errors
///
/// Returns a message if a port is not a number or the protocol is unknown.
pub fn port_spec(raw: &str) -> Result<PortSpec, String> {
    let (ports, protocol) = match raw.split_once('/') {
        Some((ports, proto)) => (ports, proto.to_ascii_lowercase()),
        None => (raw, PROTOCOL_TCP.to_string()),
    };
    if protocol != PROTOCOL_TCP && protocol != PROTOCOL_UDP {
        return Err(format!("unsupported protocol \"{protocol}\": expected tcp or udp"));
    }

    let mut parts = ports.split(':');
    let container_port = parse_port_number(parts.next().unwrap_or_default(), "container")?;
    let host_port = parts
        .next()
        .map_or(Ok(0), |p| parse_port_number(p, "host"))?;
    let service_port = parts
        .next()
        .map_or(Ok(0), |p| parse_port_number(p, "service"))?;
    if parts.next().is_some() {
        return Err(format!(
            "invalid port mapping \"{raw}\": expected CONTAINER[:HOST[:SERVICE]][/PROTO]"
        ));
    }

    Ok(PortSpec {
        container_port,
        host_port,
        service_port,
        protocol,
    })
}

/// Parses a `--volume` value.
///
/// # Errors
///
/// Returns a message if either path is missing or extra segments are given.
pub fn volume_spec(raw: &str) -> Result<VolumeSpec, String> {
    let parts: Vec<&str> = raw.split(':').collect();
    let (host_path, container_path, mode) = match parts.as_slice() {
        [host, container] => (*host, *container, None),
        [host, container, mode] if !mode.is_empty() => (*host, *container, Some(*mode)),
        _ => {
            return Err(format!(
                "invalid volume \"{raw}\": expected HOST:CONTAINER[:MODE]"
            ));
        }
    };
    if host_path.is_empty() || container_path.is_empty() {
        return Err(format!("invalid volume \"{raw}\": paths must not be empty"));
    }

    Ok(VolumeSpec {
        host_path: host_path.to_string(),
        container_path: container_path.to_string(),
        mode: mode.map(str::to_string),
    })
}

/// Parses a `--param` value of the form `KEY=VALUE`. The value may be empty
/// and may itself contain `=`.
///
/// # Errors
///
/// Returns a message if there is no `=` or the key is empty.
pub fn parameter(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("invalid parameter \"{raw}\": expected KEY=VALUE")),
    }
}
