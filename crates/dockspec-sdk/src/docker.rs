//! Docker image definition nested inside a container.
//!
//! List fields are tri-state: `None` is omitted from the JSON body and
//! leaves the orchestrator's current value untouched, `Some(vec![])` clears
//! it, and a populated vector replaces it.

use dockspec_common::constants::{DYNAMIC_HOST_PORT, PROTOCOL_TCP, PROTOCOL_UDP};
use dockspec_common::error::{DockspecError, Result};
use serde::{Deserialize, Serialize};

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_zero(port: &u16) -> bool {
    *port == 0
}

/// Mapping between a container port and the host/service ports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortMapping {
    /// Port exposed inside the container.
    #[serde(skip_serializing_if = "is_zero")]
    pub container_port: u16,
    /// Port bound on the host; `0` lets the orchestrator assign one.
    pub host_port: u16,
    /// Service port allocated by the orchestrator; `0` when unassigned.
    #[serde(skip_serializing_if = "is_zero")]
    pub service_port: u16,
    /// Transport protocol, `tcp` or `udp`.
    pub protocol: String,
}

impl PortMapping {
    /// Creates a fully specified port mapping.
    #[must_use]
    pub fn new(
        container_port: u16,
        host_port: u16,
        service_port: u16,
        protocol: impl Into<String>,
    ) -> Self {
        Self {
            container_port,
            host_port,
            service_port,
            protocol: protocol.into(),
        }
    }
}

/// A single argument passed to the docker runtime when creating the container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameter {
    /// Option name, e.g. `label` or `env`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub key: String,
    /// Option value.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,
}

impl Parameter {
    /// Creates a parameter from a key and value.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Docker section of a container definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Docker {
    /// Whether the image is pulled before every launch; `None` keeps the platform default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_pull_image: Option<bool>,
    /// Image reference to run.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub image: String,
    /// Network mode token, see the `NETWORK_*` constants.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub network: String,
    /// Extra docker runtime parameters, in order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,
    /// Exposed ports, in order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_mappings: Option<Vec<PortMapping>>,
    /// Whether the container runs privileged; `None` keeps the platform default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privileged: Option<bool>,
}

impl Docker {
    /// Creates an empty docker definition with every field unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the image should always be pulled before starting an instance.
    pub const fn set_force_pull_image(&mut self, force_pull: bool) -> &mut Self {
        self.force_pull_image = Some(force_pull);
        self
    }

    /// Sets whether the container is started with privileges turned on.
    pub const fn set_privileged(&mut self, privileged: bool) -> &mut Self {
        self.privileged = Some(privileged);
        self
    }

    /// Sets the image reference.
    pub fn set_image(&mut self, image: impl Into<String>) -> &mut Self {
        self.image = image.into();
        self
    }

    /// Sets the network mode token.
    ///
    /// The value is not checked against the known `NETWORK_*` tokens so that
    /// newer orchestrator modes can be passed through.
    pub fn set_network(&mut self, network: impl Into<String>) -> &mut Self {
        self.network = network.into();
        self
    }

    /// Exposes each port over TCP with a dynamic host port.
    pub fn expose_tcp_ports(&mut self, ports: &[u16]) -> &mut Self {
        for &port in ports {
            self.push_port_mapping(PortMapping::new(port, DYNAMIC_HOST_PORT, 0, PROTOCOL_TCP));
        }
        self
    }

    /// Exposes each port over UDP with a dynamic host port.
    pub fn expose_udp_ports(&mut self, ports: &[u16]) -> &mut Self {
        for &port in ports {
            self.push_port_mapping(PortMapping::new(port, DYNAMIC_HOST_PORT, 0, PROTOCOL_UDP));
        }
        self
    }

    /// Appends one fully specified port mapping.
    pub fn expose_port(
        &mut self,
        container_port: u16,
        host_port: u16,
        service_port: u16,
        protocol: impl Into<String>,
    ) -> &mut Self {
        self.push_port_mapping(PortMapping::new(
            container_port,
            host_port,
            service_port,
            protocol,
        ));
        self
    }

    /// Explicitly empties the port mappings.
    ///
    /// Leaving the field unset keeps whatever the orchestrator already has;
    /// use this to remove existing mappings.
    pub fn clear_port_mappings(&mut self) -> &mut Self {
        self.port_mappings = Some(Vec::new());
        self
    }

    /// Appends a docker runtime parameter.
    pub fn add_parameter(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.parameters
            .get_or_insert_with(Vec::new)
            .push(Parameter::new(key, value));
        self
    }

    /// Explicitly empties the parameters.
    pub fn clear_parameters(&mut self) -> &mut Self {
        self.parameters = Some(Vec::new());
        self
    }

    /// Port mappings, or `None` when the field is unset.
    #[must_use]
    pub fn port_mappings(&self) -> Option<&[PortMapping]> {
        self.port_mappings.as_deref()
    }

    /// Parameters, or `None` when the field is unset.
    #[must_use]
    pub fn parameters(&self) -> Option<&[Parameter]> {
        self.parameters.as_deref()
    }

    /// Returns the index of the first port mapping exposing `port`.
    ///
    /// The index lines up with the service ports the orchestrator assigns
    /// to the application, hence the name.
    ///
    /// # Errors
    ///
    /// Returns [`DockspecError::NoPortMappings`] if the mappings are unset or
    /// empty, and [`DockspecError::PortNotFound`] if no mapping matches.
    pub fn service_port_index(&self, port: u16) -> Result<usize> {
        let mappings = match self.port_mappings.as_deref() {
            Some(mappings) if !mappings.is_empty() => mappings,
            _ => {
                tracing::debug!(port, "no port mappings to search");
                return Err(DockspecError::NoPortMappings);
            }
        };

        mappings
            .iter()
            .position(|mapping| mapping.container_port == port)
            .ok_or_else(|| {
                tracing::debug!(port, mappings = mappings.len(), "container port not mapped");
                DockspecError::PortNotFound { port }
            })
    }

    fn push_port_mapping(&mut self, mapping: PortMapping) {
        self.port_mappings
            .get_or_insert_with(Vec::new)
            .push(mapping);
    }
}
