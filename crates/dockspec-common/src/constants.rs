//! Wire tokens and workspace-wide defaults.

/// Container `type` tag for docker-backed containers.
pub const CONTAINER_TYPE_DOCKER: &str = "DOCKER";

/// Container `type` tag for the orchestrator's native containerizer.
pub const CONTAINER_TYPE_MESOS: &str = "MESOS";

/// Docker network token: share the host's network stack.
pub const NETWORK_HOST: &str = "HOST";

/// Docker network token: bridged networking with port mappings.
pub const NETWORK_BRIDGE: &str = "BRIDGE";

/// Docker network token: no networking.
pub const NETWORK_NONE: &str = "NONE";

/// Port mapping protocol token for TCP.
pub const PROTOCOL_TCP: &str = "tcp";

/// Port mapping protocol token for UDP.
pub const PROTOCOL_UDP: &str = "udp";

/// Volume mode token for read/write mounts.
pub const VOLUME_MODE_RW: &str = "RW";

/// Volume mode token for read-only mounts.
pub const VOLUME_MODE_RO: &str = "RO";

/// Host port value asking the orchestrator to pick a port.
pub const DYNAMIC_HOST_PORT: u16 = 0;

/// Binary name for the CLI.
pub const BIN_NAME: &str = "dspec";

/// Environment variable consulted for the configuration file path.
pub const CONFIG_ENV_VAR: &str = "DOCKSPEC_CONFIG";
