//! Top-level container definition and its volumes.

use dockspec_common::constants::CONTAINER_TYPE_DOCKER;
use dockspec_common::error::Result;
use serde::{Deserialize, Serialize};

use crate::docker::Docker;

/// A volume mounted from the host into the container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Volume {
    /// Mount point inside the container.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub container_path: String,
    /// Path on the docker host.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub host_path: String,
    /// Mount mode token, e.g. `RW` or `RO`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mode: String,
}

impl Volume {
    /// Creates a volume. Argument order follows the host-to-container direction.
    #[must_use]
    pub fn new(
        host_path: impl Into<String>,
        container_path: impl Into<String>,
        mode: impl Into<String>,
    ) -> Self {
        Self {
            container_path: container_path.into(),
            host_path: host_path.into(),
            mode: mode.into(),
        }
    }
}

/// Container section of an application definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Container {
    /// Containerizer tag, e.g. `DOCKER`.
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub kind: String,
    /// Docker settings, present for docker-typed containers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker: Option<Docker>,
    /// Mounted volumes; `None` leaves the orchestrator's current value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volumes: Option<Vec<Volume>>,
}

impl Container {
    /// Creates a container with the given type tag and nothing else set.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            docker: None,
            volumes: None,
        }
    }

    /// Creates a `DOCKER` container with an empty docker section.
    #[must_use]
    pub fn new_docker() -> Self {
        Self {
            kind: CONTAINER_TYPE_DOCKER.to_string(),
            docker: Some(Docker::new()),
            volumes: None,
        }
    }

    /// Returns the docker section, creating an empty one if unset.
    pub fn docker_mut(&mut self) -> &mut Docker {
        self.docker.get_or_insert_with(Docker::new)
    }

    /// Replaces the docker section.
    pub fn set_docker(&mut self, docker: Docker) -> &mut Self {
        self.docker = Some(docker);
        self
    }

    /// Attaches a host volume to the container.
    pub fn add_volume(
        &mut self,
        host_path: impl Into<String>,
        container_path: impl Into<String>,
        mode: impl Into<String>,
    ) -> &mut Self {
        self.volumes
            .get_or_insert_with(Vec::new)
            .push(Volume::new(host_path, container_path, mode));
        self
    }

    /// Explicitly empties the volumes.
    ///
    /// Leaving the field unset keeps whatever volumes the application
    /// already has; use this to remove them.
    pub fn clear_volumes(&mut self) -> &mut Self {
        self.volumes = Some(Vec::new());
        self
    }

    /// Volumes, or `None` when the field is unset.
    #[must_use]
    pub fn volumes(&self) -> Option<&[Volume]> {
        self.volumes.as_deref()
    }

    /// Encodes the container as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string(self)?;
        tracing::trace!(bytes = json.len(), "encoded container definition");
        Ok(json)
    }

    /// Encodes the container as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decodes a container from JSON. Missing keys decode as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a valid container definition.
    pub fn from_json(json: &str) -> Result<Self> {
        let container: Self = serde_json::from_str(json)?;
        tracing::trace!(kind = %container.kind, "decoded container definition");
        Ok(container)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_docker_container_has_docker_and_no_volumes() {
        let container = Container::new_docker();
        assert_eq!(container.kind, "DOCKER");
        assert!(container.docker.is_some());
        assert!(container.volumes().is_none());
    }

    #[test]
    fn add_volume_materializes_unset_list() {
        let mut container = Container::new_docker();
        container.add_volume("/host", "/container", "RW");
        assert_eq!(
            container.volumes(),
            Some(&[Volume::new("/host", "/container", "RW")][..])
        );
    }

    #[test]
    fn clear_volumes_differs_from_unset() {
        let mut container = Container::new_docker();
        assert!(container.volumes().is_none());
        container.clear_volumes();
        assert_eq!(container.volumes().map(<[Volume]>::len), Some(0));
    }

    #[test]
    fn docker_mut_creates_missing_section() {
        let mut container = Container::new("MESOS");
        container.docker_mut().set_image("busybox");
        assert_eq!(
            container.docker.as_ref().map(|d| d.image.as_str()),
            Some("busybox")
        );
    }

    #[test]
    fn set_docker_replaces_section() {
        let mut docker = Docker::new();
        docker.set_image("redis:7").set_privileged(true);
        let mut container = Container::new_docker();
        container.set_docker(docker.clone()).add_volume("/a", "/b", "RO");
        assert_eq!(container.docker, Some(docker));
    }

    #[test]
    fn unset_fields_are_omitted_from_json() {
        let json = Container::new_docker().to_json().expect("encode");
        assert_eq!(json, r#"{"type":"DOCKER","docker":{}}"#);
    }

    #[test]
    fn cleared_volumes_serialize_as_empty_array() {
        let mut container = Container::new_docker();
        container.clear_volumes();
        let value: serde_json::Value =
            serde_json::from_str(&container.to_json().expect("encode")).expect("parse");
        assert_eq!(value["volumes"], serde_json::json!([]));
    }

    #[test]
    fn volume_uses_camel_case_keys() {
        let value = serde_json::to_value(Volume::new("/var/data", "/data", "RO")).expect("encode");
        assert_eq!(
            value,
            serde_json::json!({ "containerPath": "/data", "hostPath": "/var/data", "mode": "RO" })
        );
    }

    #[test]
    fn from_json_rejects_wrong_types() {
        assert!(Container::from_json(r#"{ "volumes": "none" }"#).is_err());
    }
}
