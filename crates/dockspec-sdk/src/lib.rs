//! # dockspec-sdk
//!
//! Fluent builder for the container section of an orchestrator application
//! definition.
//!
//! A [`Container`](container::Container) owns an optional
//! [`Docker`](docker::Docker) section, which in turn owns the port mappings
//! and runtime parameters. Every mutator returns `&mut Self` so calls chain.
//!
//! # Example
//!
//! ```rust
//! use dockspec_common::constants::NETWORK_BRIDGE;
//! use dockspec_sdk::container::Container;
//!
//! let mut container = Container::new_docker();
//! container.add_volume("/var/log/app", "/logs", "RW");
//! container
//!     .docker_mut()
//!     .set_image("nginx:1.27")
//!     .set_network(NETWORK_BRIDGE)
//!     .expose_tcp_ports(&[80, 443]);
//!
//! let index = container.docker_mut().service_port_index(443)?;
//! assert_eq!(index, 1);
//! # Ok::<(), dockspec_common::error::DockspecError>(())
//! ```
#![cfg_attr(test, allow(clippy::expect_used, unused_results))]

pub mod container;
pub mod docker;
