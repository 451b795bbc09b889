pub mod docker;

pub use docker::DockerClient;
