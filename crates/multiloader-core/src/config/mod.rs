//! Project parameters and remote source configuration

pub mod params;
pub mod sources;

pub use params::{
    project_id_from_name, title_case, ParameterInfo, ProjectParameters, RawParameters, PARAMETERS,
};
pub use sources::Sources;
