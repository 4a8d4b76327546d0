// Library exports following Clean Architecture principles

// Domain layer (wire models, request descriptors, transport port)
pub mod domain;

// Client layer (operation-to-request translation)
pub mod client;

// Infrastructure layer (frameworks & drivers)
pub mod infrastructure;

// Configuration
pub mod config;

pub use client::{ApiError, DefinitionsClient};
pub use config::ClientConfig;
pub use domain::entities::{
    DefinitionDeleteResponse, DefinitionEntity, DefinitionMap, DeleteStatus, ParameterEntity,
    ReportType,
};
pub use domain::request::CallOptions;
pub use domain::transport::{HttpTransport, TransportError};
pub use infrastructure::ReqwestTransport;
