//! Domain layer - wire models, request building, and the transport port

pub mod entities;
pub mod path;
pub mod request;
pub mod transport;

pub use entities::{
    DefinitionDeleteResponse, DefinitionEntity, DefinitionMap, DeleteStatus, ParameterEntity,
    ReportType,
};
pub use path::{PathTemplate, TemplateError};
pub use request::{ApiRequest, CallOptions, HttpMethod};
pub use transport::{HttpTransport, TransportError};
