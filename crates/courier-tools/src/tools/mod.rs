//! Tool implementations

pub mod audiences;
pub(crate) mod credential;
pub mod email;
pub mod format;

pub use audiences::{ListAudiencesTool, build_audience_list_schema};
pub use email::{SendEmailContract, SendEmailTool, build_send_schema, normalize_send};
