pub mod catalog;
pub mod render;
pub mod request;
pub mod template;

pub use catalog::PromptCatalog;
pub use render::{TemplateRenderer, render_prompt};
pub use request::GenerationRequest;
pub use template::{PromptTemplate, TemplateId, placeholder_tokens};
