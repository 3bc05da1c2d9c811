pub mod greeting;
pub mod template;

pub use greeting::{Greeting, GreetingParams, MAX_NAME_LENGTH};
pub use template::{GreetingTemplate, TemplateError};
