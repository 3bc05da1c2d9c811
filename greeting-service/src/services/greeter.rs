use crate::models::{Greeting, GreetingTemplate};
use crate::services::counter::Counter;

/// Produces greetings from a template, a fallback name and an id counter.
#[derive(Debug)]
pub struct Greeter {
    template: GreetingTemplate,
    default_name: String,
    counter: Counter,
}

impl Greeter {
    pub fn new(template: GreetingTemplate, default_name: impl Into<String>) -> Self {
        Self {
            template,
            default_name: default_name.into(),
            counter: Counter::new(),
        }
    }

    /// Absent and empty names both fall back to the default name.
    pub fn greet(&self, name: Option<&str>) -> Greeting {
        let name = name
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.default_name);

        Greeting {
            id: self.counter.next(),
            content: self.template.render(name),
        }
    }

    pub fn issued(&self) -> u64 {
        self.counter.current()
    }

    pub fn template(&self) -> &GreetingTemplate {
        &self.template
    }

    pub fn default_name(&self) -> &str {
        &self.default_name
    }
}

impl Default for Greeter {
    fn default() -> Self {
        Self::new(GreetingTemplate::default(), "World")
    }
}
