use serde::Serialize;
use serde_json::{json, Value};

use super::flash::FlashNotification;

/// Every page the attorney workflows can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    RemoveAttorney,
    DecisionAttorney,
    ConfirmRemoval,
    ManageDecisions,
    ConfirmDecisions,
    ManageAttorneys,
}

impl Template {
    pub fn name(&self) -> &'static str {
        match self {
            Template::RemoveAttorney => "remove-an-attorney",
            Template::DecisionAttorney => "remove-an-attorney-decision",
            Template::ConfirmRemoval => "remove-an-attorney-confirm",
            Template::ManageDecisions => "manage-attorney-decisions",
            Template::ConfirmDecisions => "manage-attorney-decisions-confirm",
            Template::ManageAttorneys => "manage-attorneys",
        }
    }
}

/// Everything a template receives for one page.
#[derive(Debug, Clone)]
pub struct Page {
    pub template: Template,
    pub flash: Option<FlashNotification>,
    pub data: Value,
}

impl Page {
    pub fn new<V: Serialize>(template: Template, view: &V) -> Result<Self, TemplateError> {
        let data = serde_json::to_value(view).map_err(|source| TemplateError::Serialize {
            template: template.name(),
            source,
        })?;
        Ok(Self {
            template,
            flash: None,
            data,
        })
    }

    pub fn with_flash(mut self, flash: Option<FlashNotification>) -> Self {
        self.flash = flash;
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("could not serialize view for {template}: {source}")]
    Serialize {
        template: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("template {template} failed to render: {reason}")]
    Render {
        template: &'static str,
        reason: String,
    },
}

/// Seam between handlers and whatever produces the final markup.
pub trait TemplateRenderer: Send + Sync {
    fn content_type(&self) -> &'static str;
    fn render(&self, page: &Page) -> Result<String, TemplateError>;
}

/// Emits the page as `{"template", "flash", "data"}` for an external template service.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl TemplateRenderer for JsonRenderer {
    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn render(&self, page: &Page) -> Result<String, TemplateError> {
        let mut envelope = json!({
            "template": page.template.name(),
            "data": page.data,
        });
        if let Some(flash) = &page.flash {
            envelope["flash"] = json!({ "name": flash.title });
        }
        Ok(envelope.to_string())
    }
}
