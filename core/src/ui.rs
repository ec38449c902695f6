//! Widget-template boundary toward the host's UI toolkit.
//!
//! Pages are described by a declarative template naming widgets; the
//! template instantiates into a [`WidgetTree`] supporting lookup by name,
//! entry text access, visibility, and click dispatch. Trees are
//! single-threaded and owned by exactly one view.

use crate::SpectrumError;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    Container,
    Entry,
    Button,
    Label,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetSpec {
    pub name: String,
    pub kind: WidgetKind,
    /// Initial text: a caption for buttons and labels, contents for entries.
    #[serde(default)]
    pub label: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

/// A declarative page description, loaded from a JSON resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub widgets: Vec<WidgetSpec>,
}

impl Template {
    /// Parse a template resource. The template must name a `root` widget.
    pub fn from_json(resource: &str) -> Result<Self, SpectrumError> {
        let template: Template = serde_json::from_str(resource)
            .map_err(|e| SpectrumError::TemplateLoad(e.to_string()))?;
        if !template.widgets.iter().any(|w| w.name == "root") {
            return Err(SpectrumError::TemplateLoad(format!(
                "template '{}' has no root widget",
                template.id
            )));
        }
        Ok(template)
    }

    /// Build the widget tree this template describes.
    pub fn instantiate(&self) -> Result<WidgetTree, SpectrumError> {
        let mut widgets = HashMap::new();
        for spec in &self.widgets {
            let widget = Rc::new(Widget::from_spec(spec));
            if widgets.insert(spec.name.clone(), widget).is_some() {
                return Err(SpectrumError::TemplateLoad(format!(
                    "duplicate widget name '{}' in template '{}'",
                    spec.name, self.id
                )));
            }
        }
        Ok(WidgetTree {
            widgets,
            handlers: RefCell::new(HashMap::new()),
        })
    }
}

#[derive(Debug)]
struct WidgetState {
    text: String,
    visible: bool,
}

/// One named widget instance.
pub struct Widget {
    name: String,
    kind: WidgetKind,
    state: RefCell<WidgetState>,
}

impl Widget {
    fn from_spec(spec: &WidgetSpec) -> Self {
        Self {
            name: spec.name.clone(),
            kind: spec.kind,
            state: RefCell::new(WidgetState {
                text: spec.label.clone(),
                visible: spec.visible,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> WidgetKind {
        self.kind
    }

    pub fn text(&self) -> String {
        self.state.borrow().text.clone()
    }

    pub fn set_text(&self, text: &str) {
        self.state.borrow_mut().text = text.to_string();
    }

    pub fn is_visible(&self) -> bool {
        self.state.borrow().visible
    }

    pub fn show(&self) {
        self.state.borrow_mut().visible = true;
    }

    pub fn hide(&self) {
        self.state.borrow_mut().visible = false;
    }
}

type ClickHandler = Rc<dyn Fn()>;

/// An instantiated widget tree for one page.
pub struct WidgetTree {
    widgets: HashMap<String, Rc<Widget>>,
    handlers: RefCell<HashMap<String, ClickHandler>>,
}

impl WidgetTree {
    /// Look a widget up by its template name.
    pub fn widget(&self, name: &str) -> Result<Rc<Widget>, SpectrumError> {
        self.widgets
            .get(name)
            .cloned()
            .ok_or_else(|| SpectrumError::WidgetNotFound(name.to_string()))
    }

    /// Connect the click handler for a widget, replacing any previous one.
    pub fn connect_clicked(
        &self,
        name: &str,
        handler: impl Fn() + 'static,
    ) -> Result<(), SpectrumError> {
        self.widget(name)?;
        self.handlers
            .borrow_mut()
            .insert(name.to_string(), Rc::new(handler));
        Ok(())
    }

    /// Deliver a click to a widget, invoking its connected handler.
    pub fn click(&self, name: &str) -> Result<(), SpectrumError> {
        self.widget(name)?;
        let handler = self.handlers.borrow().get(name).cloned();
        match handler {
            Some(handler) => handler(),
            None => trace!("click on '{}' with no handler connected", name),
        }
        Ok(())
    }
}
