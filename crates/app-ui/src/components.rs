//! UI component primitives for the moderation admin
//!
//! Components are plain Rust structs with serializable properties. A view builds
//! a [`Component`] tree and hands it to the rendering layer, which is free to draw
//! it however it likes. Event handlers are carried as string identifiers that the
//! rendering layer maps back to callbacks.

use serde::{Deserialize, Serialize};

use crate::flagged_accounts::UserEntry;

// =============================================================================
// Common Types
// =============================================================================

/// Event handler callback type (represented as a string identifier)
pub type EventHandler = String;

/// A node in a rendered view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Component {
    /// Layout container
    Container(Container),
    /// Placeholder card shown when a list has nothing in it
    EmptyCard(EmptyCard),
    /// One flagged user account
    UserEntry(Box<UserEntry>),
}

impl Component {
    /// Direct children of this component
    pub fn children(&self) -> &[Component] {
        match self {
            Component::Container(container) => &container.children,
            _ => &[],
        }
    }

    /// Visit this component and all its descendants, depth first
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Component)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }

    /// Count components in the tree matching `pred`
    pub fn count(&self, pred: impl Fn(&Component) -> bool) -> usize {
        let mut count = 0;
        self.walk(&mut |c| {
            if pred(c) {
                count += 1;
            }
        });
        count
    }

    /// Number of user entries in the tree
    pub fn count_user_entries(&self) -> usize {
        self.count(|c| matches!(c, Component::UserEntry(_)))
    }

    /// Number of empty-state placeholders in the tree
    pub fn count_empty_cards(&self) -> usize {
        self.count(|c| matches!(c, Component::EmptyCard(_)))
    }

    /// All user entries in the tree, in order
    pub fn user_entries(&self) -> Vec<&UserEntry> {
        let mut entries = Vec::new();
        self.walk(&mut |c| {
            if let Component::UserEntry(entry) = c {
                entries.push(&**entry);
            }
        });
        entries
    }
}

// =============================================================================
// Button Component
// =============================================================================

/// Button color schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonColor {
    /// Primary color
    #[default]
    Primary,
    /// Positive/approving action
    Positive,
    /// Negative/destructive action
    Negative,
}

/// Button component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    /// Visible and accessible label
    pub label: String,
    /// Button color scheme
    #[serde(default)]
    pub color: ButtonColor,
    /// On press event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_press: Option<EventHandler>,
    /// Test ID for testing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
}

impl Button {
    /// Create a new button with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: ButtonColor::default(),
            on_press: None,
            test_id: None,
        }
    }

    /// Set the button color
    pub fn with_color(mut self, color: ButtonColor) -> Self {
        self.color = color;
        self
    }

    /// Set on press handler
    pub fn on_press(mut self, handler: impl Into<String>) -> Self {
        self.on_press = Some(handler.into());
        self
    }

    /// Set test ID
    pub fn with_test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }
}

// =============================================================================
// Container Component
// =============================================================================

/// Container/View component for layout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    /// Style class name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Child components
    #[serde(default)]
    pub children: Vec<Component>,
}

impl Container {
    /// Create a new container
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the style class
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Append a child
    pub fn with_child(mut self, child: Component) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children
    pub fn with_children(mut self, children: impl IntoIterator<Item = Component>) -> Self {
        self.children.extend(children);
        self
    }
}

// =============================================================================
// Empty Card Component
// =============================================================================

/// Placeholder card for empty lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmptyCard {
    /// Message shown in the card
    pub message: String,
}

impl EmptyCard {
    /// Create an empty-state card
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
