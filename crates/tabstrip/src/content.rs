//! Host hooks for item content and presses.
//!
//! The engine never renders anything itself. A [`TabBarDelegate`] supplies
//! labels and icons as opaque host nodes, optional test identifiers, and may
//! intercept presses; a [`Navigator`] performs the actual jump.

use std::fmt;

use tabstrip_render::Color;

use crate::scene::{Route, TabScene};

/// Renders a label from the scene and its current tint.
pub type LabelRenderer<N> = Box<dyn Fn(&TabScene, Color) -> N>;

/// What the delegate wants shown as an item's label.
pub enum LabelSource<N> {
    /// Plain text, painted by the host with the interpolated tint.
    Text(String),
    /// A callback producing a host node from the scene and tint.
    Render(LabelRenderer<N>),
    /// A ready-made host node.
    Node(N),
    /// No label.
    None,
}

impl<N> LabelSource<N> {
    /// Create a text label.
    pub fn text(text: impl Into<String>) -> Self {
        LabelSource::Text(text.into())
    }

    /// Create a rendered label.
    pub fn render(f: impl Fn(&TabScene, Color) -> N + 'static) -> Self {
        LabelSource::Render(Box::new(f))
    }
}

impl<N: fmt::Debug> fmt::Debug for LabelSource<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelSource::Text(text) => f.debug_tuple("Text").field(text).finish(),
            LabelSource::Render(_) => f.write_str("Render(..)"),
            LabelSource::Node(node) => f.debug_tuple("Node").field(node).finish(),
            LabelSource::None => f.write_str("None"),
        }
    }
}

/// Identifiers a host attaches to an item for tests and accessibility.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TestIds {
    pub test_id: Option<String>,
    pub accessibility_label: Option<String>,
}

/// A press on a tab item.
#[derive(Debug, Clone, Copy)]
pub struct TabPressEvent<'a> {
    /// The route focused when the press happened.
    pub previous: &'a Route,
    /// The pressed item.
    pub scene: &'a TabScene,
}

/// Performs navigation on behalf of the tab bar.
pub trait Navigator {
    /// Focus the destination at `index`.
    fn jump_to_index(&mut self, index: usize);
}

impl<F: FnMut(usize)> Navigator for F {
    fn jump_to_index(&mut self, index: usize) {
        self(index)
    }
}

/// Supplies item content and handles presses.
///
/// # Example
///
/// ```
/// use tabstrip::content::{LabelSource, TabBarDelegate};
/// use tabstrip::scene::TabScene;
/// use tabstrip_render::Color;
///
/// struct Titles;
///
/// impl TabBarDelegate for Titles {
///     type Node = String;
///
///     fn label(&self, scene: &TabScene, _tint: Color) -> LabelSource<String> {
///         LabelSource::text(scene.route.key.to_uppercase())
///     }
///
///     fn render_icon(&self, scene: &TabScene, tint: Color) -> Option<String> {
///         Some(format!("icon:{}:{}", scene.route.key, tint))
///     }
/// }
/// ```
pub trait TabBarDelegate {
    /// Host node type produced for labels and icons.
    type Node;

    /// The label for a scene at the given tint.
    fn label(&self, scene: &TabScene, tint: Color) -> LabelSource<Self::Node>;

    /// The icon for a scene at the given tint, or `None` for no icon.
    fn render_icon(&self, scene: &TabScene, tint: Color) -> Option<Self::Node>;

    /// Test identifiers for a scene.
    fn test_ids(&self, _scene: &TabScene) -> Option<TestIds> {
        None
    }

    /// Handle a press. The default jumps to the pressed item.
    fn on_press(&self, event: &TabPressEvent<'_>, navigator: &mut dyn Navigator) {
        navigator.jump_to_index(event.scene.index);
    }
}
