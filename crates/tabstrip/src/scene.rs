//! Navigation state as seen by the tab bar.

/// A navigation destination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route {
    /// Opaque key identifying the destination.
    pub key: String,
}

impl Route {
    /// Create a route with the given key.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// The ordered routes of the tab bar and which one is focused.
///
/// The focused index is kept within bounds whenever routes exist.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationState {
    routes: Vec<Route>,
    index: usize,
}

impl NavigationState {
    /// Create a navigation state. An out-of-range `index` is clamped to the
    /// last route.
    pub fn new(routes: Vec<Route>, index: usize) -> Self {
        let index = index.min(routes.len().saturating_sub(1));
        Self { routes, index }
    }

    /// Create a state from route keys, focusing the first.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(keys.into_iter().map(Route::new).collect(), 0)
    }

    /// The routes, in display order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// The focused index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if there are no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// The focused route, if any.
    pub fn focused_route(&self) -> Option<&Route> {
        self.routes.get(self.index)
    }

    /// Return a copy of this state focused on `index`.
    pub fn with_index(&self, index: usize) -> Self {
        Self::new(self.routes.clone(), index)
    }

    /// The scene at `index`, if it exists.
    pub fn scene(&self, index: usize) -> Option<TabScene> {
        self.routes.get(index).map(|route| TabScene {
            route: route.clone(),
            index,
            focused: index == self.index,
        })
    }

    /// One scene per route, in display order.
    pub fn scenes(&self) -> impl Iterator<Item = TabScene> + '_ {
        (0..self.routes.len()).filter_map(|index| self.scene(index))
    }
}

/// One destination as presented to the tab bar's hooks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TabScene {
    /// The destination.
    pub route: Route,
    /// Position in the bar.
    pub index: usize,
    /// Whether this is the focused destination.
    pub focused: bool,
}
