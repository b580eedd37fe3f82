use std::collections::HashMap;

use leptos::*;

use super::routes::{RouteDescriptor, ViewId};

/// Builds the page for a matched route.
pub type ViewFactory = fn(&'static RouteDescriptor) -> View;

/// Wraps a child page, e.g. the authenticated shell around a section.
pub type LayoutFactory = fn(&'static RouteDescriptor, View) -> View;

/// Path-independent mapping from [`ViewId`] to the code that constructs it.
/// Nothing is built until a navigation resolves to the view.
#[derive(Clone, Default)]
pub struct ViewRegistry {
    views: HashMap<ViewId, ViewFactory>,
    layouts: HashMap<ViewId, LayoutFactory>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(mut self, id: ViewId, factory: ViewFactory) -> Self {
        self.views.insert(id, factory);
        self
    }

    pub fn layout(mut self, id: ViewId, factory: LayoutFactory) -> Self {
        self.layouts.insert(id, factory);
        self
    }

    pub fn contains(&self, id: ViewId) -> bool {
        self.views.contains_key(&id) || self.layouts.contains_key(&id)
    }

    /// Mounts `route`, inside `shell`'s layout when one is given.
    pub fn render(
        &self,
        route: &'static RouteDescriptor,
        shell: Option<&'static RouteDescriptor>,
    ) -> View {
        let Some(factory) = self.views.get(&route.view) else {
            log::warn!("no view registered for {:?}", route.view);
            return ().into_view();
        };
        let page = factory(route);
        match shell.and_then(|shell| self.layouts.get(&shell.view)) {
            Some(layout) => layout(route, page),
            None => page,
        }
    }
}
