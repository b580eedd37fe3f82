pub const LOGIN_PATH: &str = "/login";

/// Identifies the view a route mounts; resolved to a factory by the
/// [`ViewRegistry`](super::registry::ViewRegistry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    Login,
    Shell,
    Dashboard,
    Employees,
    Attendance,
    Salary,
    Leave,
    Ai,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMeta {
    pub title: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Absolute for top-level routes, relative to the parent for children.
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub view: ViewId,
    pub redirect: Option<&'static str>,
    pub meta: Option<RouteMeta>,
    pub children: &'static [RouteDescriptor],
}

impl RouteDescriptor {
    pub fn title(&self) -> Option<&'static str> {
        self.meta.map(|meta| meta.title)
    }
}

const fn page(path: &'static str, name: &'static str, view: ViewId, title: &'static str) -> RouteDescriptor {
    RouteDescriptor {
        path,
        name: Some(name),
        view,
        redirect: None,
        meta: Some(RouteMeta { title }),
        children: &[],
    }
}

pub static ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor {
        path: LOGIN_PATH,
        name: Some("Login"),
        view: ViewId::Login,
        redirect: None,
        meta: None,
        children: &[],
    },
    RouteDescriptor {
        path: "/",
        name: None,
        view: ViewId::Shell,
        redirect: Some("/dashboard"),
        meta: None,
        children: &[
            page("dashboard", "Dashboard", ViewId::Dashboard, "Dashboard"),
            page("employees", "Employees", ViewId::Employees, "Employee Management"),
            page("attendance", "Attendance", ViewId::Attendance, "Attendance Management"),
            page("salary", "Salary", ViewId::Salary, "Salary Management"),
            page("leave", "Leave", ViewId::Leave, "Leave Requests"),
            page("ai", "AI", ViewId::Ai, "AI Analysis"),
        ],
    },
];

/// Outcome of matching a location path against [`ROUTES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// `shell` is set when `route` is mounted inside the authenticated shell.
    Matched {
        route: &'static RouteDescriptor,
        shell: Option<&'static RouteDescriptor>,
    },
    Redirect(&'static str),
    NotFound,
}

pub fn full_path(parent: &RouteDescriptor, child: &RouteDescriptor) -> String {
    if parent.path.ends_with('/') {
        format!("{}{}", parent.path, child.path)
    } else {
        format!("{}/{}", parent.path, child.path)
    }
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

pub fn resolve(path: &str) -> Resolution {
    let path = normalize(path);
    for route in ROUTES {
        if route.path == path {
            return match route.redirect {
                Some(target) => Resolution::Redirect(target),
                None => Resolution::Matched { route, shell: None },
            };
        }
        if let Some(child) = route
            .children
            .iter()
            .find(|child| full_path(route, child) == path)
        {
            return Resolution::Matched {
                route: child,
                shell: Some(route),
            };
        }
    }
    Resolution::NotFound
}

/// Children of the authenticated shell, in menu order.
pub fn shell_routes() -> &'static [RouteDescriptor] {
    ROUTES
        .iter()
        .find(|route| route.view == ViewId::Shell)
        .map(|route| route.children)
        .unwrap_or(&[])
}
