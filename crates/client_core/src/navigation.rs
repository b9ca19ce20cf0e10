//! Route-driven highlighting for the navigation bar.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
}

pub const HOME_PATH: &str = "/";
pub const CANCEL_PATH: &str = "/cancel";

pub const BRAND_LINK: NavLink = NavLink {
    path: HOME_PATH,
    label: "Traffic Management",
};

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink {
        path: HOME_PATH,
        label: "Home",
    },
    NavLink {
        path: "/booking",
        label: "Book Journey",
    },
    NavLink {
        path: CANCEL_PATH,
        label: "Cancel Journey",
    },
    NavLink {
        path: "/capacity",
        label: "Check Capacity",
    },
    NavLink {
        path: "/check_status",
        label: "Check Booking Status",
    },
];

/// Exact, case-sensitive match. `/cancel/` is not `/cancel`.
pub fn is_active(candidate_path: &str, current_path: &str) -> bool {
    candidate_path == current_path
}

pub fn active_link(current_path: &str) -> Option<&'static NavLink> {
    NAV_LINKS
        .iter()
        .find(|link| is_active(link.path, current_path))
}

/// Holds the path of the page currently displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    current_path: String,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(HOME_PATH)
    }
}

impl Router {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            current_path: path.into(),
        }
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn navigate(&mut self, path: impl Into<String>) {
        let path = path.into();
        if path != self.current_path {
            tracing::debug!(from = %self.current_path, to = %path, "navigating");
            self.current_path = path;
        }
    }

    pub fn is_active(&self, candidate_path: &str) -> bool {
        is_active(candidate_path, &self.current_path)
    }
}
