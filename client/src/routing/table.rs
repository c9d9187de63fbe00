//! Static path → view table.
//!
//! Matching is exact-string and first-match-wins. The `*` entry must be the
//! last one; it catches every path no other entry claims.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::borrow::Cow;
use std::collections::HashSet;

pub const CATCH_ALL: &str = "*";

/// Every screen the shell can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewId {
    /// `/`: never rendered, always resolved by the home redirect.
    Home,
    Login,
    Register,
    Dashboard,
    MarkAttendance,
    StudentList,
    Analytics,
    Reports,
    Settings,
    AddStudents,
    StudentDashboard,
    StudentSubjects,
    StudentForecast,
    StudentProfile,
    NotFound,
}

impl ViewId {
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Login => "Sign in",
            Self::Register => "Create account",
            Self::Dashboard => "Dashboard",
            Self::MarkAttendance => "Mark Attendance",
            Self::StudentList => "Students",
            Self::Analytics => "Analytics",
            Self::Reports => "Reports",
            Self::Settings => "Settings",
            Self::AddStudents => "Add Students",
            Self::StudentDashboard => "My Dashboard",
            Self::StudentSubjects => "My Subjects",
            Self::StudentForecast => "Attendance Forecast",
            Self::StudentProfile => "My Profile",
            Self::NotFound => "404 Not Found",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    /// Requires a signed-in user before the view renders.
    pub protected: bool,
    pub view: ViewId,
}

const fn route(path: &'static str, protected: bool, view: ViewId) -> RouteDescriptor {
    RouteDescriptor { path, protected, view }
}

pub const STANDARD_ROUTES: [RouteDescriptor; 15] = [
    route("/", false, ViewId::Home),
    route("/login", false, ViewId::Login),
    route("/register", false, ViewId::Register),
    // Teacher
    route("/dashboard", true, ViewId::Dashboard),
    route("/attendance", true, ViewId::MarkAttendance),
    route("/students", true, ViewId::StudentList),
    route("/analytics", true, ViewId::Analytics),
    route("/reports", true, ViewId::Reports),
    route("/settings", true, ViewId::Settings),
    route("/add-students", true, ViewId::AddStudents),
    // Student
    route("/student-dashboard", true, ViewId::StudentDashboard),
    route("/student-subjects", true, ViewId::StudentSubjects),
    route("/student-forecast", true, ViewId::StudentForecast),
    route("/student-profile", true, ViewId::StudentProfile),
    route(CATCH_ALL, false, ViewId::NotFound),
];

static NOT_FOUND_ROUTE: RouteDescriptor = route(CATCH_ALL, false, ViewId::NotFound);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteTableError {
    #[error("duplicate route path: {0}")]
    DuplicatePath(&'static str),
    #[error("route table has no catch-all entry")]
    MissingCatchAll,
    #[error("catch-all entry must be the last route")]
    CatchAllNotLast,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    routes: Cow<'static, [RouteDescriptor]>,
}

impl RouteTable {
    /// Build a table, checking path uniqueness and catch-all placement.
    ///
    /// # Errors
    ///
    /// Returns a [`RouteTableError`] naming the first violated rule.
    pub fn new(routes: Vec<RouteDescriptor>) -> Result<Self, RouteTableError> {
        let mut seen = HashSet::new();
        for r in &routes {
            if !seen.insert(r.path) {
                return Err(RouteTableError::DuplicatePath(r.path));
            }
        }
        match routes.iter().position(|r| r.path == CATCH_ALL) {
            None => return Err(RouteTableError::MissingCatchAll),
            Some(i) if i + 1 != routes.len() => return Err(RouteTableError::CatchAllNotLast),
            Some(_) => {}
        }
        Ok(Self { routes: Cow::Owned(routes) })
    }

    /// The application's route surface.
    pub const fn standard() -> Self {
        Self { routes: Cow::Borrowed(&STANDARD_ROUTES) }
    }

    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    /// First entry whose path equals `path`, else the catch-all.
    pub fn resolve(&self, path: &str) -> &RouteDescriptor {
        self.routes
            .iter()
            .find(|r| r.path == path || r.path == CATCH_ALL)
            .unwrap_or(&NOT_FOUND_ROUTE)
    }
}
