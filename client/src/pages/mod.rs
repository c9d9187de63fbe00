//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages are addressed by [`ViewId`] so the route table stays data. Screen
//! content (rosters, attendance records, analytics) comes from the backend
//! through `/api` and is owned by each page.

pub mod auth;
pub mod not_found;
pub mod student;
pub mod teacher;

use leptos::prelude::*;

use crate::components::loading::LoadingPlaceholder;
use crate::routing::table::ViewId;

/// Render the screen for `view`, without any access check.
pub fn render(view: ViewId) -> AnyView {
    match view {
        // `/` always resolves to a redirect before reaching here.
        ViewId::Home => view! { <LoadingPlaceholder/> }.into_any(),
        ViewId::Login => view! { <auth::LoginPage/> }.into_any(),
        ViewId::Register => view! { <auth::RegisterPage/> }.into_any(),
        ViewId::Dashboard
        | ViewId::MarkAttendance
        | ViewId::StudentList
        | ViewId::Analytics
        | ViewId::Reports
        | ViewId::Settings
        | ViewId::AddStudents => view! { <teacher::TeacherPage page=view/> }.into_any(),
        ViewId::StudentDashboard | ViewId::StudentSubjects | ViewId::StudentForecast | ViewId::StudentProfile => {
            view! { <student::StudentPage page=view/> }.into_any()
        }
        ViewId::NotFound => view! { <not_found::NotFoundPage/> }.into_any(),
    }
}
