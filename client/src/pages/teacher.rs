//! Teacher screens: dashboard, attendance marking, roster, analytics,
//! reports, settings, and roster import.

use leptos::prelude::*;

use crate::routing::table::ViewId;

fn summary(page: ViewId) -> &'static str {
    match page {
        ViewId::Dashboard => "Today's classes and attendance at a glance.",
        ViewId::MarkAttendance => "Mark present, absent, or late for a class session.",
        ViewId::StudentList => "Browse and search the students you teach.",
        ViewId::Analytics => "Attendance trends across subjects and sections.",
        ViewId::Reports => "Export attendance reports for a date range.",
        ViewId::Settings => "Subjects, sections, and notification preferences.",
        ViewId::AddStudents => "Enroll students individually or by file upload.",
        _ => "",
    }
}

#[component]
pub fn TeacherPage(page: ViewId) -> impl IntoView {
    view! {
        <section class="page page--teacher">
            <h1 class="page__title">{page.title()}</h1>
            <p class="page__summary">{summary(page)}</p>
        </section>
    }
}
