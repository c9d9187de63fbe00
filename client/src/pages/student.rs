//! Student screens. These draw their own navigation because the shared
//! header is hidden on student paths.

use leptos::prelude::*;

use crate::routing::table::ViewId;

const STUDENT_NAV: [(&str, ViewId); 4] = [
    ("/student-dashboard", ViewId::StudentDashboard),
    ("/student-subjects", ViewId::StudentSubjects),
    ("/student-forecast", ViewId::StudentForecast),
    ("/student-profile", ViewId::StudentProfile),
];

fn summary(page: ViewId) -> &'static str {
    match page {
        ViewId::StudentDashboard => "Your attendance across all subjects.",
        ViewId::StudentSubjects => "Per-subject attendance and recent sessions.",
        ViewId::StudentForecast => "How many classes you can miss and stay above the threshold.",
        ViewId::StudentProfile => "Your enrollment details.",
        _ => "",
    }
}

#[component]
pub fn StudentPage(page: ViewId) -> impl IntoView {
    view! {
        <div class="student-layout">
            <nav class="student-layout__nav">
                {STUDENT_NAV
                    .iter()
                    .map(|&(href, target)| {
                        view! {
                            <a href=href class="student-layout__link" class:active=move || target == page>
                                {target.title()}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <section class="page page--student">
                <h1 class="page__title">{page.title()}</h1>
                <p class="page__summary">{summary(page)}</p>
            </section>
        </div>
    }
}
