//! Built-in catalog for the University Management System console.

use std::sync::LazyLock;

use super::{Catalog, NavigationEntry, SubNavigationEntry};
use crate::role::Role::{self, Admin, Faculty, Staff, Student};

/// The built-in catalog, validated on first use.
///
/// # Panics
///
/// Panics if the hard-coded table below is invalid (covered by tests).
#[allow(clippy::expect_used)]
static UNIVERSITY: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::new(university_modules()).expect("built-in university catalog is valid")
});

/// Shared, read-only built-in catalog.
pub fn university() -> &'static Catalog {
    &UNIVERSITY
}

/// The built-in module table, unvalidated. Useful as a starting point for
/// site-specific catalog documents.
pub fn university_modules() -> Vec<NavigationEntry> {
    vec![
        module(
            "dashboard",
            "Dashboard",
            "/dashboard",
            &[Admin, Faculty, Staff, Student],
            vec![],
        ),
        module(
            "students",
            "Student Management",
            "/students",
            &[Admin, Faculty, Staff],
            vec![
                sub(
                    "student-list",
                    "Student Directory",
                    "/students/list",
                    "Search and browse enrolled students",
                ),
                sub(
                    "student-admissions",
                    "Admissions",
                    "/students/admissions",
                    "Applications and enrollment decisions",
                ),
                sub(
                    "student-records",
                    "Academic Records",
                    "/students/records",
                    "Transcripts and academic history",
                ),
                sub(
                    "student-attendance",
                    "Attendance",
                    "/students/attendance",
                    "Class attendance tracking",
                ),
            ],
        ),
        module(
            "academics",
            "Academic Management",
            "/academics",
            &[Admin, Faculty, Student],
            vec![
                sub(
                    "academic-courses",
                    "Course Management",
                    "/academics/courses",
                    "Course catalog and sections",
                ),
                sub(
                    "academic-curriculum",
                    "Curriculum",
                    "/academics/curriculum",
                    "Programs and degree requirements",
                ),
                sub(
                    "academic-grading",
                    "Grading",
                    "/academics/grading",
                    "Grade entry and grade reports",
                ),
                sub(
                    "academic-calendar",
                    "Academic Calendar",
                    "/academics/calendar",
                    "Terms, holidays and deadlines",
                ),
            ],
        ),
        module(
            "faculty",
            "Faculty Management",
            "/faculty",
            &[Admin, Staff],
            vec![
                sub(
                    "faculty-directory",
                    "Faculty Directory",
                    "/faculty/directory",
                    "Faculty profiles and departments",
                ),
                sub(
                    "faculty-workload",
                    "Teaching Load",
                    "/faculty/workload",
                    "Course assignments per instructor",
                ),
                sub(
                    "faculty-evaluations",
                    "Evaluations",
                    "/faculty/evaluations",
                    "Peer and student evaluations",
                ),
            ],
        ),
        module(
            "schedule",
            "Schedule",
            "/schedule",
            &[Admin, Faculty, Student],
            vec![
                sub(
                    "schedule-timetable",
                    "Class Timetable",
                    "/schedule/timetable",
                    "Weekly class schedule",
                ),
                sub("schedule-exams", "Examinations", "/schedule/exams", "Exam sessions and rooms"),
            ],
        ),
        module(
            "financial",
            "Financial Management",
            "/financial",
            &[Admin],
            vec![
                sub(
                    "financial-fees",
                    "Tuition & Fees",
                    "/financial/fees",
                    "Fee structures and student accounts",
                ),
                sub(
                    "financial-payroll",
                    "Payroll",
                    "/financial/payroll",
                    "Staff and faculty payroll",
                ),
                sub(
                    "financial-budget",
                    "Budget",
                    "/financial/budget",
                    "Departmental budgets and expenses",
                ),
            ],
        ),
        module(
            "infrastructure",
            "Infrastructure",
            "/infrastructure",
            &[Admin, Staff],
            vec![
                sub(
                    "infrastructure-facilities",
                    "Facilities",
                    "/infrastructure/facilities",
                    "Buildings and campus facilities",
                ),
                sub(
                    "infrastructure-rooms",
                    "Room Booking",
                    "/infrastructure/rooms",
                    "Classroom and lab reservations",
                ),
                sub(
                    "infrastructure-maintenance",
                    "Maintenance",
                    "/infrastructure/maintenance",
                    "Work orders and inspections",
                ),
            ],
        ),
        module(
            "security",
            "Security & Access",
            "/security",
            &[Admin],
            vec![
                sub(
                    "security-users",
                    "User Accounts",
                    "/security/users",
                    "Console users and role assignment",
                ),
                sub(
                    "security-roles",
                    "Roles & Permissions",
                    "/security/roles",
                    "Role definitions and capabilities",
                ),
                sub(
                    "security-audit",
                    "Audit Log",
                    "/security/audit",
                    "Sign-ins and administrative actions",
                ),
            ],
        )
        .with_badge("Admin"),
        module(
            "settings",
            "System Settings",
            "/settings",
            &[Admin],
            vec![
                sub(
                    "settings-general",
                    "General",
                    "/settings/general",
                    "Institution profile and preferences",
                ),
                sub(
                    "settings-notifications",
                    "Notifications",
                    "/settings/notifications",
                    "Email and in-app notices",
                ),
                sub(
                    "settings-backup",
                    "Backup & Restore",
                    "/settings/backup",
                    "Data backups and restore points",
                ),
            ],
        ),
    ]
}

fn module(
    id: &str,
    label: &str,
    path: &str,
    roles: &[Role],
    sub_entries: Vec<SubNavigationEntry>,
) -> NavigationEntry {
    NavigationEntry {
        id: id.to_string(),
        label: label.to_string(),
        path: path.to_string(),
        allowed_roles: roles.to_vec(),
        sub_entries,
        badge: None,
    }
}

fn sub(id: &str, label: &str, path: &str, description: &str) -> SubNavigationEntry {
    SubNavigationEntry {
        id: id.to_string(),
        label: label.to_string(),
        path: path.to_string(),
        description: Some(description.to_string()),
    }
}

impl NavigationEntry {
    fn with_badge(mut self, badge: &str) -> Self {
        self.badge = Some(badge.to_string());
        self
    }
}
