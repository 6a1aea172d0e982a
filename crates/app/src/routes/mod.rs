pub mod admin;
pub mod case_form;
pub mod clerk;
pub mod judge;
pub mod login;
pub mod not_found;
pub mod registrar;
pub mod schedule_form;
pub mod shared;
pub mod unauthorized;

use crate::auth::{use_api, use_auth, use_config};
use crate::{notify, platform};
use client::{poll_loop, NotificationFeed};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdCalendar, LdCalendarPlus, LdCircleCheck, LdCircleX, LdFilePlus,
    LdFileText, LdGavel, LdHistory, LdInbox, LdLayoutDashboard, LdLogOut, LdTrendingUp,
    LdUserPlus, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::UserRole;
use shared_ui::{
    CountBadge, Separator, Sidebar, SidebarBrand, SidebarContent, SidebarFooter, SidebarInset,
    SidebarNavItem, SidebarProvider, SidebarSection, SidebarTrigger,
};
use std::ops::ControlFlow;
use std::time::Duration;

use admin::{AdminDashboard, CreateUser, ManageCases, ManageSchedules, ManageUsers};
use clerk::{CaseFormPage, CaseRegistration, ClerkDashboard, EditCase};
use judge::{
    CasesAssigned, JudgeDashboard, JudgmentHistory, Notifications, PlaceJudgment, Progress,
    ScheduleHearing, ScheduleNewHearing,
};
use login::{Home, Login};
use not_found::NotFound;
use registrar::{
    ApprovedCases, AssignedCases, DisapprovedCases, RegistrarDashboard, SubmittedCases,
};
use unauthorized::Unauthorized;

/// Application routes. Everything under `AuthGuard` needs a session; the
/// role check uses [`Route::required_role`].
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/unauthorized")]
    Unauthorized {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    // ── Admin ──
    #[route("/admindashboard")]
    AdminDashboard {},
    #[route("/manageusers")]
    ManageUsers {},
    #[route("/createuser")]
    CreateUser {},
    #[route("/managecases")]
    ManageCases {},
    #[route("/manageschedules")]
    ManageSchedules {},
    // ── Clerk ──
    #[route("/clerkdashboard")]
    ClerkDashboard {},
    #[route("/caseregistration")]
    CaseRegistration {},
    #[route("/caseform")]
    CaseFormPage {},
    #[route("/editcase/:id")]
    EditCase { id: String },
    // ── Registrar ──
    #[route("/registrardashboard")]
    RegistrarDashboard {},
    #[route("/submittedcase")]
    SubmittedCases {},
    #[route("/approvedcases")]
    ApprovedCases {},
    #[route("/disapprovedcases")]
    DisapprovedCases {},
    #[route("/assignedcases")]
    AssignedCases {},
    // ── Judge ──
    #[route("/judgedashboard")]
    JudgeDashboard {},
    #[route("/casesassigned")]
    CasesAssigned {},
    #[route("/schedulehearing")]
    ScheduleHearing {},
    #[route("/schedulenewhearing")]
    ScheduleNewHearing {},
    #[route("/progress")]
    Progress {},
    #[route("/judgmenthistory")]
    JudgmentHistory {},
    #[route("/placejudgment/:case_id")]
    PlaceJudgment { case_id: String },
    // ── Any signed-in role ──
    #[route("/notification")]
    Notifications {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Landing page after login for `role`.
    pub fn dashboard_for(role: UserRole) -> Option<Route> {
        match role {
            UserRole::Admin => Some(Route::AdminDashboard {}),
            UserRole::Clerk => Some(Route::ClerkDashboard {}),
            UserRole::Registrar => Some(Route::RegistrarDashboard {}),
            UserRole::Judge => Some(Route::JudgeDashboard {}),
            UserRole::Unknown => None,
        }
    }

    /// Role a page belongs to. `None` means any signed-in user (or a
    /// public page outside the guard).
    pub fn required_role(&self) -> Option<UserRole> {
        match self {
            Route::AdminDashboard {}
            | Route::ManageUsers {}
            | Route::CreateUser {}
            | Route::ManageCases {}
            | Route::ManageSchedules {} => Some(UserRole::Admin),
            Route::ClerkDashboard {}
            | Route::CaseRegistration {}
            | Route::CaseFormPage {}
            | Route::EditCase { .. } => Some(UserRole::Clerk),
            Route::RegistrarDashboard {}
            | Route::SubmittedCases {}
            | Route::ApprovedCases {}
            | Route::DisapprovedCases {}
            | Route::AssignedCases {} => Some(UserRole::Registrar),
            Route::JudgeDashboard {}
            | Route::CasesAssigned {}
            | Route::ScheduleHearing {}
            | Route::ScheduleNewHearing {}
            | Route::Progress {}
            | Route::JudgmentHistory {}
            | Route::PlaceJudgment { .. } => Some(UserRole::Judge),
            Route::Home {}
            | Route::Login {}
            | Route::Unauthorized {}
            | Route::Notifications {}
            | Route::NotFound { .. } => None,
        }
    }

    /// Heading shown in the top bar.
    pub fn title(&self) -> &'static str {
        match self {
            Route::AdminDashboard {}
            | Route::ClerkDashboard {}
            | Route::RegistrarDashboard {}
            | Route::JudgeDashboard {} => "Dashboard",
            Route::ManageUsers {} => "Manage Users",
            Route::CreateUser {} => "Create User",
            Route::ManageCases {} => "Manage Cases",
            Route::ManageSchedules {} => "Manage Schedules",
            Route::CaseRegistration {} => "Case Registration",
            Route::CaseFormPage {} => "File a Case",
            Route::EditCase { .. } => "Edit Case",
            Route::SubmittedCases {} => "Submitted Cases",
            Route::ApprovedCases {} => "Approved Cases",
            Route::DisapprovedCases {} => "Disapproved Cases",
            Route::AssignedCases {} => "Assigned Cases",
            Route::CasesAssigned {} => "Cases Assigned",
            Route::ScheduleHearing {} => "Hearings",
            Route::ScheduleNewHearing {} => "Schedule New Hearing",
            Route::Progress {} => "Case Progress",
            Route::JudgmentHistory {} => "Judgment History",
            Route::PlaceJudgment { .. } => "Place Judgment",
            Route::Notifications {} => "Notifications",
            Route::Home {} | Route::Login {} => "Sign In",
            Route::Unauthorized {} => "Unauthorized",
            Route::NotFound { .. } => "Not Found",
        }
    }
}

/// Outcome of checking a session against a page's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    SignIn,
    Denied,
}

pub fn access(role: Option<UserRole>, required: Option<UserRole>) -> Access {
    match (role, required) {
        (None, _) => Access::SignIn,
        (Some(_), None) => Access::Granted,
        (Some(have), Some(need)) if have == need => Access::Granted,
        (Some(_), Some(_)) => Access::Denied,
    }
}

/// Auth guard layout. No session sends the user to /login; a session for
/// another role sends them to /unauthorized.
#[component]
fn AuthGuard() -> Element {
    let auth = use_auth();
    let route: Route = use_route();

    match access(auth.role(), route.required_role()) {
        Access::Granted => rsx! { Outlet::<Route> {} },
        Access::SignIn => {
            navigator().replace(Route::Login {});
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
        Access::Denied => {
            tracing::warn!(path = %route, role = ?auth.role(), "blocked page for another role");
            navigator().replace(Route::Unauthorized {});
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting..." }
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Users,
    AddUser,
    Cases,
    Hearings,
    NewHearing,
    FileCase,
    Inbox,
    Approved,
    Disapproved,
    Gavel,
    Progress,
    History,
    Bell,
}

fn nav_icon(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        NavIcon::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        NavIcon::AddUser => rsx! { Icon::<LdUserPlus> { icon: LdUserPlus, width: 18, height: 18 } },
        NavIcon::Cases => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
        NavIcon::Hearings => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 } },
        NavIcon::NewHearing => rsx! { Icon::<LdCalendarPlus> { icon: LdCalendarPlus, width: 18, height: 18 } },
        NavIcon::FileCase => rsx! { Icon::<LdFilePlus> { icon: LdFilePlus, width: 18, height: 18 } },
        NavIcon::Inbox => rsx! { Icon::<LdInbox> { icon: LdInbox, width: 18, height: 18 } },
        NavIcon::Approved => rsx! { Icon::<LdCircleCheck> { icon: LdCircleCheck, width: 18, height: 18 } },
        NavIcon::Disapproved => rsx! { Icon::<LdCircleX> { icon: LdCircleX, width: 18, height: 18 } },
        NavIcon::Gavel => rsx! { Icon::<LdGavel> { icon: LdGavel, width: 18, height: 18 } },
        NavIcon::Progress => rsx! { Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 18, height: 18 } },
        NavIcon::History => rsx! { Icon::<LdHistory> { icon: LdHistory, width: 18, height: 18 } },
        NavIcon::Bell => rsx! { Icon::<LdBell> { icon: LdBell, width: 18, height: 18 } },
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavEntry {
    pub label: &'static str,
    pub route: Route,
    pub icon: NavIcon,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavSection {
    pub label: &'static str,
    pub entries: Vec<NavEntry>,
}

fn entry(label: &'static str, route: Route, icon: NavIcon) -> NavEntry {
    NavEntry { label, route, icon }
}

/// Sidebar contents for each role.
pub fn nav_for(role: UserRole) -> Vec<NavSection> {
    let inbox = NavSection {
        label: "Inbox",
        entries: vec![entry("Notifications", Route::Notifications {}, NavIcon::Bell)],
    };
    let mut sections = match role {
        UserRole::Admin => vec![
            NavSection {
                label: "Overview",
                entries: vec![entry("Dashboard", Route::AdminDashboard {}, NavIcon::Dashboard)],
            },
            NavSection {
                label: "Management",
                entries: vec![
                    entry("Manage Users", Route::ManageUsers {}, NavIcon::Users),
                    entry("Create User", Route::CreateUser {}, NavIcon::AddUser),
                    entry("Manage Cases", Route::ManageCases {}, NavIcon::Cases),
                    entry("Manage Schedules", Route::ManageSchedules {}, NavIcon::Hearings),
                ],
            },
        ],
        UserRole::Clerk => vec![NavSection {
            label: "Cases",
            entries: vec![
                entry("Dashboard", Route::ClerkDashboard {}, NavIcon::Dashboard),
                entry("Case Registration", Route::CaseRegistration {}, NavIcon::Cases),
                entry("File a Case", Route::CaseFormPage {}, NavIcon::FileCase),
            ],
        }],
        UserRole::Registrar => vec![NavSection {
            label: "Registry",
            entries: vec![
                entry("Dashboard", Route::RegistrarDashboard {}, NavIcon::Dashboard),
                entry("Submitted Cases", Route::SubmittedCases {}, NavIcon::Inbox),
                entry("Approved Cases", Route::ApprovedCases {}, NavIcon::Approved),
                entry("Disapproved Cases", Route::DisapprovedCases {}, NavIcon::Disapproved),
                entry("Assigned Cases", Route::AssignedCases {}, NavIcon::Gavel),
            ],
        }],
        UserRole::Judge => vec![
            NavSection {
                label: "Chambers",
                entries: vec![
                    entry("Dashboard", Route::JudgeDashboard {}, NavIcon::Dashboard),
                    entry("Cases Assigned", Route::CasesAssigned {}, NavIcon::Cases),
                    entry("Hearings", Route::ScheduleHearing {}, NavIcon::Hearings),
                    entry("Schedule Hearing", Route::ScheduleNewHearing {}, NavIcon::NewHearing),
                ],
            },
            NavSection {
                label: "Outcomes",
                entries: vec![
                    entry("Progress", Route::Progress {}, NavIcon::Progress),
                    entry("Judgment History", Route::JudgmentHistory {}, NavIcon::History),
                ],
            },
        ],
        UserRole::Unknown => Vec::new(),
    };
    sections.push(inbox);
    sections
}

/// Main app layout with sidebar and top bar. Owns the notification feed
/// and the poller that fills it.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let mut auth = use_auth();
    let api = use_api();
    let config = use_config();
    let feed = use_context_provider(|| Signal::new(NotificationFeed::new()));

    let user = auth.user();
    let role = user.role;

    let flags = config.features.clone();
    let interval = Duration::from_secs(config.notifications.poll_interval_secs.max(1));
    use_future(move || {
        let flags = flags.clone();
        let mut feed = feed;
        async move {
            let user_id = auth.user_id();
            if user_id.is_empty() {
                return;
            }
            poll_loop(api(), user_id.clone(), interval, platform::sleep, move |result| {
                if auth.session.peek().as_ref().map(|s| s.user_id()) != Some(user_id.as_str()) {
                    return ControlFlow::Break(());
                }
                if let Ok(list) = result {
                    let fresh = feed.with_mut(|f| f.apply_fetch(list));
                    notify::announce(&flags, &fresh);
                }
                ControlFlow::Continue(())
            })
            .await;
        }
    });

    let unread = feed.read().unread();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider {
            Sidebar {
                SidebarBrand { title: "CourtSys", subtitle: "{role.label()}" }
                SidebarContent {
                    for section in nav_for(role) {
                        SidebarSection { label: "{section.label}",
                            for item in section.entries {
                                SidebarNavItem {
                                    label: "{item.label}",
                                    icon: nav_icon(item.icon),
                                    active: item.route == route,
                                    onclick: {
                                        let target = item.route.clone();
                                        move |_| {
                                            navigator().push(target.clone());
                                        }
                                    },
                                }
                            }
                        }
                    }
                }
                SidebarFooter {
                    div { class: "sidebar-user",
                        span { class: "sidebar-user-name", "{user.name}" }
                        span { class: "sidebar-user-email", "{user.email}" }
                    }
                }
            }

            SidebarInset {
                header { class: "topbar",
                    SidebarTrigger {}
                    Separator { horizontal: false }
                    span { class: "topbar-title", "{route.title()}" }
                    div { class: "topbar-spacer" }
                    button {
                        class: "topbar-bell",
                        r#type: "button",
                        "aria-label": "Notifications",
                        onclick: move |_| {
                            navigator().push(Route::Notifications {});
                        },
                        Icon::<LdBell> { icon: LdBell, width: 18, height: 18 }
                        CountBadge { count: unread }
                    }
                    div { class: "topbar-user",
                        span { class: "topbar-user-name", "{user.name}" }
                        button {
                            class: "topbar-logout",
                            r#type: "button",
                            onclick: move |_| {
                                auth.logout();
                                navigator().replace(Route::Login {});
                            },
                            Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                            "Logout"
                        }
                    }
                }

                main { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
