use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdMenu;
use dioxus_free_icons::Icon;

/// Whether the navigation rail is expanded. Shared through context so the
/// top-bar trigger and the nav items can both flip it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarState {
    pub open: bool,
}

#[component]
pub fn SidebarProvider(#[props(default = true)] default_open: bool, children: Element) -> Element {
    let state = use_signal(|| SidebarState { open: default_open });
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-provider",
            "data-sidebar-open": if state().open { "true" } else { "false" },
            {children}
        }
    }
}

fn use_sidebar() -> Signal<SidebarState> {
    use_context::<Signal<SidebarState>>()
}

/// The navigation column. On narrow screens it overlays the page and a
/// backdrop click closes it.
#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();
    let is_open = state().open;

    let base = vec![
        Attribute::new("class", "sidebar", None, false),
        Attribute::new("data-state", if is_open { "open" } else { "closed" }, None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        if is_open {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| state.set(SidebarState { open: false }),
            }
        }
        aside {
            ..merged,
            {children}
        }
    }
}

/// Product name and the signed-in role, pinned to the top of the sidebar.
#[component]
pub fn SidebarBrand(title: String, #[props(default)] subtitle: String) -> Element {
    rsx! {
        div { class: "sidebar-brand",
            span { class: "sidebar-brand-title", "{title}" }
            if !subtitle.is_empty() {
                span { class: "sidebar-brand-subtitle", "{subtitle}" }
            }
        }
    }
}

#[component]
pub fn SidebarContent(children: Element) -> Element {
    rsx! {
        nav { class: "sidebar-content", {children} }
    }
}

#[component]
pub fn SidebarFooter(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-footer", {children} }
    }
}

/// A labelled block of nav items.
#[component]
pub fn SidebarSection(#[props(default)] label: String, children: Element) -> Element {
    rsx! {
        div { class: "sidebar-section",
            if !label.is_empty() {
                span { class: "sidebar-section-label", "{label}" }
            }
            ul { class: "sidebar-menu", {children} }
        }
    }
}

/// One navigation entry. Selecting it collapses the overlay on mobile; the
/// stylesheet keeps it open on wide screens.
#[component]
pub fn SidebarNavItem(
    label: String,
    #[props(default)] icon: Option<Element>,
    #[props(default = false)] active: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let mut state = use_sidebar();

    rsx! {
        li { class: "sidebar-menu-item",
            button {
                class: "sidebar-menu-button",
                r#type: "button",
                "data-active": if active { "true" } else { "false" },
                "aria-current": if active { "page" } else { "false" },
                onclick: move |evt| {
                    state.set(SidebarState { open: false });
                    onclick.call(evt);
                },
                if let Some(icon) = icon {
                    span { class: "sidebar-menu-icon", {icon} }
                }
                span { "{label}" }
            }
        }
    }
}

#[component]
pub fn SidebarTrigger() -> Element {
    let mut state = use_sidebar();

    rsx! {
        button {
            class: "sidebar-trigger",
            r#type: "button",
            "aria-label": "Toggle navigation",
            onclick: move |_| {
                let current = state().open;
                state.set(SidebarState { open: !current });
            },
            Icon::<LdMenu> { icon: LdMenu, width: 18, height: 18 }
        }
    }
}

/// Page area beside the sidebar.
#[component]
pub fn SidebarInset(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-inset", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav() -> Element {
        rsx! {
            SidebarProvider {
                Sidebar {
                    SidebarBrand { title: "Court Portal", subtitle: "Clerk" }
                    SidebarContent {
                        SidebarSection { label: "Cases",
                            SidebarNavItem { label: "Dashboard", active: true, onclick: move |_| {} }
                            SidebarNavItem { label: "Case Registration", onclick: move |_| {} }
                        }
                    }
                }
                SidebarInset { "page" }
            }
        }
    }

    #[test]
    fn marks_only_the_active_entry() {
        let mut dom = VirtualDom::new(nav);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
        assert!(html.contains("Case Registration"));
        assert!(html.contains("data-state=\"open\""));
    }
}
