use dioxus::prelude::*;

/// Colour tone for badges. Status columns pick one per status value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Warning,
    Info,
    Destructive,
    Outline,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Info => "info",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Outline => "outline",
        }
    }
}

/// Inline pill for statuses, roles and counters.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-style", variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

/// Small round counter, e.g. unread notifications on the bell.
/// Renders nothing for zero.
#[component]
pub fn CountBadge(count: usize) -> Element {
    if count == 0 {
        return rsx! {};
    }
    let label = if count > 99 { "99+".to_string() } else { count.to_string() };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span { class: "count-badge", "{label}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_classes_are_distinct() {
        let all = [
            BadgeVariant::Primary,
            BadgeVariant::Secondary,
            BadgeVariant::Success,
            BadgeVariant::Warning,
            BadgeVariant::Info,
            BadgeVariant::Destructive,
            BadgeVariant::Outline,
        ];
        let mut classes: Vec<&str> = all.iter().map(|v| v.class()).collect();
        classes.sort();
        classes.dedup();
        assert_eq!(classes.len(), all.len());
    }

    #[test]
    fn count_badge_hides_zero_and_caps() {
        fn zero() -> Element {
            rsx! { CountBadge { count: 0 } }
        }
        fn many() -> Element {
            rsx! { CountBadge { count: 250 } }
        }
        let mut dom = VirtualDom::new(zero);
        dom.rebuild_in_place();
        assert!(!dioxus_ssr::render(&dom).contains("count-badge"));

        let mut dom = VirtualDom::new(many);
        dom.rebuild_in_place();
        assert!(dioxus_ssr::render(&dom).contains("99+"));
    }
}
