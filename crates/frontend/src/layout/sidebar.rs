//! Sidebar with one link per entity screen

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    href: &'static str,
    label: &'static str,
    icon: &'static str,
}

fn get_menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            href: "/customers",
            label: "Customers",
            icon: "customers",
        },
        MenuItem {
            href: "/salesmen",
            label: "Salesmen",
            icon: "salesmen",
        },
        MenuItem {
            href: "/items",
            label: "Items",
            icon: "items",
        },
        MenuItem {
            href: "/invoices",
            label: "Invoices",
            icon: "invoices",
        },
    ]
}

/// The active link gets `aria-current="page"` from the router; styling keys
/// off that.
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="app-sidebar__content">
            {get_menu_items()
                .into_iter()
                .map(|item| {
                    view! {
                        <A href=item.href attr:class="app-sidebar__item">
                            <div class="app-sidebar__item-content">
                                {icon(item.icon)}
                                <span>{item.label}</span>
                            </div>
                        </A>
                    }
                })
                .collect_view()}
        </nav>
    }
}
