use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::{
    content::{CONFIG, PROFILE},
    motion::{ScrollNav, SectionId},
};

use super::platform::{scroll_offset, scroll_to_section, DocumentGeometry};

#[component]
pub fn Navigation() -> impl IntoView {
    let nav = StoredValue::new_local(ScrollNav::new(CONFIG.scroll()));
    let (scrolled, set_scrolled) = signal(false);
    let (active, set_active) = signal(SectionId::default());
    let (menu_open, set_menu_open) = signal(false);

    // not throttled: every scroll event recomputes
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        let offset = scroll_offset();
        nav.update_value(|n| n.on_scroll(offset, &DocumentGeometry));
        nav.with_value(|n| {
            set_scrolled.set(n.scrolled());
            set_active.set(n.active());
        });
    });

    let go_to = move |section: SectionId| {
        scroll_to_section(section);
        set_menu_open.set(false);
    };

    view! {
        <nav class=move || {
            if scrolled.get() {
                "fixed top-0 inset-x-0 z-50 py-2 bg-background/95 shadow-lg backdrop-blur transition-all duration-200"
            } else {
                "fixed top-0 inset-x-0 z-50 py-4 bg-background/80 backdrop-blur transition-all duration-200"
            }
        }>
            <div class="mx-auto px-4 sm:px-6 lg:px-8 max-w-7xl flex items-center justify-between">
                <a
                    href="#home"
                    class="text-2xl font-bold text-yellow"
                    on:click=move |ev| {
                        ev.prevent_default();
                        go_to(SectionId::Home);
                    }
                >
                    {PROFILE.name.clone()}
                </a>
                <ul class=move || {
                    if menu_open.get() {
                        "flex flex-col absolute top-full inset-x-0 gap-6 p-8 bg-background md:static md:flex-row md:p-0"
                    } else {
                        "hidden md:flex md:flex-row gap-8"
                    }
                }>
                    {SectionId::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <li>
                                    <a
                                        href=format!("#{section}")
                                        class=move || {
                                            if active.get() == section {
                                                "text-yellow border-b-2 border-yellow pb-1"
                                            } else {
                                                "text-muted hover:text-yellow transition-colors duration-200"
                                            }
                                        }
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            go_to(section);
                                        }
                                    >
                                        {section.label()}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <button
                    class="md:hidden text-2xl text-yellow"
                    aria-label="Toggle navigation"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
        </nav>
    }
}
