use leptos::prelude::*;

use crate::{
    content::{CONFIG, PROFILE, ROLES},
    motion::{typewriter, SectionId, Typewriter},
};

use super::platform::{scroll_to_section, use_task_scope};

#[component]
pub fn HeroSection() -> impl IntoView {
    let (text, set_text) = signal(String::new());
    let (role, set_role) = signal(0usize);
    let scope = use_task_scope();

    Effect::new(move |_| {
        let labels = ROLES.iter().map(|r| r.text.as_str()).collect::<Vec<_>>();
        match Typewriter::new(labels.as_slice(), CONFIG.typewriter()) {
            Ok(machine) => scope.with_value(|s| {
                typewriter::run(s, machine, move |t| {
                    set_text.set(t.text());
                    set_role.set(t.index());
                })
            }),
            Err(e) => log::error!("hero roles: {e}"),
        }
    });

    let color = move || {
        ROLES
            .get(role.get())
            .map(|r| format!("color: {}", r.color))
            .unwrap_or_default()
    };
    let icon = move || {
        ROLES
            .get(role.get())
            .map(|r| r.icon.clone())
            .unwrap_or_default()
    };

    view! {
        <section id="home" class="relative min-h-screen flex items-center pt-24">
            <div class="mx-auto px-4 max-w-6xl grid lg:grid-cols-2 gap-12 items-center">
                <div class="section-content">
                    <p class="text-lg text-muted mb-2">{PROFILE.greeting.clone()}</p>
                    <h1 class="text-5xl lg:text-6xl font-bold text-yellow mb-6">
                        {PROFILE.name.clone()}
                    </h1>
                    <div class="text-2xl lg:text-3xl mb-6 flex items-center gap-3 min-h-[2.5rem]">
                        <span>"I'm a "</span>
                        <span class="font-bold" style=color>
                            {move || text.get()}
                            <span class="animate-pulse">"|"</span>
                        </span>
                        <i class=icon style=color />
                    </div>
                    <p class="text-base mb-8 leading-relaxed max-w-xl">
                        {PROFILE.description.clone()}
                    </p>
                    <div class="flex flex-wrap gap-4 mb-10">
                        <button
                            class="bg-yellow/20 hover:bg-yellow/30 text-yellow px-6 py-3 rounded-md font-medium border border-yellow/30 transition-all duration-200"
                            on:click=move |_| scroll_to_section(SectionId::Projects)
                        >
                            <i class="extra-eye mr-2" />
                            "View My Work"
                        </button>
                        <a
                            href=PROFILE.resume.clone()
                            download=PROFILE.resume_download_name.clone()
                            rel="noopener noreferrer"
                            class="px-6 py-3 rounded-md font-medium border border-muted/30 hover:bg-brightBlack/30 transition-all duration-200"
                        >
                            <i class="extra-download mr-2" />
                            "Download Resume"
                        </a>
                    </div>
                    <div class="flex gap-10">
                        {PROFILE
                            .stats
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="flex flex-col">
                                        <span class="text-3xl font-bold text-yellow">
                                            {stat.value.clone()}
                                        </span>
                                        <span class="text-sm text-muted">{stat.label.clone()}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="relative flex justify-center section-content">
                    <img
                        src=PROFILE.photo.clone()
                        alt=PROFILE.name.clone()
                        class="w-72 h-72 lg:w-96 lg:h-96 rounded-full object-cover border-4 border-yellow/40 shadow-2xl"
                    />
                    <div class="absolute -bottom-6 inset-x-0 flex justify-center gap-6">
                        {ROLES
                            .iter()
                            .enumerate()
                            .map(|(i, r)| {
                                let color = r.color.clone();
                                view! {
                                    <i
                                        class=format!("{} text-3xl transition-all duration-500", r.icon)
                                        style=move || role_icon_style(&color, role.get() == i)
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
            <div class="absolute bottom-8 inset-x-0 flex flex-col items-center gap-2 text-muted">
                <button
                    class="text-2xl animate-bounce hover:text-yellow"
                    aria-label="Scroll to education"
                    on:click=move |_| scroll_to_section(SectionId::Education)
                >
                    "↓"
                </button>
                <span class="text-sm">"Scroll to explore"</span>
            </div>
        </section>
    }
}

/// The current role's icon stands out; the rest are dimmed.
fn role_icon_style(color: &str, current: bool) -> String {
    if current {
        format!("color: {color}; opacity: 1; transform: scale(1.2)")
    } else {
        format!("color: {color}; opacity: 0.3; transform: scale(1)")
    }
}
