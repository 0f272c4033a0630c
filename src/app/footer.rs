use chrono::Datelike;
use leptos::prelude::*;

use crate::{content::PROFILE, motion::SectionId};

use super::{
    contact::SocialLinks,
    platform::{scroll_to_section, smooth_scroll_to},
};

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="border-t border-muted/30 py-12">
            <div class="mx-auto px-4 max-w-6xl grid md:grid-cols-3 gap-8">
                <div>
                    <h3 class="text-xl font-bold text-yellow mb-2">{PROFILE.name.clone()}</h3>
                    <ul class="text-sm text-muted space-y-1">
                        {PROFILE
                            .taglines
                            .iter()
                            .map(|line| view! { <li>{line.clone()}</li> })
                            .collect_view()}
                    </ul>
                </div>
                <nav>
                    <h4 class="font-semibold mb-2">"Quick Links"</h4>
                    <ul class="text-sm space-y-1">
                        {SectionId::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <li>
                                        <a
                                            href=format!("#{section}")
                                            class="text-muted hover:text-yellow transition-colors duration-200"
                                            on:click=move |ev| {
                                                ev.prevent_default();
                                                scroll_to_section(section);
                                            }
                                        >
                                            {section.label()}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>
                <div class="flex flex-col gap-4 md:items-end">
                    <SocialLinks />
                    <button
                        class="text-sm text-muted hover:text-yellow transition-colors duration-200"
                        on:click=move |_| smooth_scroll_to(0.0)
                    >
                        "Back to top ↑"
                    </button>
                </div>
            </div>
            <div class="mx-auto px-4 max-w-6xl mt-8 text-center text-xs text-muted">
                <p>{format!("© {year} {}. All rights reserved.", PROFILE.name)}</p>
                <p class="mt-1">{concat!("Built ", env!("BUILD_TIME"))}</p>
            </div>
        </footer>
    }
}
