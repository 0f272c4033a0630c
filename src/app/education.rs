use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::{
    content::{EducationEntry, CONFIG, EDUCATION},
    motion::{IntersectionSample, SeenSet},
};

use super::SectionHeader;

#[component]
pub fn EducationSection() -> impl IntoView {
    let (seen, set_seen) = signal(SeenSet::new());

    view! {
        <section id="education" class="py-24">
            <div class="mx-auto px-4 max-w-4xl">
                <SectionHeader
                    title="Educational Journey"
                    subtitle="My academic path and professional development"
                />
                <div class="relative border-l-2 border-yellow/30 ml-4 space-y-12">
                    {EDUCATION
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| {
                            view! { <TimelineItem index=index entry=entry.clone() seen=seen set_seen=set_seen /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineItem(
    index: usize,
    entry: EducationEntry,
    seen: ReadSignal<SeenSet>,
    set_seen: WriteSignal<SeenSet>,
) -> impl IntoView {
    let el = NodeRef::<html::Div>::new();
    let threshold = CONFIG.intersection_threshold;
    let entries = EDUCATION.len();

    // the observer disconnects when this item is disposed
    use_intersection_observer_with_options(
        el,
        move |observed, _| {
            let samples = observed
                .iter()
                .map(|e| IntersectionSample {
                    index,
                    is_intersecting: e.is_intersecting(),
                    ratio: e.intersection_ratio(),
                })
                .collect::<Vec<_>>();
            set_seen.update(|s| {
                s.observe(samples, entries, threshold);
            });
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );

    let kind = entry.kind.as_class();
    let class = move || {
        let reveal = if seen.get().contains(index) {
            "opacity-100 translate-x-0"
        } else if index % 2 == 0 {
            "opacity-0 -translate-x-12"
        } else {
            "opacity-0 translate-x-12"
        };
        format!("timeline-item {kind} relative pl-10 transition-all duration-700 {reveal}")
    };

    view! {
        <div node_ref=el class=class data-index=index>
            <div class="absolute -left-5 top-0 flex h-10 w-10 items-center justify-center rounded-full bg-background border-2 border-yellow">
                <i class=format!("{} text-yellow", entry.icon) />
            </div>
            <div class="bg-brightBlack/30 p-6 rounded-lg border border-muted/30 hover:-translate-y-1 transition-transform duration-300">
                <span class="text-sm text-yellow font-medium">{entry.period}</span>
                <h3 class="text-xl font-bold mt-2">{entry.title}</h3>
                <h4 class="text-cyan">{entry.subtitle}</h4>
                <p class="text-muted mt-1">{entry.institution}</p>
                {entry.location.map(|l| view! { <p class="text-sm text-muted">{l}</p> })}
                <p class="mt-4 leading-relaxed">{entry.description}</p>
                {(entry.progress > 0)
                    .then(|| {
                        let progress = entry.progress.min(100);
                        view! {
                            <div class="mt-4">
                                <div class="h-2 rounded bg-muted/20 overflow-hidden">
                                    <div
                                        class="h-full bg-yellow transition-all duration-1000"
                                        style=move || {
                                            let width = if seen.get().contains(index) {
                                                progress
                                            } else {
                                                0
                                            };
                                            format!("width: {width}%")
                                        }
                                    ></div>
                                </div>
                                <span class="text-sm text-muted">
                                    {format!("Current Progress: {progress}%")}
                                </span>
                            </div>
                        }
                    })}
                {(!entry.skills.is_empty())
                    .then(|| {
                        view! {
                            <div class="flex flex-wrap gap-2 mt-4">
                                {entry
                                    .skills
                                    .into_iter()
                                    .map(|skill| {
                                        view! {
                                            <span class="bg-green/20 text-green px-2 py-1 rounded text-xs">
                                                {skill}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })}
            </div>
        </div>
    }
}
