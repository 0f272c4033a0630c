use leptos::prelude::*;

use crate::{
    content::{SkillCategory, CONFIG, SKILLS},
    motion::{Carousel, CarouselDriver},
};

use super::{platform::use_task_scope, SectionHeader};

type DriverSlot = StoredValue<Option<CarouselDriver>, LocalStorage>;

fn drive(driver: DriverSlot, action: impl FnOnce(&CarouselDriver)) {
    driver.with_value(|d| {
        if let Some(d) = d {
            action(d);
        }
    });
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    let (index, set_index) = signal(0usize);
    let scope = use_task_scope();
    let driver: DriverSlot = StoredValue::new_local(None);

    Effect::new(move |_| match Carousel::new(SKILLS.len()) {
        Ok(carousel) => {
            let started = scope.with_value(|s| {
                CarouselDriver::start(
                    s,
                    carousel,
                    CONFIG.carousel_interval(),
                    CONFIG.carousel_cooldown(),
                    move |i| set_index.set(i),
                )
            });
            driver.set_value(Some(started));
        }
        Err(e) => log::error!("skills carousel: {e}"),
    });

    let slide_count = SKILLS.len();

    view! {
        <section id="skills" class="py-24 bg-brightBlack/10">
            <div class="mx-auto px-4 max-w-5xl">
                <SectionHeader
                    title="Skills & Expertise"
                    subtitle="Technologies and tools I work with"
                />
                <div
                    class="relative overflow-hidden"
                    on:mouseenter=move |_| drive(driver, CarouselDriver::hover_enter)
                    on:mouseleave=move |_| drive(driver, CarouselDriver::hover_leave)
                >
                    <div
                        class="flex transition-transform duration-500 ease-in-out"
                        style=move || format!("transform: translateX(-{}%)", index.get() * 100)
                    >
                        {SKILLS
                            .iter()
                            .enumerate()
                            .map(|(i, category)| {
                                view! { <SkillSlide category=category.clone() active=move || index.get() == i /> }
                            })
                            .collect_view()}
                    </div>
                    <button
                        class="absolute left-2 top-1/2 -translate-y-1/2 h-10 w-10 rounded-full bg-background/80 text-yellow hover:bg-yellow/20"
                        aria-label="Previous skill category"
                        on:click=move |_| drive(driver, CarouselDriver::prev)
                    >
                        "‹"
                    </button>
                    <button
                        class="absolute right-2 top-1/2 -translate-y-1/2 h-10 w-10 rounded-full bg-background/80 text-yellow hover:bg-yellow/20"
                        aria-label="Next skill category"
                        on:click=move |_| drive(driver, CarouselDriver::next)
                    >
                        "›"
                    </button>
                </div>
                <div class="flex justify-center gap-3 mt-8">
                    {(0..slide_count)
                        .map(|i| {
                            view! {
                                <button
                                    class=move || {
                                        if index.get() == i {
                                            "h-3 w-8 rounded-full bg-yellow transition-all duration-300"
                                        } else {
                                            "h-3 w-3 rounded-full bg-muted/40 hover:bg-muted transition-all duration-300"
                                        }
                                    }
                                    aria-label=format!("Show skill category {}", i + 1)
                                    on:click=move |_| drive(driver, |d| d.jump(i))
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillSlide(
    category: SkillCategory,
    #[prop(into)] active: Signal<bool>,
) -> impl IntoView {
    let color = category.color.clone();

    view! {
        <div class="w-full flex-shrink-0 px-12">
            <div class="bg-brightBlack/30 p-8 rounded-lg border border-muted/30">
                <div class="flex items-center gap-4 mb-8">
                    <i class=format!("{} text-3xl", category.icon) style=format!("color: {color}") />
                    <h3 class="text-2xl font-bold">{category.title}</h3>
                </div>
                <div class="grid md:grid-cols-2 gap-6">
                    {category
                        .skills
                        .into_iter()
                        .map(|skill| {
                            let percentage = skill.percentage.min(100);
                            let color = color.clone();
                            view! {
                                <div>
                                    <div class="flex justify-between mb-2">
                                        <span>{skill.name}</span>
                                        <span class="text-muted">{format!("{percentage}%")}</span>
                                    </div>
                                    <div class="h-2 rounded bg-muted/20 overflow-hidden">
                                        <div
                                            class="h-full rounded transition-all duration-1000"
                                            style=move || {
                                                let width = if active.get() { percentage } else { 0 };
                                                format!("width: {width}%; background-color: {color}")
                                            }
                                        ></div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
