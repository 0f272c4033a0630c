use leptos::prelude::*;

use crate::content::{Project, PROJECTS};

use super::SectionHeader;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id="projects" class="py-24">
            <div class="mx-auto px-4 max-w-6xl">
                <SectionHeader
                    title="Featured Projects"
                    subtitle="A selection of things I've built and designed"
                />
                <div class="grid md:grid-cols-2 gap-8">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project=project.clone() /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <article class="group bg-brightBlack/30 rounded-lg border border-muted/30 overflow-hidden hover:-translate-y-2 hover:shadow-xl transition-all duration-300">
            <div class="relative h-48 overflow-hidden">
                <img
                    src=project.image
                    alt=project.title.clone()
                    class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-500"
                />
                <div class="absolute top-4 left-4 h-12 w-12 rounded-full bg-background/90 flex items-center justify-center">
                    <i class=format!("{} text-yellow text-xl", project.icon) />
                </div>
            </div>
            <div class="p-6">
                <h3 class="text-xl font-bold mb-3">{project.title}</h3>
                <p class="text-muted mb-4 leading-relaxed">{project.description}</p>
                <ul class="list-disc list-inside text-sm mb-4 space-y-1">
                    {project
                        .features
                        .into_iter()
                        .map(|feature| view! { <li>{feature}</li> })
                        .collect_view()}
                </ul>
                <div class="flex flex-wrap gap-2 mb-6">
                    {project
                        .technologies
                        .into_iter()
                        .map(|tech| {
                            view! {
                                <span class="bg-cyan/20 text-cyan px-2 py-1 rounded text-xs">
                                    {tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-4">
                    {project
                        .github
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-muted hover:text-yellow transition-colors duration-200"
                                >
                                    <i class="extra-github mr-1" />
                                    "Code"
                                </a>
                            }
                        })}
                    {project
                        .demo
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-muted hover:text-yellow transition-colors duration-200"
                                >
                                    <i class="extra-link mr-1" />
                                    "Live Demo"
                                </a>
                            }
                        })}
                </div>
            </div>
        </article>
    }
}
