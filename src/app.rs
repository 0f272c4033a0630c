mod contact;
mod education;
mod footer;
mod hero;
mod navigation;
mod platform;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{CONFIG, PROFILE};

use contact::ContactSection;
use education::EducationSection;
use footer::Footer;
use hero::HeroSection;
use navigation::Navigation;
use platform::use_task_scope;
use projects::ProjectsSection;
use skills::SkillsSection;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let name = PROFILE.name.clone();

    view! {
        <Title formatter=move |title| format!("{name} - {title}") />
        <Meta name="description" content=PROFILE.headline.clone() />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
    }
}

/// Splash screen for a fixed time, then the whole page.
#[component]
fn Portfolio() -> impl IntoView {
    let (loading, set_loading) = signal(true);
    let scope = use_task_scope();

    Effect::new(move |_| {
        scope.with_value(|s| s.spawn_after(CONFIG.splash(), move || set_loading.set(false)));
    });

    view! {
        <Title text="Portfolio" />
        <Show when=move || !loading.get() fallback=|| view! { <Splash /> }>
            <Navigation />
            <main class="flex flex-col w-full">
                <HeroSection />
                <EducationSection />
                <SkillsSection />
                <ProjectsSection />
                <ContactSection />
            </main>
            <Footer />
        </Show>
    }
}

#[component]
fn Splash() -> impl IntoView {
    view! {
        <div class="fixed inset-0 flex items-center justify-center bg-background">
            <div class="flex flex-col items-center gap-4">
                <div class="h-12 w-12 rounded-full border-4 border-yellow/30 border-t-yellow animate-spin"></div>
                <p class="text-lg text-muted">"Loading Portfolio..."</p>
            </div>
        </div>
    }
}

/// Heading shared by every content section.
#[component]
fn SectionHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-12 section-content">
            <h2 class="font-bold text-3xl lg:text-4xl mb-4">{title}</h2>
            <p class="max-w-2xl mx-auto text-lg text-muted">{subtitle}</p>
        </div>
    }
}
