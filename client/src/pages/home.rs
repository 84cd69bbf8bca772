//! The single portfolio page: hero, work, services, about and contact.
//!
//! ARCHITECTURE
//! ============
//! Sections are static markup. Interactive pieces (nav, menu, splash, gallery,
//! counters) are components that pull shared state from context, so this page
//! only decides layout and copy.

use leptos::prelude::*;

use crate::components::counter::{Experience, ExperienceItem};
use crate::components::gallery_modal::GalleryModal;
use crate::components::loading_screen::LoadingScreen;
use crate::components::nav_bar::{NavBar, on_section_link};
use crate::components::project_card::ProjectCard;

struct ProjectTile {
    project: &'static str,
    title: &'static str,
    category: &'static str,
    cover: &'static str,
}

const PROJECTS: &[ProjectTile] = &[
    ProjectTile {
        project: "cotton:on",
        title: "Cotton:On",
        category: "Visual Merchandising",
        cover: "https://i.imgur.com/uKEhiwW.jpeg",
    },
    ProjectTile {
        project: "flyingtiger",
        title: "Flying Tiger",
        category: "Retail Display",
        cover: "https://i.imgur.com/2c7KUea.jpeg",
    },
    ProjectTile {
        project: "designs",
        title: "Designs",
        category: "Graphic Design",
        cover: "https://i.imgur.com/peO4Kqn.png",
    },
];

const SERVICES: &[(&str, &str)] = &[
    ("Window Displays", "Seasonal and campaign windows that pull people in from the street."),
    ("In-store Merchandising", "Floor layouts, tables and walls planned around how customers shop."),
    ("Graphic Design", "Posters, signage and illustrations that carry a brand into the store."),
];

const EXPERIENCE: &[ExperienceItem] = &[
    ExperienceItem { figure: "5", label: "Years of experience" },
    ExperienceItem { figure: "40", label: "Store installations" },
    ExperienceItem { figure: "3", label: "Retail brands" },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <LoadingScreen/>
        <NavBar/>
        <main>
            <section id="home" class="hero">
                <div class="hero-content">
                    <h3>"Hi, I'm a"</h3>
                    <h1>"Visual Merchandiser"</h1>
                    <h2>"& Designer"</h2>
                    <p class="hero-description">
                        "I design retail spaces and the graphics that live in them."
                    </p>
                    <div class="social-links">
                        <a href="#work" class="btn" on:click=move |ev| on_section_link(ev, "#work")>
                            "View Work"
                        </a>
                        <a href="#contact" class="btn btn-outline" on:click=move |ev| on_section_link(ev, "#contact")>
                            "Get in Touch"
                        </a>
                    </div>
                </div>
            </section>

            <section id="work" class="work">
                <h2>"Selected Work"</h2>
                <div class="projects-grid">
                    {PROJECTS
                        .iter()
                        .map(|tile| {
                            view! {
                                <ProjectCard
                                    project=tile.project
                                    title=tile.title
                                    category=tile.category
                                    cover=tile.cover
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="services" class="services">
                <h2>"Services"</h2>
                <div class="services-grid">
                    {SERVICES
                        .iter()
                        .map(|&(name, blurb)| {
                            view! {
                                <div class="service-card">
                                    <h3>{name}</h3>
                                    <p>{blurb}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="about" class="about">
                <h2>"About"</h2>
                <div class="about-content">
                    <p>
                        "From first sketch to final install, I plan how a space tells a story "
                        "and then build it."
                    </p>
                </div>
                <Experience items=EXPERIENCE/>
            </section>

            <section id="contact" class="contact">
                <h2>"Contact"</h2>
                <p>"Have a project in mind? Let's talk."</p>
                <a href="mailto:hello@example.com" class="btn">"hello@example.com"</a>
            </section>
        </main>
        <GalleryModal/>
    }
}
