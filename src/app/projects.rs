use leptos::prelude::*;

use crate::profile::{ProjectEntry, PROFILE};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="py-20 bg-black relative overflow-hidden">
            <div class="absolute inset-0 grid-background opacity-20" />
            <div class="container mx-auto px-4 relative">
                <h2 class="text-3xl font-bold mb-12 text-center">"Featured Projects"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROFILE
                        .projects
                        .iter()
                        .map(|project| view! { <ProjectCard project=project.clone() /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: ProjectEntry) -> impl IntoView {
    view! {
        <div class="group bg-gray-900/50 backdrop-blur-sm rounded-xl overflow-hidden hover:transform hover:scale-105 transition-all duration-300 hover-glow">
            <div class="relative overflow-hidden">
                <img
                    src=project.image
                    alt=project.title.clone()
                    loading="lazy"
                    class="w-full h-48 object-cover transition-transform duration-300 group-hover:scale-110"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-gray-900 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300" />
            </div>
            <div class="p-6">
                <h3 class="text-xl font-semibold mb-2">{project.title}</h3>
                <p class="text-gray-400 mb-4">{project.description}</p>
                <div class="flex flex-wrap gap-2">
                    {project
                        .tech
                        .into_iter()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 bg-purple-600/20 text-purple-400 rounded-full text-sm">
                                    {tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
