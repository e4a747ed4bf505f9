use leptos::{ev, prelude::*};
use leptos_use::use_media_query;

use crate::profile::PROFILE;
use crate::visual::{menu_style, nav_style, toggle, MOBILE_BREAKPOINT_QUERY};

use super::icons::MenuGlyph;

const SECTIONS: [(&str, &str); 3] = [
    ("#about", "About"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];

#[component]
pub fn NavBar(
    scrolled: ReadSignal<bool>,
    menu_open: ReadSignal<bool>,
    set_menu_open: WriteSignal<bool>,
) -> impl IntoView {
    // the mobile panel is unreachable once the desktop links show, so don't leave it open
    let is_desktop = use_media_query(MOBILE_BREAKPOINT_QUERY);
    Effect::new(move |_| {
        if is_desktop.get() {
            set_menu_open.set(false);
        }
    });

    let close_menu = move |_: ev::MouseEvent| set_menu_open.set(false);

    view! {
        <nav class=move || {
            format!("fixed w-full z-50 transition-all duration-300 {}", nav_style(scrolled.get()))
        }>
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <a
                        href="#"
                        class="text-xl font-bold bg-gradient-to-r from-purple-400 to-pink-600 text-transparent bg-clip-text hover:scale-110 transition-transform"
                    >
                        {PROFILE.initials.clone()}
                    </a>

                    <button
                        class="md:hidden text-gray-400 hover:text-white"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = toggle(*open))
                    >
                        <MenuGlyph open=menu_open />
                    </button>

                    <div class="hidden md:flex items-center space-x-8">
                        {SECTIONS
                            .iter()
                            .map(|&(href, label)| {
                                view! {
                                    <a
                                        href=href
                                        class="text-gray-400 hover:text-purple-400 transition-colors hover:scale-110 transition-transform"
                                    >
                                        {label}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <a
                            href=PROFILE.resume.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="bg-purple-600 hover:bg-purple-700 px-4 py-2 rounded-lg transition-all hover:scale-110 hover:shadow-lg hover:shadow-purple-500/20"
                        >
                            "Resume"
                        </a>
                    </div>
                </div>

                <div class=move || {
                    format!(
                        "md:hidden transition-all duration-300 overflow-hidden {}",
                        menu_style(menu_open.get()),
                    )
                }>
                    <div class="py-4 space-y-4">
                        {SECTIONS
                            .iter()
                            .map(|&(href, label)| {
                                view! {
                                    <a
                                        href=href
                                        on:click=close_menu
                                        class="block text-gray-400 hover:text-purple-400 transition-colors"
                                    >
                                        {label}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <a
                            href=PROFILE.resume.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            on:click=close_menu
                            class="inline-block bg-purple-600 hover:bg-purple-700 px-4 py-2 rounded-lg transition-colors"
                        >
                            "Resume"
                        </a>
                    </div>
                </div>
            </div>
        </nav>
    }
}
