use leptos::prelude::*;

use crate::profile::PROFILE;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 bg-black border-t border-gray-800">
            <div class="container mx-auto px-4 text-center text-gray-400">
                <p>{PROFILE.copyright()}</p>
            </div>
        </footer>
    }
}
