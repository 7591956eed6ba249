use leptos::prelude::*;

use crate::content::PROFILE;

/// Year the site was built, set by build.rs.
const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 border-t border-opacity-10 text-center opacity-70">
            <div class="flex flex-col sm:flex-row justify-between items-center gap-4">
                <div>{format!("© {BUILD_YEAR} {}", PROFILE.name)}</div>
                <div class="flex gap-4">
                    <a href=PROFILE.github class="hover:opacity-100 transition-opacity">
                        "GitHub"
                    </a>
                    <a href=PROFILE.linkedin class="hover:opacity-100 transition-opacity">
                        "LinkedIn"
                    </a>
                    <a
                        href=format!("mailto:{}", PROFILE.email)
                        class="hover:opacity-100 transition-opacity"
                    >
                        "Email"
                    </a>
                </div>
                <div>"Built with Leptos & Tailwind"</div>
            </div>
        </footer>
    }
}
