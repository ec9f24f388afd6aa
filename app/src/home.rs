//! Home page composition.

use folio_ui::{
    BlogSection, CertificationsSection, ChevronDown, ExperienceAccordion, Marquee,
    MotionPreference, PortfolioSection, SectionHeader,
};
use leptos::prelude::*;

use crate::browser;
use crate::data;
use crate::state::AppState;

/// In-page fragment links animate instead of jumping; the fixed nav bar
/// height is accounted for in the scroll target. The default jump is only
/// suppressed when the target exists and the animated scroll ran.
fn smooth(fragment: &'static str) -> impl Fn(web_sys::MouseEvent) + Clone {
    move |ev| {
        if browser::scroll_to_fragment(fragment) {
            ev.prevent_default();
        }
    }
}

/// The single-page home view: hero, profile, experience, portfolio,
/// blog, certifications, contact footer.
#[component]
pub fn HomePage(
    /// Shared application state.
    state: AppState,
    /// Base path of the current deployment.
    base_path: String,
    /// Client-side navigation callback.
    #[prop(into)]
    on_navigate: Callback<String>,
) -> impl IntoView {
    let motion = MotionPreference::from_context();

    view! {
      <div class="relative min-h-screen bg-white">
        <nav class="fixed top-0 left-0 w-full p-6 flex justify-between items-center z-50 bg-white/80 backdrop-blur-md border-b border-gray-100">
          <a href="#" class="font-syne font-bold text-xl tracking-tighter text-black">
            "Luca Deluca"
          </a>
          <div class="hidden md:flex gap-8 font-grotesk text-sm font-semibold text-gray-700">
            <a href="#profile" on:click=smooth("#profile") class="hover:text-blue-600 transition-colors">
              "PROFILE"
            </a>
            <a
              href="#experience"
              on:click=smooth("#experience")
              class="hover:text-blue-600 transition-colors"
            >
              "EXPERIENCE"
            </a>
            <a
              href="#portfolio"
              on:click=smooth("#portfolio")
              class="hover:text-blue-600 transition-colors"
            >
              "PORTFOLIO"
            </a>
            <a href="#blog" on:click=smooth("#blog") class="hover:text-blue-600 transition-colors">
              "BLOG"
            </a>
          </div>
          <a
            href="mailto:lucagdeluca@gmail.com"
            class="font-grotesk text-sm border-2 border-black px-4 py-2 rounded-full hover:bg-black hover:text-white transition-colors font-bold"
          >
            "CONTACT"
          </a>
        </nav>

        <section class="relative min-h-screen flex flex-col justify-center items-center p-4 pt-20 z-10">
          <div class="w-full max-w-[90vw]">
            <h1 class=format!(
              "font-syne font-extrabold leading-[0.85] tracking-tighter text-center text-black hero-title {}",
              motion.entrance_class(),
            )>"LUCA"</h1>
            <h1 class=format!(
              "font-syne font-extrabold leading-[0.85] tracking-tighter text-center text-transparent bg-clip-text bg-gradient-to-b from-black to-blue-800 pb-4 hero-title {}",
              motion.entrance_delayed_class(),
            )>"DELUCA"</h1>
          </div>

          <div class=format!("mt-8 md:mt-12 max-w-2xl text-center {}", motion.entrance_delayed_class())>
            <p class="font-grotesk text-xl md:text-2xl font-light tracking-wide bg-gray-100 inline-block px-6 py-3 rounded-full text-black">
              "Data Scientist" <span class="mx-2 text-blue-500">"•"</span> "AI Engineering"
              <span class="mx-2 text-blue-500">"•"</span> "Transport Ops"
            </p>
          </div>

          <div class=format!(
            "absolute bottom-10 left-1/2 transform -translate-x-1/2 {}",
            motion.bounce_class(),
          )>
            <ChevronDown class="w-8 h-8 text-black opacity-50" />
          </div>
        </section>

        <section id="profile" class="relative z-10 px-4 py-20 max-w-6xl mx-auto">
          <SectionHeader title="Profile" number=1 />
          <div class="grid md:grid-cols-12 gap-8">
            <div class="md:col-span-4">
              <div class="glass-panel p-6 rounded-2xl h-full flex flex-col justify-between bg-white border-gray-200 shadow-sm">
                <div>
                  <p class="font-mono text-xs text-gray-500 mb-2">"LOCATION"</p>
                  <p class="font-syne text-xl font-bold mb-6 text-black">"Novara, Italy"</p>

                  <p class="font-mono text-xs text-gray-500 mb-2">"LANGUAGES"</p>
                  <ul class="font-grotesk font-semibold space-y-1 text-gray-800">
                    <li>"Portuguese (Native)"</li>
                    <li>"English (Fluent)"</li>
                    <li>"Italian (Professional)"</li>
                  </ul>
                </div>
                <div class="mt-8">
                  <p class="font-mono text-xs text-gray-500 mb-2">"CONNECT"</p>
                  <a
                    href="mailto:lucagdeluca@gmail.com"
                    class="font-grotesk truncate text-blue-600 hover:underline"
                  >
                    "lucagdeluca@gmail.com"
                  </a>
                </div>
              </div>
            </div>
            <div class="md:col-span-8">
              <p class="font-grotesk text-2xl md:text-4xl leading-tight font-light text-black">
                "Specialized in "
                <span class="font-bold bg-yellow-200 px-1">"AI-driven analytics"</span>
                " and large-scale data engineering. With over five years of experience transforming global transport operations through automation and "
                <span class="font-bold text-blue-700">"predictive insights"</span> "."
              </p>
              <p class="mt-8 font-grotesk text-lg text-gray-700 leading-relaxed">
                "Expert in Microsoft Fabric (Data Factory, Synapse, Lakehouse, Power BI), PySpark, SQL, and Azure OpenAI, I design end-to-end pipelines combining machine learning, GPT automation, and real-time dashboards."
              </p>
            </div>
          </div>
        </section>

        <Marquee items=data::skills() />

        <section id="experience" class="relative z-10 px-4 py-20 max-w-5xl mx-auto">
          <SectionHeader title="Experience" number=2 />
          <ExperienceAccordion
            items=data::experiences()
            active=state.active_experience()
            on_select=move |index| state.select_experience(index)
          />
        </section>

        <PortfolioSection projects=state.projects() base_path=base_path on_navigate=on_navigate />

        <BlogSection posts=state.posts() />

        <CertificationsSection items=data::certifications() />

        <footer class="relative z-10 py-32 bg-black text-white overflow-hidden">
          <div class="container mx-auto px-4 text-center relative z-10">
            <h2 class="font-syne text-6xl md:text-9xl font-bold mb-8 tracking-tighter hover:text-blue-500 transition-colors duration-300 cursor-pointer">
              <a href="mailto:lucagdeluca@gmail.com">"SAY HELLO"</a>
            </h2>
            <div class="flex flex-col md:flex-row justify-center gap-8 font-grotesk text-lg">
              <a href="#" class="hover:underline hover:text-blue-400 transition-colors">
                "LinkedIn"
              </a>
              <a href="#" class="hover:underline hover:text-blue-400 transition-colors">
                "GitHub"
              </a>
              <span>"+39 333 418 5950"</span>
            </div>
            <p class="mt-20 font-mono text-xs text-gray-500">
              "© 2025 Luca G Deluca. Built with Rust & Leptos."
            </p>
          </div>

          <div class="absolute inset-0 opacity-20 footer-grid"></div>
        </footer>
      </div>
    }
}
