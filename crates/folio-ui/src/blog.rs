//! Blog list and teaser cards.

use folio_core::BlogPost;
use leptos::prelude::*;

use crate::icons::ArrowRight;
use crate::section::SectionHeader;

/// Blog section: header plus the post list.
#[component]
pub fn BlogSection(
    /// Posts in display order.
    posts: Signal<Vec<BlogPost>>,
) -> impl IntoView {
    view! {
      <section id="blog" class="relative z-10 px-4 py-20 max-w-4xl mx-auto">
        <SectionHeader title="Latest Writing" number=4 />
        <div class="space-y-6">
          <For
            each=move || { posts.get().into_iter().enumerate().collect::<Vec<_>>() }
            key=|(index, post)| (*index, post.title.clone())
            children=move |(_, post)| view! { <BlogCard post=post /> }
          />

        </div>
      </section>
    }
}

/// One blog teaser card.
#[component]
fn BlogCard(
    /// The post to display.
    post: BlogPost,
) -> impl IntoView {
    view! {
      <a href=post.link.clone() class="block group mb-8">
        <div class="glass-panel p-6 rounded-2xl transition-all duration-300 hover:border-blue-500 hover:shadow-md">
          <p class="font-mono text-sm text-gray-500 mb-2">{post.date.clone()}</p>
          <h3 class="font-syne text-2xl font-bold mb-3 text-black group-hover:text-blue-600 transition-colors">
            {post.title.clone()}
          </h3>
          <p class="font-grotesk text-gray-700 leading-relaxed">{post.excerpt.clone()}</p>
          <div class="mt-4 font-mono text-sm text-blue-600 font-bold group-hover:underline flex items-center">
            "Read more " <ArrowRight class="ml-2 w-4 h-4" />
          </div>
        </div>
      </a>
    }
}
