//! App Root Component
//!
//! Layout shell with routing and the global context provider.

use leptos::*;
use leptos_router::*;
use zenlife::Config;

use crate::components::{Navbar, Sidebar};
use crate::pages::{Bills, Grocery, Settings, Summary, Tasks};
use crate::state::global::provide_app_state;

/// Root application component
#[component]
pub fn App(config: Config) -> impl IntoView {
    // Provide app state to all components
    provide_app_state(config);

    view! {
        <Router>
            <div class="flex min-h-screen bg-[#f9f9f9] text-gray-800">
                <Sidebar />

                <div class="flex-1 flex flex-col">
                    <Navbar />

                    <main class="flex-1">
                        <Routes>
                            <Route path="/" view=|| view! { <Redirect path="/tasks" /> } />
                            <Route path="/tasks" view=Tasks />
                            <Route path="/bills" view=Bills />
                            <Route path="/grocery" view=Grocery />
                            <Route path="/summary" view=Summary />
                            <Route path="/settings" view=Settings />
                            <Route path="/*any" view=NotFound />
                        </Routes>
                    </main>
                </div>
            </div>
        </Router>
    }
}

/// 404 page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="text-center py-16">
            <h1 class="text-6xl font-bold text-gray-400">"404"</h1>
            <p class="text-xl text-gray-500 mt-4">"Page not found"</p>
            <A href="/tasks" class="inline-block mt-8 px-6 py-3 bg-green-600 text-white rounded-lg hover:bg-green-700">
                "Go to Tasks"
            </A>
        </div>
    }
}
