use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};
use occupation_types::page::APP_TITLE;

use crate::pages::{map::MapPage, timeline::TimelinePage};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div id="app">
                <header>
                    <h1>{APP_TITLE}</h1>
                    <nav>
                        <A href="/">"Map"</A>
                        <A href="/timeline">"Timeline"</A>
                    </nav>
                </header>
                <main>
                    <Routes fallback=|| {
                        view! { <p class="error">"Page not found"</p> }
                    }>
                        <Route path=path!("/") view=MapPage/>
                        <Route path=path!("/timeline") view=TimelinePage/>
                    </Routes>
                </main>
                <footer>
                    <p>"Occupation intervals 1938–1945 · map data by Plotly"</p>
                </footer>
            </div>
        </Router>
    }
}
