//! StoryLand Web App - Leptos Frontend
//!
//! Children's storybook storefront: browse, read, rate, and generate stories

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};

use crate::components::{Footer, Navbar, ToastHost};
use crate::pages::{
    GeneratePage, HomePage, LibraryPage, LoginPage, PricingPage, ProfilePage, ReaderPage,
    RegisterPage, StoryDetailPage,
};
use crate::state::session::provide_session_context;
use crate::state::toast::provide_toast_context;

#[component]
pub fn App() -> impl IntoView {
    provide_session_context();
    provide_toast_context();

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <ToastHost/>
                <main class="app-main">
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=HomePage/>
                        <Route path=path!("/stories") view=LibraryPage/>
                        <Route path=path!("/stories/:id") view=StoryDetailPage/>
                        <Route path=path!("/read/:id") view=ReaderPage/>
                        <Route path=path!("/generate") view=GeneratePage/>
                        <Route path=path!("/pricing") view=PricingPage/>
                        <Route path=path!("/profile") view=ProfilePage/>
                        <Route path=path!("/login") view=LoginPage/>
                        <Route path=path!("/register") view=RegisterPage/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: calc(100vh - 60px);">
            <div class="card" style="max-width: 500px; text-align: center;">
                <h1 style="margin-bottom: 16px; font-size: 48px;">"📚 404"</h1>
                <p style="margin-bottom: 24px;">"This page wandered off into a storybook."</p>
                <A href="/">
                    <span class="btn btn-primary" style="margin-top: 20px; display: inline-block;">
                        "Back to StoryLand"
                    </span>
                </A>
            </div>
        </div>
    }
}
