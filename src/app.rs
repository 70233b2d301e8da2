use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::path;

use crate::core::Page;
use crate::ui::pages::{AuthPage, CartPage, CheckoutPage, NotFoundPage, SectionPage, ToolsPage};
use crate::ui::{AppServices, Header, ToastContainer};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let services = AppServices::new();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/aitoolhub.css"/>
        <Title formatter=|text| format!("{text} | AI Tool Hub")/>

        <Router>
            <Storefront services=services />
        </Router>
        <ToastContainer toasts=services.toasts />
    }
}

/// Header plus routed content. Lives inside `<Router>` so it can navigate.
#[component]
fn Storefront(services: AppServices) -> impl IntoView {
    let navigate = use_navigate();
    let on_page_change = Callback::new(move |page: Page| {
        tracing::debug!(%page, "page change");
        navigate(page.path(), Default::default());
    });

    let location = use_location();
    let current_page = Signal::derive(move || Page::from_path(&location.pathname.get()));

    let section = move |page: Page| {
        move || view! { <SectionPage page=page services=services on_page_change=on_page_change /> }
    };

    view! {
        <div class="min-h-screen bg-theme-primary text-theme-primary">
            <Header current_page=current_page on_page_change=on_page_change services=services />
            <main>
                <Routes fallback=move || view! { <NotFoundPage on_page_change=on_page_change /> }>
                    <Route path=path!("/") view=section(Page::Home) />
                    <Route path=path!("/ai-tools") view=move || view! { <ToolsPage services=services /> } />
                    <Route path=path!("/courses") view=section(Page::Courses) />
                    <Route path=path!("/about-us") view=section(Page::AboutUs) />
                    <Route path=path!("/contact") view=section(Page::Contact) />
                    <Route path=path!("/profile") view=section(Page::Profile) />
                    <Route path=path!("/admin") view=section(Page::Admin) />
                    <Route
                        path=path!("/cart")
                        view=move || view! { <CartPage services=services on_page_change=on_page_change /> }
                    />
                    <Route
                        path=path!("/checkout")
                        view=move || view! { <CheckoutPage services=services on_page_change=on_page_change /> }
                    />
                    <Route
                        path=path!("/auth")
                        view=move || view! { <AuthPage services=services on_page_change=on_page_change /> }
                    />
                </Routes>
            </main>
        </div>
    }
}
