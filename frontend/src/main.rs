use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, error};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ErrorEvent, PromiseRejectionEvent};

mod config;
mod contact;
mod error;
mod effects;
mod slideshow;
mod components {
    pub mod card;
    pub mod contact_form;
    pub mod hero;
    pub mod nav;
    pub mod toast;
}
mod pages {
    pub mod home;
    pub mod styles;
}

use components::nav::Nav;
use effects::focus::{FocusIndicators, FOCUS_CSS};
use effects::visibility::VisibilityListener;
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <main class="section not-found">
                    <h2 class="section-title">{"Page not found"}</h2>
                    <Link<Route> to={Route::Home} classes="btn primary">
                        {"Back to the homepage"}
                    </Link<Route>>
                </main>
            }
        },
    }
}

/// Logs uncaught script errors and unhandled promise rejections. These stay
/// installed for the lifetime of the page.
fn install_global_error_handlers() -> Result<(), error::FeatureError> {
    let window = error::window()?;

    let on_error = Closure::<dyn Fn(ErrorEvent)>::new(|e: ErrorEvent| {
        error!("JavaScript Error: {}", e.message());
        gloo_console::error!(e.error());
    });
    window.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())?;
    on_error.forget();

    let on_rejection = Closure::<dyn Fn(PromiseRejectionEvent)>::new(|e: PromiseRejectionEvent| {
        error!("Unhandled Promise Rejection");
        gloo_console::error!(e.reason());
        e.prevent_default();
    });
    window.add_event_listener_with_callback("unhandledrejection", on_rejection.as_ref().unchecked_ref())?;
    on_rejection.forget();

    Ok(())
}

#[function_component]
fn App() -> Html {
    // Page-wide features; each one degrades on its own.
    use_effect_with_deps(move |_| {
        info!("Initializing College Department Homepage...");
        let focus = error::init_feature("focus management", FocusIndicators::install);
        let visibility = error::init_feature("page visibility", || {
            VisibilityListener::attach(|visibility| visibility.log())
        });
        info!("Application initialized successfully!");

        move || {
            drop(focus);
            drop(visibility);
        }
    }, ());

    html! {
        <BrowserRouter>
            <style>{pages::styles::GLOBAL_CSS}</style>
            <style>{FOCUS_CSS}</style>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    error::init_feature("global error handlers", install_global_error_handlers);

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
