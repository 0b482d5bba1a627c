//! Portfolio site: home, about, projects and contact pages with scroll-triggered
//! reveal animations that always end with the content visible.

use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod config;
pub mod contact;
pub mod content;
pub mod pages;
pub mod reveal;
mod styles;

use pages::{about::About, contact::Contact, home::Home, projects::Projects, NotFound};
use reveal::use_reveal;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/projects")]
    Projects,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Projects => {
            info!("Rendering Projects page");
            html! { <Projects /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

static NAV_LINKS: [(Route, &str); 4] = [
    (Route::Home, "Home"),
    (Route::About, "About"),
    (Route::Projects, "Projects"),
    (Route::Contact, "Contact"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let logo = use_node_ref();
    let links = use_memo(|_| NAV_LINKS.iter().map(|_| NodeRef::default()).collect::<Vec<_>>(), ());

    {
        let mut items = vec![logo.clone()];
        items.extend(links.iter().cloned());
        use_reveal(items, None, config::nav_reveal());
    }

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = {
                    let window = window.clone();
                    Closure::wrap(Box::new(move || {
                        if let Some(scroll_y) = window.as_ref().and_then(|w| w.scroll_y().ok()) {
                            is_scrolled.set(scroll_y > 50.0);
                        }
                    }) as Box<dyn FnMut()>)
                };

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }

                move || {
                    if let Some(window) = &window {
                        let _ = window
                            .remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <div ref={logo} class="nav-item">
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        <span class="brand-mark">{"FD"}</span>
                        <span class="brand-name">{"Frontend Dev"}</span>
                    </Link<Route>>
                </div>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_LINKS.iter().zip(links.iter()).map(|((route, label), node)| html! {
                        <div ref={node.clone()} class="nav-item" onclick={close_menu.clone()}>
                            <Link<Route> to={route.clone()} classes="nav-link">
                                {*label}
                            </Link<Route>>
                        </div>
                    }) }
                </div>
            </div>
        </nav>
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>{styles::GLOBAL}</style>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
