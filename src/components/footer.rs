use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::SERVICES;
use crate::Route;

static SOCIAL: [(&str, &str); 4] = [
    ("GitHub", "#"),
    ("LinkedIn", "#"),
    ("Twitter", "#"),
    ("Email", "mailto:hello@frontenddev.com"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="footer">
            <div class="footer-grid">
                <div class="footer-about">
                    <div class="brand">
                        <span class="brand-mark">{"FD"}</span>
                        <span class="brand-name">{"Frontend Dev"}</span>
                    </div>
                    <p>
                        {"Passionate frontend developer creating beautiful, functional web experiences. Let's build something amazing together."}
                    </p>
                    <div class="social-links">
                        { for SOCIAL.iter().map(|(label, href)| html! {
                            <a href={*href} aria-label={*label}>{*label}</a>
                        }) }
                    </div>
                </div>
                <div>
                    <h3>{"Quick Links"}</h3>
                    <ul>
                        <li><Link<Route> to={Route::Home}>{"Home"}</Link<Route>></li>
                        <li><Link<Route> to={Route::About}>{"About"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Projects}>{"Projects"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>></li>
                    </ul>
                </div>
                <div>
                    <h3>{"Services"}</h3>
                    <ul>
                        { for SERVICES.iter().map(|service| html! { <li>{*service}</li> }) }
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                {format!("© {} Frontend Developer Portfolio. All rights reserved.", year)}
            </div>
        </footer>
    }
}
