pub mod about;
pub mod contact;
pub mod home;
pub mod projects;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="page-hero not-found">
            <h1>{"404"}</h1>
            <p>{"This page wandered off."}</p>
            <Link<Route> to={Route::Home} classes="button primary">{"Back home"}</Link<Route>>
        </section>
    }
}
