use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::reveal::use_reveal;
use crate::Route;

#[function_component(Hero)]
pub fn hero() -> Html {
    let title = use_node_ref();
    let subtitle = use_node_ref();
    let buttons = use_node_ref();

    let revealed = use_reveal(
        vec![title.clone(), subtitle.clone(), buttons.clone()],
        None,
        config::hero_reveal(),
    );

    html! {
        <section class="hero">
            <div class={classes!("hero-content", "floating", (*revealed).then(|| "revealed"))}>
                <h1 ref={title} class="hero-title">
                    {"Creative"}
                    <span class="gradient-text">{"Frontend"}</span>
                    {"Developer"}
                </h1>
                <p ref={subtitle} class="hero-subtitle">
                    {"Crafting beautiful, interactive web experiences with modern technologies. Specializing in Rust, WebAssembly and cutting-edge animations."}
                </p>
                <div ref={buttons} class="hero-buttons">
                    <Link<Route> to={Route::Projects} classes="button primary">
                        {"View My Work →"}
                    </Link<Route>>
                    <a href="/cv.pdf" class="button outline" download="cv.pdf">
                        {"Download CV"}
                    </a>
                </div>
            </div>
            <div class="orb orb-left"></div>
            <div class="orb orb-right"></div>
            <div class="orb orb-center"></div>
        </section>
    }
}
