use yew::prelude::*;

use crate::components::{
    features::FeaturesSection, footer::Footer, hero::Hero, projects_preview::ProjectsPreview,
};
use crate::config;
use crate::reveal::use_reveal;

#[function_component(Home)]
pub fn home() -> Html {
    let content = use_node_ref();

    use_reveal(vec![content.clone()], None, config::page_reveal());

    html! {
        <div class="home-page">
            <div ref={content} class="page-content">
                <Hero />
                <FeaturesSection />
                <ProjectsPreview />
                <Footer />
            </div>
        </div>
    }
}
