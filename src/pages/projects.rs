use yew::prelude::*;

use crate::components::footer::Footer;
use crate::config;
use crate::content::PROJECTS;
use crate::reveal::use_reveal;

#[function_component(Projects)]
pub fn projects() -> Html {
    let hero = use_node_ref();
    let grid = use_node_ref();
    let cards = use_memo(|_| PROJECTS.iter().map(|_| NodeRef::default()).collect::<Vec<_>>(), ());

    use_reveal(vec![hero.clone()], None, config::page_hero_reveal());
    use_reveal((*cards).clone(), Some(grid.clone()), config::project_cards_reveal(0.8));

    html! {
        <div class="projects-page">
            <section class="page-hero">
                <div ref={hero}>
                    <h1>{"My "}<span class="gradient-text">{"Projects"}</span></h1>
                    <p>
                        {"A collection of projects that showcase my skills in frontend development, UI/UX design, and creative problem-solving."}
                    </p>
                </div>
            </section>

            <section ref={grid} class="card-grid projects-grid">
                { for PROJECTS.iter().zip(cards.iter()).map(|(project, node)| html! {
                    <div key={project.title} ref={node.clone()} class="project-card">
                        <div class={classes!("project-image", project.gradient)}>
                            <div class="project-links">
                                <a href={project.live_url} class="button small">{"Live Demo"}</a>
                                <a href={project.source_url} class="button small outline">{"Code"}</a>
                            </div>
                        </div>
                        <h3>{project.title}</h3>
                        <p>{project.description}</p>
                        <div class="tags">
                            { for project.tags.iter().map(|tag| html! { <span class="tag">{*tag}</span> }) }
                        </div>
                    </div>
                }) }
            </section>

            <Footer />
        </div>
    }
}
