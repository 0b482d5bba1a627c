use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content::{PREVIEWED_PROJECTS, PROJECTS};
use crate::reveal::use_reveal;
use crate::Route;

#[function_component(ProjectsPreview)]
pub fn projects_preview() -> Html {
    let section = use_node_ref();
    let cards = use_memo(|_| (0..PREVIEWED_PROJECTS).map(|_| NodeRef::default()).collect::<Vec<_>>(), ());

    use_reveal((*cards).clone(), Some(section.clone()), config::project_cards_reveal(0.7));

    html! {
        <section ref={section} class="projects-preview">
            <div class="section-heading">
                <h2>{"Featured "}<span class="gradient-text">{"Projects"}</span></h2>
                <p>{"A showcase of my recent work and creative solutions"}</p>
            </div>
            <div class="card-grid">
                { for PROJECTS.iter().zip(cards.iter()).map(|(project, node)| html! {
                    <div key={project.title} ref={node.clone()} class="project-card">
                        <div class={classes!("project-image", project.gradient)}></div>
                        <h3>{project.title}</h3>
                        <p>{project.summary}</p>
                        <div class="tags">
                            { for project.tags.iter().take(4).map(|tag| html! { <span class="tag">{*tag}</span> }) }
                        </div>
                    </div>
                }) }
            </div>
            <div class="section-action">
                <Link<Route> to={Route::Projects} classes="button outline">
                    {"View All Projects →"}
                </Link<Route>>
            </div>
        </section>
    }
}
