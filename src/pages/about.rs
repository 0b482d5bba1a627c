use yew::prelude::*;

use crate::components::footer::Footer;
use crate::config;
use crate::content::{SKILLS, STATS};
use crate::reveal::use_reveal;

fn node_refs(count: usize) -> Vec<NodeRef> {
    (0..count).map(|_| NodeRef::default()).collect()
}

#[function_component(About)]
pub fn about() -> Html {
    let hero = use_node_ref();
    let skills_section = use_node_ref();
    let stats_section = use_node_ref();
    let skills = use_memo(|_| node_refs(SKILLS.len()), ());
    let stats = use_memo(|_| node_refs(STATS.len()), ());

    use_reveal(vec![hero.clone()], None, config::page_hero_reveal());
    use_reveal((*skills).clone(), Some(skills_section.clone()), config::skills_reveal());
    use_reveal((*stats).clone(), Some(stats_section.clone()), config::stats_reveal());

    html! {
        <div class="about-page">
            <section class="page-hero">
                <div ref={hero} class="about-intro">
                    <div>
                        <h1>{"About "}<span class="gradient-text">{"Me"}</span></h1>
                        <p>
                            {"I'm a passionate frontend developer with a love for creating beautiful, functional web experiences. With expertise in modern technologies and a keen eye for design, I bring ideas to life through code."}
                        </p>
                        <p>
                            {"When I'm not coding, you can find me exploring new technologies, contributing to open source projects, or enjoying a good cup of coffee while sketching out my next creative project."}
                        </p>
                    </div>
                    <div class="profile-frame">
                        <img src="/assets/profile.svg" alt="Profile" />
                    </div>
                </div>
            </section>

            <section ref={skills_section} class="skills">
                <h2>{"Technical Skills"}</h2>
                <div class="skill-list">
                    { for SKILLS.iter().zip(skills.iter()).map(|(skill, node)| html! {
                        <div key={skill.name} ref={node.clone()} class="skill">
                            <div class="skill-label">
                                <span>{skill.name}</span>
                                <span>{format!("{}%", skill.level)}</span>
                            </div>
                            <div class="skill-bar">
                                <div class="skill-fill" style={format!("width: {}%;", skill.level)}></div>
                            </div>
                        </div>
                    }) }
                </div>
            </section>

            <section ref={stats_section} class="stats">
                { for STATS.iter().zip(stats.iter()).map(|(stat, node)| html! {
                    <div key={stat.label} ref={node.clone()} class="stat">
                        <div class="stat-number">{stat.number}</div>
                        <div class="stat-label">{stat.label}</div>
                    </div>
                }) }
            </section>

            <Footer />
        </div>
    }
}
