use yew::prelude::*;

use crate::components::motion::use_hover_scale;
use crate::config;
use crate::content::{Feature, FEATURES};
use crate::reveal::use_reveal;

#[derive(Properties, PartialEq)]
struct FeatureCardProps {
    node: NodeRef,
    index: usize,
    revealed: bool,
}

#[function_component(FeatureCard)]
fn feature_card(props: &FeatureCardProps) -> Html {
    let (onmouseenter, onmouseleave) = use_hover_scale(props.node.clone(), 1.05, props.revealed);
    let Feature {
        icon,
        title,
        description,
        gradient,
    } = &FEATURES[props.index];

    html! {
        <div ref={props.node.clone()} class="feature-card" onmouseenter={onmouseenter} onmouseleave={onmouseleave}>
            <div class={classes!("feature-icon", *gradient)}>{*icon}</div>
            <h3>{*title}</h3>
            <p>{*description}</p>
            <div class={classes!("card-border", *gradient)}></div>
        </div>
    }
}

#[function_component(FeaturesSection)]
pub fn features_section() -> Html {
    let section = use_node_ref();
    let cards = use_memo(|_| FEATURES.iter().map(|_| NodeRef::default()).collect::<Vec<_>>(), ());

    let revealed = use_reveal((*cards).clone(), Some(section.clone()), config::feature_cards_reveal());

    html! {
        <section ref={section} class="features">
            <div class="section-heading">
                <h2>{"What I "}<span class="gradient-text">{"Bring"}</span></h2>
                <p>{"Combining technical expertise with creative vision to deliver exceptional web solutions"}</p>
            </div>
            <div class="card-grid">
                { for cards.iter().enumerate().map(|(index, node)| html! {
                    <FeatureCard key={index} node={node.clone()} index={index} revealed={*revealed} />
                }) }
            </div>
        </section>
    }
}
