use web_sys::{HtmlElement, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::motion::pulse;
use crate::config;
use crate::contact::{self, ContactField, ContactForm};
use crate::content::CONTACT_DETAILS;
use crate::reveal::dom::DomAnimator;
use crate::reveal::use_reveal;

static PROMISES: [&str; 3] = [
    "Quick response within 24 hours",
    "Free consultation and project estimation",
    "Flexible working arrangements",
];

#[function_component(Contact)]
pub fn contact_page() -> Html {
    let hero = use_node_ref();
    let form_panel = use_node_ref();
    let info_panel = use_node_ref();
    let form = use_state(ContactForm::default);
    let animator = use_memo(|_| DomAnimator::default(), ());

    use_reveal(vec![hero.clone()], None, config::page_hero_reveal());
    use_reveal(vec![form_panel.clone()], None, config::side_reveal(-50.0, 400));
    use_reveal(vec![info_panel.clone()], None, config::side_reveal(50.0, 600));

    let oninput = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let (name, value) = if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                (input.name(), input.value())
            } else if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                (area.name(), area.value())
            } else {
                return;
            };
            if let Some(field) = ContactField::from_name(&name) {
                form.set((*form).clone().with(field, value));
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let form_panel = form_panel.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            form.set(contact::submit(&form));
            if let Some(element) = form_panel.cast::<HtmlElement>() {
                pulse(animator.clone(), element, 1.05);
            }
        })
    };

    html! {
        <div class="contact-page">
            <section class="page-hero">
                <div ref={hero}>
                    <h1>{"Get In "}<span class="gradient-text">{"Touch"}</span></h1>
                    <p>
                        {"Ready to bring your ideas to life? Let's discuss your project and create something amazing together."}
                    </p>
                </div>
            </section>

            <section class="contact-grid">
                <div ref={form_panel} class="panel">
                    <h2>{"Send Message"}</h2>
                    <form onsubmit={onsubmit} class="contact-form">
                        <div class="form-row">
                            <label>{"Name"}
                                <input id="name" name="name" type="text" required=true
                                    placeholder="Your name" value={form.name.clone()} oninput={oninput.clone()} />
                            </label>
                            <label>{"Email"}
                                <input id="email" name="email" type="email" required=true
                                    placeholder="your@email.com" value={form.email.clone()} oninput={oninput.clone()} />
                            </label>
                        </div>
                        <label>{"Subject"}
                            <input id="subject" name="subject" type="text" required=true
                                placeholder="Project inquiry" value={form.subject.clone()} oninput={oninput.clone()} />
                        </label>
                        <label>{"Message"}
                            <textarea id="message" name="message" rows="6" required=true
                                placeholder="Tell me about your project..." value={form.message.clone()} oninput={oninput} />
                        </label>
                        <button type="submit" class="button primary wide">{"Send Message"}</button>
                    </form>
                </div>

                <div ref={info_panel} class="panel">
                    <h2>{"Contact Info"}</h2>
                    <div class="contact-details">
                        { for CONTACT_DETAILS.iter().map(|(label, value)| html! {
                            <div class="contact-detail">
                                <h3>{*label}</h3>
                                <p>{*value}</p>
                            </div>
                        }) }
                    </div>
                    <h3>{"Let's Work Together"}</h3>
                    <p>
                        {"I'm always excited to work on new projects and collaborate with amazing people. Whether you have a specific project in mind or just want to explore possibilities, I'd love to hear from you."}
                    </p>
                    <ul class="promises">
                        { for PROMISES.iter().map(|promise| html! { <li>{*promise}</li> }) }
                    </ul>
                </div>
            </section>

            <Footer />
        </div>
    }
}
