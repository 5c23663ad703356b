use log::{error, warn};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::icons::glyph;
use crate::components::page_frame::PageFrame;
use crate::components::reveal::{Reveal, RevealGroup};
use crate::contact::{self, ConsoleSink, ContactField, ContactFormDraft};
use crate::content::{self, ContactDetails, SocialLink};
use crate::reveal::Stagger;

fn field_value(e: &InputEvent) -> String {
    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
        return input.value();
    }
    e.target_dyn_into::<HtmlTextAreaElement>()
        .map(|area| area.value())
        .unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub heading: AttrValue,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let draft = use_state(ContactFormDraft::default);

    let on_input = |field: ContactField| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*draft).clone();
            next.set(field, field_value(&e));
            draft.set(next);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // `required` on the inputs normally stops this earlier
            match contact::submit(&draft, &ConsoleSink) {
                Ok(cleared) => draft.set(cleared),
                Err(err) => warn!("Contact form not submitted: {}", err),
            }
        })
    };

    html! {
        <div class="card contact-form">
            <h3>{ props.heading.clone() }</h3>
            <form onsubmit={onsubmit}>
                <div class="field">
                    <label for="name">{ ContactField::Name.label() }</label>
                    <input
                        type="text"
                        id="name"
                        name="name"
                        value={draft.name.clone()}
                        oninput={on_input(ContactField::Name)}
                        required={true}
                    />
                </div>
                <div class="field">
                    <label for="email">{ ContactField::Email.label() }</label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        value={draft.email.clone()}
                        oninput={on_input(ContactField::Email)}
                        required={true}
                    />
                </div>
                <div class="field">
                    <label for="message">{ ContactField::Message.label() }</label>
                    <textarea
                        id="message"
                        name="message"
                        rows="4"
                        value={draft.message.clone()}
                        oninput={on_input(ContactField::Message)}
                        required={true}
                    />
                </div>
                <button type="submit" class="btn btn-primary">{"Submit"}</button>
            </form>
        </div>
    }
}

fn contact_info(heading: &str, details: &ContactDetails) -> Html {
    html! {
        <div class="contact-info">
            <h3>{ heading }</h3>
            <p><span aria-hidden="true">{ glyph("pin") }</span>{ &details.address }</p>
            <p><span aria-hidden="true">{ glyph("phone") }</span>{ &details.phone }</p>
            <p>
                <span aria-hidden="true">{ glyph("mail") }</span>
                <a href={format!("mailto:{}", details.email)}>{ &details.email }</a>
            </p>
        </div>
    }
}

fn social_links(links: &[SocialLink]) -> Html {
    html! {
        <div class="social-links">
            { for links.iter().map(|link| html! {
                <a href={link.href.clone()} aria-label={link.label.clone()} class="social-link">
                    { glyph(&link.icon) }
                </a>
            }) }
        </div>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let loaded = use_memo(
        |_| {
            let loaded = content::contact_page();
            if let Err(e) = &loaded {
                error!("{}", e);
            }
            loaded
        },
        (),
    );

    let page = match &*loaded {
        Ok(page) => page,
        Err(_) => {
            // The form does not depend on the copy, keep it usable.
            return html! {
                <PageFrame title="Contact | Dhoodh Fresh">
                    <section class="content-section">
                        <div class="container narrow">
                            <ContactForm heading="Send us a Message" />
                        </div>
                    </section>
                </PageFrame>
            };
        }
    };

    html! {
        <PageFrame title={page.title.clone()} class="contact" grid_backdrop={true}>
            <section class="content-section">
                <div class="container">
                    <RevealGroup class="section-intro centered" stagger={Stagger::new(0.3, 0.2)}>
                        <h1>{ &page.intro.heading }</h1>
                        <p class="lead">{ &page.intro.body_text }</p>
                    </RevealGroup>
                    <div class="grid cols-2">
                        <Reveal delay={0.2}>
                            <ContactForm heading={page.form_heading.clone()} />
                        </Reveal>
                        <div class="stack">
                            <Reveal delay={0.4}>
                                { contact_info(&page.info_heading, &page.details) }
                            </Reveal>
                            <Reveal delay={0.6}>
                                { social_links(&page.socials) }
                            </Reveal>
                        </div>
                    </div>
                </div>
            </section>
        </PageFrame>
    }
}
