use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::floating_shape::FloatingShape;
use crate::components::icons::glyph;
use crate::components::image::ContentImage;
use crate::components::reveal::{Reveal, RevealGroup};
use crate::content::{
    Action, Block, Card, ContentSection, Faq, Nutrient, Product, Quote, Recipe, ScheduleSlot, Section, Stat,
    Step, TeamMember, Testimonial,
};
use crate::reveal::{Motion, Stagger};
use crate::Route;

/// Internal links go through the router, anything else is a plain anchor.
pub fn action_link(action: &Action) -> Html {
    let class = if action.primary { "btn btn-primary" } else { "btn btn-outline" };
    match Route::recognize(&action.href) {
        Some(route) if route != Route::NotFound => html! {
            <Link<Route> to={route} classes={classes!(class)}>{ &action.label }</Link<Route>>
        },
        _ => html! {
            <a href={action.href.clone()} class={class}>{ &action.label }</a>
        },
    }
}

fn section_intro(intro: &ContentSection, centered: bool) -> Html {
    html! {
        <Reveal class={classes!("section-intro", centered.then_some("centered"))}>
            <h2>{ &intro.heading }</h2>
            if !intro.body_text.is_empty() {
                <p class="lead">{ &intro.body_text }</p>
            }
        </Reveal>
    }
}

fn card_view(card: &Card) -> Html {
    html! {
        <article class="card">
            if let Some(image) = &card.image {
                <ContentImage src={image.clone()} alt={card.title.clone()} class="card-image" />
            }
            <div class="card-body">
                if let Some(icon) = &card.icon {
                    <span class="card-icon" aria-hidden="true">{ glyph(icon) }</span>
                }
                <h3>{ &card.title }</h3>
                <p>{ &card.description }</p>
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: Product,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let hovered = use_state(|| false);
    let product = &props.product;

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <article class={classes!("card", "product-card", (*hovered).then_some("hovered"))} onmouseenter={onmouseenter} onmouseleave={onmouseleave}>
            <ContentImage src={product.image.clone()} alt={product.name.clone()} class="card-image" />
            <div class="card-body">
                <h3>{ &product.name }</h3>
                <p>{ &product.description }</p>
                <div class="product-footer">
                    <span class="price">{ format!("₹{}", product.price) }</span>
                    // There is no cart yet; the button is decorative.
                    <button type="button" class="btn btn-primary btn-small">{"Add to Cart"}</button>
                </div>
            </div>
            if *hovered {
                <div class="product-overlay">{"View Details"}</div>
            }
        </article>
    }
}

fn testimonial_view(t: &Testimonial) -> Html {
    html! {
        <article class="card testimonial">
            <div class="testimonial-header">
                <ContentImage src={t.image.clone()} alt={t.name.clone()} class="avatar" />
                <div>
                    <h4>{ &t.name }</h4>
                    <div class="stars" aria-label="5 out of 5 stars">
                        { for (0..5).map(|_| html! { <span>{ glyph("star") }</span> }) }
                    </div>
                </div>
            </div>
            <p><span class="quote-mark">{ glyph("quote") }</span>{ &t.text }</p>
        </article>
    }
}

fn team_view(member: &TeamMember) -> Html {
    html! {
        <article class="card team-member">
            <ContentImage src={member.image.clone()} alt={member.name.clone()} class="avatar avatar-large" />
            <h3>{ &member.name }</h3>
            <p>{ &member.role }</p>
        </article>
    }
}

fn nutrient_view(n: &Nutrient) -> Html {
    html! {
        <article class="card nutrient">
            <span class="card-icon" aria-hidden="true">{ glyph(&n.icon) }</span>
            <h3>{ &n.name }</h3>
            <p>{ format!("{} {}", n.value, n.unit) }</p>
        </article>
    }
}

fn quote_view(q: &Quote) -> Html {
    html! {
        <figure class="card expert-quote">
            <blockquote>{ format!("\"{}\"", q.quote) }</blockquote>
            <figcaption>{ format!("- {}", q.author) }</figcaption>
        </figure>
    }
}

fn recipe_view(recipe: &Recipe) -> Html {
    html! {
        <article class="card recipe">
            <ContentImage src={recipe.image.clone()} alt={recipe.title.clone()} class="card-image" />
            <div class="card-body">
                <span class="card-icon" aria-hidden="true">{ glyph(&recipe.icon) }</span>
                <h3>{ &recipe.title }</h3>
                <p>{ &recipe.description }</p>
                <h4>{"Ingredients:"}</h4>
                <ul>
                    { for recipe.ingredients.iter().map(|i| html! { <li>{ i }</li> }) }
                </ul>
                <h4>{"Instructions:"}</h4>
                <ol>
                    { for recipe.instructions.iter().map(|i| html! { <li>{ i }</li> }) }
                </ol>
            </div>
        </article>
    }
}

fn faq_view(faq: &Faq, collapsible: bool) -> Html {
    if collapsible {
        html! {
            <details class="card faq-item">
                <summary>{ &faq.question }</summary>
                <p>{ &faq.answer }</p>
            </details>
        }
    } else {
        html! {
            <div class="faq-item">
                <h4>{ &faq.question }</h4>
                <p>{ &faq.answer }</p>
            </div>
        }
    }
}

fn schedule_view(slot: &ScheduleSlot) -> Html {
    html! {
        <div class="schedule-slot">
            <span class="card-icon" aria-hidden="true">{ glyph("calendar") }</span>
            <div>
                <p class="strong">{ &slot.day }</p>
                <p class="small">{ &slot.time }</p>
            </div>
        </div>
    }
}

fn step_view(step: &Step) -> Html {
    html! {
        <div class="step">
            <span class="card-icon" aria-hidden="true">{ glyph(&step.icon) }</span>
            <p class="strong">{ &step.text }</p>
        </div>
    }
}

fn stat_view(stat: &Stat) -> Html {
    html! {
        <article class="card stat">
            <span class="card-icon" aria-hidden="true">{ glyph(&stat.icon) }</span>
            <p class="stat-value">{ &stat.value }</p>
            <h3>{ &stat.title }</h3>
        </article>
    }
}

fn grid<T>(items: &[T], columns: &'static str, motion: Motion, stagger: Stagger, view: impl Fn(&T) -> Html) -> Html {
    html! {
        <RevealGroup class={classes!("grid", columns)} motion={motion} stagger={stagger}>
            { for items.iter().map(view) }
        </RevealGroup>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionViewProps {
    pub section: Section,
    /// Position on the page, used to alternate backgrounds.
    pub index: usize,
}

/// One independently revealed block of a content page.
#[function_component(SectionView)]
pub fn section_view(props: &SectionViewProps) -> Html {
    let Section { intro, block, motion, stagger } = &props.section;
    let motion = *motion;
    let stagger = stagger.unwrap_or_default();
    let tone = if props.index % 2 == 1 { "tone-muted" } else { "tone-dark" };

    let body = match block {
        Block::Hero { actions } => {
            return html! {
                <section class="content-section hero">
                    <FloatingShape />
                    <Reveal class="container centered" motion={motion}>
                        <h1>{ &intro.heading }</h1>
                        if !intro.body_text.is_empty() {
                            <p class="lead">{ &intro.body_text }</p>
                        }
                        if !actions.is_empty() {
                            <div class="actions">
                                { for actions.iter().map(action_link) }
                            </div>
                        }
                    </Reveal>
                </section>
            };
        }
        Block::CallToAction { action } => {
            return html! {
                <section class={classes!("content-section", "cta", tone)}>
                    <FloatingShape />
                    <Reveal class="container centered" motion={motion}>
                        <h2>{ &intro.heading }</h2>
                        <p class="lead">{ &intro.body_text }</p>
                        { action_link(action) }
                    </Reveal>
                </section>
            };
        }
        Block::Story { bullets, cards, image_first } => {
            let picture = intro.image().map(|src| html! {
                <ContentImage src={src.to_string()} alt={intro.heading.clone()} class="story-image" />
            });
            let text = html! {
                <div class="story-text">
                    <h2>{ &intro.heading }</h2>
                    if !intro.body_text.is_empty() {
                        <p class="lead">{ &intro.body_text }</p>
                    }
                    if !bullets.is_empty() {
                        <ul class="checklist">
                            { for bullets.iter().map(|b| html! {
                                <li><span aria-hidden="true">{ glyph("check") }</span>{ b }</li>
                            }) }
                        </ul>
                    }
                    { for cards.iter().map(card_view) }
                </div>
            };
            let mut columns = vec![text];
            if let Some(picture) = picture {
                if *image_first {
                    columns.insert(0, picture);
                } else {
                    columns.push(picture);
                }
            }
            html! {
                <RevealGroup class="story" motion={motion} stagger={stagger}>
                    { for columns }
                </RevealGroup>
            }
        }
        Block::Cards { cards } => html! {
            <>
                { section_intro(intro, true) }
                { grid(cards, "cols-3", motion, stagger, card_view) }
            </>
        },
        Block::Products { products } => html! {
            <>
                { section_intro(intro, true) }
                { grid(products, "cols-3", motion, stagger, |p: &Product| html! {
                    <ProductCard key={p.id} product={p.clone()} />
                }) }
            </>
        },
        Block::Testimonials { testimonials } => html! {
            <>
                { section_intro(intro, true) }
                { grid(testimonials, "cols-3", motion, stagger, testimonial_view) }
            </>
        },
        Block::Team { members } => html! {
            <>
                { section_intro(intro, false) }
                { grid(members, "cols-4", motion, stagger, team_view) }
            </>
        },
        Block::Nutrition { nutrients } => html! {
            <>
                { section_intro(intro, true) }
                { grid(nutrients, "cols-4", motion, stagger, nutrient_view) }
            </>
        },
        Block::Quotes { quotes } => html! {
            <>
                { section_intro(intro, true) }
                { grid(quotes, "cols-2", motion, stagger, quote_view) }
            </>
        },
        Block::Recipes { recipes } => html! {
            <>
                { section_intro(intro, true) }
                { grid(recipes, "cols-2", motion, stagger, recipe_view) }
            </>
        },
        Block::Faq { faqs, collapsible } => {
            let collapsible = *collapsible;
            html! {
                <>
                    { section_intro(intro, collapsible) }
                    { grid(faqs, "stack", motion, stagger, |f: &Faq| faq_view(f, collapsible)) }
                </>
            }
        }
        Block::DeliveryZone { zone, schedule_title, schedule } => html! {
            <>
                { section_intro(intro, true) }
                <RevealGroup class={classes!("grid", "cols-2")} motion={motion} stagger={stagger}>
                    <div class="map-card">
                        if let Some(image) = &zone.image {
                            <ContentImage src={image.clone()} alt={zone.title.clone()} class="map-image" />
                        }
                        <div class="map-caption">
                            <h3>{ &zone.title }</h3>
                            <p class="small">{ &zone.description }</p>
                        </div>
                    </div>
                    <div class="card">
                        <h3>{ schedule_title }</h3>
                        { for schedule.iter().map(schedule_view) }
                    </div>
                </RevealGroup>
            </>
        },
        Block::Steps { steps } => html! {
            <>
                { section_intro(intro, false) }
                { grid(steps, "stack", motion, stagger, step_view) }
            </>
        },
        Block::Stats { stats } => html! {
            <>
                { section_intro(intro, true) }
                { grid(stats, "cols-3", motion, stagger, stat_view) }
            </>
        },
    };

    html! {
        <section class={classes!("content-section", tone)}>
            <div class="container">
                { body }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;
    use yew::ServerRenderer;

    fn story(image_ref: &str, image_first: bool) -> Section {
        let raw = format!(
            r#"{{
                "heading": "Our Story",
                "body_text": "Started in 2015 with a handful of farms.",
                "image_ref": "{image_ref}",
                "order": 1,
                "block": {{ "kind": "story", "image_first": {image_first} }}
            }}"#
        );
        content::load("story", &raw).unwrap()
    }

    async fn render(section: Section) -> String {
        ServerRenderer::<SectionView>::with_props(move || SectionViewProps { section, index: 0 })
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn story_without_image_has_one_column() {
        let html = render(story("", false)).await;
        assert_eq!(html.matches("class=\"reveal ").count(), 1);
        assert!(html.contains("story-text"));
        assert!(!html.contains("<img"));
    }

    #[tokio::test]
    async fn story_image_goes_first_when_asked() {
        let html = render(story("/assets/dairy-farm.jpg", true)).await;
        assert_eq!(html.matches("class=\"reveal ").count(), 2);
        let image = html.find("<img").unwrap();
        let text = html.find("story-text").unwrap();
        assert!(image < text);

        let html = render(story("/assets/dairy-farm.jpg", false)).await;
        assert!(html.find("story-text").unwrap() < html.find("<img").unwrap());
    }
}
