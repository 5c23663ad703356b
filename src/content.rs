//! Page copy, embedded at build time from `content/*.json`.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::reveal::{Motion, Stagger};

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content for page `{page}` is malformed: {source}")]
    Malformed {
        page: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Heading, copy and picture shared by every section.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ContentSection {
    pub heading: String,
    #[serde(default)]
    pub body_text: String,
    #[serde(default)]
    pub image_ref: String,
    pub order: u32,
}

impl ContentSection {
    pub fn image(&self) -> Option<&str> {
        (!self.image_ref.is_empty()).then_some(self.image_ref.as_str())
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Action {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub primary: bool,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Card {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: u32,
    pub image: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Testimonial {
    pub name: String,
    pub text: String,
    pub image: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub image: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Nutrient {
    pub name: String,
    pub value: String,
    pub unit: String,
    pub icon: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Quote {
    pub quote: String,
    pub author: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Recipe {
    pub title: String,
    pub description: String,
    pub image: String,
    pub icon: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ScheduleSlot {
    pub day: String,
    pub time: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Step {
    pub icon: String,
    pub text: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Stat {
    pub title: String,
    pub value: String,
    pub icon: String,
}

/// What a section shows below its heading.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Hero {
        #[serde(default)]
        actions: Vec<Action>,
    },
    Story {
        #[serde(default)]
        bullets: Vec<String>,
        #[serde(default)]
        cards: Vec<Card>,
        #[serde(default)]
        image_first: bool,
    },
    Cards {
        cards: Vec<Card>,
    },
    Products {
        products: Vec<Product>,
    },
    Testimonials {
        testimonials: Vec<Testimonial>,
    },
    Team {
        members: Vec<TeamMember>,
    },
    Nutrition {
        nutrients: Vec<Nutrient>,
    },
    Quotes {
        quotes: Vec<Quote>,
    },
    Recipes {
        recipes: Vec<Recipe>,
    },
    Faq {
        faqs: Vec<Faq>,
        #[serde(default)]
        collapsible: bool,
    },
    DeliveryZone {
        zone: Card,
        schedule_title: String,
        schedule: Vec<ScheduleSlot>,
    },
    Steps {
        steps: Vec<Step>,
    },
    Stats {
        stats: Vec<Stat>,
    },
    CallToAction {
        action: Action,
    },
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Section {
    #[serde(flatten)]
    pub intro: ContentSection,
    pub block: Block,
    #[serde(default)]
    pub motion: Motion,
    #[serde(default)]
    pub stagger: Option<Stagger>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Page {
    pub title: String,
    #[serde(default)]
    pub floating_shape: bool,
    #[serde(default)]
    pub grid_backdrop: bool,
    pub sections: Vec<Section>,
}

impl Page {
    /// Sections sorted by `order`. Equal orders keep their authoring order.
    pub fn ordered(&self) -> Vec<&Section> {
        let mut sections: Vec<&Section> = self.sections.iter().collect();
        sections.sort_by_key(|s| s.intro.order);
        sections
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ContactDetails {
    pub address: String,
    pub phone: String,
    pub email: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ContactPage {
    pub title: String,
    pub intro: ContentSection,
    pub form_heading: String,
    pub info_heading: String,
    pub details: ContactDetails,
    pub socials: Vec<SocialLink>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageId {
    Home,
    About,
    Products,
    Benefits,
    Delivery,
    LocalImpact,
}

impl PageId {
    pub const ALL: [PageId; 6] = [
        PageId::Home,
        PageId::About,
        PageId::Products,
        PageId::Benefits,
        PageId::Delivery,
        PageId::LocalImpact,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::About => "about",
            PageId::Products => "products",
            PageId::Benefits => "benefits",
            PageId::Delivery => "delivery",
            PageId::LocalImpact => "local-impact",
        }
    }

    fn raw(self) -> &'static str {
        match self {
            PageId::Home => include_str!("../content/home.json"),
            PageId::About => include_str!("../content/about.json"),
            PageId::Products => include_str!("../content/products.json"),
            PageId::Benefits => include_str!("../content/benefits.json"),
            PageId::Delivery => include_str!("../content/delivery.json"),
            PageId::LocalImpact => include_str!("../content/local_impact.json"),
        }
    }
}

pub fn load<T: DeserializeOwned>(page: &'static str, raw: &str) -> Result<T, ContentError> {
    serde_json::from_str(raw).map_err(|source| ContentError::Malformed { page, source })
}

pub fn page(id: PageId) -> Result<Page, ContentError> {
    load(id.name(), id.raw())
}

pub fn contact_page() -> Result<ContactPage, ContentError> {
    load("contact", include_str!("../content/contact.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(heading: &str, order: u32) -> Section {
        Section {
            intro: ContentSection {
                heading: heading.to_string(),
                body_text: String::new(),
                image_ref: String::new(),
                order,
            },
            block: Block::Cards { cards: vec![] },
            motion: Motion::default(),
            stagger: None,
        }
    }

    fn headings(page: &Page) -> Vec<&str> {
        page.ordered().iter().map(|s| s.intro.heading.as_str()).collect()
    }

    #[test]
    fn every_embedded_page_parses() {
        for id in PageId::ALL {
            let page = page(id).unwrap_or_else(|e| panic!("{e}"));
            assert!(!page.sections.is_empty(), "{} has no sections", id.name());
        }
        let contact = contact_page().unwrap();
        assert_eq!(contact.socials.len(), 4);
    }

    #[test]
    fn ordered_sorts_by_order_field() {
        let page = Page {
            title: "t".into(),
            floating_shape: false,
            grid_backdrop: false,
            sections: vec![section("c", 3), section("a", 1), section("b", 2)],
        };
        assert_eq!(headings(&page), vec!["a", "b", "c"]);
    }

    #[test]
    fn ordered_keeps_authoring_order_on_ties() {
        let page = Page {
            title: "t".into(),
            floating_shape: false,
            grid_backdrop: false,
            sections: vec![section("first", 1), section("second", 1), section("zero", 0)],
        };
        assert_eq!(headings(&page), vec!["zero", "first", "second"]);
    }

    #[test]
    fn loading_twice_gives_the_same_page() {
        let first = page(PageId::About).unwrap();
        let second = page(PageId::About).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.ordered(), second.ordered());
    }

    #[test]
    fn embedded_orders_match_authoring_order() {
        for id in PageId::ALL {
            let page = page(id).unwrap();
            let authored: Vec<&str> = page.sections.iter().map(|s| s.intro.heading.as_str()).collect();
            assert_eq!(headings(&page), authored, "{}", id.name());
        }
    }

    #[test]
    fn malformed_content_names_the_page() {
        let err = load::<Page>("broken", "{ \"title\": 1 }").unwrap_err();
        assert!(err.to_string().starts_with("content for page `broken` is malformed"));
    }

    #[test]
    fn block_kind_is_tagged() {
        let raw = r#"{
            "heading": "Creating Local Jobs",
            "order": 4,
            "block": { "kind": "stats", "stats": [
                { "title": "Direct Employees", "value": "250+", "icon": "user" }
            ] },
            "stagger": { "base": 0.0, "step": 0.2 }
        }"#;
        let section: Section = load("inline", raw).unwrap();
        assert_eq!(section.intro.image(), None);
        assert_eq!(section.motion, Motion::FadeUp);
        assert_eq!(section.stagger, Some(Stagger::new(0.0, 0.2)));
        match section.block {
            Block::Stats { stats } => assert_eq!(stats[0].value, "250+"),
            other => panic!("unexpected block {other:?}"),
        }
    }

    #[test]
    fn products_page_lists_all_twelve_products() {
        let products = page(PageId::Products).unwrap();
        let total: usize = products
            .sections
            .iter()
            .map(|s| match &s.block {
                Block::Products { products } => products.len(),
                _ => 0,
            })
            .sum();
        assert_eq!(total, 12);
    }
}
