use log::error;
use yew::prelude::*;

use crate::components::page_frame::PageFrame;
use crate::components::sections::SectionView;
use crate::content::{self, PageId};

#[derive(Properties, PartialEq)]
pub struct ContentPageProps {
    pub page: PageId,
}

/// Renders one of the content-driven pages. Each section is its own
/// component with its own reveal state; nothing flows between them.
#[function_component(ContentPage)]
pub fn content_page(props: &ContentPageProps) -> Html {
    let loaded = use_memo(
        |id: &PageId| {
            let loaded = content::page(*id);
            if let Err(e) = &loaded {
                error!("{}", e);
            }
            loaded
        },
        props.page,
    );

    match &*loaded {
        Ok(page) => html! {
            <PageFrame
                title={page.title.clone()}
                class={props.page.name()}
                floating_shape={page.floating_shape}
                grid_backdrop={page.grid_backdrop}
            >
                {
                    for page.ordered().into_iter().enumerate().map(|(index, section)| html! {
                        <SectionView key={index} section={section.clone()} index={index} />
                    })
                }
            </PageFrame>
        },
        Err(_) => html! {
            <PageFrame title="Dhoodh Fresh">
                <section class="content-section">
                    <div class="container centered">
                        <h2>{"This page is temporarily unavailable."}</h2>
                        <p class="lead">{"Please try again later."}</p>
                    </div>
                </section>
            </PageFrame>
        },
    }
}
