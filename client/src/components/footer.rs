//! Site footer with solution, company and contact link columns.

use leptos::prelude::*;

use crate::app::use_navigator;
use crate::content::company::{CONTACT, COPYRIGHT, FOOTER_BLURB};
use crate::state::view::View;

/// Footer link columns: (heading, [(label, target)]). `None` renders plain text.
const COLUMNS: [(&str, &[(&str, Option<View>)]); 3] = [
    (
        "Solutions",
        &[
            ("Woven Labels", Some(View::Products)),
            ("Hang Tags", Some(View::Products)),
            ("Packaging Boxes", Some(View::Products)),
            ("PU & Leather", Some(View::Products)),
        ],
    ),
    (
        "Company",
        &[
            ("About Us", Some(View::About)),
            ("Infrastructure", Some(View::Infrastructure)),
            ("Our Clients", Some(View::Clients)),
        ],
    ),
    (
        "Contact",
        &[
            ("Bengaluru, KA", None),
            (CONTACT.phones[0], None),
            ("Get a Quote", Some(View::Contact)),
            ("Support", Some(View::Contact)),
        ],
    ),
];

#[component]
pub fn Footer() -> impl IntoView {
    let nav = use_navigator();

    view! {
        <footer class="site-footer">
            <div class="site-footer__top">
                <div class="site-footer__brand">
                    <button class="site-footer__logo" on:click=move |_| nav.back_to_home()>
                        <span class="site-footer__mark">"R"</span>
                        <span class="site-footer__name">"RKS CREATIONS"</span>
                    </button>
                    <p class="site-footer__blurb">{FOOTER_BLURB}</p>
                </div>
                <div class="site-footer__columns">
                    {COLUMNS
                        .into_iter()
                        .map(|(heading, links)| {
                            view! {
                                <div class="site-footer__column">
                                    <h4>{heading}</h4>
                                    <ul>
                                        {links
                                            .iter()
                                            .map(|&(label, target)| match target {
                                                Some(view) => {
                                                    view! {
                                                        <li class="site-footer__link" on:click=move |_| nav.to(view)>
                                                            {label}
                                                        </li>
                                                    }
                                                        .into_any()
                                                }
                                                None => view! { <li>{label}</li> }.into_any(),
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="site-footer__bottom">
                <p>{COPYRIGHT}</p>
                <div class="site-footer__legal">
                    <span>"Privacy Policy"</span>
                    <span>"Terms of Service"</span>
                </div>
            </div>
        </footer>
    }
}
