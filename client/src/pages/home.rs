//! The portfolio page: every section in document order.

use std::sync::Arc;

use leptos::prelude::*;
use projects::Catalog;

use crate::components::about::AboutSection;
use crate::components::back_to_top::BackToTop;
use crate::components::contact_form::ContactSection;
use crate::components::footer::SiteFooter;
use crate::components::header::SiteHeader;
use crate::components::hero::Hero;
use crate::components::mobile_nav::MobileNav;
use crate::components::project_gallery::ProjectsSection;
use crate::components::skills::SkillsSection;
use crate::components::toast::ToastHost;

#[component]
pub fn HomePage() -> impl IntoView {
    // Absent only if the embedded catalog failed to validate; the rest of the page still renders.
    let catalog = use_context::<Arc<Catalog>>();

    view! {
        <SiteHeader/>
        <MobileNav/>
        <main>
            <Hero/>
            <AboutSection/>
            <SkillsSection/>
            {catalog.map(|catalog| view! { <ProjectsSection catalog=catalog/> })}
            <ContactSection/>
        </main>
        <SiteFooter/>
        <BackToTop/>
        <ToastHost/>
    }
}
