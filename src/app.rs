/// Main application entry point for the marketplace views.
/// Wires the API client and identity provider into the context and routes
/// between the home page (testimonials) and a freelancer's reviews.
use crate::api::{HttpMarketplaceApi, MarketplaceApi};
use crate::auth::{ClerkTokenProvider, TokenProvider};
use crate::components::notices::{use_notices, NoticeBoard};
use crate::components::testimonials::Testimonials;
use crate::config::ApiConfig;
use crate::pages::freelancer_reviews::FreelancerReviews;
use crate::reviews::ReviewService;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use std::rc::Rc;

/// External collaborators every view talks through.
#[derive(Clone)]
pub struct AppServices {
    pub api: Rc<dyn MarketplaceApi>,
    pub tokens: Rc<dyn TokenProvider>,
    pub config: ApiConfig,
}

impl AppServices {
    pub fn from_config(config: ApiConfig) -> Self {
        Self {
            api: Rc::new(HttpMarketplaceApi::new(config.clone())),
            tokens: Rc::new(ClerkTokenProvider),
            config,
        }
    }

    pub fn review_service(&self) -> ReviewService {
        ReviewService::new(self.api.clone(), self.tokens.clone(), &self.config)
    }
}

/// Services from context; falls back to the HTTP client when none were provided.
pub fn use_services() -> AppServices {
    use_context::<AppServices>().unwrap_or_else(|| {
        let services = AppServices::from_config(ApiConfig::from_env());
        provide_context(services.clone());
        services
    })
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    use_services();
    use_notices();

    view! {
        <Stylesheet id="leptos" href="/pkg/marketplace-views.css" />
        <Title text="Freelancer Marketplace" />
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=HomePage />
                    <Route path="/freelancer/:id/reviews" view=FreelancerReviews />
                </Routes>
            </main>
            <NoticeBoard />
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! { <Testimonials /> }
}
