use std::sync::Arc;

use actix_web::web;

use crate::advertisement::service::AdvertisementService;
use crate::utils::error::CustomError;
use crate::database::DocumentStore;
use crate::notifier::EventNotifier;
use crate::post::post_service::PostService;
use crate::router::index::routes;

/// Everything the handlers share, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub advertisements: web::Data<AdvertisementService>,
    pub posts: web::Data<PostService>,
    pub notifier: web::Data<EventNotifier>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, notifier: EventNotifier) -> Self {
        AppState {
            advertisements: web::Data::new(AdvertisementService::new(store.clone())),
            posts: web::Data::new(PostService::new(store)),
            notifier: web::Data::new(notifier),
        }
    }

    #[cfg(test)]
    pub fn for_store(store: Arc<dyn DocumentStore>) -> Self {
        Self::new(store, EventNotifier::disabled())
    }

    /// Registers shared data and every route on an `App`.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        let query_config = web::QueryConfig::default().error_handler(|err, _req| {
            CustomError::BadRequestError(format!("Invalid query string: {}", err)).into()
        });

        cfg.app_data(query_config)
            .app_data(self.advertisements.clone())
            .app_data(self.posts.clone())
            .app_data(self.notifier.clone())
            .configure(routes);
    }
}

#[cfg(test)]
macro_rules! test_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .configure(|cfg| $state.configure(cfg))
                .default_service(actix_web::web::to(
                    crate::middleware::not_found::not_found,
                )),
        )
        .await
    };
}

#[cfg(test)]
pub(crate) use test_app;
