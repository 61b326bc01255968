//! State

use std::sync::Arc;

use shopfront_app::{
    context::AppContext,
    domain::{carts::CartsService, products::ProductsService},
};

/// Services shared with every handler through the depot.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) products: Arc<dyn ProductsService>,
    pub(crate) carts: Arc<dyn CartsService>,
}

impl State {
    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        let AppContext { products, carts } = app;

        Arc::new(Self { products, carts })
    }
}
