use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` adapter emitting `tracing` events tagged with the component name.
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new("cart")
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "storefront_cart", component = self.component, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "storefront_cart", component = self.component, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "storefront_cart", component = self.component, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "storefront_cart", component = self.component, "{}", message);
    }
}
