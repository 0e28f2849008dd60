// src/application/dispatcher.rs
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        request::{Request, RequestHandler},
        validation::{Validator, ValidatorRegistry},
    },
    config::CoreConfig,
};
use std::{
    any::{Any, TypeId},
    collections::HashMap,
    sync::Arc,
};
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

pub type HandlerPort<R> = dyn RequestHandler<R>;

/// Routes each request to its handler through the validation pipeline.
///
/// Built once at startup and shared behind an `Arc`; dispatching never
/// mutates it.
pub struct Dispatcher {
    handlers: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
    validators: ValidatorRegistry,
    trace_dispatch: bool,
}

impl Dispatcher {
    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::new()
    }

    #[must_use]
    pub const fn validators(&self) -> &ValidatorRegistry {
        &self.validators
    }

    /// Validates `request` and hands it to its handler. The same `cancel`
    /// token reaches every validator and the handler.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::HandlerNotRegistered`] when no handler was
    /// registered for `R`, [`ApplicationError::Cancelled`] when `cancel` fires
    /// during validation, and any fault raised by a validator or the handler.
    pub async fn send<R>(
        &self,
        request: R,
        cancel: &CancellationToken,
    ) -> ApplicationResult<R::Response>
    where
        R: Request,
    {
        let handler = self
            .handlers
            .get(&TypeId::of::<R>())
            .and_then(|entry| entry.downcast_ref::<Arc<HandlerPort<R>>>())
            .ok_or_else(|| ApplicationError::HandlerNotRegistered(R::name()))?;

        let behavior = self.validators.behavior_for::<R>();
        let dispatch = behavior.handle(request, cancel, |request| handler.handle(request, cancel));

        if self.trace_dispatch {
            let span = tracing::info_span!(
                "dispatch",
                request = R::name(),
                validators = behavior.validator_count()
            );
            dispatch.instrument(span).await
        } else {
            dispatch.await
        }
    }
}

#[must_use]
pub struct DispatcherBuilder {
    handlers: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
    validators: ValidatorRegistry,
    trace_dispatch: bool,
}

impl DispatcherBuilder {
    fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            validators: ValidatorRegistry::new(),
            trace_dispatch: CoreConfig::default().trace_dispatch(),
        }
    }

    pub fn with_config(mut self, config: &CoreConfig) -> Self {
        self.trace_dispatch = config.trace_dispatch();
        self
    }

    /// Registers the handler for `R`, replacing any earlier one.
    pub fn handler<R, H>(mut self, handler: H) -> Self
    where
        R: Request,
        H: RequestHandler<R> + 'static,
    {
        let handler: Arc<HandlerPort<R>> = Arc::new(handler);
        if self
            .handlers
            .insert(TypeId::of::<R>(), Box::new(handler))
            .is_some()
        {
            tracing::warn!(request = R::name(), "handler replaced");
        }
        self
    }

    /// Appends a validator for `R`; validators report in registration order.
    pub fn validator<R, V>(mut self, validator: V) -> Self
    where
        R: Request,
        V: Validator<R> + 'static,
    {
        self.validators.register::<R, V>(validator);
        self
    }

    #[must_use]
    pub fn build(self) -> Dispatcher {
        tracing::debug!(handlers = self.handlers.len(), "dispatcher built");
        Dispatcher {
            handlers: self.handlers,
            validators: self.validators,
            trace_dispatch: self.trace_dispatch,
        }
    }
}
