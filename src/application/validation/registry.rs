// src/application/validation/registry.rs
use super::{ValidationBehavior, Validator};
use crate::application::request::Request;
use std::{
    any::{Any, TypeId},
    collections::HashMap,
    sync::Arc,
};

pub type ValidatorPort<R> = dyn Validator<R>;

/// Validators per request type, in registration order.
#[derive(Default)]
pub struct ValidatorRegistry {
    entries: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl ValidatorRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<R, V>(&mut self, validator: V) -> &mut Self
    where
        R: Request,
        V: Validator<R> + 'static,
    {
        self.register_shared::<R>(Arc::new(validator))
    }

    pub fn register_shared<R>(&mut self, validator: Arc<ValidatorPort<R>>) -> &mut Self
    where
        R: Request,
    {
        let entry = self
            .entries
            .entry(TypeId::of::<R>())
            .or_insert_with(|| {
                Box::new(Vec::<Arc<ValidatorPort<R>>>::new()) as Box<dyn Any + Send + Sync>
            });
        if let Some(validators) = entry.downcast_mut::<Vec<Arc<ValidatorPort<R>>>>() {
            validators.push(validator);
        }
        self
    }

    /// Possibly empty; never an error.
    #[must_use]
    pub fn validators_for<R>(&self) -> &[Arc<ValidatorPort<R>>]
    where
        R: Request,
    {
        let Some(validators) = self
            .entries
            .get(&TypeId::of::<R>())
            .and_then(|entry| entry.downcast_ref::<Vec<Arc<ValidatorPort<R>>>>())
        else {
            return &[];
        };
        validators
    }

    #[must_use]
    pub fn behavior_for<R>(&self) -> ValidationBehavior<R>
    where
        R: Request,
    {
        ValidationBehavior::new(self.validators_for::<R>().to_vec())
    }
}
