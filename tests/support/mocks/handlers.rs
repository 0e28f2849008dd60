// tests/support/mocks/handlers.rs
use async_trait::async_trait;
use railway_core::{ApplicationResult, Error, Maybe, Outcome, RequestHandler, ValueOutcome};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::support::{
    builders::{ArchiveThing, CreateThing, FindThing},
    helpers::{CallCounter, TokenSlot},
};

pub struct CreateThingHandler {
    pub calls: CallCounter,
    pub id: Uuid,
}

impl CreateThingHandler {
    pub fn new(calls: CallCounter) -> Self {
        Self {
            calls,
            id: Uuid::new_v4(),
        }
    }
}

#[async_trait]
impl RequestHandler<CreateThing> for CreateThingHandler {
    async fn handle(
        &self,
        request: CreateThing,
        _cancel: &CancellationToken,
    ) -> ApplicationResult<ValueOutcome<Uuid>> {
        self.calls.hit();
        let id = self.id;
        Ok(ValueOutcome::success(request)
            .ensure(
                |cmd| cmd.size > 0,
                Error::validation("Thing.SizePositive", "Size must be positive."),
            )
            .map(|_| id))
    }
}

/// 既知の ID だけアーカイブでき、受け取ったトークンを記録するハンドラ
pub struct ArchiveThingHandler {
    pub calls: CallCounter,
    pub known: Uuid,
    pub tokens: TokenSlot,
}

#[async_trait]
impl RequestHandler<ArchiveThing> for ArchiveThingHandler {
    async fn handle(
        &self,
        request: ArchiveThing,
        cancel: &CancellationToken,
    ) -> ApplicationResult<Outcome> {
        self.calls.hit();
        self.tokens.record(cancel);
        if request.id == self.known {
            Ok(Outcome::success())
        } else {
            Ok(Outcome::failure(Error::not_found(
                "Thing.NotFound",
                "The thing was not found.",
            )))
        }
    }
}

pub struct FindThingHandler {
    pub name: Option<String>,
}

#[async_trait]
impl RequestHandler<FindThing> for FindThingHandler {
    async fn handle(
        &self,
        _request: FindThing,
        _cancel: &CancellationToken,
    ) -> ApplicationResult<Maybe<String>> {
        Ok(self.name.clone().into())
    }
}
