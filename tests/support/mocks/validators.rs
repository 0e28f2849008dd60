// tests/support/mocks/validators.rs
use async_trait::async_trait;
use railway_core::{
    ApplicationError, ApplicationResult, RuleValidator, ValidationDetail, Validator, Violations,
};
use std::sync::Arc;
use tokio::sync::Barrier;
use tokio_util::sync::CancellationToken;

use crate::support::{
    builders::{CreateThing, NAME_REQUIRED_CODE, NAME_REQUIRED_MESSAGE},
    helpers::{CallCounter, TokenSlot},
};

/// プロパティとコードから違反を組み立てる
pub fn detail(property: &str, code: &str) -> ValidationDetail {
    ValidationDetail::new(property, format!("{property} violates {code}"), code)
}

/// 作成シナリオで使う名前必須ルール
pub const fn name_required() -> impl Validator<CreateThing> {
    RuleValidator::new(|cmd: &CreateThing, rules: &mut Violations| {
        rules.not_empty("name", &cmd.name, NAME_REQUIRED_MESSAGE, NAME_REQUIRED_CODE);
    })
}

/// 決まった違反を返すバリデータ
pub struct FixedValidator {
    details: Vec<ValidationDetail>,
    calls: CallCounter,
}

impl FixedValidator {
    pub fn new(details: Vec<ValidationDetail>) -> Self {
        Self::counted(details, CallCounter::new())
    }

    pub fn passing() -> Self {
        Self::new(Vec::new())
    }

    pub const fn counted(details: Vec<ValidationDetail>, calls: CallCounter) -> Self {
        Self { details, calls }
    }
}

#[async_trait]
impl<R: Send + Sync> Validator<R> for FixedValidator {
    async fn validate(
        &self,
        _request: &R,
        _cancel: &CancellationToken,
    ) -> ApplicationResult<Vec<ValidationDetail>> {
        self.calls.hit();
        Ok(self.details.clone())
    }
}

/// バリアを共有する全バリデータが開始するまで完了しないバリデータ
pub struct BarrierValidator {
    barrier: Arc<Barrier>,
    details: Vec<ValidationDetail>,
}

impl BarrierValidator {
    pub const fn new(barrier: Arc<Barrier>, details: Vec<ValidationDetail>) -> Self {
        Self { barrier, details }
    }
}

#[async_trait]
impl<R: Send + Sync> Validator<R> for BarrierValidator {
    async fn validate(
        &self,
        _request: &R,
        _cancel: &CancellationToken,
    ) -> ApplicationResult<Vec<ValidationDetail>> {
        self.barrier.wait().await;
        Ok(self.details.clone())
    }
}

/// 外部依存の障害を模したバリデータ
pub struct FaultyValidator;

#[async_trait]
impl<R: Send + Sync> Validator<R> for FaultyValidator {
    async fn validate(
        &self,
        _request: &R,
        _cancel: &CancellationToken,
    ) -> ApplicationResult<Vec<ValidationDetail>> {
        Err(ApplicationError::infrastructure("connection reset by peer"))
    }
}

/// 自分からは決して完了しないバリデータ
pub struct StalledValidator {
    started: CallCounter,
}

impl StalledValidator {
    pub const fn new(started: CallCounter) -> Self {
        Self { started }
    }
}

#[async_trait]
impl<R: Send + Sync> Validator<R> for StalledValidator {
    async fn validate(
        &self,
        _request: &R,
        _cancel: &CancellationToken,
    ) -> ApplicationResult<Vec<ValidationDetail>> {
        self.started.hit();
        std::future::pending::<ApplicationResult<Vec<ValidationDetail>>>().await
    }
}

/// 渡されたキャンセルトークンを記録し、違反なしを返すバリデータ
pub struct TokenRecordingValidator {
    tokens: TokenSlot,
}

impl TokenRecordingValidator {
    pub const fn new(tokens: TokenSlot) -> Self {
        Self { tokens }
    }
}

#[async_trait]
impl<R: Send + Sync> Validator<R> for TokenRecordingValidator {
    async fn validate(
        &self,
        _request: &R,
        cancel: &CancellationToken,
    ) -> ApplicationResult<Vec<ValidationDetail>> {
        self.tokens.record(cancel);
        Ok(Vec::new())
    }
}
