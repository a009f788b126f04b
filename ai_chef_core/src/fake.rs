use std::cell::RefCell;
use std::collections::VecDeque;

use ai_chef_model::RecipeRequest;
use async_trait::async_trait;
use futures::channel::oneshot;

use crate::backend::{RawResponse, RecipeBackend, TableQuery, TransportError};

enum Scripted {
    Ready(Result<RawResponse, TransportError>),
    Pending(oneshot::Receiver<RawResponse>),
}

/// In-memory backend that replays scripted responses and records what it was asked.
#[derive(Default)]
pub(crate) struct FakeBackend {
    invocations: RefCell<Vec<RecipeRequest>>,
    queries: RefCell<Vec<TableQuery>>,
    recipe_responses: RefCell<VecDeque<Scripted>>,
    select_responses: RefCell<VecDeque<Result<RawResponse, TransportError>>>,
}

impl FakeBackend {
    pub(crate) fn with_recipe(self, response: RawResponse) -> Self {
        self.recipe_responses
            .borrow_mut()
            .push_back(Scripted::Ready(Ok(response)));
        self
    }

    pub(crate) fn with_recipe_error(self, err: TransportError) -> Self {
        self.recipe_responses
            .borrow_mut()
            .push_back(Scripted::Ready(Err(err)));
        self
    }

    /// The next recipe call waits until the returned sender fires.
    pub(crate) fn pending_recipe(&self) -> oneshot::Sender<RawResponse> {
        let (tx, rx) = oneshot::channel();
        self.recipe_responses
            .borrow_mut()
            .push_back(Scripted::Pending(rx));
        tx
    }

    pub(crate) fn with_select(self, response: RawResponse) -> Self {
        self.select_responses.borrow_mut().push_back(Ok(response));
        self
    }

    pub(crate) fn with_select_error(self, err: TransportError) -> Self {
        self.select_responses.borrow_mut().push_back(Err(err));
        self
    }

    pub(crate) fn invocations(&self) -> Vec<RecipeRequest> {
        self.invocations.borrow().clone()
    }

    pub(crate) fn queries(&self) -> Vec<TableQuery> {
        self.queries.borrow().clone()
    }
}

#[async_trait(?Send)]
impl RecipeBackend for FakeBackend {
    async fn invoke_recipe(&self, request: &RecipeRequest) -> Result<RawResponse, TransportError> {
        self.invocations.borrow_mut().push(request.clone());
        let next = self.recipe_responses.borrow_mut().pop_front();
        match next {
            Some(Scripted::Ready(response)) => response,
            Some(Scripted::Pending(rx)) => rx
                .await
                .map_err(|_| TransportError::Request("response dropped".into())),
            None => Err(TransportError::Request("no scripted response".into())),
        }
    }

    async fn select(&self, query: &TableQuery) -> Result<RawResponse, TransportError> {
        self.queries.borrow_mut().push(query.clone());
        let next = self.select_responses.borrow_mut().pop_front();
        next.unwrap_or_else(|| Err(TransportError::Request("no scripted response".into())))
    }
}
