// In-memory status store
use crate::application::status_store::StatusStore;
use crate::domain::status::StatusBoard;
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Accepted {
    board: StatusBoard,
    input: Option<String>,
}

#[derive(Debug, Default)]
pub struct InMemoryStatusStore {
    accepted: RwLock<Accepted>,
}

impl InMemoryStatusStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StatusStore for InMemoryStatusStore {
    async fn current(&self) -> StatusBoard {
        self.accepted.read().await.board
    }

    async fn last_input(&self) -> Option<String> {
        self.accepted.read().await.input.clone()
    }

    async fn replace(&self, board: StatusBoard, input: String) {
        *self.accepted.write().await = Accepted {
            board,
            input: Some(input),
        };
    }
}
