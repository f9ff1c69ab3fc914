// Repository trait for the current sensor statuses
use crate::domain::status::StatusBoard;
use async_trait::async_trait;

#[async_trait]
pub trait StatusStore: Send + Sync {
    /// Snapshot of the board as last replaced
    async fn current(&self) -> StatusBoard;

    /// Text of the submission that produced the current board, as typed
    async fn last_input(&self) -> Option<String>;

    /// Replace the whole board together with the text it came from
    async fn replace(&self, board: StatusBoard, input: String);
}
