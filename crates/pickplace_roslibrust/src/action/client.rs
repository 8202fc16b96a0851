use std::fmt;
use std::future::Future;
use std::pin::Pin;

use super::dtos::move_arm;

/// Boxed response future returned by [`MoveArmClient::move_arm`].
pub type MoveArmFuture<'a, E> =
    Pin<Box<dyn Future<Output = Result<move_arm::Response, E>> + Send + 'a>>;

/// Minimal async capability for the downstream motion service.
///
/// This is intentionally tiny so we can:
/// - unit test the goal server without ROS
/// - adapt a rosbridge service client in the transport layer
///
/// One call carries the whole sequence; the response is all-or-nothing.
pub trait MoveArmClient: Send + Sync + 'static {
    type Error: fmt::Display + Send + Sync + 'static;

    fn move_arm<'a>(&'a self, req: &'a move_arm::Request) -> MoveArmFuture<'a, Self::Error>;
}
