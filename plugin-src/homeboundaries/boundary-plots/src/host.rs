//! What the plugin needs from the server hosting it, and the events it reacts to.

use std::future::Future;
use std::pin::Pin;

use boundary_types::Point3;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Player messaging and inventory, provided by the server.
pub trait Host: Send + Sync {
    fn send_message<'a>(&'a self, player: &'a str, text: String) -> BoxFuture<'a, ()>;

    /// Message every online player.
    fn broadcast(&self, text: String) -> BoxFuture<'_, ()>;

    /// Hand `player` the plotting tool, renamed to `label`.
    fn give_tool<'a>(&'a self, player: &'a str, label: &'a str) -> BoxFuture<'a, ()>;
}

/// Reacts to one kind of server event.
pub trait EventHandler<E>: Send + Sync {
    fn handle<'a>(&'a self, host: &'a dyn Host, event: &'a E) -> BoxFuture<'a, ()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractAction {
    LeftClickAir,
    LeftClickBlock,
    RightClickAir,
    RightClickBlock,
}

/// A player used an item. `position` is where the player stands.
#[derive(Debug, Clone)]
pub struct InteractEvent {
    pub player: String,
    pub position: Point3,
    pub action: InteractAction,
    /// Custom name of the held item, if it has one.
    pub held_item_label: Option<String>,
}

#[derive(Debug, Clone)]
pub struct MoveEvent {
    pub player: String,
    pub to: Point3,
}

#[derive(Debug, Clone)]
pub struct LeaveEvent {
    pub player: String,
}

/// Who ran a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandSender {
    Player(String),
    Console,
}

impl CommandSender {
    #[must_use]
    pub fn as_player(&self) -> Option<&str> {
        match self {
            Self::Player(name) => Some(name),
            Self::Console => None,
        }
    }
}
