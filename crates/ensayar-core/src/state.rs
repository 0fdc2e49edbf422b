//! Elm-style state management: `State + Message → Command`.
//!
//! A reducer mutates state in response to a message and hands back a
//! [`Command`] describing side effects. The runtime (the terminal app)
//! executes commands and feeds resulting messages back in, so state
//! transitions stay synchronous and whole: a message is applied fully or
//! not at all.

use std::future::Future;
use std::pin::Pin;

/// Boxed future a [`Command::Task`] resolves with a message.
pub type TaskFuture<M> = Pin<Box<dyn Future<Output = M> + Send>>;

/// Side effects produced by a state update.
pub enum Command<M> {
    /// Nothing to do.
    None,
    /// Run several commands.
    Batch(Vec<Command<M>>),
    /// Run an async task; its output is dispatched as a message.
    Task(TaskFuture<M>),
}

impl<M> Default for Command<M> {
    fn default() -> Self {
        Self::None
    }
}

impl<M> Command<M> {
    /// Wrap an async block into a task command.
    pub fn task<F>(future: F) -> Self
    where
        F: Future<Output = M> + Send + 'static,
    {
        Self::Task(Box::pin(future))
    }

    /// Combine commands into one.
    pub fn batch(commands: impl IntoIterator<Item = Self>) -> Self {
        Self::Batch(commands.into_iter().collect())
    }

    /// Check whether there is anything to execute.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl<M> std::fmt::Debug for Command<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => f.write_str("Command::None"),
            Self::Batch(commands) => write!(f, "Command::Batch(len={})", commands.len()),
            Self::Task(_) => f.write_str("Command::Task(..)"),
        }
    }
}

/// Application state reducer.
pub trait State {
    /// Message type driving updates.
    type Message: Send;

    /// Apply a message, returning the side effects it triggered.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;
}

/// Type alias for state change subscribers.
type Subscriber<S> = Box<dyn Fn(&S) + Send + Sync>;

/// Owns a [`State`], dispatches messages into it, and notifies subscribers
/// after every update.
pub struct Store<S: State> {
    state: S,
    subscribers: Vec<Subscriber<S>>,
}

impl<S: State> Store<S> {
    /// Create a store around an initial state.
    pub fn new(initial: S) -> Self {
        Self {
            state: initial,
            subscribers: Vec::new(),
        }
    }

    /// Current state.
    pub const fn state(&self) -> &S {
        &self.state
    }

    /// Apply a message and return the command it produced.
    pub fn dispatch(&mut self, msg: S::Message) -> Command<S::Message> {
        let command = self.state.update(msg);
        for subscriber in &self.subscribers {
            subscriber(&self.state);
        }
        command
    }

    /// Register a change listener.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        self.subscribers.push(Box::new(callback));
    }
}
