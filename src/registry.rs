use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use rand::distr::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::board::Board;

/// Opaque identifier of one in-progress game session.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct GameId(String);

impl GameId {
    const LEN: usize = 7;

    fn random() -> Self {
        let id = StdRng::from_os_rng()
            .sample_iter(Alphanumeric)
            .take(Self::LEN)
            .map(char::from)
            .collect::<String>()
            .to_lowercase();
        Self(id)
    }

    /// The id as a plain string, for wire protocols and logs.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Session-id to board map for a hosting transport layer.
///
/// The board types themselves carry no session notion; a host owns a
/// [`Registry`] instead and keys each live [`Board`] by a [`GameId`]. Every
/// board sits behind its own lock, and callers hold that lock for the whole of
/// each operation against the game, which serializes access per board as the
/// core requires.
#[derive(Default)]
pub struct Registry {
    games: Mutex<HashMap<GameId, Arc<Mutex<Board>>>>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `board` under a fresh id, returning the id and a handle to
    /// the board's lock.
    pub fn insert(&self, board: Board) -> (GameId, Arc<Mutex<Board>>) {
        let mut games = self.lock();

        let mut id = GameId::random();
        // ids are short; regenerate on the off chance of a collision
        while games.contains_key(&id) {
            id = GameId::random();
        }

        let game = Arc::new(Mutex::new(board));
        games.insert(id.clone(), Arc::clone(&game));
        debug!(id = id.as_str(), games = games.len(), "game registered");
        (id, game)
    }

    /// Handle to a registered game, if present.
    pub fn get(&self, id: &GameId) -> Option<Arc<Mutex<Board>>> {
        self.lock().get(id).cloned()
    }

    /// Drop a finished or abandoned game. Returns whether it was present.
    pub fn remove(&self, id: &GameId) -> bool {
        let removed = self.lock().remove(id).is_some();
        if removed {
            debug!(id = id.as_str(), "game removed");
        }
        removed
    }

    /// Number of games currently registered.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no games are registered.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<GameId, Arc<Mutex<Board>>>> {
        self.games.lock().expect("registry lock poisoned")
    }
}
