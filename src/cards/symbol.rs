//! Card faces.
//!
//! A `Symbol` is an index into a `SymbolPool`. Two cards match when their
//! symbols are equal. The pool maps each symbol to the image asset a
//! renderer draws for it.

use serde::{Deserialize, Serialize};

use crate::core::GameError;

/// Face identifier shared by the two cards of a pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol(pub u16);

impl Symbol {
    /// Get the raw pool index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

const DEFAULT_ASSETS: [&str; 50] = [
    "cat.png", "dog.png", "elephant.png", "fox.png", "lion.png",
    "monkey.png", "panda.png", "rabbit.png", "tiger.png", "zebra.png",
    "bear.png", "koala.png", "giraffe.png", "hippo.png", "owl.png",
    "penguin.png", "frog.png", "horse.png", "cow.png", "pig.png",
    "sheep.png", "goat.png", "duck.png", "chicken.png", "turtle.png",
    "snake.png", "crocodile.png", "kangaroo.png", "wolf.png", "deer.png",
    "camel.png", "rhino.png", "squirrel.png", "hedgehog.png", "otter.png",
    "beaver.png", "raccoon.png", "bat.png", "parrot.png", "flamingo.png",
    "peacock.png", "swan.png", "eagle.png", "dolphin.png", "whale.png",
    "shark.png", "octopus.png", "crab.png", "bee.png", "butterfly.png",
];

/// Ordered collection of card face assets.
///
/// The default pool has enough distinct faces for the largest grid.
/// A smaller pool is reused cyclically: pair `i` gets symbol
/// `i % pool.len()`, so several pairs may share a face.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPool")]
pub struct SymbolPool {
    assets: Vec<String>,
}

/// Largest pool a `Symbol` can index.
pub const MAX_POOL_SIZE: usize = u16::MAX as usize + 1;

#[derive(Deserialize)]
struct RawPool {
    assets: Vec<String>,
}

impl TryFrom<RawPool> for SymbolPool {
    type Error = GameError;

    fn try_from(raw: RawPool) -> Result<Self, Self::Error> {
        SymbolPool::new(raw.assets)
    }
}

impl SymbolPool {
    /// Create a pool from asset names.
    pub fn new<I, S>(assets: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let assets: Vec<String> = assets.into_iter().map(Into::into).collect();
        if assets.is_empty() {
            return Err(GameError::EmptySymbolPool);
        }
        if assets.len() > MAX_POOL_SIZE {
            return Err(GameError::SymbolPoolTooLarge {
                len: assets.len(),
                max: MAX_POOL_SIZE,
            });
        }
        Ok(Self { assets })
    }

    /// Number of distinct faces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Always false: construction rejects empty pools.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Symbol dealt for the `pair`-th pair.
    #[must_use]
    pub fn symbol_for_pair(&self, pair: usize) -> Symbol {
        // `new` caps the pool at MAX_POOL_SIZE, so the index fits.
        Symbol((pair % self.assets.len()) as u16)
    }

    /// Image asset for a symbol.
    #[must_use]
    pub fn asset(&self, symbol: Symbol) -> Option<&str> {
        self.assets.get(symbol.index()).map(String::as_str)
    }
}

impl Default for SymbolPool {
    fn default() -> Self {
        Self {
            assets: DEFAULT_ASSETS.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}
