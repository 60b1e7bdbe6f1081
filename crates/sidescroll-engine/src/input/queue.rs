/// Player intents the simulation understands.
/// Produced by whatever maps keys or buttons to actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Face left and start walking.
    MoveLeft,
    /// Face right and start walking.
    MoveRight,
    /// Stop walking. Facing is kept.
    Stop,
    /// Start a jump if the player is standing on something.
    Jump,
    /// Fire a bullet in the facing direction.
    Fire,
}

/// A queue of intents, drained at the start of every frame.
pub struct IntentQueue {
    intents: Vec<Intent>,
}

impl IntentQueue {
    pub fn new() -> Self {
        Self {
            intents: Vec::with_capacity(8),
        }
    }

    pub fn push(&mut self, intent: Intent) {
        self.intents.push(intent);
    }

    /// Drain all pending intents in arrival order.
    pub fn drain(&mut self) -> Vec<Intent> {
        std::mem::take(&mut self.intents)
    }

    /// Iterate over pending intents without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &Intent> {
        self.intents.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    pub fn len(&self) -> usize {
        self.intents.len()
    }
}

impl Default for IntentQueue {
    fn default() -> Self {
        Self::new()
    }
}
