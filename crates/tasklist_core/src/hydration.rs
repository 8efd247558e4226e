//! One-shot hydration gate.
//!
//! The first render of a page must not depend on persisted data, so storage is
//! read only when the gate moves from `Pending` to `Hydrated`. There is no way
//! back to `Pending`.

/// Two-state hydration machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HydrationGate {
    #[default]
    Pending,
    Hydrated,
}

impl HydrationGate {
    pub fn new() -> Self {
        Self::Pending
    }

    pub fn is_hydrated(self) -> bool {
        matches!(self, Self::Hydrated)
    }

    /// Moves to `Hydrated`.
    ///
    /// Returns `true` only for the call that performed the transition.
    pub fn open(&mut self) -> bool {
        match self {
            Self::Pending => {
                *self = Self::Hydrated;
                true
            }
            Self::Hydrated => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::HydrationGate;

    #[test]
    fn opens_exactly_once() {
        let mut gate = HydrationGate::new();
        assert!(!gate.is_hydrated());

        assert!(gate.open());
        assert!(gate.is_hydrated());

        assert!(!gate.open());
        assert!(gate.is_hydrated());
    }
}
