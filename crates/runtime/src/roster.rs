//! How many enemies a level gets when its layout names none.

/// Enemy counts for one level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Roster {
    pub zombies: usize,
    pub mummies: usize,
}

impl Roster {
    /// Two zombies plus one per level; one mummy per two levels.
    pub fn for_level(level: usize) -> Self {
        Self {
            zombies: 2 + level,
            mummies: level / 2,
        }
    }

    pub fn total(&self) -> usize {
        self.zombies + self.mummies
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grows_with_level() {
        assert_eq!(Roster::for_level(1), Roster { zombies: 3, mummies: 0 });
        assert_eq!(Roster::for_level(2), Roster { zombies: 4, mummies: 1 });
        assert_eq!(Roster::for_level(5).total(), 9);
    }
}
