#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Position in per-player arrays (`scores`, `players`).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    #[inline]
    pub fn both() -> [PlayerId; 2] {
        [PlayerId::One, PlayerId::Two]
    }

    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            PlayerId::One => "Player 1",
            PlayerId::Two => "Player 2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Owner {
    #[default]
    Neutral,
    Player(PlayerId),
}

impl Owner {
    #[inline]
    pub fn player(self) -> Option<PlayerId> {
        match self {
            Owner::Neutral => None,
            Owner::Player(p) => Some(p),
        }
    }
}

impl From<PlayerId> for Owner {
    fn from(p: PlayerId) -> Self {
        Owner::Player(p)
    }
}

/// Compass direction read from the perspective of the cell an edge leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

impl Dir {
    #[inline]
    pub fn all() -> [Dir; 4] {
        [Dir::Up, Dir::Right, Dir::Down, Dir::Left]
    }

    /// Rank-list index in [Top, Right, Bottom, Left] order.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Dir::Up => 0,
            Dir::Right => 1,
            Dir::Down => 2,
            Dir::Left => 3,
        }
    }

    /// Edge weight as stored on the adjacency graph (1-based).
    #[inline]
    pub fn weight(self) -> u8 {
        self.index() as u8 + 1
    }

    #[inline]
    pub fn from_index(i: usize) -> Option<Dir> {
        Dir::all().get(i).copied()
    }

    #[inline]
    pub fn from_weight(w: u8) -> Option<Dir> {
        match w {
            1..=4 => Dir::from_index(usize::from(w - 1)),
            _ => None,
        }
    }

    #[inline]
    pub fn opposite(self) -> Dir {
        // Opposite side index mapping: 0<->2, 1<->3
        Dir::all()[(self.index() + 2) % 4]
    }
}
